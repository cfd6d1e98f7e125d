use crate::adapters::endpoints::NO_QUERY;
use crate::adapters::http::ApiClient;
use crate::domain::model::{BookingRecord, BookingRequest};
use crate::utils::error::Result;

const PATH: &str = "booking/";

#[derive(Clone)]
pub struct BookingsApi {
    client: ApiClient,
}

impl BookingsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST /booking/
    ///
    /// Any 2xx counts as accepted; the echoed body is returned as-is.
    pub async fn create(&self, booking: &BookingRequest) -> Result<serde_json::Value> {
        self.client.post_accepted(PATH, booking).await
    }

    /// GET /booking/
    pub async fn list(&self) -> Result<Vec<BookingRecord>> {
        self.client.list(PATH, NO_QUERY).await
    }

    /// POST /booking/{id}/confirm/
    ///
    /// Staff action; no visitor-facing flow calls it.
    pub async fn confirm(&self, id: u64) -> Result<serde_json::Value> {
        self.client
            .post(&format!("{}{}/confirm/", PATH, id), None::<&()>)
            .await
    }
}
