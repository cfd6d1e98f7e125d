use crate::adapters::http::ApiClient;
use crate::domain::model::{Service, ServiceCategory};
use crate::domain::ports::ServiceQuery;
use crate::utils::error::Result;

const PATH: &str = "services/";

#[derive(Clone)]
pub struct ServicesApi {
    client: ApiClient,
}

impl ServicesApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /services/ with optional `category` and `is_featured` filters.
    pub async fn list(&self, query: &ServiceQuery) -> Result<Vec<Service>> {
        self.client.list(PATH, query).await
    }

    pub async fn all(&self) -> Result<Vec<Service>> {
        self.list(&ServiceQuery::default()).await
    }

    pub async fn by_category(&self, category: ServiceCategory) -> Result<Vec<Service>> {
        self.list(&ServiceQuery {
            category: Some(category),
            ..Default::default()
        })
        .await
    }

    pub async fn featured(&self) -> Result<Vec<Service>> {
        self.list(&ServiceQuery {
            is_featured: Some(true),
            ..Default::default()
        })
        .await
    }
}
