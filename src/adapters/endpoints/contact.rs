use crate::adapters::http::ApiClient;
use crate::domain::model::{ContactMessage, NewsletterSubscriber};
use crate::utils::error::Result;

const CONTACT_PATH: &str = "contact/";
const NEWSLETTER_PATH: &str = "newsletter/";

#[derive(Clone)]
pub struct ContactApi {
    client: ApiClient,
}

impl ContactApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// POST /contact/
    pub async fn send_message(&self, message: &ContactMessage) -> Result<serde_json::Value> {
        self.client.post(CONTACT_PATH, Some(message)).await
    }

    /// POST /newsletter/
    pub async fn subscribe_newsletter(
        &self,
        subscriber: &NewsletterSubscriber,
    ) -> Result<serde_json::Value> {
        self.client.post(NEWSLETTER_PATH, Some(subscriber)).await
    }
}
