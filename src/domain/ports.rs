use crate::domain::model::{
    BookingRecord, BookingRequest, ContactMessage, GalleryCategory, GalleryImage,
    NewTestimonial, NewsletterSubscriber, Service, ServiceCategory, Testimonial,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// What a content loader does when a read request fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadFailurePolicy {
    /// Substitute the embedded sample data and keep rendering.
    #[default]
    Fallback,
    /// Surface the error to the caller.
    Error,
}

pub trait ConfigProvider: Send + Sync {
    fn api_base_url(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn read_failure_policy(&self) -> ReadFailurePolicy;
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServiceQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ServiceCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TestimonialQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_category: Option<ServiceCategory>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GalleryQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<GalleryCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

/// The remote studio API, one method per (resource, verb) pair.
///
/// Write methods return the raw JSON echo; callers only care whether the
/// write succeeded.
#[async_trait]
pub trait StudioApi: Send + Sync {
    async fn list_services(&self, query: &ServiceQuery) -> Result<Vec<Service>>;
    async fn create_booking(&self, booking: &BookingRequest) -> Result<serde_json::Value>;
    async fn list_bookings(&self) -> Result<Vec<BookingRecord>>;
    async fn confirm_booking(&self, id: u64) -> Result<serde_json::Value>;
    async fn send_contact_message(&self, message: &ContactMessage) -> Result<serde_json::Value>;
    async fn subscribe_newsletter(
        &self,
        subscriber: &NewsletterSubscriber,
    ) -> Result<serde_json::Value>;
    async fn list_testimonials(&self, query: &TestimonialQuery) -> Result<Vec<Testimonial>>;
    async fn create_testimonial(&self, testimonial: &NewTestimonial) -> Result<serde_json::Value>;
    async fn list_gallery(&self, query: &GalleryQuery) -> Result<Vec<GalleryImage>>;
}
