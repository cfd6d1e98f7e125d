use crate::adapters::http::ApiClient;
use crate::domain::model::{NewTestimonial, ServiceCategory, Testimonial};
use crate::domain::ports::TestimonialQuery;
use crate::utils::error::Result;

const PATH: &str = "testimonials/";

#[derive(Clone)]
pub struct TestimonialsApi {
    client: ApiClient,
}

impl TestimonialsApi {
    pub(crate) fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// GET /testimonials/ with optional `is_featured` and `service_category`.
    pub async fn list(&self, query: &TestimonialQuery) -> Result<Vec<Testimonial>> {
        self.client.list(PATH, query).await
    }

    pub async fn all(&self) -> Result<Vec<Testimonial>> {
        self.list(&TestimonialQuery::default()).await
    }

    pub async fn featured(&self) -> Result<Vec<Testimonial>> {
        self.list(&TestimonialQuery {
            is_featured: Some(true),
            ..Default::default()
        })
        .await
    }

    pub async fn by_category(&self, category: ServiceCategory) -> Result<Vec<Testimonial>> {
        self.list(&TestimonialQuery {
            service_category: Some(category),
            ..Default::default()
        })
        .await
    }

    /// POST /testimonials/
    pub async fn create(&self, testimonial: &NewTestimonial) -> Result<serde_json::Value> {
        self.client.post(PATH, Some(testimonial)).await
    }
}
