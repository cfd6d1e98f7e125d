use crate::adapters::endpoints::{BookingsApi, ContactApi, GalleryApi, ServicesApi, TestimonialsApi};
use crate::domain::model::{
    BookingRecord, BookingRequest, ContactMessage, GalleryImage, Listing, NewTestimonial,
    NewsletterSubscriber, Service, Testimonial,
};
use crate::domain::ports::{ConfigProvider, GalleryQuery, ServiceQuery, StudioApi, TestimonialQuery};
use crate::utils::error::{Result, StudioError};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// reqwest-backed gateway to the studio API.
///
/// Cheap to clone; the resource accessors each hold their own copy.
#[derive(Clone, Debug)]
pub struct ApiClient {
    inner: Client,
    base_url: Arc<str>,
}

impl ApiClient {
    pub fn new<C: ConfigProvider + ?Sized>(config: &C) -> Result<Self> {
        crate::utils::validation::validate_url("api.base_url", config.api_base_url())?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        default_headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        default_headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("naild-studio/", env!("CARGO_PKG_VERSION"))),
        );

        let inner = Client::builder()
            .timeout(config.timeout())
            .default_headers(default_headers)
            .build()?;

        Ok(Self {
            inner,
            base_url: Arc::from(config.api_base_url().trim_end_matches('/')),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn services(&self) -> ServicesApi {
        ServicesApi::new(self.clone())
    }

    pub fn bookings(&self) -> BookingsApi {
        BookingsApi::new(self.clone())
    }

    pub fn contact(&self) -> ContactApi {
        ContactApi::new(self.clone())
    }

    pub fn testimonials(&self) -> TestimonialsApi {
        TestimonialsApi::new(self.clone())
    }

    pub fn gallery(&self) -> GalleryApi {
        GalleryApi::new(self.clone())
    }

    pub(crate) async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.url(path);
        let request = self.inner.get(&url).query(query);
        self.execute(Method::GET, &url, request).await
    }

    /// GET a collection, accepting a bare array or a paginated envelope.
    pub(crate) async fn list<T, Q>(&self, path: &str, query: &Q) -> Result<Vec<T>>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let listing: Listing<T> = self.get(path, query).await?;
        Ok(listing.into_items())
    }

    pub(crate) async fn post<T, B>(&self, path: &str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let mut request = self.inner.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.execute(Method::POST, &url, request).await
    }

    /// POST where only acceptance matters. A 2xx body that is not JSON comes
    /// back as a JSON string instead of failing the write.
    pub(crate) async fn post_accepted<B>(&self, path: &str, body: &B) -> Result<serde_json::Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path);
        let request = self.inner.post(&url).json(body);
        let text = self.send(Method::POST, &url, request).await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text)))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        request: RequestBuilder,
    ) -> Result<T> {
        let body = self.send(method, url, request).await?;
        let payload = if body.trim().is_empty() { "null" } else { body.as_str() };
        Ok(serde_json::from_str(payload)?)
    }

    /// Send and return the body of a 2xx response.
    async fn send(&self, method: Method, url: &str, request: RequestBuilder) -> Result<String> {
        tracing::debug!("{} {}", method, url);

        let response = request.send().await.map_err(|e| {
            tracing::debug!("{} {} failed before a response: {}", method, url, e);
            StudioError::Network(e)
        })?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("{} {} -> {}", method, url, status);

        intercept(&method, url, status, &body);

        if !status.is_success() {
            return Err(StudioError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl StudioApi for ApiClient {
    async fn list_services(&self, query: &ServiceQuery) -> Result<Vec<Service>> {
        self.services().list(query).await
    }

    async fn create_booking(&self, booking: &BookingRequest) -> Result<serde_json::Value> {
        self.bookings().create(booking).await
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRecord>> {
        self.bookings().list().await
    }

    async fn confirm_booking(&self, id: u64) -> Result<serde_json::Value> {
        self.bookings().confirm(id).await
    }

    async fn send_contact_message(&self, message: &ContactMessage) -> Result<serde_json::Value> {
        self.contact().send_message(message).await
    }

    async fn subscribe_newsletter(
        &self,
        subscriber: &NewsletterSubscriber,
    ) -> Result<serde_json::Value> {
        self.contact().subscribe_newsletter(subscriber).await
    }

    async fn list_testimonials(&self, query: &TestimonialQuery) -> Result<Vec<Testimonial>> {
        self.testimonials().list(query).await
    }

    async fn create_testimonial(&self, testimonial: &NewTestimonial) -> Result<serde_json::Value> {
        self.testimonials().create(testimonial).await
    }

    async fn list_gallery(&self, query: &GalleryQuery) -> Result<Vec<GalleryImage>> {
        self.gallery().list(query).await
    }
}

/// Shared response interceptor. Logs server faults and nothing else; the
/// response itself is never altered or retried.
fn intercept(method: &Method, url: &str, status: StatusCode, body: &str) {
    if status.is_server_error() {
        tracing::error!(
            status = status.as_u16(),
            "Server error on {} {}: {}",
            method,
            url,
            body
        );
    }
}
