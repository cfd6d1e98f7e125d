//! Single-submission forms: contact, testimonial and newsletter.
//!
//! Each one validates locally, issues at most one write per `submit`, and
//! reports the outcome through [`Toasts`]. A failed write leaves the fields
//! untouched so the visitor can try again.

use crate::core::toast::Toasts;
use crate::domain::model::{
    ContactMessage, NewTestimonial, NewsletterSubscriber, ServiceCategory, SubjectType,
};
use crate::domain::ports::StudioApi;
use crate::utils::error::{Result, StudioError};
use crate::utils::validation::{validate_email, validate_range, validate_required, Validate};

pub const CONTACT_SUCCESS_MESSAGE: &str =
    "Message sent successfully! We'll get back to you soon.";
pub const CONTACT_FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";
pub const REVIEW_SUCCESS_MESSAGE: &str =
    "Thank you for your review! It will be reviewed before being published.";
pub const REVIEW_FAILURE_MESSAGE: &str = "Failed to submit review. Please try again.";
pub const NEWSLETTER_SUCCESS_MESSAGE: &str = "Successfully subscribed to our newsletter!";
pub const NEWSLETTER_FAILURE_MESSAGE: &str = "Failed to subscribe. Please try again.";

/// Validate first; a rejection becomes an error toast and no request is made.
fn check<F: Validate>(form: &F, toasts: &Toasts) -> Result<()> {
    form.validate().map_err(|e| {
        toasts.error(e.user_friendly_message());
        e
    })
}

fn report_write<T>(
    result: Result<T>,
    toasts: &Toasts,
    what: &str,
    success: &str,
    failure: &str,
) -> Result<T> {
    match result {
        Ok(value) => {
            tracing::info!("{} submitted", what);
            toasts.success(success);
            Ok(value)
        }
        Err(e) => {
            tracing::error!("Error submitting {}: {}", what, e);
            toasts.error(failure);
            Err(e)
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject_type: SubjectType,
    pub subject: String,
    pub message: String,
}

impl Validate for ContactForm {
    fn validate(&self) -> Result<()> {
        validate_required("name", &self.name, "Please enter your name")?;
        validate_email("email", &self.email)?;
        validate_required("subject", &self.subject, "Please enter a subject")?;
        validate_required("message", &self.message, "Please enter a message")?;
        Ok(())
    }
}

impl ContactForm {
    pub fn to_message(&self) -> ContactMessage {
        ContactMessage {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            subject_type: self.subject_type,
            subject: self.subject.trim().to_string(),
            message: self.message.clone(),
        }
    }

    pub async fn submit(&mut self, api: &dyn StudioApi, toasts: &Toasts) -> Result<()> {
        check(&*self, toasts)?;
        let result = api.send_contact_message(&self.to_message()).await;
        report_write(
            result,
            toasts,
            "contact message",
            CONTACT_SUCCESS_MESSAGE,
            CONTACT_FAILURE_MESSAGE,
        )?;
        *self = Self::default();
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestimonialForm {
    pub client_name: String,
    pub service_category: ServiceCategory,
    rating: u8,
    pub review_text: String,
    submitted: bool,
}

impl Default for TestimonialForm {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            service_category: ServiceCategory::Both,
            rating: 0,
            review_text: String::new(),
            submitted: false,
        }
    }
}

impl Validate for TestimonialForm {
    fn validate(&self) -> Result<()> {
        validate_required("client_name", &self.client_name, "Please enter your name")?;
        if self.rating == 0 {
            return Err(StudioError::validation("rating", "Please select a rating"));
        }
        validate_range("rating", self.rating, 1, 5)?;
        validate_required("review_text", &self.review_text, "Please write a review")?;
        Ok(())
    }
}

impl TestimonialForm {
    /// A filled-in form with no stars chosen yet.
    pub fn new(
        client_name: impl Into<String>,
        service_category: ServiceCategory,
        review_text: impl Into<String>,
    ) -> Self {
        Self {
            client_name: client_name.into(),
            service_category,
            review_text: review_text.into(),
            ..Self::default()
        }
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Stars clicked, 1 to 5.
    pub fn set_rating(&mut self, stars: u8) -> Result<()> {
        validate_range("rating", stars, 1, 5)?;
        self.rating = stars;
        Ok(())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn to_payload(&self) -> NewTestimonial {
        NewTestimonial {
            client_name: self.client_name.trim().to_string(),
            service_category: self.service_category,
            rating: self.rating,
            review_text: self.review_text.trim().to_string(),
        }
    }

    pub async fn submit(&mut self, api: &dyn StudioApi, toasts: &Toasts) -> Result<()> {
        check(&*self, toasts)?;
        let result = api.create_testimonial(&self.to_payload()).await;
        report_write(
            result,
            toasts,
            "testimonial",
            REVIEW_SUCCESS_MESSAGE,
            REVIEW_FAILURE_MESSAGE,
        )?;
        self.submitted = true;
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsletterForm {
    pub email: String,
    pub name: String,
}

impl Validate for NewsletterForm {
    fn validate(&self) -> Result<()> {
        validate_email("email", &self.email)
    }
}

impl NewsletterForm {
    pub fn to_subscriber(&self) -> NewsletterSubscriber {
        let name = self.name.trim();
        NewsletterSubscriber {
            email: self.email.trim().to_string(),
            name: (!name.is_empty()).then(|| name.to_string()),
        }
    }

    pub async fn submit(&mut self, api: &dyn StudioApi, toasts: &Toasts) -> Result<()> {
        check(&*self, toasts)?;
        let result = api.subscribe_newsletter(&self.to_subscriber()).await;
        report_write(
            result,
            toasts,
            "newsletter subscription",
            NEWSLETTER_SUCCESS_MESSAGE,
            NEWSLETTER_FAILURE_MESSAGE,
        )?;
        *self = Self::default();
        Ok(())
    }
}
