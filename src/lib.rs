pub mod adapters;
#[cfg(feature = "cli")]
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::ApiClient;
pub use config::StudioSettings;
pub use crate::core::content::{GalleryPage, HomePage, ServicesPage, TestimonialsPage};
pub use crate::core::forms::{ContactForm, NewsletterForm, TestimonialForm};
pub use crate::core::toast::Toasts;
pub use crate::core::wizard::{BookingWizard, WizardStep};
pub use domain::ports::{ReadFailurePolicy, StudioApi};
pub use utils::error::{Result, StudioError};
