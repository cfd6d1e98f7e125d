pub mod content;
pub mod faq;
pub mod format;
pub mod forms;
pub mod samples;
pub mod toast;
pub mod wizard;

pub use crate::domain::model::{BookingRequest, Service, TimeSlot};
pub use crate::domain::ports::{ConfigProvider, ReadFailurePolicy, StudioApi};
pub use crate::utils::error::Result;
