//! Typed accessors for each resource collection of the studio API.
//!
//! | Module | Path | Verbs |
//! |--------|------|-------|
//! | `services` | `/services/` | GET |
//! | `bookings` | `/booking/`, `/booking/{id}/confirm/` | GET, POST |
//! | `contact` | `/contact/`, `/newsletter/` | POST |
//! | `testimonials` | `/testimonials/` | GET, POST |
//! | `gallery` | `/gallery/` | GET |

pub mod bookings;
pub mod contact;
pub mod gallery;
pub mod services;
pub mod testimonials;

pub use bookings::BookingsApi;
pub use contact::ContactApi;
pub use gallery::GalleryApi;
pub use services::ServicesApi;
pub use testimonials::TestimonialsApi;

pub(crate) const NO_QUERY: &[(&str, &str)] = &[];
