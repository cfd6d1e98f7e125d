// Adapters layer: concrete implementations of the domain ports.

pub mod endpoints;
pub mod http;

pub use http::ApiClient;
