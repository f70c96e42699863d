pub mod api;
pub mod client;
pub mod endpoints;

pub use client::ApiClient;
pub use endpoints::Endpoints;
