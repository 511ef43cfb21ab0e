// ============================================================================
// SERVICES - HTTP only, no state
// ============================================================================

pub mod http;
pub mod api_client;
pub mod auth_service;
pub mod patient_service;
pub mod examination_service;

#[cfg(test)]
pub(crate) mod testing;

pub use http::{GlooTransport, HttpTransport};
pub use api_client::ApiClient;
