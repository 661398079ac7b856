pub mod api_client;
pub mod auth_api;
pub mod portal_api;
pub mod session_store;

pub use api_client::ApiError;
