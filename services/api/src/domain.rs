// Domain layer modules
pub mod api_request;
pub mod api_response;
pub mod json_body;
pub mod route;

// Re-exports
pub use api_request::{ApiRequest, RequestError};
pub use api_response::{ApiErrorBody, ApiResponse, DEFAULT_HEADERS};
pub use json_body::to_json_body;
pub use route::Route;
