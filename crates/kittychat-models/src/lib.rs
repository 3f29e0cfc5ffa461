// Models module - data structures for API communication
pub mod requests;
pub mod responses;
pub mod types;

// Re-export commonly used types
pub use requests::ChatRequest;
pub use responses::{ChatResponse, Choice, ErrorDetail, ErrorResponse, Usage};
pub use types::Message;
