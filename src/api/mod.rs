//! API Lambda handler and request processing

pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{RequestHandler, function_handler as handler};
pub use helpers::ResponseEnvelope;
