//! Request handler module
//!
//! Method gate, route table dispatch and access logging.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
