//! HTTP protocol layer module
//!
//! Response builders shared by the request handler.

pub mod response;

pub use response::{build_405_response, build_canned_response};
