//! Tower middleware applied around the API routes.

pub mod cors;
pub mod request_id;
pub mod security_headers;
