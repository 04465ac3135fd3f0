//! # Quill Shared
//!
//! Wire types shared between the API server and its clients: the response
//! envelope and the request DTOs. Kept dependency-light so a frontend build
//! can compile it too.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
