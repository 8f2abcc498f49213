//! Backend REST API boundary

mod client;
mod error;

pub use client::{SinatraClient, DEFAULT_API_BASE_URL};
pub use error::ApiError;
