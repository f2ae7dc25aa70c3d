//! TfL Unified API road-status client.
//!
//! Wire types, response classification, and the HTTP client for
//! `GET {baseUrl}/Road/{roadId}?app_id=..&app_key=..`.

mod classify;
mod client;
mod types;

pub use client::RoadClient;
pub use types::{ApiErrorModel, RoadStatus};
