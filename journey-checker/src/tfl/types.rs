//! Wire types for the TfL Unified API.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Status of a single road, as returned in the success payload.
///
/// The API includes further fields (bounds, envelope, url); only the ones
/// the report needs are kept. Absent fields default to empty strings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoadStatus {
    /// Unique id of the road, e.g. "a2"
    pub id: String,
    /// Display name of the road, e.g. "A2"
    pub display_name: String,
    /// Severity of the current status, e.g. "Good"
    pub status_severity: String,
    /// Human description of the severity, e.g. "No Exceptional Delays"
    pub status_severity_description: String,
}

/// Error payload returned by the API on non-success responses.
///
/// Note `http_status_code` is the status the *body* declares, which is what
/// classification trusts; it is expected to agree with the transport status
/// but is not guaranteed to. The `$type` discriminator is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiErrorModel {
    pub timestamp_utc: Option<DateTime<Utc>>,
    pub exception_type: String,
    pub http_status_code: u16,
    pub http_status: String,
    pub relative_uri: String,
    pub message: String,
}
