//! Response-body classification.
//!
//! Pure interpretation of TfL response bodies into [`Outcome`] values, kept
//! separate from the HTTP plumbing so the full behavior matrix is testable
//! without a transport.

use crate::outcome::{Outcome, ResultStatus};

use super::types::{ApiErrorModel, RoadStatus};

/// Classify the body of a 2xx response.
///
/// The body is a JSON array of road statuses; the first element wins. An
/// empty or whitespace body, or an empty array, yields Success with absent
/// data rather than an error.
pub fn classify_success_body(body: &str) -> Outcome<RoadStatus> {
    if body.trim().is_empty() {
        return Outcome::empty_success();
    }

    match serde_json::from_str::<Vec<RoadStatus>>(body) {
        Ok(mut roads) => {
            if roads.is_empty() {
                Outcome::empty_success()
            } else {
                Outcome::success(roads.remove(0))
            }
        }
        Err(e) => Outcome::failure(
            ResultStatus::GeneralError,
            format!("Error on parsing the road model: {e}"),
        ),
    }
}

/// Classify the body of a non-2xx response.
///
/// Trusts the body's declared `httpStatusCode` field, not the transport
/// status: a declared 404 is NotFound, anything else is HttpResponseError.
/// An unparseable or empty error body is a GeneralError.
pub fn classify_error_body(body: &str) -> Outcome<RoadStatus> {
    if body.trim().is_empty() {
        return Outcome::failure(
            ResultStatus::GeneralError,
            "Error on parsing the api error model. Error detail: response body was empty",
        );
    }

    match serde_json::from_str::<ApiErrorModel>(body) {
        Ok(error_model) => {
            if error_model.http_status_code == 404 {
                Outcome::failure(ResultStatus::NotFound, error_model.message)
            } else {
                Outcome::failure(ResultStatus::HttpResponseError, error_model.message)
            }
        }
        Err(e) => Outcome::failure(
            ResultStatus::GeneralError,
            format!("Error on parsing the api error model. Error detail: {e}"),
        ),
    }
}
