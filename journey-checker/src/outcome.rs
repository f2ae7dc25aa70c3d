//! Outcome wrapper and status taxonomy.
//!
//! Expected failures travel through [`Outcome`] values rather than raised
//! errors, so every code path ends in exactly one of the five
//! [`ResultStatus`] values, which double as the process exit code.

use std::process::ExitCode;

/// Final status of a journey-status check.
///
/// The discriminant is the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    Success = 0,
    NotFound = 1,
    HttpResponseError = 2,
    GeneralError = 3,
    ValidationError = 4,
}

impl ResultStatus {
    /// The process exit code for this status.
    pub fn code(self) -> u8 {
        self as u8
    }
}

impl From<ResultStatus> for ExitCode {
    fn from(status: ResultStatus) -> Self {
        ExitCode::from(status.code())
    }
}

/// Tagged outcome of a single API operation.
///
/// Invariant, upheld by construction: `data` is only ever present on a
/// `Success`, and `error_message` is only ever present on a non-`Success`.
/// A `Success` *may* carry no data (see [`Outcome::empty_success`]).
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    status: ResultStatus,
    data: Option<T>,
    error_message: Option<String>,
}

impl<T> Outcome<T> {
    /// A successful outcome carrying data.
    pub fn success(data: T) -> Self {
        Self {
            status: ResultStatus::Success,
            data: Some(data),
            error_message: None,
        }
    }

    /// A successful outcome with no data.
    ///
    /// Produced when the API answers 2xx with an empty body or an empty
    /// array. Callers must not assume a `Success` outcome carries data.
    pub fn empty_success() -> Self {
        Self {
            status: ResultStatus::Success,
            data: None,
            error_message: None,
        }
    }

    /// A failed outcome with a status and a message.
    pub fn failure(status: ResultStatus, message: impl Into<String>) -> Self {
        debug_assert!(status != ResultStatus::Success);
        Self {
            status,
            data: None,
            error_message: Some(message.into()),
        }
    }

    pub fn status(&self) -> ResultStatus {
        self.status
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn into_data(self) -> Option<T> {
        self.data
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}
