//! Road journey status checker.
//!
//! Validates the caller-supplied road id, dispatches the status query, and
//! renders the result as console lines plus a [`ResultStatus`] exit code.

use async_trait::async_trait;
use tracing::error;

use crate::outcome::{Outcome, ResultStatus};
use crate::tfl::RoadStatus;

/// Failure raised by a [`RoadStatusProvider`] itself, as opposed to a
/// failure the provider already folded into an [`Outcome`].
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DispatchError {
    message: String,
}

impl DispatchError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Source of road status outcomes.
///
/// This abstraction allows the checker to be tested with mock data. The
/// real implementation is [`crate::tfl::RoadClient`], which never returns
/// `Err` at this seam; the `Err` arm exists for collaborator failures the
/// checker must still guard against.
#[async_trait]
pub trait RoadStatusProvider {
    /// Query the current status of the given road.
    async fn road_status(&self, road_id: &str) -> Result<Outcome<RoadStatus>, DispatchError>;
}

#[async_trait]
impl<P: RoadStatusProvider + Sync + ?Sized> RoadStatusProvider for &P {
    async fn road_status(&self, road_id: &str) -> Result<Outcome<RoadStatus>, DispatchError> {
        (**self).road_status(road_id).await
    }
}

/// Destination for user-visible report lines.
pub trait LineWriter {
    fn write_line(&mut self, line: &str);
}

impl<W: LineWriter + ?Sized> LineWriter for &mut W {
    fn write_line(&mut self, line: &str) {
        (**self).write_line(line);
    }
}

/// Line writer backed by stdout.
pub struct StdoutWriter;

impl LineWriter for StdoutWriter {
    fn write_line(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Checks the status of a road journey and reports it to the user.
pub struct RoadJourneyChecker<P, W> {
    provider: P,
    writer: W,
}

impl<P: RoadStatusProvider, W: LineWriter> RoadJourneyChecker<P, W> {
    pub fn new(provider: P, writer: W) -> Self {
        Self { provider, writer }
    }

    /// Check the status of the given road and write the report.
    ///
    /// Returns the [`ResultStatus`] the process should exit with. Never
    /// panics; every failure mode maps to one written line and one status.
    pub async fn check_status(&mut self, road_id: Option<&str>) -> ResultStatus {
        let road_id = road_id.unwrap_or("");
        if road_id.trim().is_empty() {
            error!("Invalid Argument");
            self.writer.write_line(
                "Invalid Argument. Please pass the road id on running the application",
            );
            return ResultStatus::ValidationError;
        }

        let outcome = match self.provider.road_status(road_id).await {
            Ok(outcome) => outcome,
            Err(e) => {
                let message = format!("Error on processing road status request: {e}");
                error!("{message}");
                self.writer.write_line(&message);
                return ResultStatus::GeneralError;
            }
        };

        if outcome.status() != ResultStatus::Success {
            let message = outcome
                .error_message()
                .unwrap_or("Unexpected error ocurred on calling get journey status query.")
                .to_string();
            error!("{message}");
            self.writer.write_line(&message);
            return outcome.status();
        }

        // A 2xx with an empty body arrives here as Success with no data.
        // There is nothing to report, so it falls out as a general failure.
        let Some(road) = outcome.into_data() else {
            let message =
                "Error on processing road status request: road status response contained no data";
            error!("{message}");
            self.writer.write_line(message);
            return ResultStatus::GeneralError;
        };

        self.writer.write_line("Completed TFL Journey status checker");
        self.writer.write_line("");
        self.writer
            .write_line(&format!("The status of the {} is as follows", road.display_name));
        self.writer
            .write_line(&format!("Road Status is {}", road.status_severity));
        self.writer.write_line(&format!(
            "Road Status Description is {}",
            road.status_severity_description
        ));
        ResultStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Mock provider for testing, counting how often it is invoked.
    struct MockProvider {
        behavior: MockBehavior,
        calls: AtomicUsize,
    }

    enum MockBehavior {
        Respond(Outcome<RoadStatus>),
        Fail(&'static str),
    }

    impl MockProvider {
        fn respond(outcome: Outcome<RoadStatus>) -> Self {
            Self {
                behavior: MockBehavior::Respond(outcome),
                calls: AtomicUsize::new(0),
            }
        }

        fn fail(message: &'static str) -> Self {
            Self {
                behavior: MockBehavior::Fail(message),
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl RoadStatusProvider for MockProvider {
        async fn road_status(
            &self,
            _road_id: &str,
        ) -> Result<Outcome<RoadStatus>, DispatchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.behavior {
                MockBehavior::Respond(outcome) => Ok(outcome.clone()),
                MockBehavior::Fail(message) => Err(DispatchError::new(*message)),
            }
        }
    }

    impl LineWriter for Vec<String> {
        fn write_line(&mut self, line: &str) {
            self.push(line.to_string());
        }
    }

    fn a2() -> RoadStatus {
        RoadStatus {
            id: "a2".to_string(),
            display_name: "A2".to_string(),
            status_severity: "Good".to_string(),
            status_severity_description: "No Exceptional Delays".to_string(),
        }
    }

    #[tokio::test]
    async fn success_writes_report_and_returns_zero() {
        let provider = MockProvider::respond(Outcome::success(a2()));
        let mut lines: Vec<String> = Vec::new();
        let mut checker = RoadJourneyChecker::new(&provider, &mut lines);

        let status = checker.check_status(Some("A2")).await;

        assert_eq!(status, ResultStatus::Success);
        assert_eq!(
            lines,
            vec![
                "Completed TFL Journey status checker",
                "",
                "The status of the A2 is as follows",
                "Road Status is Good",
                "Road Status Description is No Exceptional Delays",
            ]
        );
        assert_eq!(provider.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_road_id_is_validation_error_without_dispatch() {
        for road_id in [None, Some(""), Some("   ")] {
            let provider = MockProvider::respond(Outcome::success(a2()));
            let mut lines: Vec<String> = Vec::new();
            let mut checker = RoadJourneyChecker::new(&provider, &mut lines);

            let status = checker.check_status(road_id).await;

            assert_eq!(status, ResultStatus::ValidationError);
            assert_eq!(
                lines,
                vec!["Invalid Argument. Please pass the road id on running the application"]
            );
            assert_eq!(provider.calls.load(Ordering::SeqCst), 0, "provider must not be invoked");
        }
    }

    #[tokio::test]
    async fn not_found_outcome_passes_through_status_and_message() {
        let provider = MockProvider::respond(Outcome::failure(
            ResultStatus::NotFound,
            "The following road id is not recognised: A233",
        ));
        let mut lines: Vec<String> = Vec::new();
        let mut checker = RoadJourneyChecker::new(&provider, &mut lines);

        let status = checker.check_status(Some("A233")).await;

        assert_eq!(status, ResultStatus::NotFound);
        assert_eq!(
            lines,
            vec!["The following road id is not recognised: A233"]
        );
    }

    #[tokio::test]
    async fn http_response_error_passes_through() {
        let provider = MockProvider::respond(Outcome::failure(
            ResultStatus::HttpResponseError,
            "bad request",
        ));
        let mut lines: Vec<String> = Vec::new();
        let mut checker = RoadJourneyChecker::new(&provider, &mut lines);

        let status = checker.check_status(Some("A2")).await;

        assert_eq!(status, ResultStatus::HttpResponseError);
        assert_eq!(lines, vec!["bad request"]);
    }

    #[tokio::test]
    async fn general_error_outcome_passes_through() {
        let provider = MockProvider::respond(Outcome::failure(
            ResultStatus::GeneralError,
            "connection refused",
        ));
        let mut lines: Vec<String> = Vec::new();
        let mut checker = RoadJourneyChecker::new(&provider, &mut lines);

        let status = checker.check_status(Some("A2")).await;

        assert_eq!(status, ResultStatus::GeneralError);
        assert_eq!(lines, vec!["connection refused"]);
    }

    #[tokio::test]
    async fn dispatch_failure_is_general_error_with_prefix() {
        let provider = MockProvider::fail("dispatcher exploded");
        let mut lines: Vec<String> = Vec::new();
        let mut checker = RoadJourneyChecker::new(&provider, &mut lines);

        let status = checker.check_status(Some("A2")).await;

        assert_eq!(status, ResultStatus::GeneralError);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Error on processing road status request"));
        assert!(lines[0].contains("dispatcher exploded"));
    }

    // Success with no data (the empty-body quirk) cannot be rendered as a
    // report; it lands in the same guarded path as a dispatch failure.
    #[tokio::test]
    async fn empty_success_is_general_error_with_prefix() {
        let provider = MockProvider::respond(Outcome::empty_success());
        let mut lines: Vec<String> = Vec::new();
        let mut checker = RoadJourneyChecker::new(&provider, &mut lines);

        let status = checker.check_status(Some("A2")).await;

        assert_eq!(status, ResultStatus::GeneralError);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Error on processing road status request"));
    }
}
