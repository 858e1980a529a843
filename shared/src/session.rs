use crate::error::ErrorInfo;
use crate::protocol::DetectionResult;

/// Lifecycle of the single meaningful detection request. Exactly one variant
/// holds at any instant; a new submission moves to `Loading` before the
/// network call resolves, so a stale result is never left showing.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Loading,
    Success(DetectionResult),
    Failed(ErrorInfo),
}

/// Owns the request state and the submission ordering. `begin` issues a
/// monotonically increasing token per submission; `finish` applies a
/// completion only while its token is still the latest issued, which is what
/// makes superseded in-flight requests invisible (last-submission-wins).
#[derive(Debug, Default)]
pub struct Session {
    state: RequestState,
    latest_token: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Starts a new submission: transitions to `Loading`, invalidating any
    /// displayed result, and returns the token the eventual completion must
    /// present to `finish`.
    pub fn begin(&mut self) -> u64 {
        self.latest_token += 1;
        self.state = RequestState::Loading;
        self.latest_token
    }

    /// Applies a completed request. Returns false (state untouched) when the
    /// token has been superseded by a newer `begin`.
    pub fn finish(&mut self, token: u64, outcome: Result<DetectionResult, ErrorInfo>) -> bool {
        if token != self.latest_token {
            return false;
        }
        self.state = match outcome {
            Ok(result) => RequestState::Success(result),
            Err(error) => RequestState::Failed(error),
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorInfo, ErrorKind};

    fn result_named(label: &str) -> DetectionResult {
        DetectionResult {
            annotated_image: label.to_string(),
            raw_image: None,
            detections: vec![],
            timing_label: Some("0.42s".into()),
        }
    }

    #[test]
    fn begins_in_idle() {
        let session = Session::new();
        assert_eq!(*session.state(), RequestState::Idle);
    }

    #[test]
    fn begin_transitions_to_loading_and_clears_previous_outcome() {
        let mut session = Session::new();
        let t1 = session.begin();
        assert!(session.finish(t1, Ok(result_named("first"))));
        assert!(matches!(session.state(), RequestState::Success(_)));

        session.begin();
        assert_eq!(*session.state(), RequestState::Loading);
    }

    #[test]
    fn failure_lands_in_failed_with_the_error_verbatim() {
        let mut session = Session::new();
        let t1 = session.begin();
        let error = ErrorInfo::new(ErrorKind::ServerRejected, "model unavailable");
        assert!(session.finish(t1, Err(error.clone())));
        assert_eq!(*session.state(), RequestState::Failed(error));
    }

    #[test]
    fn superseded_completion_is_discarded_silently() {
        let mut session = Session::new();
        let old = session.begin();
        let new = session.begin();

        // Old request resolves after being superseded; nothing changes.
        assert!(!session.finish(old, Ok(result_named("stale"))));
        assert_eq!(*session.state(), RequestState::Loading);

        assert!(session.finish(new, Ok(result_named("fresh"))));
        match session.state() {
            RequestState::Success(result) => assert_eq!(result.annotated_image, "fresh"),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn last_submission_wins_under_any_completion_order() {
        // Three submissions; completions arrive 3, 1, 2. Only 3 may apply.
        let mut session = Session::new();
        let t1 = session.begin();
        let t2 = session.begin();
        let t3 = session.begin();

        assert!(session.finish(t3, Ok(result_named("third"))));
        assert!(!session.finish(t1, Err(ErrorInfo::new(ErrorKind::Timeout, "No response within 10s"))));
        assert!(!session.finish(t2, Ok(result_named("second"))));

        match session.state() {
            RequestState::Success(result) => assert_eq!(result.annotated_image, "third"),
            other => panic!("unexpected state: {:?}", other),
        }
    }

    #[test]
    fn a_superseded_error_never_surfaces() {
        let mut session = Session::new();
        let old = session.begin();
        let new = session.begin();

        assert!(!session.finish(old, Err(ErrorInfo::new(ErrorKind::NetworkUnavailable, "connection refused"))));
        assert!(session.finish(new, Ok(result_named("fresh"))));
        assert!(matches!(session.state(), RequestState::Success(_)));
    }
}
