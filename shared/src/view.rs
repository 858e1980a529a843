use crate::protocol::Detection;
use crate::session::RequestState;

/// Shown while the service has not reported a detection speed.
pub const TIMING_PLACEHOLDER: &str = "-s";

/// The stable shape the presentation layer consumes. Derived from
/// `RequestState` on every change; never mutated directly.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub annotated_image: Option<String>,
    pub detections: Vec<Detection>,
    pub timing_label: String,
}

/// Projects the session state into the view model. Loading clears any
/// previous result eagerly so a stale image never sits behind the spinner.
pub fn project(state: &RequestState) -> ViewModel {
    match state {
        RequestState::Idle => ViewModel {
            is_loading: false,
            error_message: None,
            annotated_image: None,
            detections: vec![],
            timing_label: TIMING_PLACEHOLDER.to_string(),
        },
        RequestState::Loading => ViewModel {
            is_loading: true,
            error_message: None,
            annotated_image: None,
            detections: vec![],
            timing_label: TIMING_PLACEHOLDER.to_string(),
        },
        RequestState::Success(result) => ViewModel {
            is_loading: false,
            error_message: None,
            annotated_image: Some(result.annotated_image.clone()),
            detections: result.detections.clone(),
            timing_label: result
                .timing_label
                .clone()
                .unwrap_or_else(|| TIMING_PLACEHOLDER.to_string()),
        },
        RequestState::Failed(error) => ViewModel {
            is_loading: false,
            error_message: Some(error.message.clone()),
            annotated_image: None,
            detections: vec![],
            timing_label: TIMING_PLACEHOLDER.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorInfo, ErrorKind};
    use crate::protocol::DetectionResult;

    #[test]
    fn idle_projects_to_an_empty_panel() {
        let vm = project(&RequestState::Idle);
        assert!(!vm.is_loading);
        assert_eq!(vm.error_message, None);
        assert_eq!(vm.annotated_image, None);
        assert!(vm.detections.is_empty());
        assert_eq!(vm.timing_label, "-s");
    }

    #[test]
    fn loading_clears_previous_results_eagerly() {
        let vm = project(&RequestState::Loading);
        assert!(vm.is_loading);
        assert_eq!(vm.annotated_image, None);
        assert!(vm.detections.is_empty());
    }

    #[test]
    fn success_exposes_the_result_fields() {
        let state = RequestState::Success(DetectionResult {
            annotated_image: "AAA".into(),
            raw_image: Some("BBB".into()),
            detections: vec![Detection {
                label: "WBC".into(),
                confidence: "92.5".into(),
                thumbnail: "CCC".into(),
            }],
            timing_label: Some("0.31s".into()),
        });

        let vm = project(&state);
        assert!(!vm.is_loading);
        assert_eq!(vm.annotated_image.as_deref(), Some("AAA"));
        assert_eq!(vm.detections.len(), 1);
        assert_eq!(vm.timing_label, "0.31s");
    }

    #[test]
    fn missing_speed_falls_back_to_the_placeholder() {
        let state = RequestState::Success(DetectionResult {
            annotated_image: "AAA".into(),
            raw_image: None,
            detections: vec![],
            timing_label: None,
        });
        assert_eq!(project(&state).timing_label, "-s");
    }

    #[test]
    fn failure_surfaces_only_the_message() {
        let state = RequestState::Failed(ErrorInfo::new(
            ErrorKind::ServerRejected,
            "model unavailable",
        ));
        let vm = project(&state);
        assert!(!vm.is_loading);
        assert_eq!(vm.error_message.as_deref(), Some("model unavailable"));
        assert_eq!(vm.annotated_image, None);
    }
}
