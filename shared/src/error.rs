use derive_more::Display;
use strum_macros::Display as StrumDisplay;

/// Failure taxonomy for a detection request, from source resolution through
/// the network round trip.
#[derive(Clone, Copy, Debug, PartialEq, Eq, StrumDisplay)]
pub enum ErrorKind {
    #[strum(serialize = "Asset unavailable")]
    AssetUnavailable,
    #[strum(serialize = "Network unavailable")]
    NetworkUnavailable,
    #[strum(serialize = "Timeout")]
    Timeout,
    #[strum(serialize = "Server rejected")]
    ServerRejected,
    #[strum(serialize = "Server error")]
    ServerError,
    #[strum(serialize = "Unknown")]
    Unknown,
}

/// What the user sees when a request fails. The message is an opaque display
/// string, stored verbatim by the session.
#[derive(Clone, Debug, PartialEq, Display)]
#[display(fmt = "{}: {}", kind, message)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// What the transport layer actually observed. Classification works off this
/// description rather than the transport's own error types, so the mapping
/// stays deterministic and testable without a browser.
#[derive(Clone, Debug, PartialEq)]
pub enum TransportFailure {
    /// No response at all: connection refused, DNS failure, CORS rejection.
    NoResponse(String),
    /// The deadline elapsed before any response arrived.
    DeadlineElapsed { millis: u32 },
    /// A response arrived with a non-success status. `detail` is the
    /// structured rejection reason when the body carried one.
    Status {
        code: u16,
        status_text: String,
        detail: Option<String>,
    },
    /// A success status whose body did not decode as a known shape.
    MalformedBody(String),
}

pub fn classify(failure: TransportFailure) -> ErrorInfo {
    match failure {
        TransportFailure::NoResponse(reason) => {
            let message = if reason.is_empty() {
                "Could not reach the detection service".to_string()
            } else {
                reason
            };
            ErrorInfo::new(ErrorKind::NetworkUnavailable, message)
        }
        TransportFailure::DeadlineElapsed { millis } => ErrorInfo::new(
            ErrorKind::Timeout,
            format!("No response within {}s", millis.div_ceil(1000)),
        ),
        TransportFailure::Status {
            detail: Some(detail),
            ..
        } => ErrorInfo::new(ErrorKind::ServerRejected, detail),
        TransportFailure::Status {
            code,
            status_text,
            detail: None,
        } => ErrorInfo::new(
            ErrorKind::ServerError,
            format!("Server returned {} {}", code, status_text),
        ),
        TransportFailure::MalformedBody(reason) => ErrorInfo::new(ErrorKind::Unknown, reason),
    }
}
