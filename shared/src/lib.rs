pub mod error;
pub mod protocol;
pub mod session;
pub mod view;

pub use error::{classify, ErrorInfo, ErrorKind, TransportFailure};
pub use protocol::{is_supported_media_type, Detection, DetectionResponse, DetectionResult, ErrorDetail};
pub use session::{RequestState, Session};
pub use view::{project, ViewModel, TIMING_PLACEHOLDER};
