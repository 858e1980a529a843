use futures::future::{self, Either};
use gloo_file::Blob;
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use shared::{classify, DetectionResponse, DetectionResult, ErrorDetail, ErrorInfo, TransportFailure};

use crate::sources::ImagePayload;

const DEV_BASE_URL: &str = "http://localhost:8000";
const PROD_BASE_URL: &str = "https://epoch-malaria-detection.onrender.com";

// The deployed inference backend cold-starts, so release builds wait much
// longer than dev builds against a local server.
const DEV_TIMEOUT_MS: u32 = 10_000;
const PROD_TIMEOUT_MS: u32 = 45_000;

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub base_url: String,
    pub timeout_ms: u32,
    /// Probe `GET /health` before uploading. Off by default; the probe
    /// doubles perceived latency on a warm backend.
    pub probe_health: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let base_url = option_env!("API_BASE_URL")
            .map(str::to_owned)
            .unwrap_or_else(|| {
                if cfg!(debug_assertions) {
                    DEV_BASE_URL.to_owned()
                } else {
                    PROD_BASE_URL.to_owned()
                }
            });
        let timeout_ms = if cfg!(debug_assertions) {
            DEV_TIMEOUT_MS
        } else {
            PROD_TIMEOUT_MS
        };
        Self {
            base_url,
            timeout_ms,
            probe_health: false,
        }
    }
}

/// Single-attempt client for the detection endpoint. Each call is one POST;
/// there are no retries, and cancellation is the session's concern (it
/// simply ignores completions it no longer cares about).
#[derive(Clone, Debug, Default)]
pub struct DetectClient {
    config: ClientConfig,
}

impl DetectClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    /// Uploads the payload and returns the normalized detection result.
    /// Every failure mode is classified before it crosses this boundary.
    pub async fn detect(&self, payload: ImagePayload) -> Result<DetectionResult, ErrorInfo> {
        if payload.bytes.is_empty() {
            return Err(classify(TransportFailure::MalformedBody(
                "Empty image payload".into(),
            )));
        }

        if self.config.probe_health && !self.health().await {
            return Err(classify(TransportFailure::NoResponse(
                "Detection service health probe failed".into(),
            )));
        }

        let form = build_form(&payload);
        let url = format!("{}/upload_image/", self.config.base_url);
        let request = Request::post(&url)
            .body(form)
            .expect("Failed to build request.");

        let send = request.send();
        let deadline = TimeoutFuture::new(self.config.timeout_ms);
        futures::pin_mut!(send, deadline);

        let response = match future::select(send, deadline).await {
            Either::Left((sent, _)) => {
                sent.map_err(|err| classify(TransportFailure::NoResponse(err.to_string())))?
            }
            Either::Right(_) => {
                return Err(classify(TransportFailure::DeadlineElapsed {
                    millis: self.config.timeout_ms,
                }));
            }
        };

        if !response.ok() {
            let detail = response
                .json::<ErrorDetail>()
                .await
                .ok()
                .map(|body| body.detail)
                .filter(|detail| !detail.is_empty());
            return Err(classify(TransportFailure::Status {
                code: response.status(),
                status_text: response.status_text(),
                detail,
            }));
        }

        match response.json::<DetectionResponse>().await {
            Ok(raw) => Ok(raw.into()),
            Err(err) => Err(classify(TransportFailure::MalformedBody(err.to_string()))),
        }
    }

    pub async fn health(&self) -> bool {
        let url = format!("{}/health", self.config.base_url);
        match Request::get(&url).send().await {
            Ok(response) => response.ok(),
            Err(_) => false,
        }
    }
}

fn build_form(payload: &ImagePayload) -> web_sys::FormData {
    let blob = Blob::new_with_options(payload.bytes.as_slice(), Some(&payload.media_type));
    let form = web_sys::FormData::new().unwrap();
    form.append_with_blob_and_filename("file", blob.as_ref(), &payload.name)
        .unwrap();
    form
}
