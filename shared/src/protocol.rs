use serde::{Deserialize, Serialize};

/// One detected object as reported by the service. Confidence is a numeric
/// string already formatted as a percentage, thumbnail is a base64 JPEG crop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Detection {
    pub label: String,
    pub confidence: String,
    pub thumbnail: String,
}

/// Wire shape of `POST /upload_image/`. Older service revisions omit
/// `base_img_data` and `speed`, so both decode as optional.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DetectionResponse {
    pub img_data: String,
    #[serde(default)]
    pub base_img_data: Option<String>,
    #[serde(default)]
    pub detections: Vec<Detection>,
    #[serde(default)]
    pub speed: Option<String>,
}

/// Structured rejection body (`{"detail": "..."}`) the service sends with
/// error statuses.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorDetail {
    pub detail: String,
}

/// The single normalized result shape the rest of the client consumes,
/// regardless of which protocol revision produced it. Detection order is the
/// server's and is preserved.
#[derive(Clone, Debug, PartialEq)]
pub struct DetectionResult {
    pub annotated_image: String,
    pub raw_image: Option<String>,
    pub detections: Vec<Detection>,
    pub timing_label: Option<String>,
}

impl From<DetectionResponse> for DetectionResult {
    fn from(raw: DetectionResponse) -> Self {
        Self {
            annotated_image: raw.img_data,
            raw_image: raw.base_img_data,
            detections: raw.detections,
            timing_label: raw.speed,
        }
    }
}

/// Media types accepted at the input-capture boundary.
pub fn is_supported_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_current_protocol_shape() {
        let raw: DetectionResponse = serde_json::from_str(
            r#"{
                "img_data": "AAA",
                "base_img_data": "BBB",
                "detections": [
                    {"label": "WBC", "confidence": "92.5", "thumbnail": "CCC"}
                ],
                "speed": "0.31s"
            }"#,
        )
        .unwrap();

        let result = DetectionResult::from(raw);
        assert_eq!(result.annotated_image, "AAA");
        assert_eq!(result.raw_image.as_deref(), Some("BBB"));
        assert_eq!(result.timing_label.as_deref(), Some("0.31s"));
        assert_eq!(
            result.detections,
            vec![Detection {
                label: "WBC".into(),
                confidence: "92.5".into(),
                thumbnail: "CCC".into(),
            }]
        );
    }

    #[test]
    fn tolerates_older_protocol_shape() {
        let raw: DetectionResponse = serde_json::from_str(
            r#"{
                "img_data": "AAA",
                "detections": [
                    {"label": "Trophozoite", "confidence": "87.1", "thumbnail": "DDD"}
                ]
            }"#,
        )
        .unwrap();

        let result = DetectionResult::from(raw);
        assert_eq!(result.annotated_image, "AAA");
        assert_eq!(result.raw_image, None);
        assert_eq!(result.timing_label, None);
        assert_eq!(result.detections.len(), 1);
    }

    #[test]
    fn preserves_server_detection_order() {
        let raw: DetectionResponse = serde_json::from_str(
            r#"{
                "img_data": "AAA",
                "detections": [
                    {"label": "Ring", "confidence": "71.0", "thumbnail": "1"},
                    {"label": "WBC", "confidence": "95.2", "thumbnail": "2"},
                    {"label": "Schizont", "confidence": "64.8", "thumbnail": "3"}
                ]
            }"#,
        )
        .unwrap();

        let labels: Vec<_> = DetectionResult::from(raw)
            .detections
            .into_iter()
            .map(|d| d.label)
            .collect();
        assert_eq!(labels, ["Ring", "WBC", "Schizont"]);
    }

    #[test]
    fn media_type_filter_accepts_only_images() {
        assert!(is_supported_media_type("image/jpeg"));
        assert!(is_supported_media_type("image/png"));
        assert!(!is_supported_media_type("application/pdf"));
        assert!(!is_supported_media_type("text/plain"));
        assert!(!is_supported_media_type(""));
    }
}
