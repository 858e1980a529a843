use gloo_file::futures::read_as_bytes;
use gloo_file::File;
use gloo_net::http::Request;
use shared::{is_supported_media_type, ErrorInfo, ErrorKind};

/// A user action that names an image to run detection on.
pub enum ImageSource {
    Upload(File),
    Sample(u32),
}

/// One image ready to send: raw bytes plus the declared media type and a
/// display name. Built once per submission, consumed by the client.
pub struct ImagePayload {
    pub bytes: Vec<u8>,
    pub media_type: String,
    pub name: String,
}

pub async fn resolve(source: ImageSource) -> Result<ImagePayload, ErrorInfo> {
    match source {
        ImageSource::Upload(file) => resolve_from_upload(file).await,
        ImageSource::Sample(id) => resolve_from_sample(id).await,
    }
}

/// Reads a picked file into a payload. The file input already filters on
/// `image/*`; this guard covers callers that skip the input element.
pub async fn resolve_from_upload(file: File) -> Result<ImagePayload, ErrorInfo> {
    let media_type = file.raw_mime_type();
    if !is_supported_media_type(&media_type) {
        return Err(ErrorInfo::new(
            ErrorKind::Unknown,
            format!("Unsupported media type: {}", media_type),
        ));
    }

    let name = file.name();
    let bytes = read_as_bytes(&file)
        .await
        .map_err(|err| ErrorInfo::new(ErrorKind::Unknown, err.to_string()))?;

    Ok(ImagePayload {
        bytes,
        media_type,
        name,
    })
}

/// Fetches one of the bundled sample smears. Samples ship with the site
/// under a fixed path convention, so a miss means the deploy is broken.
pub async fn resolve_from_sample(id: u32) -> Result<ImagePayload, ErrorInfo> {
    let path = format!("/assets/samples/sample_{}.jpg", id);
    let response = Request::get(&path)
        .send()
        .await
        .map_err(|err| ErrorInfo::new(ErrorKind::AssetUnavailable, err.to_string()))?;

    if !response.ok() {
        return Err(ErrorInfo::new(
            ErrorKind::AssetUnavailable,
            response.status_text(),
        ));
    }

    let bytes = response
        .binary()
        .await
        .map_err(|err| ErrorInfo::new(ErrorKind::AssetUnavailable, err.to_string()))?;

    Ok(ImagePayload {
        bytes,
        media_type: "image/jpeg".to_string(),
        name: format!("sample_{}.jpg", id),
    })
}
