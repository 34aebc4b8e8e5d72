use serde::Deserialize;
#[cfg(target_arch = "wasm32")]
use serde::Serialize;
use thiserror::Error;

use crate::types::{DownloadResult, MediaLink};

#[cfg(target_arch = "wasm32")]
use crate::platform::{platform_str, PlatformDescriptor};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{JsCast, JsValue};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::JsFuture;
#[cfg(target_arch = "wasm32")]
use web_sys::{Request, RequestInit, RequestMode, Response};

/// The extraction service that does the actual scraping.
pub const ENDPOINT: &str = "https://api.entiredownload.com/download";

#[cfg(target_arch = "wasm32")]
#[derive(Serialize)]
struct DownloadRequest<'a> {
    url: &'a str,
    platform: &'a str,
}

#[derive(Deserialize, Default)]
struct DownloadResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: Option<DownloadData>,
    /// Older service builds answer with a single top-level link instead.
    #[serde(default)]
    download_link: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Deserialize, Default)]
struct DownloadData {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    thumbnail: Option<String>,
    #[serde(default)]
    download_links: Vec<WireLink>,
}

#[derive(Deserialize)]
struct WireLink {
    url: String,
    #[serde(default)]
    quality: String,
    #[serde(default)]
    format: String,
    #[serde(default)]
    size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("The download service is currently inactive. Please try again later.")]
    ServiceInactive,
    #[error("Service error: {0}")]
    Status(u16),
    #[error("{0}")]
    Upstream(String),
    #[error("The service answered without download links. Please try again.")]
    MissingPayload,
    #[error("The service answered with an unreadable response. Please try again.")]
    Decode,
    #[error("Could not reach the download service. Check your connection and try again.")]
    Network,
}

/// Maps an HTTP status and body onto the four terminal outcomes: service
/// inactive, status error, upstream error text, or a normalized result.
pub(crate) fn parse_response(status: u16, body: &str) -> Result<DownloadResult, ApiError> {
    if status == 404 {
        return Err(ApiError::ServiceInactive);
    }
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }
    let response: DownloadResponse = serde_json::from_str(body).map_err(|_| ApiError::Decode)?;
    if let Some(message) = response.error {
        return Err(ApiError::Upstream(message));
    }
    if response.success {
        if let Some(data) = response.data {
            if !data.download_links.is_empty() {
                return Ok(normalize(data));
            }
        }
    }
    if let Some(link) = response.download_link {
        return Ok(DownloadResult {
            title: None,
            thumbnail: None,
            links: vec![normalize_link(WireLink {
                quality: "Original".to_string(),
                format: String::new(),
                size: None,
                url: link,
            })],
        });
    }
    Err(ApiError::MissingPayload)
}

fn normalize(data: DownloadData) -> DownloadResult {
    DownloadResult {
        title: data.title,
        thumbnail: data.thumbnail,
        links: data.download_links.into_iter().map(normalize_link).collect(),
    }
}

fn normalize_link(link: WireLink) -> MediaLink {
    let format = if link.format.is_empty() {
        format_from_url(&link.url)
    } else {
        link.format
    };
    let quality = if link.quality.is_empty() {
        "Original".to_string()
    } else {
        link.quality
    };
    MediaLink {
        url: link.url,
        quality,
        format,
        size: link.size,
    }
}

/// Derives a format tag from the last path segment's extension; falls back
/// to MP4 when the link carries none.
fn format_from_url(link: &str) -> String {
    url::Url::parse(link)
        .ok()
        .and_then(|parsed| {
            let path = parsed.path().to_string();
            let segment = path.split('/').filter(|s| !s.is_empty()).next_back()?;
            let (_, ext) = segment.rsplit_once('.')?;
            if (1..=4).contains(&ext.len()) && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                Some(ext.to_ascii_uppercase())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "MP4".to_string())
}

/// Issues the one POST of `{url, platform}` and resolves it to a terminal
/// outcome. Rejected fetches are traced to the console and reported as
/// connectivity failures.
#[cfg(target_arch = "wasm32")]
pub async fn request_download_links(
    media_url: &str,
    platform: &'static PlatformDescriptor,
) -> Result<DownloadResult, ApiError> {
    let body = serde_json::to_string(&DownloadRequest {
        url: media_url,
        platform: platform_str(&platform.platform),
    })
    .map_err(|_| ApiError::Decode)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));
    let request =
        Request::new_with_str_and_init(ENDPOINT, &opts).map_err(|_| ApiError::Network)?;
    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|_| ApiError::Network)?;

    let window = web_sys::window().ok_or(ApiError::Network)?;
    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| {
            crate::log::js_error("fetch rejected", &err);
            ApiError::Network
        })?;
    let response: Response = response.dyn_into().map_err(|_| ApiError::Network)?;
    let status = response.status();
    let text = JsFuture::from(response.text().map_err(|_| ApiError::Decode)?)
        .await
        .map_err(|_| ApiError::Decode)?;
    parse_response(status, &text.as_string().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_payload_keeps_every_link_in_order() {
        let body = r#"{
            "success": true,
            "data": {
                "title": "Clip of the day",
                "thumbnail": "https://cdn.example.com/thumb.jpg",
                "download_links": [
                    {"url": "https://cdn.example.com/hd.mp4", "quality": "HD", "format": "MP4", "size": "15.2 MB"},
                    {"url": "https://cdn.example.com/sd.mp4", "quality": "SD", "format": "MP4"}
                ]
            }
        }"#;
        let result = parse_response(200, body).unwrap();
        assert_eq!(result.title.as_deref(), Some("Clip of the day"));
        assert_eq!(result.thumbnail.as_deref(), Some("https://cdn.example.com/thumb.jpg"));
        assert_eq!(result.links.len(), 2);
        assert_eq!(result.links[0].quality, "HD");
        assert_eq!(result.links[0].size.as_deref(), Some("15.2 MB"));
        assert_eq!(result.links[1].quality, "SD");
        assert_eq!(result.links[1].size, None);
    }

    #[test]
    fn bare_download_link_normalizes_to_single_link() {
        let body = r#"{"download_link": "https://cdn.example.com/media/clip.webm"}"#;
        let result = parse_response(200, body).unwrap();
        assert_eq!(result.title, None);
        assert_eq!(result.links.len(), 1);
        assert_eq!(result.links[0].url, "https://cdn.example.com/media/clip.webm");
        assert_eq!(result.links[0].quality, "Original");
        assert_eq!(result.links[0].format, "WEBM");
    }

    #[test]
    fn bare_link_without_extension_defaults_to_mp4() {
        let body = r#"{"download_link": "https://cdn.example.com/media/clip"}"#;
        let result = parse_response(200, body).unwrap();
        assert_eq!(result.links[0].format, "MP4");
    }

    #[test]
    fn error_field_is_surfaced_verbatim() {
        let body = r#"{"success": false, "error": "This post is private"}"#;
        assert_eq!(
            parse_response(200, body),
            Err(ApiError::Upstream("This post is private".to_string()))
        );
    }

    #[test]
    fn missing_payload_is_an_error() {
        assert_eq!(parse_response(200, "{}"), Err(ApiError::MissingPayload));
        assert_eq!(
            parse_response(200, r#"{"success": true}"#),
            Err(ApiError::MissingPayload)
        );
    }

    #[test]
    fn empty_links_array_is_missing_payload() {
        let body = r#"{"success": true, "data": {"download_links": []}}"#;
        assert_eq!(parse_response(200, body), Err(ApiError::MissingPayload));
    }

    #[test]
    fn http_404_means_service_inactive() {
        assert_eq!(parse_response(404, ""), Err(ApiError::ServiceInactive));
    }

    #[test]
    fn other_non_2xx_is_a_status_error() {
        assert_eq!(parse_response(500, ""), Err(ApiError::Status(500)));
        assert_eq!(parse_response(301, "{}"), Err(ApiError::Status(301)));
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert_eq!(parse_response(200, "<html>teapot</html>"), Err(ApiError::Decode));
    }

    #[test]
    fn status_error_message_names_the_code() {
        assert_eq!(ApiError::Status(502).to_string(), "Service error: 502");
    }

    #[test]
    fn missing_quality_falls_back_to_original() {
        let body = r#"{
            "success": true,
            "data": {"download_links": [{"url": "https://cdn.example.com/a.mp4"}]}
        }"#;
        let result = parse_response(200, body).unwrap();
        assert_eq!(result.links[0].quality, "Original");
        assert_eq!(result.links[0].format, "MP4");
    }
}
