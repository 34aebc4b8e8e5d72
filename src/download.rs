use crate::types::MediaLink;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Filename offered to the browser for a chosen rendition.
pub fn filename_for(link: &MediaLink) -> String {
    format!("media_{}.{}", link.quality, link.format.to_lowercase())
}

/// Fires a browser download by clicking a transient anchor element. Fire
/// and forget: the browser gives no failure signal back.
#[cfg(target_arch = "wasm32")]
pub fn trigger_download(url: &str, filename: &str) {
    let document = match web_sys::window().and_then(|w| w.document()) {
        Some(document) => document,
        None => return,
    };
    let anchor = match document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<web_sys::HtmlAnchorElement>().ok())
    {
        Some(anchor) => anchor,
        None => return,
    };
    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.set_target("_blank");
    if let Some(body) = document.body() {
        let _ = body.append_child(&anchor);
        anchor.click();
        let _ = body.remove_child(&anchor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_combines_quality_and_lowercased_format() {
        let link = MediaLink {
            url: "https://cdn.example.com/hd.mp4".to_string(),
            quality: "HD".to_string(),
            format: "MP4".to_string(),
            size: None,
        };
        assert_eq!(filename_for(&link), "media_HD.mp4");
    }

    #[test]
    fn filename_keeps_quality_verbatim() {
        let link = MediaLink {
            url: "https://cdn.example.com/a.webm".to_string(),
            quality: "1080p".to_string(),
            format: "WEBM".to_string(),
            size: Some("22 MB".to_string()),
        };
        assert_eq!(filename_for(&link), "media_1080p.webm");
    }
}
