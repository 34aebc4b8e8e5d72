use thiserror::Error;
use url::Url;
use yew_icons::IconId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Platform {
    Instagram,
    Tiktok,
    Youtube,
    Twitter,
    Facebook,
}

pub fn platform_str(p: &Platform) -> &'static str {
    match p {
        Platform::Instagram => "instagram",
        Platform::Tiktok => "tiktok",
        Platform::Youtube => "youtube",
        Platform::Twitter => "twitter",
        Platform::Facebook => "facebook",
    }
}

/// Static metadata for one supported source site.
#[derive(Debug, PartialEq)]
pub struct PlatformDescriptor {
    pub platform: Platform,
    pub name: &'static str,
    pub icon: IconId,
    /// CSS class carrying the brand gradient.
    pub accent: &'static str,
    pub domains: &'static [&'static str],
    pub examples: &'static [&'static str],
}

/// Declaration order is match order: the detector returns the first entry
/// whose domain set matches the hostname.
pub static PLATFORMS: [PlatformDescriptor; 5] = [
    PlatformDescriptor {
        platform: Platform::Instagram,
        name: "Instagram",
        icon: IconId::LucideInstagram,
        accent: "accent-instagram",
        domains: &["instagram.com", "instagr.am"],
        examples: &[
            "https://www.instagram.com/p/C4RzXq2LkQd/",
            "https://www.instagram.com/reel/C5aB8cDeFgH/",
        ],
    },
    PlatformDescriptor {
        platform: Platform::Tiktok,
        name: "TikTok",
        icon: IconId::LucideMusic,
        accent: "accent-tiktok",
        domains: &["tiktok.com", "vm.tiktok.com"],
        examples: &[
            "https://www.tiktok.com/@scout2015/video/6718335390845095173",
            "https://vm.tiktok.com/ZMhJ8kqcW/",
        ],
    },
    PlatformDescriptor {
        platform: Platform::Youtube,
        name: "YouTube",
        icon: IconId::LucideYoutube,
        accent: "accent-youtube",
        domains: &["youtube.com", "youtu.be"],
        examples: &[
            "https://www.youtube.com/watch?v=dQw4w9WgXcQ",
            "https://youtu.be/dQw4w9WgXcQ",
        ],
    },
    PlatformDescriptor {
        platform: Platform::Twitter,
        name: "Twitter",
        icon: IconId::LucideTwitter,
        accent: "accent-twitter",
        domains: &["twitter.com", "x.com"],
        examples: &[
            "https://twitter.com/jack/status/20",
            "https://x.com/jack/status/20",
        ],
    },
    PlatformDescriptor {
        platform: Platform::Facebook,
        name: "Facebook",
        icon: IconId::LucideFacebook,
        accent: "accent-facebook",
        domains: &["facebook.com", "fb.watch"],
        examples: &[
            "https://www.facebook.com/watch/?v=10153231379946729",
            "https://fb.watch/7GrDW3N2pq/",
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UrlCheckError {
    #[error("Please enter a URL first")]
    Empty,
    #[error("Please enter a valid URL")]
    Malformed,
    #[error("Please enter a valid URL from a supported platform")]
    UnsupportedHost,
    #[error("This {0} link does not point to a single post or video")]
    NotAPost(&'static str),
}

/// Hostname-based platform lookup. Lowercases the host, strips one leading
/// `www.`, then substring-matches against each descriptor's domain set.
pub fn detect_platform(raw: &str) -> Option<&'static PlatformDescriptor> {
    let parsed = Url::parse(raw.trim()).ok()?;
    let host = parsed.host_str()?.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    PLATFORMS
        .iter()
        .find(|descriptor| descriptor.domains.iter().any(|domain| host.contains(domain)))
}

/// A URL is downloadable iff it parses, its host matches a platform, and its
/// path has that platform's single-post shape.
pub fn validate_media_url(raw: &str) -> Result<&'static PlatformDescriptor, UrlCheckError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlCheckError::Empty);
    }
    let parsed = Url::parse(trimmed).map_err(|_| UrlCheckError::Malformed)?;
    let descriptor = detect_platform(trimmed).ok_or(UrlCheckError::UnsupportedHost)?;
    if !has_post_path(descriptor.platform, &parsed) {
        return Err(UrlCheckError::NotAPost(descriptor.name));
    }
    Ok(descriptor)
}

fn id_after(segments: &[&str], markers: &[&str]) -> bool {
    segments
        .iter()
        .position(|segment| markers.contains(segment))
        .and_then(|i| segments.get(i + 1))
        .is_some()
}

fn has_video_query(url: &Url) -> bool {
    url.query_pairs().any(|(key, value)| key == "v" && !value.is_empty())
}

fn has_post_path(platform: Platform, url: &Url) -> bool {
    let host = url.host_str().unwrap_or("").to_ascii_lowercase();
    let segments: Vec<&str> = url.path().split('/').filter(|s| !s.is_empty()).collect();
    match platform {
        Platform::Instagram => id_after(&segments, &["p", "reel", "tv"]),
        Platform::Tiktok => {
            if host.contains("vm.tiktok.com") {
                // Short links carry an opaque code as the only segment.
                !segments.is_empty()
            } else {
                segments.first().is_some_and(|s| s.starts_with('@'))
                    && id_after(&segments, &["video", "photo"])
            }
        }
        Platform::Youtube => {
            if host.contains("youtu.be") {
                !segments.is_empty()
            } else {
                (segments.first() == Some(&"watch") && has_video_query(url))
                    || id_after(&segments, &["shorts", "embed"])
            }
        }
        Platform::Twitter => match segments.iter().position(|s| *s == "status") {
            // An account segment must precede `status`, an id must follow it.
            Some(i) => i >= 1 && segments.get(i + 1).is_some(),
            None => false,
        },
        Platform::Facebook => {
            if host.contains("fb.watch") {
                !segments.is_empty()
            } else {
                (segments.first() == Some(&"watch") && has_video_query(url))
                    || id_after(&segments, &["reel", "videos"])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_every_example_url() {
        for descriptor in PLATFORMS.iter() {
            for example in descriptor.examples {
                let detected = detect_platform(example).map(|d| d.platform);
                assert_eq!(detected, Some(descriptor.platform), "{example}");
            }
        }
    }

    #[test]
    fn unknown_domain_is_no_match() {
        assert!(detect_platform("https://vimeo.com/123456789").is_none());
        assert!(detect_platform("https://example.org/p/C4RzXq2LkQd/").is_none());
    }

    #[test]
    fn garbage_is_no_match() {
        assert!(detect_platform("").is_none());
        assert!(detect_platform("not a url at all").is_none());
    }

    #[test]
    fn leading_www_is_ignored() {
        let bare = detect_platform("https://instagram.com/p/C4RzXq2LkQd/").map(|d| d.platform);
        let www = detect_platform("https://www.instagram.com/p/C4RzXq2LkQd/").map(|d| d.platform);
        assert_eq!(bare, Some(Platform::Instagram));
        assert_eq!(www, Some(Platform::Instagram));
    }

    #[test]
    fn validator_accepts_every_example_url() {
        for descriptor in PLATFORMS.iter() {
            for example in descriptor.examples {
                let validated = validate_media_url(example).map(|d| d.platform);
                assert_eq!(validated, Ok(descriptor.platform), "{example}");
            }
        }
    }

    #[test]
    fn empty_and_whitespace_are_rejected() {
        assert_eq!(validate_media_url(""), Err(UrlCheckError::Empty));
        assert_eq!(validate_media_url("   "), Err(UrlCheckError::Empty));
    }

    #[test]
    fn schemeless_input_is_malformed() {
        assert_eq!(
            validate_media_url("instagram.com/p/C4RzXq2LkQd/"),
            Err(UrlCheckError::Malformed)
        );
    }

    #[test]
    fn unsupported_host_is_rejected() {
        assert_eq!(
            validate_media_url("https://soundcloud.com/artist/track"),
            Err(UrlCheckError::UnsupportedHost)
        );
    }

    #[test]
    fn profile_and_channel_urls_are_not_posts() {
        assert_eq!(
            validate_media_url("https://www.instagram.com/natgeo/"),
            Err(UrlCheckError::NotAPost("Instagram"))
        );
        assert_eq!(
            validate_media_url("https://www.tiktok.com/@scout2015"),
            Err(UrlCheckError::NotAPost("TikTok"))
        );
        assert_eq!(
            validate_media_url("https://www.youtube.com/@veritasium"),
            Err(UrlCheckError::NotAPost("YouTube"))
        );
        assert_eq!(
            validate_media_url("https://twitter.com/jack"),
            Err(UrlCheckError::NotAPost("Twitter"))
        );
    }

    #[test]
    fn watch_urls_need_a_video_parameter() {
        assert_eq!(
            validate_media_url("https://www.youtube.com/watch"),
            Err(UrlCheckError::NotAPost("YouTube"))
        );
        assert!(validate_media_url("https://www.youtube.com/watch?v=dQw4w9WgXcQ").is_ok());
        assert_eq!(
            validate_media_url("https://www.facebook.com/watch/"),
            Err(UrlCheckError::NotAPost("Facebook"))
        );
    }

    #[test]
    fn shorts_and_tv_shapes_are_posts() {
        assert!(validate_media_url("https://www.youtube.com/shorts/dQw4w9WgXcQ").is_ok());
        assert!(validate_media_url("https://www.instagram.com/tv/C4RzXq2LkQd/").is_ok());
        assert!(validate_media_url("https://www.facebook.com/somepage/videos/10153231379946729/").is_ok());
    }

    #[test]
    fn status_needs_an_account_segment() {
        assert_eq!(
            validate_media_url("https://twitter.com/status/20"),
            Err(UrlCheckError::NotAPost("Twitter"))
        );
        assert!(validate_media_url("https://x.com/jack/status/20").is_ok());
    }
}
