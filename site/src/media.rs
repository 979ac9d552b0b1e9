//! Share-link rewriting for displayable media URLs.
//!
//! Content editors paste Google Drive share links; browsers need direct
//! URLs. Anything that is not a Drive link passes through unchanged.

use std::sync::LazyLock;

/// How the URL will be embedded, which decides the rewrite target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

/// Rewrite a Google Drive share link to a directly loadable URL.
///
/// - `.../d/<id>/...` and `...?id=<id>` forms are recognized.
/// - Images map to the `lh3.googleusercontent.com` CDN form.
/// - Videos map to the `uc?export=download` form (for `<video src>`).
/// - Empty input stays empty; non-Drive URLs pass through unchanged.
pub fn resolve_media_url(url: &str, kind: MediaKind) -> String {
    static DRIVE_ID_RE: LazyLock<regex::Regex> =
        LazyLock::new(|| regex::Regex::new(r"/d/([^/]+)/|\?id=([^&]+)").unwrap());

    if url.is_empty() {
        return String::new();
    }
    if !url.contains("drive.google.com") {
        return url.to_string();
    }

    let id = DRIVE_ID_RE
        .captures(url)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|found| found.as_str());
    match id {
        Some(id) => match kind {
            MediaKind::Video => format!("https://drive.google.com/uc?export=download&id={id}"),
            MediaKind::Image => format!("https://lh3.googleusercontent.com/d/{id}"),
        },
        None => url.to_string(),
    }
}
