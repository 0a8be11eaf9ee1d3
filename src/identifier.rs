use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use url::Url;

use crate::errors::CaptionError;

// @module: Video identifier resolution

// @const: Length of an opaque video id
pub const VIDEO_ID_LEN: usize = 11;

// @const: Recognised watch-page URL shape
static WATCH_URL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?youtube\.com/watch\?v=([\w-]{11})(?:[^\w-]|$)").unwrap()
});

/// Opaque video identifier resolved from user input
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VideoId(String);

impl VideoId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build the watch-page URL for this id under the given page prefix
    pub fn watch_url(&self, prefix: &str) -> Result<Url, url::ParseError> {
        Url::parse_with_params(prefix, &[("v", self.0.as_str())])
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolve a raw id or watch URL into a video id.
///
/// Any 11-character input is taken as an id without further checks. Otherwise
/// the input must contain `youtube.com/watch?v=<id>` with an 11-character id,
/// optionally schemed and `www`-prefixed. Never touches the network.
pub fn resolve_video_id(input: &str) -> Result<VideoId, CaptionError> {
    if input.chars().count() == VIDEO_ID_LEN {
        return Ok(VideoId(input.to_string()));
    }

    WATCH_URL_REGEX
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| VideoId(m.as_str().to_string()))
        .ok_or_else(|| CaptionError::InvalidIdentifier(input.to_string()))
}
