/*!
 * Caption manifest extraction from a rendered watch page.
 *
 * The watch page embeds its player state as an inline script object rather
 * than exposing a stable API. The caption listing is found by slicing the raw
 * page text between two textual anchors and parsing the slice as JSON. This is
 * an external dependency on the host's markup: when the anchors stop matching,
 * extraction fails with `CaptionsUnavailable` and the anchors in
 * `ManifestAnchor::default` are what needs updating.
 */

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::CaptionError;

/// Textual anchors bounding the embedded caption manifest
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestAnchor {
    /// Marker immediately preceding the manifest object
    pub prefix: String,
    /// Sibling key immediately following the manifest object
    pub suffix: String,
}

impl ManifestAnchor {
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Isolate the raw manifest fragment from a page.
    ///
    /// The page is split on the prefix; the text between the first and second
    /// split points is cut at the first suffix occurrence. Fewer than two split
    /// parts means the page has no manifest.
    pub fn locate<'a>(&self, page: &'a str) -> Result<&'a str, CaptionError> {
        let mut parts = page.split(self.prefix.as_str());
        parts.next();
        let after_prefix = parts.next().ok_or(CaptionError::CaptionsUnavailable)?;

        let fragment = after_prefix
            .split(self.suffix.as_str())
            .next()
            .unwrap_or(after_prefix);

        debug!("Located manifest fragment ({} bytes)", fragment.len());
        Ok(fragment)
    }
}

impl Default for ManifestAnchor {
    fn default() -> Self {
        Self::new("\"captions\":", ",\"videoDetails")
    }
}

/// One caption track listed in the manifest
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    /// Language code of the track (`en`, `pt-BR`, ...)
    pub language_code: String,

    /// Opaque payload location
    pub base_url: String,

    /// Display name
    #[serde(default, deserialize_with = "deserialize_track_name")]
    pub name: Option<String>,

    /// `asr` for auto-generated tracks
    #[serde(default)]
    pub kind: Option<String>,

    #[serde(default)]
    pub vss_id: Option<String>,

    #[serde(default)]
    pub is_translatable: Option<bool>,
}

impl CaptionTrack {
    pub fn new(language_code: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            language_code: language_code.into(),
            base_url: base_url.into(),
            name: None,
            kind: None,
            vss_id: None,
            is_translatable: None,
        }
    }

    /// Whether the track was generated by speech recognition
    pub fn is_auto_generated(&self) -> bool {
        self.kind.as_deref() == Some("asr")
    }
}

// Names come as `{"simpleText": ".."}`, as `{"runs": [{"text": ".."}]}`, or as a
// plain string once re-serialized by this crate
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTrackName {
    Plain(String),
    Simple {
        #[serde(rename = "simpleText")]
        simple_text: String,
    },
    Runs {
        runs: Vec<RawTextRun>,
    },
}

#[derive(Deserialize)]
struct RawTextRun {
    #[serde(default)]
    text: String,
}

fn deserialize_track_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Option<RawTrackName> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|name| match name {
        RawTrackName::Plain(text) | RawTrackName::Simple { simple_text: text } => Some(text),
        RawTrackName::Runs { runs } => {
            let joined: String = runs.into_iter().map(|r| r.text).collect();
            (!joined.is_empty()).then_some(joined)
        }
    }))
}

#[derive(Deserialize)]
struct ManifestEnvelope {
    #[serde(rename = "playerCaptionsTracklistRenderer")]
    renderer: Option<TracklistRenderer>,
}

#[derive(Deserialize)]
struct TracklistRenderer {
    // Decoded one by one so a single incomplete track does not sink the listing
    #[serde(rename = "captionTracks")]
    caption_tracks: Option<Vec<serde_json::Value>>,
}

/// Ordered listing of the caption tracks available for a video
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionManifest {
    pub tracks: Vec<CaptionTrack>,
}

impl CaptionManifest {
    /// Parse an isolated manifest fragment.
    ///
    /// Fails with `ManifestParseError` on malformed JSON and with
    /// `CaptionsDisabled` when the fragment lists no usable tracks. Tracks
    /// missing their language code or payload location are skipped.
    pub fn parse_fragment(fragment: &str) -> Result<Self, CaptionError> {
        let cleaned = fragment.replacen('\n', "", 1);

        let envelope: ManifestEnvelope = serde_json::from_str(&cleaned)
            .map_err(|e| CaptionError::ManifestParseError(e.to_string()))?;

        let tracks: Vec<CaptionTrack> = envelope
            .renderer
            .and_then(|r| r.caption_tracks)
            .unwrap_or_default()
            .into_iter()
            .enumerate()
            .filter_map(|(index, raw)| match serde_json::from_value::<CaptionTrack>(raw) {
                Ok(track) => Some(track),
                Err(e) => {
                    debug!("Skipping unusable caption track #{}: {}", index, e);
                    None
                }
            })
            .collect();

        if tracks.is_empty() {
            return Err(CaptionError::CaptionsDisabled);
        }

        debug!(
            "Manifest lists {} track(s): {}",
            tracks.len(),
            tracks.iter().map(|t| t.language_code.as_str()).collect::<Vec<_>>().join(", ")
        );
        Ok(Self { tracks })
    }

    /// Locate and parse the manifest embedded in a watch page
    pub fn from_page(page: &str, anchor: &ManifestAnchor) -> Result<Self, CaptionError> {
        let fragment = anchor.locate(page).inspect_err(|_| {
            warn!("Caption manifest marker '{}' not found in page ({} bytes)", anchor.prefix, page.len());
        })?;
        Self::parse_fragment(fragment)
    }
}
