/*!
 * Caption extraction pipeline.
 *
 * Two strategies produce the same `CaptionEntry` list:
 * - `remote::RemoteManifestSource` scrapes the caption manifest embedded in the
 *   watch page, picks a track and parses its timed-text payload
 * - `in_page::InPageTrackSource` reads cues from a snapshot of the page's
 *   `<track>` elements without any network access
 *
 * Which one to use is up to the caller.
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::app_config::RetrievalConfig;
use crate::errors::CaptionError;

pub mod in_page;
pub mod manifest;
pub mod normalize;
pub mod remote;
pub mod search;
pub mod selector;
pub mod transcript;

pub use in_page::{InPageTrackSource, MediaTrackElement, TextCue};
pub use manifest::{CaptionManifest, CaptionTrack, ManifestAnchor};
pub use normalize::normalize_text;
pub use remote::RemoteManifestSource;
pub use search::{SearchMatch, format_timestamp, search};
pub use selector::{TrackSelection, select_track};
pub use transcript::{RegexTranscriptParser, TranscriptParser};

/// One spoken-caption unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptionEntry {
    /// Caption text
    pub text: String,

    /// Start time in seconds
    pub start: f64,

    /// Duration in seconds (timed-text payloads)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,

    /// End time in seconds (in-page cues)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,

    /// Language tag the entry is attributed to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl CaptionEntry {
    /// Entry from a timed-text payload
    pub fn timed(text: impl Into<String>, start: f64, duration: f64, lang: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            start,
            duration: Some(duration),
            end: None,
            lang: Some(lang.into()),
        }
    }

    /// Entry from an in-page cue
    pub fn cue(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            duration: None,
            end: Some(end),
            lang: None,
        }
    }

    /// End time, from `end` or `start + duration`
    pub fn end_time(&self) -> Option<f64> {
        self.end.or_else(|| self.duration.map(|d| self.start + d))
    }

    /// Same entry with its text run through the normalizer
    pub fn normalized(mut self) -> Self {
        self.text = normalize_text(&self.text);
        self
    }
}

/// A strategy for producing caption entries for the current page
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Produce the caption entries, in source order
    async fn fetch_captions(&self, config: &RetrievalConfig) -> Result<Vec<CaptionEntry>, CaptionError>;
}
