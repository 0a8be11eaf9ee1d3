/*!
 * # caption-seek - search inside a video's spoken captions
 *
 * A Rust library for pulling the timed captions of a video watch page and
 * finding the moments where a phrase is spoken.
 *
 * ## Features
 *
 * - Resolve a video id from a raw id or a watch-page URL
 * - Locate the caption manifest embedded in the rendered watch page
 * - Pick a caption track by language preference, falling back to the default track
 * - Parse the timed-text payload into ordered caption entries
 * - Decode single- and double-encoded HTML character references
 * - Read cues from a snapshot of in-page `<track>` elements as a fallback
 * - Case-insensitive search with `m:ss` timestamps
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `identifier`: Video id resolution
 * - `captions`: Caption extraction pipeline:
 *   - `captions::manifest`: Anchor-based manifest extraction and parsing
 *   - `captions::selector`: Track selection by language
 *   - `captions::transcript`: Timed-text payload parsing
 *   - `captions::normalize`: Character-reference decoding
 *   - `captions::remote`: Network transcript source
 *   - `captions::in_page`: In-page track transcript source
 *   - `captions::search`: Query matching and display
 * - `fetch`: Page and payload retrieval (reqwest client, in-memory fetcher)
 * - `app_config`: Configuration management
 * - `language_utils`: Language tag utilities
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
#![allow(clippy::uninlined_format_args)]

// Public modules
pub mod app_config;
pub mod captions;
pub mod errors;
pub mod fetch;
pub mod identifier;
pub mod language_utils;

// Re-export main types for easier usage
pub use app_config::{Config, RetrievalConfig};
pub use captions::{CaptionEntry, CaptionTrack, InPageTrackSource, RemoteManifestSource, TranscriptSource};
pub use errors::{AppError, CaptionError, FetchError};
pub use identifier::{VideoId, resolve_video_id};
