use async_trait::async_trait;
use log::{debug, info};

use crate::app_config::RetrievalConfig;
use crate::captions::manifest::{CaptionManifest, ManifestAnchor};
use crate::captions::selector::select_track;
use crate::captions::transcript::{RegexTranscriptParser, TranscriptParser};
use crate::captions::{CaptionEntry, TranscriptSource};
use crate::errors::{CaptionError, FetchError};
use crate::fetch::PageFetcher;
use crate::identifier::{VideoId, resolve_video_id};

// @module: Network retrieval through the manifest embedded in the watch page

/// Transcript source that scrapes the watch page and fetches the selected track
#[derive(Debug)]
pub struct RemoteManifestSource<F: PageFetcher, P: TranscriptParser = RegexTranscriptParser> {
    // @field: Retrieval backend
    fetcher: F,
    // @field: Resolved video id
    video_id: VideoId,
    // @field: Anchors around the embedded manifest
    anchor: ManifestAnchor,
    // @field: Payload parser
    parser: P,
}

impl<F: PageFetcher> RemoteManifestSource<F> {
    /// Create a source for a page given as a raw id or a watch URL
    pub fn for_page(fetcher: F, page: &str) -> Result<Self, CaptionError> {
        Ok(Self::new(fetcher, resolve_video_id(page)?))
    }

    pub fn new(fetcher: F, video_id: VideoId) -> Self {
        Self {
            fetcher,
            video_id,
            anchor: ManifestAnchor::default(),
            parser: RegexTranscriptParser,
        }
    }
}

impl<F: PageFetcher, P: TranscriptParser> RemoteManifestSource<F, P> {
    /// Replace the manifest anchors
    pub fn with_anchor(mut self, anchor: ManifestAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Replace the payload parser
    pub fn with_parser<Q: TranscriptParser>(self, parser: Q) -> RemoteManifestSource<F, Q> {
        RemoteManifestSource {
            fetcher: self.fetcher,
            video_id: self.video_id,
            anchor: self.anchor,
            parser,
        }
    }

    pub fn video_id(&self) -> &VideoId {
        &self.video_id
    }

    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Fetch the watch page and parse its caption manifest
    pub async fn fetch_manifest(&self, config: &RetrievalConfig) -> Result<CaptionManifest, CaptionError> {
        let page_url = self
            .video_id
            .watch_url(&config.watch_url)
            .map_err(|e| FetchError::InvalidUrl(format!("{}: {}", config.watch_url, e)))?;
        let page = self.fetcher.fetch_text(page_url.as_str(), config.lang()).await?;
        CaptionManifest::from_page(&page, &self.anchor)
    }
}

#[async_trait]
impl<F: PageFetcher, P: TranscriptParser> TranscriptSource for RemoteManifestSource<F, P> {
    fn name(&self) -> &'static str {
        "remote-manifest"
    }

    async fn fetch_captions(&self, config: &RetrievalConfig) -> Result<Vec<CaptionEntry>, CaptionError> {
        let manifest = self.fetch_manifest(config).await?;

        // Never empty here: from_page rejects manifests without tracks
        let selection = select_track(&manifest.tracks, config.lang()).ok_or(CaptionError::CaptionsDisabled)?;
        debug!("Fetching '{}' transcript for {}", selection.lang, self.video_id);

        let payload = self.fetcher.fetch_text(&selection.base_url, config.lang()).await?;
        let entries: Vec<CaptionEntry> = self
            .parser
            .parse(&payload, &selection.lang)
            .into_iter()
            .map(CaptionEntry::normalized)
            .collect();

        info!("Fetched {} caption(s) for {} [{}]", entries.len(), self.video_id, selection.lang);
        Ok(entries)
    }
}
