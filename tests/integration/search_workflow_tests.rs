/*!
 * End-to-end tests: extract captions, then search them
 */

use caption_seek::app_config::RetrievalConfig;
use caption_seek::captions::{InPageTrackSource, RemoteManifestSource, TranscriptSource, search};
use crate::common::{self, VIDEO_ID};

#[tokio::test]
async fn test_searchRemoteCaptions_shouldListMatchesWithTimestamps() {
    let remote = RemoteManifestSource::for_page(common::fixture_fetcher(), VIDEO_ID).unwrap();
    let entries = remote.fetch_captions(&RetrievalConfig::with_lang("en")).await.unwrap();

    let lines: Vec<String> = search(&entries, "NEVER gonna").iter().map(|m| m.to_string()).collect();
    assert_eq!(lines, vec!["1:01 - Never gonna give you up", "1:03 - Never gonna let you down"]);
}

#[tokio::test]
async fn test_searchRemoteCaptions_withDecodedQuery_shouldMatchEncodedSource() {
    let remote = RemoteManifestSource::for_page(common::fixture_fetcher(), VIDEO_ID).unwrap();
    let entries = remote.fetch_captions(&RetrievalConfig::default()).await.unwrap();

    let matches = search(&entries, "rules & so");
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].start(), 2.6);
    assert_eq!(matches[0].timestamp(), "0:02");
}

#[tokio::test]
async fn test_searchInPageCaptions_withNoHit_shouldReturnEmpty() {
    let source = InPageTrackSource::from_json(&common::track_snapshot()).unwrap();
    let entries = source.fetch_captions(&RetrievalConfig::default()).await.unwrap();

    assert!(search(&entries, "intro").is_empty());
    assert_eq!(search(&entries, "kenobi").len(), 1);
}
