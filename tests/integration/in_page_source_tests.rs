/*!
 * Integration tests for the in-page track snapshot source
 */

use caption_seek::app_config::RetrievalConfig;
use caption_seek::captions::{CaptionEntry, InPageTrackSource, TranscriptSource};
use crate::common;

#[tokio::test]
async fn test_fetchCaptions_fromSnapshotFile_shouldReadCaptionTrackOnly() -> anyhow::Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let path = common::create_test_file(temp_dir.path(), "tracks.json", &common::track_snapshot())?;

    let source = InPageTrackSource::from_json(&std::fs::read_to_string(path)?)?;
    let entries = source.fetch_captions(&RetrievalConfig::default()).await?;

    assert_eq!(
        entries,
        vec![
            CaptionEntry::cue("hello there", 1.0, 3.0),
            CaptionEntry::cue("General Kenobi", 4.0, 6.5),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_fetchCaptions_shouldIgnoreLanguagePreference() {
    let source = InPageTrackSource::from_json(&common::track_snapshot()).unwrap();
    let default = source.fetch_captions(&RetrievalConfig::default()).await.unwrap();
    let with_lang = source.fetch_captions(&RetrievalConfig::with_lang("de")).await.unwrap();
    assert_eq!(default, with_lang);
}

#[test]
fn test_name_shouldIdentifySource() {
    assert_eq!(InPageTrackSource::default().name(), "in-page");
}

#[test]
fn test_entries_shouldSerializeEndInsteadOfDuration() {
    let entry = CaptionEntry::cue("hi", 1.0, 2.0);
    let json = serde_json::to_value(&entry).unwrap();
    assert_eq!(json["end"], 2.0);
    assert!(json.get("duration").is_none());
    assert!(json.get("lang").is_none());
}
