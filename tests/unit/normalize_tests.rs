/*!
 * Tests for caption text normalization
 */

use caption_seek::captions::normalize::{MAX_DECODE_PASSES, normalize_text};
use caption_seek::captions::{CaptionEntry, RegexTranscriptParser, TranscriptParser};

#[test]
fn test_parseThenNormalize_shouldDecodeOnlyAfterParsing() {
    let payload = r#"<text start="1.5" dur="2.0">Hello &amp;amp; world</text>"#;
    let entries = RegexTranscriptParser.parse(payload, "en");

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].start, 1.5);
    assert_eq!(entries[0].duration, Some(2.0));
    assert_eq!(entries[0].text, "Hello &amp; world");

    let normalized: CaptionEntry = entries[0].clone().normalized();
    assert_eq!(normalized.text, "Hello & world");
}

#[test]
fn test_normalize_isIdempotent_overMixedInputs() {
    let inputs = [
        "plain",
        "&lt;i&gt;music&lt;/i&gt;",
        "&amp;lt;b&amp;gt;",
        "Tom &amp;amp; Jerry",
        "&#39;quoted&#39;",
        "&amp;#x27;hex&amp;#x27;",
        "dangling & ampersand",
        "&nosuchentity;",
        "",
    ];
    for input in inputs {
        let once = normalize_text(input);
        assert_eq!(normalize_text(&once), once, "input: {:?}", input);
    }
}

#[test]
fn test_normalize_withRepeatedEncoding_shouldTerminate() {
    let pathological = format!("&{}amp;", "amp;".repeat(10_000));
    let result = normalize_text(&pathological);
    assert!(result.len() < pathological.len());
    assert_eq!(result.len(), pathological.len() - MAX_DECODE_PASSES * "amp;".len());
}
