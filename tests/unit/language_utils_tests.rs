/*!
 * Tests for language utility functions
 */

use caption_seek::language_utils::{get_language_name, primary_subtag, validate_language_tag};

#[test]
fn test_validate_language_tag_withValidTags_shouldSucceed() {
    for tag in ["en", "es", "de", "eng", "pt-BR", "zh-Hans", "en_US", " EN "] {
        assert!(validate_language_tag(tag).is_ok(), "tag: {}", tag);
    }
}

#[test]
fn test_validate_language_tag_withInvalidTags_shouldFail() {
    for tag in ["", "   ", "xx", "e", "english", "en-", "en-toolongsubtag", "en-U$"] {
        assert!(validate_language_tag(tag).is_err(), "tag: {}", tag);
    }
}

#[test]
fn test_primary_subtag_shouldLowercaseAndStripRegion() {
    assert_eq!(primary_subtag("pt-BR"), "pt");
    assert_eq!(primary_subtag("EN_us"), "en");
    assert_eq!(primary_subtag("fr"), "fr");
}

#[test]
fn test_get_language_name_withKnownTags_shouldReturnEnglishName() {
    assert_eq!(get_language_name("en").unwrap(), "English");
    assert_eq!(get_language_name("es-419").unwrap(), "Spanish");
    assert_eq!(get_language_name("deu").unwrap(), "German");
    assert!(get_language_name("zz").is_err());
}
