use std::borrow::Cow;

// @module: Character-reference decoding for caption text

/// Upper bound on decode passes; payloads are at most double-encoded in practice
pub const MAX_DECODE_PASSES: usize = 10;

/// Decode HTML/XML character references until the text stops changing.
///
/// Timed-text payloads escape their text once and the caption author's own
/// `&amp;` gets escaped again, so `&amp;amp;` is common. Each pass runs a full
/// entity decode; the loop ends at a fixed point or after `MAX_DECODE_PASSES`.
pub fn normalize_text(raw: &str) -> String {
    let mut current = raw.to_string();

    for _ in 0..MAX_DECODE_PASSES {
        match html_escape::decode_html_entities(&current) {
            Cow::Borrowed(_) => break,
            Cow::Owned(decoded) => {
                if decoded == current {
                    break;
                }
                current = decoded;
            }
        }
    }

    current
}
