use anyhow::{Result, anyhow};
use isolang::Language;

/// Language utilities for caption language tags
///
/// Caption tracks are tagged with BCP-47 style codes such as `en`, `pt-BR`
/// or `zh-Hans`. Only the primary subtag is checked against ISO 639; region
/// and script subtags are passed through untouched.
/// Primary language subtag of a tag (`pt-BR` -> `pt`), lowercased
pub fn primary_subtag(tag: &str) -> String {
    tag.trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Look up the ISO 639 language for a tag's primary subtag
fn lookup(tag: &str) -> Option<Language> {
    let primary = primary_subtag(tag);
    match primary.len() {
        2 => Language::from_639_1(&primary),
        3 => Language::from_639_3(&primary),
        _ => None,
    }
}

/// Validate a caption language tag
pub fn validate_language_tag(tag: &str) -> Result<()> {
    if tag.trim().is_empty() {
        return Err(anyhow!("Empty language tag"));
    }

    let has_bad_subtag = tag
        .trim()
        .split(['-', '_'])
        .skip(1)
        .any(|sub| sub.is_empty() || sub.len() > 8 || !sub.chars().all(|c| c.is_ascii_alphanumeric()));

    if has_bad_subtag || lookup(tag).is_none() {
        return Err(anyhow!("Invalid language tag: {}", tag));
    }

    Ok(())
}

/// Get the English language name for a tag
pub fn get_language_name(tag: &str) -> Result<String> {
    let lang = lookup(tag).ok_or_else(|| anyhow!("Unknown language tag: {}", tag))?;
    Ok(lang.to_name().to_string())
}
