use once_cell::sync::Lazy;
use regex::Regex;

static RE_IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[.*?\]\((.*?)\)").unwrap());
static RE_REMOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").unwrap());

/// Collects local `![alt](target)` targets in document order.
///
/// Targets with a `scheme://` prefix are skipped. Duplicates are kept.
pub fn extract_images(document: &str) -> Vec<String> {
    RE_IMAGE
        .captures_iter(document)
        .map(|caps| caps[1].to_string())
        .filter(|target| !RE_REMOTE.is_match(target))
        .collect()
}
