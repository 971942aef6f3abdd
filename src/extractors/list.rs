use once_cell::sync::Lazy;
use regex::Regex;

static RE_LIST_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^(?:[*-]|\d+\.)[^\S\n]+(\S.*)$").unwrap());

/// Extracts `-`, `*` and `1.` style list items, in order, markers removed.
pub fn parse_list(text: &str) -> Vec<String> {
    RE_LIST_ITEM
        .captures_iter(text)
        .map(|caps| caps[1].trim().to_string())
        .collect()
}

/// Every non-blank line, trimmed. Used when a section holds no list markers.
pub fn parse_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
