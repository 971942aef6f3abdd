use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::KeyValues;

/// `label: value` or `label：value`
static RE_COLON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[*-]\s+)?([^\n:]+?)\s*[:：]\s*(.+?)\s*$").unwrap());

/// `label（comment）value`
static RE_FULLWIDTH_COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[*-]\s+)?([^\n（]+?)\s*（(.+?)）\s*(.+?)\s*$").unwrap());

/// `label value`
static RE_WHITESPACE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[*-]\s+)?(\S+)\s+(\S.*?)\s*$").unwrap());

type LineMatcher = fn(&str) -> Option<(String, String)>;

/// Tried in order for every line; the first match wins. Specific separators
/// must stay ahead of the whitespace fallback.
const LINE_MATCHERS: [LineMatcher; 3] = [match_colon, match_fullwidth_comment, match_whitespace];

fn match_colon(line: &str) -> Option<(String, String)> {
    let caps = RE_COLON.captures(line)?;
    Some((caps[1].trim().to_string(), caps[2].trim().to_string()))
}

fn match_fullwidth_comment(line: &str) -> Option<(String, String)> {
    let caps = RE_FULLWIDTH_COMMENT.captures(line)?;
    let value = format!("{} ({})", caps[3].trim(), caps[2].trim());
    Some((caps[1].trim().to_string(), value))
}

fn match_whitespace(line: &str) -> Option<(String, String)> {
    let caps = RE_WHITESPACE.captures(line)?;
    Some((caps[1].trim().to_string(), caps[2].trim().to_string()))
}

/// Parses `label → value` pairs, one per line.
///
/// Lines no matcher accepts are dropped. A repeated label overwrites the
/// earlier value.
pub fn parse_key_values(text: &str) -> KeyValues {
    let mut pairs = KeyValues::new();

    for line in text.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if let Some((label, value)) = LINE_MATCHERS.iter().find_map(|matcher| matcher(line)) {
            pairs.insert(label, value);
        }
    }

    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(text: &str) -> Vec<(String, String)> {
        parse_key_values(text)
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn owned(expected: &[(&str, &str)]) -> Vec<(String, String)> {
        expected
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_colon_pairs() {
        assert_eq!(
            pairs("糖: 10克\n盐: 5克"),
            owned(&[("糖", "10克"), ("盐", "5克")])
        );
    }

    #[test]
    fn test_fullwidth_colon_and_list_marker() {
        assert_eq!(
            pairs("- 水：500 毫升\n* 米 ： 100 克"),
            owned(&[("水", "500 毫升"), ("米", "100 克")])
        );
    }

    #[test]
    fn test_value_keeps_later_colons() {
        assert_eq!(pairs("比例: 1:2"), owned(&[("比例", "1:2")]));
    }

    #[test]
    fn test_fullwidth_comment_pattern() {
        assert_eq!(
            pairs("鸡蛋（中等大小）2 个"),
            owned(&[("鸡蛋", "2 个 (中等大小)")])
        );
    }

    #[test]
    fn test_colon_pattern_wins_over_comment_pattern() {
        assert_eq!(
            pairs("油（可选）: 10ml"),
            owned(&[("油（可选）", "10ml")])
        );
    }

    #[test]
    fn test_whitespace_fallback() {
        assert_eq!(
            pairs("面粉 200 克\n- 酵母 3g"),
            owned(&[("面粉", "200 克"), ("酵母", "3g")])
        );
    }

    #[test]
    fn test_unmatched_lines_are_dropped() {
        assert!(parse_key_values("先把水烧开然后放入面条\n适量").is_empty());
        assert!(parse_key_values("").is_empty());
    }

    #[test]
    fn test_later_label_overwrites() {
        assert_eq!(
            pairs("糖: 10克\n盐: 5克\n糖: 15克"),
            owned(&[("糖", "15克"), ("盐", "5克")])
        );
    }
}
