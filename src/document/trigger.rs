//! Trigger detection.
//!
//! Finds the trigger character (by default `/`) that opens the command menu.
//! The trigger must sit at a word boundary, that is at line start or after
//! whitespace, and the query is everything between it and the cursor.

use crate::core::dispatch::TriggerRange;

/// A live trigger under the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerToken {
    /// Text typed after the trigger, up to the cursor.
    pub query: String,
    /// Trigger-to-cursor span.
    pub range: TriggerRange,
}

/// Detects a trigger token ending at the cursor.
///
/// Scans left from the cursor to the nearest whitespace or line start. The
/// first character of that word must be `trigger` and must itself be at a
/// word boundary. Text to the right of the cursor is not part of the query.
///
/// Given `"some /cmd"` with the cursor after `cmd`, returns query `"cmd"`
/// with `start_col: 5, end_col: 9`.
#[must_use]
pub fn detect_trigger(
    lines: &[String],
    cursor_row: usize,
    cursor_col: usize,
    trigger: char,
) -> Option<TriggerToken> {
    let line = lines.get(cursor_row)?;
    let chars: Vec<char> = line.chars().collect();
    let cursor = cursor_col.min(chars.len());

    let mut left = cursor;
    while left > 0 && !chars[left - 1].is_whitespace() {
        left -= 1;
    }
    if left == cursor || chars[left] != trigger {
        return None;
    }

    Some(TriggerToken {
        query: chars[left + 1..cursor].iter().collect(),
        range: TriggerRange {
            row: cursor_row,
            start_col: left,
            end_col: cursor,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &str) -> Vec<String> {
        text.split('\n').map(String::from).collect()
    }

    fn query(text: &str, row: usize, col: usize) -> Option<String> {
        detect_trigger(&lines(text), row, col, '/').map(|t| t.query)
    }

    #[test]
    fn bare_trigger_opens_with_empty_query() {
        let token = detect_trigger(&lines("/"), 0, 1, '/');
        assert_eq!(
            token,
            Some(TriggerToken {
                query: String::new(),
                range: TriggerRange {
                    row: 0,
                    start_col: 0,
                    end_col: 1,
                },
            })
        );
    }

    #[test]
    fn query_runs_to_cursor() {
        assert_eq!(query("/head", 0, 5), Some("head".to_string()));
        assert_eq!(query("/heading", 0, 3), Some("he".to_string()));
    }

    #[test]
    fn trigger_after_space_is_valid() {
        let token = detect_trigger(&lines("some /cmd"), 0, 9, '/');
        assert_eq!(
            token.map(|t| t.range),
            Some(TriggerRange {
                row: 0,
                start_col: 5,
                end_col: 9,
            })
        );
    }

    #[test]
    fn trigger_inside_word_is_ignored() {
        assert_eq!(query("and/or", 0, 6), None);
        assert_eq!(query("https://x", 0, 9), None);
    }

    #[test]
    fn space_after_query_ends_trigger() {
        assert_eq!(query("/head ", 0, 6), None);
    }

    #[test]
    fn cursor_before_trigger_is_none() {
        assert_eq!(query("/head", 0, 0), None);
    }

    #[test]
    fn other_rows_are_scanned() {
        assert_eq!(query("first\n  /q", 1, 4), Some("q".to_string()));
        assert_eq!(query("first", 3, 0), None);
    }

    #[test]
    fn unicode_columns_are_characters() {
        let token = detect_trigger(&lines("日本 /表"), 0, 4, '/');
        assert_eq!(token.as_ref().map(|t| t.query.as_str()), Some("表"));
        assert_eq!(token.map(|t| t.range.start_col), Some(3));
    }

    #[test]
    fn custom_trigger_char() {
        let token = detect_trigger(&lines("!list"), 0, 5, '!');
        assert_eq!(token.map(|t| t.query), Some("list".to_string()));
        assert_eq!(query("!list", 0, 5), None);
    }
}
