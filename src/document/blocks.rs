//! Markdown block and inline formatting over plain lines.
//!
//! The document is a list of Markdown lines. Block kinds are recognised by
//! line prefix (`# `, `- `, `1. `, `- [ ] `, `> `), code blocks by fence
//! lines, dividers by `---`. All functions here are pure: they take lines and
//! a cursor and return new lines and a new cursor, so the document can apply
//! them as a single snapshot.

use crate::core::dispatch::{BlockMutation, TableShape};

/// Code fence line.
pub const CODE_FENCE: &str = "```";

/// Divider line.
pub const DIVIDER: &str = "---";

/// Block kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// Plain text.
    Paragraph,
    /// `#`..`######` heading.
    Heading(u8),
    /// `- ` or `* ` item.
    BulletList,
    /// `N. ` item.
    OrderedList,
    /// `- [ ] ` or `- [x] ` item.
    TaskList,
    /// `> ` quote.
    Blockquote,
    /// Line inside (or on) a fenced code block.
    CodeBlock,
    /// `---` divider.
    HorizontalRule,
    /// `| ... |` table row.
    TableRow,
}

/// Inline emphasis markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineMark {
    /// `**bold**`
    Bold,
    /// `*italic*`
    Italic,
}

impl InlineMark {
    /// Returns the Markdown delimiter.
    #[must_use]
    pub const fn delimiter(self) -> &'static str {
        match self {
            Self::Bold => "**",
            Self::Italic => "*",
        }
    }
}

/// Result of a pure block edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockEdit {
    /// All document lines after the edit.
    pub lines: Vec<String>,
    /// Cursor `(row, col)` after the edit, in characters.
    pub cursor: (usize, usize),
}

/// Converts a character column to a byte offset, clamped to the line end.
#[must_use]
pub fn char_to_byte(line: &str, col: usize) -> usize {
    line.char_indices().nth(col).map_or(line.len(), |(b, _)| b)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Splits a line into its block prefix and content.
///
/// Returns the kind implied by the prefix and the prefix length in bytes.
/// Fences and code context are not considered here; see [`block_kind_at`].
#[must_use]
pub fn split_prefix(line: &str) -> (BlockKind, usize) {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if (1..=6).contains(&hashes) && line[hashes..].starts_with(' ') {
        #[allow(clippy::cast_possible_truncation)] // at most 6
        return (BlockKind::Heading(hashes as u8), hashes + 1);
    }
    for task in ["- [ ] ", "- [x] ", "- [X] "] {
        if line.starts_with(task) {
            return (BlockKind::TaskList, task.len());
        }
    }
    if line.starts_with("- ") || line.starts_with("* ") {
        return (BlockKind::BulletList, 2);
    }
    let digits = line.bytes().take_while(u8::is_ascii_digit).count();
    if digits > 0 && line[digits..].starts_with(". ") {
        return (BlockKind::OrderedList, digits + 2);
    }
    if line.starts_with("> ") {
        return (BlockKind::Blockquote, 2);
    }
    if line == ">" {
        return (BlockKind::Blockquote, 1);
    }
    if line.trim_end() == DIVIDER {
        return (BlockKind::HorizontalRule, 0);
    }
    let trimmed = line.trim();
    if trimmed.len() >= 2 && trimmed.starts_with('|') && trimmed.ends_with('|') {
        return (BlockKind::TableRow, 0);
    }
    (BlockKind::Paragraph, 0)
}

fn is_fence(line: &str) -> bool {
    line.trim_start().starts_with(CODE_FENCE)
}

/// Returns the fence rows `(open, close)` enclosing `row`, if any.
///
/// A row that is itself a fence counts as part of its block.
#[must_use]
pub fn enclosing_fence(lines: &[String], row: usize) -> Option<(usize, usize)> {
    let mut open: Option<usize> = None;
    for (i, line) in lines.iter().enumerate() {
        if !is_fence(line) {
            continue;
        }
        match open {
            None => open = Some(i),
            Some(start) => {
                if (start..=i).contains(&row) {
                    return Some((start, i));
                }
                open = None;
            }
        }
        if i > row && open.is_none() {
            break;
        }
    }
    None
}

/// Returns the block kind at `row`, taking code fences into account.
#[must_use]
pub fn block_kind_at(lines: &[String], row: usize) -> BlockKind {
    if enclosing_fence(lines, row).is_some() {
        return BlockKind::CodeBlock;
    }
    lines
        .get(row)
        .map_or(BlockKind::Paragraph, |line| split_prefix(line).0)
}

/// Removes `[start_col, end_col)` from `row`.
#[must_use]
pub fn delete_span(lines: &[String], row: usize, start_col: usize, end_col: usize) -> Vec<String> {
    let mut out = lines.to_vec();
    if let Some(line) = out.get_mut(row) {
        let start = char_to_byte(line, start_col);
        let end = char_to_byte(line, end_col.max(start_col));
        line.replace_range(start..end, "");
    }
    out
}

/// Replaces the block prefix of `row`, keeping the cursor on the same content character.
fn set_prefix(mut lines: Vec<String>, row: usize, col: usize, prefix: &str) -> BlockEdit {
    let Some(line) = lines.get(row) else {
        return BlockEdit {
            lines,
            cursor: (row, col),
        };
    };
    let (_, old_prefix) = split_prefix(line);
    let old_prefix_chars = char_len(&line[..old_prefix]);
    let content = line[old_prefix..].to_string();
    let content_col = col.saturating_sub(old_prefix_chars);
    lines[row] = format!("{prefix}{content}");
    BlockEdit {
        lines,
        cursor: (row, char_len(prefix) + content_col.min(char_len(&content))),
    }
}

fn toggle_prefix(lines: Vec<String>, row: usize, col: usize, kind: BlockKind, prefix: &str) -> BlockEdit {
    let current = lines.get(row).map(|l| split_prefix(l).0);
    if current == Some(kind) {
        set_prefix(lines, row, col, "")
    } else {
        set_prefix(lines, row, col, prefix)
    }
}

fn heading_prefix(level: u8) -> String {
    format!("{} ", "#".repeat(usize::from(level.clamp(1, 6))))
}

fn toggle_code_block(mut lines: Vec<String>, row: usize, col: usize) -> BlockEdit {
    if let Some((open, close)) = enclosing_fence(&lines, row) {
        lines.remove(close);
        lines.remove(open);
        let new_row = row.saturating_sub(1).max(open).min(lines.len().saturating_sub(1));
        let new_col = if row == open || row == close { 0 } else { col };
        if lines.is_empty() {
            lines.push(String::new());
        }
        let max_col = char_len(&lines[new_row]);
        return BlockEdit {
            lines,
            cursor: (new_row, new_col.min(max_col)),
        };
    }
    let Some(line) = lines.get(row) else {
        return BlockEdit {
            lines,
            cursor: (row, col),
        };
    };
    let (_, prefix) = split_prefix(line);
    let prefix_chars = char_len(&line[..prefix]);
    let content = line[prefix..].to_string();
    let content_col = col.saturating_sub(prefix_chars).min(char_len(&content));
    lines.splice(
        row..=row,
        [CODE_FENCE.to_string(), content, CODE_FENCE.to_string()],
    );
    BlockEdit {
        lines,
        cursor: (row + 1, content_col),
    }
}

/// Splits `row` at `col` into the text before and after the cursor.
fn split_at_cursor(lines: &[String], row: usize, col: usize) -> (String, String) {
    let line = lines.get(row).map_or("", String::as_str);
    let at = char_to_byte(line, col);
    (line[..at].to_string(), line[at..].to_string())
}

/// Replaces `row` with `block`, keeping non-blank text before the cursor
/// above it and the text after the cursor on a new line below it.
///
/// Returns the edited lines and the row index where `block` starts.
fn insert_block(mut lines: Vec<String>, row: usize, col: usize, block: Vec<String>) -> (Vec<String>, usize) {
    let (before, after) = split_at_cursor(&lines, row, col);
    let mut replacement = Vec::with_capacity(block.len() + 2);
    let keep_before = !before.trim().is_empty();
    if keep_before {
        replacement.push(before);
    }
    replacement.extend(block);
    replacement.push(after);
    let block_row = if keep_before { row + 1 } else { row };
    if row < lines.len() {
        lines.splice(row..=row, replacement);
    } else {
        lines.extend(replacement);
    }
    (lines, block_row)
}

/// Builds the lines of an empty Markdown table.
#[must_use]
pub fn table_lines(shape: TableShape) -> Vec<String> {
    let cols = shape.cols.max(1);
    let rows = shape.rows.max(1);
    let empty_row = format!("{}|", "|     ".repeat(cols));
    let separator = format!("{}|", "| --- ".repeat(cols));
    let mut out = Vec::with_capacity(rows + 1);
    for i in 0..rows {
        out.push(empty_row.clone());
        if i == 0 && shape.header_row {
            out.push(separator.clone());
        }
    }
    out
}

/// Applies a block mutation to the line at `cursor`.
#[must_use]
pub fn apply_mutation(lines: &[String], cursor: (usize, usize), mutation: BlockMutation) -> BlockEdit {
    let (row, col) = cursor;
    let mut lines = lines.to_vec();
    if lines.is_empty() {
        lines.push(String::new());
    }
    let row = row.min(lines.len() - 1);

    match mutation {
        BlockMutation::SetHeading(level) => set_prefix(lines, row, col, &heading_prefix(level)),
        BlockMutation::ToggleBulletList => toggle_prefix(lines, row, col, BlockKind::BulletList, "- "),
        BlockMutation::ToggleOrderedList => {
            toggle_prefix(lines, row, col, BlockKind::OrderedList, "1. ")
        }
        BlockMutation::ToggleTaskList => toggle_prefix(lines, row, col, BlockKind::TaskList, "- [ ] "),
        BlockMutation::ToggleBlockquote => toggle_prefix(lines, row, col, BlockKind::Blockquote, "> "),
        BlockMutation::ToggleCodeBlock => toggle_code_block(lines, row, col),
        BlockMutation::InsertHorizontalRule => {
            let (mut lines, mut rule_row) = insert_block(lines, row, col, vec![DIVIDER.to_string()]);
            // `---` under a paragraph line is a setext heading underline.
            if rule_row > 0 && !lines[rule_row - 1].trim().is_empty() {
                lines.insert(rule_row, String::new());
                rule_row += 1;
            }
            BlockEdit {
                lines,
                cursor: (rule_row + 1, 0),
            }
        }
        BlockMutation::InsertTable(shape) => {
            let (lines, table_row) = insert_block(lines, row, col, table_lines(shape));
            BlockEdit {
                lines,
                cursor: (table_row, 2),
            }
        }
    }
}

/// Toggles a heading on the cursor line: same level removes it.
#[must_use]
pub fn toggle_heading(lines: &[String], cursor: (usize, usize), level: u8) -> BlockEdit {
    let row = cursor.0;
    let current = lines.get(row).map(|l| split_prefix(l).0);
    if current == Some(BlockKind::Heading(level)) {
        set_prefix(lines.to_vec(), row, cursor.1, "")
    } else {
        apply_mutation(lines, cursor, BlockMutation::SetHeading(level))
    }
}

/// Returns true if `mark` is open at `col` on `line`.
///
/// Counts delimiters before the cursor: `**` toggles bold, a lone `*`
/// toggles italic.
#[must_use]
pub fn mark_active(line: &str, col: usize, mark: InlineMark) -> bool {
    let before: Vec<char> = line.chars().take(col).collect();
    let (mut bold, mut italic) = (false, false);
    let mut i = 0;
    while i < before.len() {
        if before[i] == '*' {
            if before.get(i + 1) == Some(&'*') {
                bold = !bold;
                i += 2;
                continue;
            }
            italic = !italic;
        }
        i += 1;
    }
    match mark {
        InlineMark::Bold => bold,
        InlineMark::Italic => italic,
    }
}

/// Wraps `[start_col, end_col)` on `row` in `mark`, or inserts an empty
/// pair at `start_col` when the span is empty.
///
/// The cursor ends after the closing delimiter when text was wrapped, and
/// between the delimiters otherwise.
#[must_use]
pub fn wrap_mark(lines: &[String], row: usize, start_col: usize, end_col: usize, mark: InlineMark) -> BlockEdit {
    let mut lines = lines.to_vec();
    if lines.is_empty() {
        lines.push(String::new());
    }
    let row = row.min(lines.len() - 1);
    let delim = mark.delimiter();
    let delim_len = char_len(delim);
    let line = &lines[row];
    let (start_col, end_col) = (start_col.min(end_col), start_col.max(end_col));
    let start = char_to_byte(line, start_col);
    let end = char_to_byte(line, end_col);
    let inner = line[start..end].to_string();
    let new_line = format!("{}{delim}{inner}{delim}{}", &line[..start], &line[end..]);
    let cursor_col = if inner.is_empty() {
        start_col + delim_len
    } else {
        start_col + delim_len * 2 + char_len(&inner)
    };
    lines[row] = new_line;
    BlockEdit {
        lines,
        cursor: (row, cursor_col),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|s| (*s).to_string()).collect()
    }

    // =========================================================================
    // Prefix Recognition
    // =========================================================================

    mod prefixes {
        use super::*;

        #[test]
        fn recognises_block_prefixes() {
            assert_eq!(split_prefix("# Title"), (BlockKind::Heading(1), 2));
            assert_eq!(split_prefix("### Small"), (BlockKind::Heading(3), 4));
            assert_eq!(split_prefix("- item"), (BlockKind::BulletList, 2));
            assert_eq!(split_prefix("* item"), (BlockKind::BulletList, 2));
            assert_eq!(split_prefix("12. item"), (BlockKind::OrderedList, 4));
            assert_eq!(split_prefix("- [ ] todo"), (BlockKind::TaskList, 6));
            assert_eq!(split_prefix("- [x] done"), (BlockKind::TaskList, 6));
            assert_eq!(split_prefix("> quoted"), (BlockKind::Blockquote, 2));
            assert_eq!(split_prefix("---"), (BlockKind::HorizontalRule, 0));
            assert_eq!(split_prefix("| a | b |"), (BlockKind::TableRow, 0));
            assert_eq!(split_prefix("plain"), (BlockKind::Paragraph, 0));
        }

        #[test]
        fn hash_without_space_is_paragraph() {
            assert_eq!(split_prefix("#tag"), (BlockKind::Paragraph, 0));
            assert_eq!(split_prefix("####### seven"), (BlockKind::Paragraph, 0));
        }

        #[test]
        fn code_fence_context_wins() {
            let lines = doc(&["intro", "```", "# not a heading", "```", "after"]);
            assert_eq!(block_kind_at(&lines, 2), BlockKind::CodeBlock);
            assert_eq!(block_kind_at(&lines, 1), BlockKind::CodeBlock);
            assert_eq!(block_kind_at(&lines, 0), BlockKind::Paragraph);
            assert_eq!(block_kind_at(&lines, 4), BlockKind::Paragraph);
        }

        #[test]
        fn unclosed_fence_is_not_a_block() {
            let lines = doc(&["```", "code"]);
            assert_eq!(enclosing_fence(&lines, 1), None);
        }
    }

    // =========================================================================
    // Block Mutations
    // =========================================================================

    mod mutations {
        use super::*;

        #[test]
        fn set_heading_on_empty_line() {
            let edit = apply_mutation(&doc(&[""]), (0, 0), BlockMutation::SetHeading(2));
            assert_eq!(edit.lines, doc(&["## "]));
            assert_eq!(edit.cursor, (0, 3));
        }

        #[test]
        fn set_heading_replaces_existing_prefix() {
            let edit = apply_mutation(&doc(&["- Shopping"]), (0, 10), BlockMutation::SetHeading(1));
            assert_eq!(edit.lines, doc(&["# Shopping"]));
            assert_eq!(edit.cursor, (0, 10));
        }

        #[test]
        fn set_heading_same_level_keeps_heading() {
            let edit = apply_mutation(&doc(&["# Title"]), (0, 7), BlockMutation::SetHeading(1));
            assert_eq!(edit.lines, doc(&["# Title"]));
        }

        #[test]
        fn bullet_toggle_adds_and_removes() {
            let on = apply_mutation(&doc(&["milk"]), (0, 0), BlockMutation::ToggleBulletList);
            assert_eq!(on.lines, doc(&["- milk"]));
            assert_eq!(on.cursor, (0, 2));
            let off = apply_mutation(&on.lines, on.cursor, BlockMutation::ToggleBulletList);
            assert_eq!(off.lines, doc(&["milk"]));
            assert_eq!(off.cursor, (0, 0));
        }

        #[test]
        fn ordered_and_task_lists() {
            let ordered = apply_mutation(&doc(&["step"]), (0, 4), BlockMutation::ToggleOrderedList);
            assert_eq!(ordered.lines, doc(&["1. step"]));
            let task = apply_mutation(&ordered.lines, (0, 7), BlockMutation::ToggleTaskList);
            assert_eq!(task.lines, doc(&["- [ ] step"]));
            assert_eq!(task.cursor, (0, 10));
        }

        #[test]
        fn blockquote_toggle() {
            let edit = apply_mutation(&doc(&["wise words"]), (0, 0), BlockMutation::ToggleBlockquote);
            assert_eq!(edit.lines, doc(&["> wise words"]));
        }

        #[test]
        fn code_block_wraps_line() {
            let edit = apply_mutation(&doc(&["a", "let x = 1;", "b"]), (1, 3), BlockMutation::ToggleCodeBlock);
            assert_eq!(edit.lines, doc(&["a", "```", "let x = 1;", "```", "b"]));
            assert_eq!(edit.cursor, (2, 3));
        }

        #[test]
        fn code_block_unwraps_when_inside() {
            let edit = apply_mutation(&doc(&["```", "code", "```"]), (1, 2), BlockMutation::ToggleCodeBlock);
            assert_eq!(edit.lines, doc(&["code"]));
            assert_eq!(edit.cursor, (0, 2));
        }

        #[test]
        fn divider_on_empty_line() {
            let edit = apply_mutation(&doc(&["above", ""]), (1, 0), BlockMutation::InsertHorizontalRule);
            assert_eq!(edit.lines, doc(&["above", "", "---", ""]));
            assert_eq!(edit.cursor, (3, 0));
        }

        #[test]
        fn divider_after_blank_line_adds_no_spacing() {
            let edit = apply_mutation(&doc(&["above", "", ""]), (2, 0), BlockMutation::InsertHorizontalRule);
            assert_eq!(edit.lines, doc(&["above", "", "---", ""]));
            assert_eq!(edit.cursor, (3, 0));
        }

        #[test]
        fn divider_after_paragraph_text_stays_a_rule() {
            let edit = apply_mutation(&doc(&["Shopping "]), (0, 9), BlockMutation::InsertHorizontalRule);
            assert_eq!(edit.lines, doc(&["Shopping ", "", "---", ""]));
            assert_eq!(block_kind_at(&edit.lines, 2), BlockKind::HorizontalRule);
            assert_eq!(block_kind_at(&edit.lines, 0), BlockKind::Paragraph);
        }

        #[test]
        fn divider_keeps_text_around_cursor() {
            let edit = apply_mutation(&doc(&["one two"]), (0, 4), BlockMutation::InsertHorizontalRule);
            assert_eq!(edit.lines, doc(&["one ", "", "---", "two"]));
            assert_eq!(edit.cursor, (3, 0));
        }

        #[test]
        fn default_table_has_header_and_two_rows() {
            let edit = apply_mutation(&doc(&[""]), (0, 0), BlockMutation::InsertTable(TableShape::default()));
            assert_eq!(
                edit.lines,
                doc(&[
                    "|     |     |     |",
                    "| --- | --- | --- |",
                    "|     |     |     |",
                    "|     |     |     |",
                    "",
                ])
            );
            assert_eq!(edit.cursor, (0, 2));
        }

        #[test]
        fn table_without_header_has_no_separator() {
            let shape = TableShape {
                rows: 2,
                cols: 1,
                header_row: false,
            };
            assert_eq!(table_lines(shape), doc(&["|     |", "|     |"]));
        }

        #[test]
        fn mutation_on_empty_document_creates_line() {
            let edit = apply_mutation(&[], (0, 0), BlockMutation::ToggleBlockquote);
            assert_eq!(edit.lines, doc(&["> "]));
        }

        #[test]
        fn toggle_heading_removes_same_level() {
            let edit = toggle_heading(&doc(&["## Title"]), (0, 8), 2);
            assert_eq!(edit.lines, doc(&["Title"]));
            assert_eq!(edit.cursor, (0, 5));
            let other = toggle_heading(&doc(&["## Title"]), (0, 8), 1);
            assert_eq!(other.lines, doc(&["# Title"]));
        }
    }

    // =========================================================================
    // Inline Marks
    // =========================================================================

    mod inline {
        use super::*;

        #[test]
        fn wrap_selection_in_bold() {
            let edit = wrap_mark(&doc(&["make this loud"]), 0, 10, 14, InlineMark::Bold);
            assert_eq!(edit.lines, doc(&["make this **loud**"]));
            assert_eq!(edit.cursor, (0, 18));
        }

        #[test]
        fn empty_span_inserts_pair() {
            let edit = wrap_mark(&doc(&["x "]), 0, 2, 2, InlineMark::Italic);
            assert_eq!(edit.lines, doc(&["x **"]));
            assert_eq!(edit.cursor, (0, 3));
        }

        #[test]
        fn reversed_span_is_normalised() {
            let edit = wrap_mark(&doc(&["abc"]), 0, 3, 0, InlineMark::Italic);
            assert_eq!(edit.lines, doc(&["*abc*"]));
        }

        #[test]
        fn detects_open_marks() {
            let line = "a **bold *both";
            assert!(mark_active(line, 9, InlineMark::Bold));
            assert!(!mark_active(line, 9, InlineMark::Italic));
            assert!(mark_active(line, 14, InlineMark::Italic));
            assert!(!mark_active("**done** x", 10, InlineMark::Bold));
        }
    }

    #[test]
    fn delete_span_uses_char_columns() {
        let lines = doc(&["日本 /head rest"]);
        assert_eq!(delete_span(&lines, 0, 3, 8), doc(&["日本  rest"]));
    }

    #[test]
    fn char_to_byte_clamps() {
        assert_eq!(char_to_byte("ab", 10), 2);
        assert_eq!(char_to_byte("über", 1), 2);
    }
}
