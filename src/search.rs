// src/search.rs - Plain substring search and replace over buffer lines

use crate::motion::Position;

/// Byte offset of the `col`-th character, or the line length when `col` is past the end.
pub fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map(|(idx, _)| idx)
        .unwrap_or(line.len())
}

/// Character column of a byte offset that lies on a char boundary.
pub fn char_column(line: &str, byte: usize) -> usize {
    line[..byte].chars().count()
}

/// Find the first occurrence of `pattern`, scanning lines in document order.
///
/// Empty patterns never match.
pub fn find_first<S: AsRef<str>>(lines: &[S], pattern: &str) -> Option<Position> {
    if pattern.is_empty() {
        return None;
    }
    lines.iter().enumerate().find_map(|(idx, line)| {
        let line = line.as_ref();
        line.find(pattern)
            .map(|byte| Position::new(idx, char_column(line, byte)))
    })
}

/// Find the first occurrence strictly after `after`, wrapping around to the
/// start of the document. A match at `after` itself is only returned when it
/// is the only one.
pub fn find_after<S: AsRef<str>>(lines: &[S], pattern: &str, after: Position) -> Option<Position> {
    if pattern.is_empty() || lines.is_empty() {
        return None;
    }
    let start_line = after.line.min(lines.len() - 1);

    // Rest of the starting line
    let line = lines[start_line].as_ref();
    let from = byte_offset(line, after.col + 1);
    if from < line.len()
        && let Some(byte) = line[from..].find(pattern)
    {
        return Some(Position::new(start_line, char_column(line, from + byte)));
    }

    // Following lines, then wrap
    let order = (start_line + 1..lines.len()).chain(0..=start_line);
    for idx in order {
        let line = lines[idx].as_ref();
        if let Some(byte) = line.find(pattern) {
            return Some(Position::new(idx, char_column(line, byte)));
        }
    }
    None
}

/// Replace the first (or, with `global`, every non-overlapping) occurrence of
/// `old` in `line`. Returns how many replacements were made.
///
/// The scan resumes after the inserted text, so a `new` containing `old`
/// cannot loop forever.
pub fn replace_in_line(line: &mut String, old: &str, new: &str, global: bool) -> usize {
    if old.is_empty() {
        return 0;
    }
    let mut count = 0;
    let mut pos = 0;
    while let Some(found) = line[pos..].find(old) {
        let at = pos + found;
        line.replace_range(at..at + old.len(), new);
        pos = at + new.len();
        count += 1;
        if !global {
            break;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_first_in_document_order() {
        let lines = ["alpha", "beta gamma", "gamma"];
        assert_eq!(find_first(&lines, "gamma"), Some(Position::new(1, 5)));
        assert_eq!(find_first(&lines, "delta"), None);
        assert_eq!(find_first(&lines, ""), None);
    }

    #[test]
    fn test_find_first_reports_char_columns() {
        let lines = ["héllo wörld"];
        assert_eq!(find_first(&lines, "wörld"), Some(Position::new(0, 6)));
    }

    #[test]
    fn test_find_after_skips_current_match_and_wraps() {
        let lines = ["foo bar foo", "foo"];
        assert_eq!(
            find_after(&lines, "foo", Position::new(0, 0)),
            Some(Position::new(0, 8))
        );
        assert_eq!(
            find_after(&lines, "foo", Position::new(0, 8)),
            Some(Position::new(1, 0))
        );
        assert_eq!(
            find_after(&lines, "foo", Position::new(1, 0)),
            Some(Position::new(0, 0))
        );
    }

    #[test]
    fn test_find_after_single_match_returns_itself() {
        let lines = ["only one here"];
        assert_eq!(
            find_after(&lines, "one", Position::new(0, 5)),
            Some(Position::new(0, 5))
        );
    }

    #[test]
    fn test_replace_global_and_first() {
        let mut line = String::from("aaa");
        assert_eq!(replace_in_line(&mut line, "a", "bb", true), 3);
        assert_eq!(line, "bbbbbb");

        let mut line = String::from("aaa");
        assert_eq!(replace_in_line(&mut line, "a", "bb", false), 1);
        assert_eq!(line, "bbaa");
    }

    #[test]
    fn test_replace_with_superset_terminates() {
        let mut line = String::from("ab ab");
        assert_eq!(replace_in_line(&mut line, "ab", "abab", true), 2);
        assert_eq!(line, "abab abab");
    }

    #[test]
    fn test_replace_empty_old_is_noop() {
        let mut line = String::from("abc");
        assert_eq!(replace_in_line(&mut line, "", "x", true), 0);
        assert_eq!(line, "abc");
    }

    #[test]
    fn test_byte_offset_clamps() {
        assert_eq!(byte_offset("héllo", 2), 3);
        assert_eq!(byte_offset("abc", 10), 3);
    }
}
