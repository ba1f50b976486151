use crate::buffer::Buffer;
use crate::motion::Position;

/// The active edit position.
///
/// Fields are private: every way of producing a `Cursor` goes through
/// [`Cursor::at`] or [`Cursor::clamped`], so `line < line_count` and
/// `col <= line_len(line)` always hold for the buffer it was built against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    line: usize,
    col: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Build a cursor at `(line, col)`, clamped into `buffer`.
    pub fn at(buffer: &Buffer, line: usize, col: usize) -> Self {
        let line = line.min(buffer.line_count() - 1);
        let col = col.min(buffer.line_len(line));
        Self { line, col }
    }

    /// Re-clamp after a mutation that may have shrunk or removed the line.
    pub fn clamped(self, buffer: &Buffer) -> Self {
        Self::at(buffer, self.line, self.col)
    }

    pub fn from_position(buffer: &Buffer, pos: Position) -> Self {
        Self::at(buffer, pos.line, pos.col)
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> Position {
        Position::new(self.line, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new();
        assert_eq!(cursor.line(), 0);
        assert_eq!(cursor.col(), 0);
    }

    #[test]
    fn test_cursor_at_clamps_line_and_col() {
        let buffer = Buffer::from_lines(["abc", "de"]);
        let cursor = Cursor::at(&buffer, 9, 9);
        assert_eq!(cursor.position(), Position::new(1, 2));

        let cursor = Cursor::at(&buffer, 0, 3);
        assert_eq!(cursor.position(), Position::new(0, 3));
    }

    #[test]
    fn test_clamped_after_shrink() {
        let mut buffer = Buffer::from_lines(["hello", "world"]);
        let cursor = Cursor::at(&buffer, 1, 5);
        buffer.remove_line(1);
        assert_eq!(cursor.clamped(&buffer).position(), Position::new(0, 5));
        buffer.update_line(0, "hi");
        assert_eq!(cursor.clamped(&buffer).position(), Position::new(0, 2));
    }

    proptest! {
        #[test]
        fn cursor_invariants(line in 0..1000usize, col in 0..1000usize) {
            let buffer = Buffer::from_lines(["one", "", "three"]);
            let cursor = Cursor::at(&buffer, line, col);
            prop_assert!(cursor.line() < buffer.line_count());
            prop_assert!(cursor.col() <= buffer.line_len(cursor.line()));
        }
    }
}
