// Common test utilities for bounds and session testing

use vedit::buffer::Buffer;
use vedit::editor::Editor;
use vedit::key::Key;
use vedit::motion::{Motion, Position};

#[allow(dead_code)]
pub const ALL_MOTIONS: [Motion; 8] = [
    Motion::Left,
    Motion::Right,
    Motion::Up,
    Motion::Down,
    Motion::LineStart,
    Motion::LineEnd,
    Motion::WordForward,
    Motion::WordBackward,
];

/// Utilities for creating test buffers with specific characteristics
pub mod boundary {
    use super::*;

    /// Create a buffer with n lines of varying lengths
    /// Line i has (i % 10) + 1 characters
    #[allow(dead_code)]
    pub fn create_multiline_buffer(line_count: usize) -> Buffer {
        Buffer::from_lines((0..line_count).map(|i| "a".repeat(i % 10 + 1)))
    }

    /// Create editor with specific buffer state, cursor at the top
    #[allow(dead_code)]
    pub fn create_editor_with_text(text: &str) -> Editor {
        Editor::with_buffer(Buffer::from_lines(text.split('\n')))
    }

    /// Get all boundary positions for a buffer
    /// Returns positions at: start, last char and one past the end of each line
    #[allow(dead_code)]
    pub fn get_boundary_positions(buffer: &Buffer) -> Vec<(usize, usize)> {
        let mut positions = Vec::new();

        for line in 0..buffer.line_count() {
            let line_len = buffer.line_len(line);
            positions.push((line, 0));
            if line_len > 0 {
                positions.push((line, line_len - 1));
            }
            positions.push((line, line_len));
        }

        positions
    }
}

/// Validation utilities for checking invariants
pub mod validation {
    use super::*;

    /// Check if a position is valid for the given buffer
    #[allow(dead_code)]
    pub fn is_valid_position(buffer: &Buffer, pos: Position) -> bool {
        if pos.line >= buffer.line_count() {
            return false;
        }
        // Column may sit one past the last char
        pos.col <= buffer.line_len(pos.line)
    }

    /// Assert cursor is in valid position
    #[allow(dead_code)]
    pub fn assert_cursor_valid(editor: &Editor) {
        let cursor = editor.cursor();
        assert!(
            cursor.line() < editor.buffer().line_count(),
            "Cursor line {} out of bounds (line_count: {})",
            cursor.line(),
            editor.buffer().line_count()
        );
        assert!(
            cursor.col() <= editor.buffer().line_len(cursor.line()),
            "Cursor col {} out of bounds for line {} (line_len: {})",
            cursor.col(),
            cursor.line(),
            editor.buffer().line_len(cursor.line())
        );
    }

    /// Assert buffer invariants (line count >= 1, every line reachable)
    #[allow(dead_code)]
    pub fn assert_buffer_invariants(buffer: &Buffer) {
        assert!(buffer.line_count() >= 1, "Buffer must have at least 1 line");
        for line in 0..buffer.line_count() {
            assert!(buffer.line(line).is_some(), "Line {} not accessible", line);
        }
    }
}

/// Utilities for driving a session through keys
pub mod stress {
    use super::*;

    /// Feed every char of `keys` as a plain key press
    #[allow(dead_code)]
    pub fn type_keys(editor: &mut Editor, keys: &str) {
        for c in keys.chars() {
            editor.handle_key(Key::Char(c));
        }
    }

    /// Apply every motion in sequence, checking the cursor after each
    #[allow(dead_code)]
    pub fn test_all_movements(editor: &mut Editor) {
        for motion in ALL_MOTIONS {
            editor.move_cursor(motion);
            validation::assert_cursor_valid(editor);
        }
    }
}
