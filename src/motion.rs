// src/motion.rs - Cursor motions over the buffer

use crate::buffer::Buffer;
use crate::cursor::Cursor;

/// A position in the buffer (line, column)
///
/// Unlike [`Cursor`], a `Position` is not tied to any buffer and may be out
/// of range; it is what selections and search results are expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Cursor motions available to the key dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    LineStart,
    LineEnd,
    WordForward,
    WordBackward,
}

impl Motion {
    pub fn apply(self, buffer: &Buffer, cursor: Cursor) -> Cursor {
        match self {
            Motion::Left => left(buffer, cursor),
            Motion::Right => right(buffer, cursor),
            Motion::Up => up(buffer, cursor),
            Motion::Down => down(buffer, cursor),
            Motion::LineStart => line_start(buffer, cursor),
            Motion::LineEnd => line_end(buffer, cursor),
            Motion::WordForward => word_forward(buffer, cursor),
            Motion::WordBackward => word_backward(buffer, cursor),
        }
    }
}

/// Move up one line, clamping the column to the target line.
pub fn up(buffer: &Buffer, cursor: Cursor) -> Cursor {
    if cursor.line() == 0 {
        return cursor;
    }
    Cursor::at(buffer, cursor.line() - 1, cursor.col())
}

/// Move down one line, clamping the column to the target line.
pub fn down(buffer: &Buffer, cursor: Cursor) -> Cursor {
    if cursor.line() + 1 >= buffer.line_count() {
        return cursor;
    }
    Cursor::at(buffer, cursor.line() + 1, cursor.col())
}

/// Move left, wrapping to the end of the previous line at column 0.
pub fn left(buffer: &Buffer, cursor: Cursor) -> Cursor {
    if cursor.col() > 0 {
        Cursor::at(buffer, cursor.line(), cursor.col() - 1)
    } else if cursor.line() > 0 {
        let line = cursor.line() - 1;
        Cursor::at(buffer, line, buffer.line_len(line))
    } else {
        cursor
    }
}

/// Move right, wrapping to the start of the next line at end of line.
pub fn right(buffer: &Buffer, cursor: Cursor) -> Cursor {
    if cursor.col() < buffer.line_len(cursor.line()) {
        Cursor::at(buffer, cursor.line(), cursor.col() + 1)
    } else if cursor.line() + 1 < buffer.line_count() {
        Cursor::at(buffer, cursor.line() + 1, 0)
    } else {
        cursor
    }
}

/// Move to start of line (`0`)
pub fn line_start(buffer: &Buffer, cursor: Cursor) -> Cursor {
    Cursor::at(buffer, cursor.line(), 0)
}

/// Move past the last character of the line (`$`)
pub fn line_end(buffer: &Buffer, cursor: Cursor) -> Cursor {
    Cursor::at(buffer, cursor.line(), buffer.line_len(cursor.line()))
}

/// Move forward by one word (`w`)
///
/// Skips the alphanumeric run under the cursor, then any whitespace after
/// it. Never leaves the current line.
pub fn word_forward(buffer: &Buffer, cursor: Cursor) -> Cursor {
    let chars: Vec<char> = buffer.line(cursor.line()).unwrap_or("").chars().collect();
    let mut col = cursor.col();

    while col < chars.len() && chars[col].is_alphanumeric() {
        col += 1;
    }
    while col < chars.len() && chars[col].is_whitespace() {
        col += 1;
    }

    Cursor::at(buffer, cursor.line(), col)
}

/// Move backward by one word (`b`)
///
/// Skips whitespace immediately before the cursor, then the alphanumeric run
/// before that, stopping at the start of that word.
pub fn word_backward(buffer: &Buffer, cursor: Cursor) -> Cursor {
    let chars: Vec<char> = buffer.line(cursor.line()).unwrap_or("").chars().collect();
    let mut col = cursor.col().min(chars.len());

    while col > 0 && chars[col - 1].is_whitespace() {
        col -= 1;
    }
    while col > 0 && chars[col - 1].is_alphanumeric() {
        col -= 1;
    }

    Cursor::at(buffer, cursor.line(), col)
}
