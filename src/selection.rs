// src/selection.rs - Visual-mode selection ranges

use crate::mode::Mode;
use crate::motion::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    Character,
    Line,
    Block,
}

impl SelectionKind {
    pub fn for_mode(mode: Mode) -> Option<Self> {
        match mode {
            Mode::VisualChar => Some(SelectionKind::Character),
            Mode::VisualLine => Some(SelectionKind::Line),
            Mode::VisualBlock => Some(SelectionKind::Block),
            _ => None,
        }
    }
}

/// A visual selection between the anchor and the live cursor.
///
/// This is a plain value recomputed from the editor state on demand; it does
/// not outlive the visual mode it was built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Position,
    pub cursor: Position,
    pub kind: SelectionKind,
}

impl Selection {
    pub fn new(anchor: Position, cursor: Position, kind: SelectionKind) -> Self {
        Self {
            anchor,
            cursor,
            kind,
        }
    }

    /// Earlier of anchor and cursor
    pub fn start(&self) -> Position {
        self.anchor.min(self.cursor)
    }

    /// Later of anchor and cursor
    pub fn end(&self) -> Position {
        self.anchor.max(self.cursor)
    }

    pub fn line_range(&self) -> std::ops::RangeInclusive<usize> {
        self.start().line..=self.end().line
    }

    /// Whether the character cell at `pos` is highlighted.
    pub fn contains(&self, pos: Position) -> bool {
        match self.kind {
            SelectionKind::Character => self.start() <= pos && pos <= self.end(),
            SelectionKind::Line => self.line_range().contains(&pos.line),
            SelectionKind::Block => {
                let (left, right) = if self.anchor.col <= self.cursor.col {
                    (self.anchor.col, self.cursor.col)
                } else {
                    (self.cursor.col, self.anchor.col)
                };
                self.line_range().contains(&pos.line) && (left..=right).contains(&pos.col)
            }
        }
    }
}
