use crate::motion::Position;
use crate::search;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No file name")]
    NoFileName,
}

/// Granularity of [`Buffer::delete_at`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteUnit {
    /// The character before the column, joining lines at column 0
    Character,
    /// From the column up to the next blank
    Word,
    /// The whole line
    Line,
}

/// Line-oriented text buffer.
///
/// `lines` is never empty: an empty document is a single empty line.
/// Columns are counted in chars, not bytes.
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: Vec<String>,
    source_path: Option<PathBuf>,
    clipboard: String,
    modified: bool,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            source_path: None,
            clipboard: String::new(),
            modified: false,
        }
    }

    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut buffer = Self::new();
        buffer.lines = lines.into_iter().map(Into::into).collect();
        buffer.ensure_not_empty();
        buffer
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn line(&self, line_idx: usize) -> Option<&str> {
        self.lines.get(line_idx).map(String::as_str)
    }

    /// Length of a line in chars, 0 for lines that do not exist.
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.lines
            .get(line_idx)
            .map(|line| line.chars().count())
            .unwrap_or(0)
    }

    pub fn source_path(&self) -> Option<&Path> {
        self.source_path.as_deref()
    }

    /// Associate a file without reading it, so a later save without a path
    /// creates it.
    pub fn set_source_path<P: Into<PathBuf>>(&mut self, path: P) {
        self.source_path = Some(path.into());
    }

    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    fn ensure_not_empty(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
    }

    fn touch(&mut self) {
        self.modified = true;
        self.ensure_not_empty();
    }

    /// Reset to a single empty line with no associated file.
    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.source_path = None;
        self.modified = false;
    }

    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<(), BufferError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;

        self.lines = content.lines().map(str::to_string).collect();
        self.ensure_not_empty();
        self.source_path = Some(path.to_path_buf());
        self.modified = false;
        log::info!("loaded {} lines from {}", self.lines.len(), path.display());
        Ok(())
    }

    /// Write every line followed by `\n` to `path`, or to the associated file
    /// when `path` is `None`. Returns the path written to.
    pub fn save(&mut self, path: Option<&Path>) -> Result<PathBuf, BufferError> {
        let target = match path {
            Some(path) => path.to_path_buf(),
            None => self
                .source_path
                .clone()
                .filter(|path| !path.as_os_str().is_empty())
                .ok_or(BufferError::NoFileName)?,
        };

        let mut content = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            content.push_str(line);
            content.push('\n');
        }
        fs::write(&target, content)?;

        self.source_path = Some(target.clone());
        self.modified = false;
        log::info!("wrote {} lines to {}", self.lines.len(), target.display());
        Ok(target)
    }

    /// Insert `text` at `pos` and return the position just after it.
    ///
    /// Empty `text` splits the line at `pos`. A line index past the end
    /// appends a new empty line and inserts there.
    pub fn insert_at(&mut self, pos: Position, text: &str) -> Position {
        let line = if pos.line >= self.lines.len() {
            self.lines.push(String::new());
            self.lines.len() - 1
        } else {
            pos.line
        };
        let col = pos.col.min(self.line_len(line));
        let split_at = search::byte_offset(&self.lines[line], col);
        let tail = self.lines[line].split_off(split_at);
        self.modified = true;

        if text.is_empty() {
            self.lines.insert(line + 1, tail);
            return Position::new(line + 1, 0);
        }

        let mut segments = text.split('\n');
        // split always yields at least one segment
        let first = segments.next().unwrap_or_default();
        self.lines[line].push_str(first);

        let mut end = Position::new(line, col + first.chars().count());
        for segment in segments {
            end = Position::new(end.line + 1, segment.chars().count());
            self.lines.insert(end.line, segment.to_string());
        }
        self.lines[end.line].push_str(&tail);
        end
    }

    /// Delete at `pos` and return where the cursor ends up.
    pub fn delete_at(&mut self, pos: Position, unit: DeleteUnit) -> Position {
        if pos.line >= self.lines.len() {
            return self.clamp(pos);
        }
        let line = pos.line;
        let col = pos.col.min(self.line_len(line));

        match unit {
            DeleteUnit::Character => {
                if col > 0 {
                    let text = &mut self.lines[line];
                    let start = search::byte_offset(text, col - 1);
                    let end = search::byte_offset(text, col);
                    text.replace_range(start..end, "");
                    self.touch();
                    Position::new(line, col - 1)
                } else if line > 0 {
                    let current = self.lines.remove(line);
                    let join_col = self.line_len(line - 1);
                    self.lines[line - 1].push_str(&current);
                    self.touch();
                    Position::new(line - 1, join_col)
                } else {
                    Position::new(0, 0)
                }
            }
            DeleteUnit::Word => {
                let text = &mut self.lines[line];
                let start = search::byte_offset(text, col);
                let end = text[start..]
                    .find([' ', '\t'])
                    .map(|offset| start + offset)
                    .unwrap_or(text.len());
                if end > start {
                    text.replace_range(start..end, "");
                    self.touch();
                }
                Position::new(line, col)
            }
            DeleteUnit::Line => {
                self.lines.remove(line);
                self.touch();
                self.clamp(Position::new(line, col))
            }
        }
    }

    /// Copy the whole line into the clipboard.
    pub fn copy_line(&mut self, line_idx: usize) -> Option<&str> {
        let text = self.lines.get(line_idx)?.clone();
        self.clipboard = text;
        Some(&self.clipboard)
    }

    /// Insert the clipboard at `pos`. A no-op when the clipboard is empty.
    pub fn paste_at(&mut self, pos: Position) -> Position {
        if self.clipboard.is_empty() {
            return self.clamp(pos);
        }
        let text = self.clipboard.clone();
        self.insert_at(pos, &text)
    }

    pub fn update_line(&mut self, line_idx: usize, text: &str) {
        if let Some(line) = self.lines.get_mut(line_idx) {
            *line = text.to_string();
            self.modified = true;
        }
    }

    pub fn remove_line(&mut self, line_idx: usize) {
        if line_idx < self.lines.len() {
            self.lines.remove(line_idx);
            self.touch();
        }
    }

    /// Insert a new line before `line_idx`; `line_idx == line_count` appends.
    pub fn insert_line(&mut self, line_idx: usize, text: &str) {
        if line_idx <= self.lines.len() {
            self.lines.insert(line_idx, text.to_string());
            self.modified = true;
        }
    }

    pub fn search(&self, pattern: &str) -> Option<Position> {
        search::find_first(&self.lines, pattern)
    }

    /// Next match strictly after `after`, wrapping around the buffer.
    pub fn search_from(&self, pattern: &str, after: Position) -> Option<Position> {
        search::find_after(&self.lines, pattern, after)
    }

    /// Replace `old` with `new` on every line; only the first occurrence per
    /// line unless `global`. Returns the total number of replacements.
    pub fn replace(&mut self, old: &str, new: &str, global: bool) -> usize {
        let count: usize = self
            .lines
            .iter_mut()
            .map(|line| search::replace_in_line(line, old, new, global))
            .sum();
        if count > 0 {
            self.modified = true;
        }
        count
    }

    fn clamp(&self, pos: Position) -> Position {
        let line = pos.line.min(self.lines.len() - 1);
        Position::new(line, pos.col.min(self.line_len(line)))
    }
}
