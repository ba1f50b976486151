// src/editor.rs - Editing session: buffer, cursor, mode and key dispatch

use crate::buffer::{Buffer, BufferError, DeleteUnit};
use crate::command::{Command, CommandError};
use crate::config::EditorConfig;
use crate::cursor::Cursor;
use crate::key::Key;
use crate::keymap::{self, Action, Transition};
use crate::mode::Mode;
use crate::motion::{Motion, Position};
use crate::selection::{Selection, SelectionKind};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Buffer(#[from] BufferError),
    #[error(transparent)]
    Command(#[from] CommandError),
}

/// Signal returned to the session loop after each key or command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// The user asked to end the session; the owner of the loop decides how
    Quit,
}

pub struct Editor {
    buffer: Buffer,
    cursor: Cursor,
    mode: Mode,
    // Only set while a visual mode is active
    visual_anchor: Option<Position>,
    command_line: String,
    status_message: Option<String>,
    last_search: Option<String>,
    config: EditorConfig,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: Cursor::new(),
            mode: Mode::Normal,
            visual_anchor: None,
            command_line: String::new(),
            status_message: None,
            last_search: None,
            config,
        }
    }

    /// Start a session on an existing buffer, cursor at the top.
    pub fn with_buffer(buffer: Buffer) -> Self {
        Self {
            buffer,
            ..Self::new()
        }
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Text typed in Command mode, including its `:` or `/` marker
    pub fn command_line(&self) -> &str {
        &self.command_line
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    /// The active selection, only while a visual mode is active.
    pub fn selection(&self) -> Option<Selection> {
        let kind = SelectionKind::for_mode(self.mode)?;
        let anchor = self.visual_anchor?;
        Some(Selection::new(anchor, self.cursor.position(), kind))
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Move the cursor to `(line, col)`, clamped into the buffer.
    pub fn set_cursor(&mut self, line: usize, col: usize) {
        self.cursor = Cursor::at(&self.buffer, line, col);
    }

    fn place_cursor(&mut self, pos: Position) {
        self.cursor = Cursor::from_position(&self.buffer, pos);
    }

    /// Feed one key through the state machine.
    pub fn handle_key(&mut self, key: Key) -> Outcome {
        let Transition { next, action } = keymap::transition(self.mode, key);
        log::debug!("{:?} in {:?} -> {:?}, {:?}", key, self.mode, action, next);

        let outcome = self.apply(action);
        self.set_mode(next);
        outcome
    }

    fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::None => {}
            Action::Move(motion) => self.move_cursor(motion),
            Action::BeginCommand(marker) => {
                self.command_line.clear();
                self.command_line.push(marker);
                self.status_message = None;
            }
            Action::InsertChar(c) => {
                let mut encoded = [0; 4];
                self.insert_text(c.encode_utf8(&mut encoded));
            }
            Action::InsertTab => {
                let tab = self.config.tab_text();
                self.insert_text(&tab);
            }
            Action::SplitLine => self.insert_text(""),
            Action::DeleteBackward => self.delete(DeleteUnit::Character),
            Action::DeleteWord => self.delete(DeleteUnit::Word),
            Action::YankLine | Action::YankSelection => {
                // Visual yank copies the cursor line only, whatever the selection spans
                self.copy_line();
            }
            Action::DeleteSelection => {
                // Character granularity for VisualChar and VisualBlock
                let unit = match self.mode {
                    Mode::VisualLine => DeleteUnit::Line,
                    _ => DeleteUnit::Character,
                };
                self.delete(unit);
            }
            Action::Paste => self.paste(),
            Action::OpenLineBelow => {
                let line = self.cursor.line() + 1;
                self.buffer.insert_line(line, "");
                self.set_cursor(line, 0);
            }
            Action::OpenLineAbove => {
                let line = self.cursor.line();
                self.buffer.insert_line(line, "");
                self.set_cursor(line, 0);
            }
            Action::SearchNext => self.search_next(),
            Action::CommandInput(c) => self.command_line.push(c),
            Action::CommandBackspace => {
                // The marker stays until the command line is submitted or cancelled
                if self.command_line.chars().count() > 1 {
                    self.command_line.pop();
                }
            }
            Action::SubmitCommand => return self.submit_command_line(),
        }
        Outcome::Continue
    }

    fn set_mode(&mut self, next: Mode) {
        if next == self.mode {
            return;
        }
        log::debug!("mode {:?} -> {:?}", self.mode, next);

        if next.is_visual() && !self.mode.is_visual() {
            self.visual_anchor = Some(self.cursor.position());
        } else if !next.is_visual() {
            self.visual_anchor = None;
        }
        if self.mode == Mode::Command {
            self.command_line.clear();
        }
        self.mode = next;
    }

    fn submit_command_line(&mut self) -> Outcome {
        let line = std::mem::take(&mut self.command_line);
        let mut chars = line.chars();
        let marker = chars.next();
        let body = chars.as_str();

        if marker == Some('/') {
            self.search(body);
            return Outcome::Continue;
        }

        match self.execute_command(body) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::warn!("command {:?} failed: {}", body, err);
                self.set_status(err.to_string());
                Outcome::Continue
            }
        }
    }

    /// Run a command line (without its `:` marker) against the session.
    pub fn execute_command(&mut self, input: &str) -> Result<Outcome, EditorError> {
        let command = Command::parse(input)?;
        log::debug!("executing {:?}", command);

        match command {
            Command::Quit => return Ok(Outcome::Quit),
            Command::Write(path) => self.write(path.as_deref())?,
            Command::WriteQuit(path) => {
                // Quit is signalled even when the write fails
                if let Err(err) = self.write(path.as_deref()) {
                    log::warn!("write before quit failed: {}", err);
                    self.set_status(err.to_string());
                }
                return Ok(Outcome::Quit);
            }
            Command::Edit(path) => self.open_file(&path)?,
            Command::New => {
                self.buffer.clear();
                self.cursor = Cursor::new();
                self.set_status("[New]");
            }
            Command::Set(options) => {
                log::debug!("ignoring set {:?}", options);
            }
        }
        Ok(Outcome::Continue)
    }

    fn write(&mut self, path: Option<&Path>) -> Result<(), BufferError> {
        let written = self.buffer.save(path)?;
        self.set_status(format!(
            "\"{}\" {}L written",
            written.display(),
            self.buffer.line_count()
        ));
        Ok(())
    }

    /// Replace the buffer with the contents of `path`.
    /// On failure the session is left as it was.
    pub fn open_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), EditorError> {
        let path = path.as_ref();
        self.buffer.load(path)?;
        self.cursor = Cursor::new();
        self.set_status(format!(
            "\"{}\" {}L",
            path.display(),
            self.buffer.line_count()
        ));
        Ok(())
    }

    /// Start an empty buffer that will be saved to `path`.
    pub fn new_file<P: AsRef<Path>>(&mut self, path: P) {
        let path = path.as_ref();
        self.buffer.clear();
        self.buffer.set_source_path(path);
        self.cursor = Cursor::new();
        self.set_status(format!("\"{}\" [New]", path.display()));
    }

    pub fn move_cursor(&mut self, motion: Motion) {
        self.cursor = motion.apply(&self.buffer, self.cursor);
    }

    /// Insert at the cursor; empty text splits the line.
    pub fn insert_text(&mut self, text: &str) {
        let end = self.buffer.insert_at(self.cursor.position(), text);
        self.place_cursor(end);
    }

    pub fn delete(&mut self, unit: DeleteUnit) {
        let end = self.buffer.delete_at(self.cursor.position(), unit);
        self.place_cursor(end);
    }

    pub fn copy_line(&mut self) {
        if self.buffer.copy_line(self.cursor.line()).is_some() {
            self.set_status("1 line yanked");
        }
    }

    pub fn paste(&mut self) {
        let end = self.buffer.paste_at(self.cursor.position());
        self.place_cursor(end);
    }

    /// Jump to the first match of `pattern`; returns whether one was found.
    pub fn search(&mut self, pattern: &str) -> bool {
        if pattern.is_empty() {
            return false;
        }
        self.last_search = Some(pattern.to_string());
        match self.buffer.search(pattern) {
            Some(pos) => {
                self.place_cursor(pos);
                true
            }
            None => {
                self.set_status(format!("Pattern not found: {}", pattern));
                false
            }
        }
    }

    fn search_next(&mut self) {
        let Some(pattern) = self.last_search.clone() else {
            self.set_status("No previous search");
            return;
        };
        match self.buffer.search_from(&pattern, self.cursor.position()) {
            Some(pos) => self.place_cursor(pos),
            None => self.set_status(format!("Pattern not found: {}", pattern)),
        }
    }

    pub fn replace(&mut self, old: &str, new: &str, global: bool) -> usize {
        let count = self.buffer.replace(old, new, global);
        self.cursor = self.cursor.clamped(&self.buffer);
        count
    }
}
