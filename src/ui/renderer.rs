// ui/renderer.rs - Ratatui-based renderer for the text editor

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::Stdout;

use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::{EditorPane, screen_width};
use crate::ui::widgets::gutter::{GUTTER_WIDTH, Gutter};
use crate::ui::widgets::status_bar::StatusBar;
use crate::viewport::Viewport;

/// Ratatui-based renderer for the text editor
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    viewport: Viewport,
}

impl TuiRenderer {
    /// Create a new TuiRenderer
    pub fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        let size = terminal.size()?;

        Ok(Self {
            terminal,
            theme: Theme::default(),
            viewport: Viewport::new(size.height as usize, size.width as usize),
        })
    }

    /// Draw the editor UI
    pub fn draw(&mut self, editor: &Editor) -> Result<(), Box<dyn std::error::Error>> {
        let theme = &self.theme;
        let viewport = &mut self.viewport;

        self.terminal.draw(|f| {
            let size = f.size();

            // Editor area + status bar (1 line)
            let vertical_chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(size);

            let gutter_width = if editor.config().line_numbers {
                GUTTER_WIDTH
            } else {
                0
            };
            let editor_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(gutter_width), Constraint::Min(1)])
                .split(vertical_chunks[0]);
            let text_area = editor_chunks[1];

            let cursor = editor.cursor();
            viewport.resize(text_area.height as usize, text_area.width as usize);
            viewport.scroll_to_cursor(cursor.line(), cursor.col());
            let line = editor.buffer().line(cursor.line()).unwrap_or("");
            keep_cursor_on_screen(viewport, line, cursor.col(), text_area.width as usize);

            if gutter_width > 0 {
                f.render_widget(Gutter::new(editor, viewport, theme), editor_chunks[0]);
            }
            f.render_widget(EditorPane::new(editor, viewport, theme), text_area);
            f.render_widget(StatusBar::new(editor, theme), vertical_chunks[1]);

            // The terminal cursor sits on the command line while one is being typed
            if editor.mode() == crate::mode::Mode::Command {
                let col = editor.command_line().chars().count() as u16;
                f.set_cursor(
                    vertical_chunks[1].x + col.min(vertical_chunks[1].width.saturating_sub(1)),
                    vertical_chunks[1].y,
                );
            } else {
                let cursor_row = cursor.line().saturating_sub(viewport.offset_line) as u16;
                let cursor_col =
                    screen_width(line, viewport.offset_col, cursor.col()) as u16;
                if cursor_row < text_area.height && cursor_col < text_area.width {
                    f.set_cursor(text_area.x + cursor_col, text_area.y + cursor_row);
                }
            }
        })?;
        Ok(())
    }
}

/// Scroll right until the cursor cell fits within `width` screen cells.
/// Wide glyphs can push it past the edge even when the char count fits.
fn keep_cursor_on_screen(viewport: &mut Viewport, line: &str, col: usize, width: usize) {
    while viewport.offset_col < col && screen_width(line, viewport.offset_col, col) >= width {
        viewport.offset_col += 1;
    }
}
