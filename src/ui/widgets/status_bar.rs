// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::mode::Mode;
use crate::ui::theme::Theme;

/// Status bar showing mode, file, cursor position and the last message.
/// In Command mode it shows the command line instead.
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }

    pub fn text(&self) -> String {
        if self.editor.mode() == Mode::Command {
            return self.editor.command_line().to_string();
        }

        let buffer = self.editor.buffer();
        let file = buffer
            .source_path()
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| "[No Name]".to_string());
        let cursor = self.editor.cursor();

        let base_status = format!(
            " {} | {}{} | {}:{}",
            self.editor.mode().as_str(),
            file,
            if buffer.is_modified() { " [+]" } else { "" },
            cursor.line() + 1,
            cursor.col() + 1,
        );

        match self.editor.status_message() {
            Some(msg) => format!("{} | {}", base_status, msg),
            None => base_status,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status = self.text();

        // Pad the status text to fill the entire width
        let width = area.width as usize;
        let len = status.chars().count();
        let padded_status = if len < width {
            format!("{}{}", status, " ".repeat(width - len))
        } else {
            status
        };

        let line_widget = Line::from(padded_status).style(
            Style::default()
                .bg(self.theme.mode_color(self.editor.mode()))
                .fg(self.theme.ui.status_bar_fg),
        );

        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
