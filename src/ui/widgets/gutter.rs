// ui/widgets/gutter.rs - Gutter widget for line numbers

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::viewport::Viewport;

pub const GUTTER_WIDTH: u16 = 4;

/// Gutter widget that shows 1-based line numbers
pub struct Gutter<'a> {
    pub editor: &'a Editor,
    pub viewport: &'a Viewport,
    pub theme: &'a Theme,
}

impl<'a> Gutter<'a> {
    pub fn new(editor: &'a Editor, viewport: &'a Viewport, theme: &'a Theme) -> Self {
        Self {
            editor,
            viewport,
            theme,
        }
    }
}

impl Widget for Gutter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for i in 0..area.height as usize {
            let line_idx = self.viewport.offset_line + i;

            let text = if self.editor.buffer().line(line_idx).is_some() {
                format!("{:>3} ", line_idx + 1)
            } else {
                " ".repeat(GUTTER_WIDTH as usize)
            };

            let line_widget = Line::from(Span::styled(
                text,
                Style::default().fg(self.theme.ui.gutter_fg),
            ));

            buf.set_line(area.x, area.y + i as u16, &line_widget, area.width);
        }
    }
}
