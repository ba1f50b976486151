// ui/widgets/editor_pane.rs - Editor pane widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use unicode_width::UnicodeWidthChar;

use crate::editor::Editor;
use crate::motion::Position;
use crate::ui::theme::Theme;
use crate::viewport::Viewport;

/// Terminal cells taken by `c`. Tabs and zero-width chars get one cell so
/// every char stays addressable by the cursor.
pub fn cell_width(c: char) -> usize {
    if c == '\t' {
        return 1;
    }
    UnicodeWidthChar::width(c).unwrap_or(1).max(1)
}

/// Screen width of the chars of `line` in columns `from..to`.
pub fn screen_width(line: &str, from: usize, to: usize) -> usize {
    line.chars()
        .skip(from)
        .take(to.saturating_sub(from))
        .map(cell_width)
        .sum()
}

/// Editor pane widget that renders the buffer text and the visual selection
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub viewport: &'a Viewport,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, viewport: &'a Viewport, theme: &'a Theme) -> Self {
        Self {
            editor,
            viewport,
            theme,
        }
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text_style = Style::default()
            .fg(self.theme.general.foreground)
            .bg(self.theme.general.background);
        let selected_style = Style::default()
            .fg(self.theme.ui.selection_fg)
            .bg(self.theme.ui.selection_bg);
        let selection = self.editor.selection();

        // Clear entire editor area to prevent character artifacts when the buffer shrinks
        for y in 0..area.height {
            for x in 0..area.width {
                buf.get_mut(area.x + x, area.y + y)
                    .set_char(' ')
                    .set_style(text_style);
            }
        }

        for i in 0..area.height as usize {
            let line_idx = self.viewport.offset_line + i;
            let y = area.y + i as u16;

            let Some(line) = self.editor.buffer().line(line_idx) else {
                let line_widget = Line::from(vec![Span::styled(
                    "~",
                    Style::default().fg(self.theme.ui.empty_line_fg),
                )]);
                buf.set_line(area.x, y, &line_widget, area.width);
                continue;
            };

            let mut x = 0usize;
            for (col, c) in line.chars().enumerate().skip(self.viewport.offset_col) {
                let width = cell_width(c);
                if x + width > area.width as usize {
                    break;
                }
                let style = match selection {
                    Some(sel) if sel.contains(Position::new(line_idx, col)) => selected_style,
                    _ => text_style,
                };
                let shown = if c == '\t' { ' ' } else { c };
                buf.get_mut(area.x + x as u16, y)
                    .set_char(shown)
                    .set_style(style);
                // Cells covered by the right half of a wide glyph
                for extra in 1..width {
                    let cell = buf.get_mut(area.x + (x + extra) as u16, y);
                    cell.reset();
                    cell.set_style(style);
                }
                x += width;
            }

            // Mark selected empty lines so a line selection stays visible
            if line.is_empty()
                && self.viewport.offset_col == 0
                && area.width > 0
                && selection.is_some_and(|sel| sel.contains(Position::new(line_idx, 0)))
            {
                buf.get_mut(area.x, y).set_style(selected_style);
            }
        }
    }
}
