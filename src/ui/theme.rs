// ui/theme.rs - Colors used by the widgets

use ratatui::style::Color;

use crate::mode::Mode;

#[derive(Debug, Clone, Default)]
pub struct Theme {
    pub general: GeneralTheme,
    pub ui: UiTheme,
}

#[derive(Debug, Clone)]
pub struct GeneralTheme {
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub status_bar_bg: Color,
    pub status_bar_fg: Color,
    pub gutter_fg: Color,
    pub selection_bg: Color,
    pub selection_fg: Color,
    pub empty_line_fg: Color,
    pub mode_insert: Color,
    pub mode_visual: Color,
    pub mode_command: Color,
}

impl Default for GeneralTheme {
    fn default() -> Self {
        Self {
            background: Color::Black,
            foreground: Color::Rgb(248, 248, 242), // Light gray for better contrast
        }
    }
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            status_bar_bg: Color::Blue,
            status_bar_fg: Color::White,
            gutter_fg: Color::DarkGray,
            selection_bg: Color::Rgb(68, 71, 90),
            selection_fg: Color::Rgb(248, 248, 242),
            empty_line_fg: Color::DarkGray,
            mode_insert: Color::Green,
            mode_visual: Color::Yellow,
            mode_command: Color::Red,
        }
    }
}

impl Theme {
    /// Status bar background for the given mode
    pub fn mode_color(&self, mode: Mode) -> Color {
        match mode {
            Mode::Normal => self.ui.status_bar_bg,
            Mode::Insert => self.ui.mode_insert,
            Mode::VisualChar | Mode::VisualLine | Mode::VisualBlock => self.ui.mode_visual,
            Mode::Command => self.ui.mode_command,
        }
    }
}
