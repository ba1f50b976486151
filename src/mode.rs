#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    #[default]
    Normal,
    Insert,
    VisualChar,
    VisualLine,
    VisualBlock,
    Command,
}

impl Mode {
    pub fn is_visual(&self) -> bool {
        matches!(self, Mode::VisualChar | Mode::VisualLine | Mode::VisualBlock)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Normal => "NORMAL",
            Mode::Insert => "INSERT",
            Mode::VisualChar => "VISUAL",
            Mode::VisualLine => "VISUAL LINE",
            Mode::VisualBlock => "VISUAL BLOCK",
            Mode::Command => "COMMAND",
        }
    }
}
