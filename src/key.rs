//! Platform-independent key representation

/// A single key delivered by the input source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    /// A control chord such as Ctrl-V, stored as the lowercase letter
    Ctrl(char),
    Enter,
    Backspace,
    Escape,
    Tab,
    Left,
    Right,
    Up,
    Down,
}

impl Key {
    /// Translate a single raw terminal byte. ASCII only: bytes of a
    /// multi-byte UTF-8 sequence yield `None`, see [`Key::from_bytes`].
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x1B => Some(Key::Escape),
            0x08 | 0x7F => Some(Key::Backspace),
            b'\r' | b'\n' => Some(Key::Enter),
            b'\t' => Some(Key::Tab),
            0x01..=0x1A => Some(Key::Ctrl((b'a' + byte - 1) as char)),
            0x20..=0x7E => Some(Key::Char(byte as char)),
            _ => None,
        }
    }

    /// Decode the key at the start of `bytes`, returning it with the number
    /// of bytes it used. Non-ASCII chars are read as one UTF-8 sequence.
    /// `None` when the sequence is incomplete or invalid.
    pub fn from_bytes(bytes: &[u8]) -> Option<(Self, usize)> {
        let &lead = bytes.first()?;
        let len = match lead {
            0x00..=0x7F => return Self::from_byte(lead).map(|key| (key, 1)),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return None,
        };
        let c = std::str::from_utf8(bytes.get(..len)?).ok()?.chars().next()?;
        Some((Key::Char(c), len))
    }

    /// The character this key inserts as text, if any.
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }
}
