// src/keymap.rs - Per-mode key bindings and the mode transition function

use crate::key::Key;
use crate::mode::Mode;
use crate::motion::Motion;

/// What the editor should do in response to a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nothing beyond the mode change (if any)
    None,
    Move(Motion),
    /// Start a command line with the given marker (`:` or `/`)
    BeginCommand(char),
    InsertChar(char),
    InsertTab,
    SplitLine,
    DeleteBackward,
    DeleteWord,
    YankLine,
    Paste,
    OpenLineBelow,
    OpenLineAbove,
    SearchNext,
    YankSelection,
    DeleteSelection,
    CommandInput(char),
    CommandBackspace,
    SubmitCommand,
}

/// Result of feeding one key to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: Mode,
    pub action: Action,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Next {
    Stay,
    To(Mode),
}

type Binding = (Key, Action, Next);

const NORMAL_BINDINGS: &[Binding] = &[
    (Key::Char('i'), Action::None, Next::To(Mode::Insert)),
    (Key::Char('v'), Action::None, Next::To(Mode::VisualChar)),
    (Key::Char('V'), Action::None, Next::To(Mode::VisualLine)),
    (Key::Ctrl('v'), Action::None, Next::To(Mode::VisualBlock)),
    (Key::Char(':'), Action::BeginCommand(':'), Next::To(Mode::Command)),
    (Key::Char('/'), Action::BeginCommand('/'), Next::To(Mode::Command)),
    (Key::Char('h'), Action::Move(Motion::Left), Next::Stay),
    (Key::Char('j'), Action::Move(Motion::Down), Next::Stay),
    (Key::Char('k'), Action::Move(Motion::Up), Next::Stay),
    (Key::Char('l'), Action::Move(Motion::Right), Next::Stay),
    (Key::Left, Action::Move(Motion::Left), Next::Stay),
    (Key::Down, Action::Move(Motion::Down), Next::Stay),
    (Key::Up, Action::Move(Motion::Up), Next::Stay),
    (Key::Right, Action::Move(Motion::Right), Next::Stay),
    (Key::Char('0'), Action::Move(Motion::LineStart), Next::Stay),
    (Key::Char('$'), Action::Move(Motion::LineEnd), Next::Stay),
    (Key::Char('w'), Action::Move(Motion::WordForward), Next::Stay),
    (Key::Char('b'), Action::Move(Motion::WordBackward), Next::Stay),
    (Key::Char('x'), Action::DeleteBackward, Next::Stay),
    (Key::Char('D'), Action::DeleteWord, Next::Stay),
    (Key::Char('y'), Action::YankLine, Next::Stay),
    (Key::Char('p'), Action::Paste, Next::Stay),
    (Key::Char('o'), Action::OpenLineBelow, Next::To(Mode::Insert)),
    (Key::Char('O'), Action::OpenLineAbove, Next::To(Mode::Insert)),
    (Key::Char('n'), Action::SearchNext, Next::Stay),
    (Key::Escape, Action::None, Next::Stay),
];

const INSERT_BINDINGS: &[Binding] = &[
    (Key::Escape, Action::None, Next::To(Mode::Normal)),
    (Key::Enter, Action::SplitLine, Next::Stay),
    (Key::Backspace, Action::DeleteBackward, Next::Stay),
    (Key::Tab, Action::InsertTab, Next::Stay),
    (Key::Left, Action::Move(Motion::Left), Next::Stay),
    (Key::Down, Action::Move(Motion::Down), Next::Stay),
    (Key::Up, Action::Move(Motion::Up), Next::Stay),
    (Key::Right, Action::Move(Motion::Right), Next::Stay),
];

// Shared by the three visual variants
const VISUAL_BINDINGS: &[Binding] = &[
    (Key::Escape, Action::None, Next::To(Mode::Normal)),
    (Key::Char('h'), Action::Move(Motion::Left), Next::Stay),
    (Key::Char('j'), Action::Move(Motion::Down), Next::Stay),
    (Key::Char('k'), Action::Move(Motion::Up), Next::Stay),
    (Key::Char('l'), Action::Move(Motion::Right), Next::Stay),
    (Key::Left, Action::Move(Motion::Left), Next::Stay),
    (Key::Down, Action::Move(Motion::Down), Next::Stay),
    (Key::Up, Action::Move(Motion::Up), Next::Stay),
    (Key::Right, Action::Move(Motion::Right), Next::Stay),
    (Key::Char('0'), Action::Move(Motion::LineStart), Next::Stay),
    (Key::Char('$'), Action::Move(Motion::LineEnd), Next::Stay),
    (Key::Char('w'), Action::Move(Motion::WordForward), Next::Stay),
    (Key::Char('b'), Action::Move(Motion::WordBackward), Next::Stay),
    (Key::Char('y'), Action::YankSelection, Next::To(Mode::Normal)),
    (Key::Char('d'), Action::DeleteSelection, Next::To(Mode::Normal)),
];

const COMMAND_BINDINGS: &[Binding] = &[
    (Key::Escape, Action::None, Next::To(Mode::Normal)),
    (Key::Enter, Action::SubmitCommand, Next::To(Mode::Normal)),
    (Key::Backspace, Action::CommandBackspace, Next::Stay),
];

fn bindings(mode: Mode) -> &'static [Binding] {
    match mode {
        Mode::Normal => NORMAL_BINDINGS,
        Mode::Insert => INSERT_BINDINGS,
        Mode::VisualChar | Mode::VisualLine | Mode::VisualBlock => VISUAL_BINDINGS,
        Mode::Command => COMMAND_BINDINGS,
    }
}

/// Printable keys with no explicit binding are text in Insert and Command mode.
fn fallback(mode: Mode, key: Key) -> Action {
    match (mode, key.printable()) {
        (Mode::Insert, Some(c)) => Action::InsertChar(c),
        (Mode::Command, Some(c)) => Action::CommandInput(c),
        _ => Action::None,
    }
}

/// Decide the next mode and the action for `key`, looking only at the current mode.
pub fn transition(mode: Mode, key: Key) -> Transition {
    match bindings(mode).iter().find(|(bound, _, _)| *bound == key) {
        Some(&(_, action, next)) => Transition {
            next: match next {
                Next::Stay => mode,
                Next::To(target) => target,
            },
            action,
        },
        None => Transition {
            next: mode,
            action: fallback(mode, key),
        },
    }
}
