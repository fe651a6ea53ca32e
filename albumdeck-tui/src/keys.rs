use crossterm::event::{KeyCode, KeyEvent};
use smol_str::{SmolStr, ToSmolStr};

use crate::remote::Transport;

/// Centrally defined key actions for the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Resume,
    Pause,
    Next,
    Previous,
    Logs,
    SwitchFocus,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GotoTop,
    GotoBottom,
    Select,
    Back,
}

// ── Key code constants ───────────────────────────────────────────

pub const KEY_QUIT: KeyCode = KeyCode::Char('q');
pub const KEY_RESUME: KeyCode = KeyCode::Char(' ');
pub const KEY_PAUSE: KeyCode = KeyCode::Char('s');
pub const KEY_NEXT: KeyCode = KeyCode::Char('n');
pub const KEY_PREVIOUS: KeyCode = KeyCode::Char('p');
pub const KEY_LOGS: KeyCode = KeyCode::Char('L');
pub const KEY_SWITCH_FOCUS: KeyCode = KeyCode::Tab;
pub const KEY_SELECT: KeyCode = KeyCode::Enter;
pub const KEY_BACK: KeyCode = KeyCode::Esc;
pub const KEY_UP: KeyCode = KeyCode::Up;
pub const KEY_UP_ALT: KeyCode = KeyCode::Char('k');
pub const KEY_DOWN: KeyCode = KeyCode::Down;
pub const KEY_DOWN_ALT: KeyCode = KeyCode::Char('j');
pub const KEY_PAGE_UP: KeyCode = KeyCode::PageUp;
pub const KEY_PAGE_DOWN: KeyCode = KeyCode::PageDown;
pub const KEY_GOTO_TOP: KeyCode = KeyCode::Home;
pub const KEY_GOTO_BOTTOM: KeyCode = KeyCode::End;

impl Action {
    /// Label shown in the help bar. Returns `None` for actions that
    /// shouldn't appear.
    pub fn help_label(&self) -> Option<(SmolStr, SmolStr)> {
        let (key, desc) = match self {
            Action::Quit => (KEY_QUIT, "quit"),
            Action::Resume => (KEY_RESUME, "play"),
            Action::Pause => (KEY_PAUSE, "stop"),
            Action::Next => (KEY_NEXT, "next"),
            Action::Previous => (KEY_PREVIOUS, "prev"),
            Action::Logs => (KEY_LOGS, "logs"),
            Action::SwitchFocus => (KEY_SWITCH_FOCUS, "devices"),
            Action::PageDown => (KEY_PAGE_DOWN, "page"),
            Action::Select => (KEY_SELECT, "select"),
            Action::Back => (KEY_BACK, "back"),
            _ => return None,
        };
        Some((key_label(key), desc.into()))
    }

    /// The playback command this action triggers, if any.
    pub fn transport(&self) -> Option<Transport> {
        match self {
            Action::Resume => Some(Transport::Resume),
            Action::Pause => Some(Transport::Pause),
            Action::Next => Some(Transport::Next),
            Action::Previous => Some(Transport::Previous),
            _ => None,
        }
    }
}

/// Character keys keep their case so `L` and `l` stay distinct.
fn key_label(key: KeyCode) -> SmolStr {
    match key {
        KeyCode::Char(' ') => "space".into(),
        KeyCode::Char(c) => c.to_smolstr(),
        other => other.to_smolstr().to_lowercase().into(),
    }
}

/// Keys shared by the library and devices panels.
fn player_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_QUIT => Some(Action::Quit),
        KEY_RESUME => Some(Action::Resume),
        KEY_PAUSE => Some(Action::Pause),
        KEY_NEXT => Some(Action::Next),
        KEY_PREVIOUS => Some(Action::Previous),
        KEY_LOGS => Some(Action::Logs),
        KEY_SWITCH_FOCUS => Some(Action::SwitchFocus),
        KEY_UP | KEY_UP_ALT => Some(Action::MoveUp),
        KEY_DOWN | KEY_DOWN_ALT => Some(Action::MoveDown),
        KEY_SELECT => Some(Action::Select),
        _ => None,
    }
}

/// Resolve a key event into an action in library context.
pub fn library_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_PAGE_UP => Some(Action::PageUp),
        KEY_PAGE_DOWN => Some(Action::PageDown),
        _ => player_action(key),
    }
}

/// Resolve a key event into an action in devices context.
pub fn devices_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK => Some(Action::Back),
        _ => player_action(key),
    }
}

/// Resolve a key event into an action in logs context.
pub fn logs_action(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KEY_BACK | KEY_LOGS => Some(Action::Back),
        KEY_QUIT => Some(Action::Quit),
        KEY_UP | KEY_UP_ALT => Some(Action::MoveUp),
        KEY_DOWN | KEY_DOWN_ALT => Some(Action::MoveDown),
        KEY_PAGE_UP => Some(Action::PageUp),
        KEY_PAGE_DOWN => Some(Action::PageDown),
        KEY_GOTO_TOP => Some(Action::GotoTop),
        KEY_GOTO_BOTTOM => Some(Action::GotoBottom),
        _ => None,
    }
}

/// Ordered list of actions to show in the library help bar.
pub const LIBRARY_HELP: &[Action] = &[
    Action::Quit,
    Action::Select,
    Action::Resume,
    Action::Pause,
    Action::Previous,
    Action::Next,
    Action::PageDown,
    Action::SwitchFocus,
    Action::Logs,
];

/// Ordered list of actions to show in the devices help bar.
pub const DEVICES_HELP: &[Action] = &[
    Action::Quit,
    Action::Back,
    Action::Select,
    Action::Resume,
    Action::Pause,
    Action::Previous,
    Action::Next,
    Action::Logs,
];

/// Ordered list of actions to show in the logs help bar.
pub const LOGS_HELP: &[Action] = &[Action::Quit, Action::Back];

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_library_keys() {
        assert_eq!(library_action(&key(KeyCode::Down)), Some(Action::MoveDown));
        assert_eq!(library_action(&key(KeyCode::Char('j'))), Some(Action::MoveDown));
        assert_eq!(library_action(&key(KeyCode::Char('k'))), Some(Action::MoveUp));
        assert_eq!(library_action(&key(KeyCode::PageDown)), Some(Action::PageDown));
        assert_eq!(library_action(&key(KeyCode::Enter)), Some(Action::Select));
        assert_eq!(library_action(&key(KeyCode::Char('L'))), Some(Action::Logs));
        assert_eq!(library_action(&key(KeyCode::Char('l'))), None);
        assert_eq!(library_action(&key(KeyCode::Esc)), None);
    }

    #[test]
    fn test_devices_keys() {
        assert_eq!(devices_action(&key(KeyCode::Esc)), Some(Action::Back));
        assert_eq!(devices_action(&key(KeyCode::Tab)), Some(Action::SwitchFocus));
        assert_eq!(devices_action(&key(KeyCode::PageDown)), None);
    }

    #[test]
    fn test_logs_keys() {
        assert_eq!(logs_action(&key(KeyCode::Char('L'))), Some(Action::Back));
        assert_eq!(logs_action(&key(KeyCode::End)), Some(Action::GotoBottom));
        assert_eq!(logs_action(&key(KeyCode::Enter)), None);
    }

    #[test]
    fn test_transport_actions() {
        assert_eq!(Action::Resume.transport(), Some(Transport::Resume));
        assert_eq!(Action::Pause.transport(), Some(Transport::Pause));
        assert_eq!(Action::Select.transport(), None);
    }

    #[test]
    fn test_help_labels() {
        assert_eq!(
            Action::Resume.help_label(),
            Some(("space".into(), "play".into()))
        );
        assert_eq!(Action::Logs.help_label(), Some(("L".into(), "logs".into())));
        assert_eq!(Action::Quit.help_label(), Some(("q".into(), "quit".into())));
        assert_eq!(Action::MoveUp.help_label(), None);

        // Every action in a help table has a label.
        for action in LIBRARY_HELP.iter().chain(DEVICES_HELP).chain(LOGS_HELP) {
            assert!(action.help_label().is_some(), "{action:?} has no label");
        }
    }
}
