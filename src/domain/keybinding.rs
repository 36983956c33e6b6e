use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::domain::entities::TextRef;

/// Command a key press triggers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Action {
    Quit,
    Back,

    // Grid navigation
    NavigateUp,
    NavigateDown,
    NavigateLeft,
    NavigateRight,
    Select,

    // Screens
    OpenSettings,
    ToggleAbout,

    // Settings
    ToggleDarkMode,
    ToggleLanguage,
}

/// Screen a key press is interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyContext {
    /// Catalog grid.
    List,
    /// Creature detail.
    Detail,
    /// Settings switches.
    Settings,
    /// About overlay over the list.
    About,
}

/// One key mapped to an action in a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    /// Key that triggers the action.
    pub key: KeyEvent,
    /// Triggered action.
    pub action: Action,
    /// Label shown in the footer, resolved in the active locale.
    pub label: TextRef,
    /// Whether the footer lists this binding.
    pub visible_in_bar: bool,
}

impl Keybind {
    /// Creates a binding shown in the footer.
    pub fn new(key: KeyEvent, action: Action, label: &'static str) -> Self {
        Self {
            key,
            action,
            label: TextRef::from_static(label),
            visible_in_bar: true,
        }
    }

    /// Keeps the binding out of the footer.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }

    /// Short name of the key for the footer.
    #[must_use]
    pub fn key_name(&self) -> String {
        match self.key.code {
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Backspace => "Bksp".to_string(),
            KeyCode::Up => "↑".to_string(),
            KeyCode::Down => "↓".to_string(),
            KeyCode::Left => "←".to_string(),
            KeyCode::Right => "→".to_string(),
            KeyCode::Char(c) if self.key.modifiers.contains(KeyModifiers::CONTROL) => {
                format!("Ctrl+{c}")
            }
            KeyCode::Char(c) => c.to_string(),
            other => format!("{other:?}"),
        }
    }

    fn matches(&self, key: &KeyEvent) -> bool {
        self.key.code == key.code && self.key.modifiers == key.modifiers
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Returns the bindings active in `context`, footer order first.
#[must_use]
pub fn bindings_for(context: KeyContext) -> Vec<Keybind> {
    let mut bindings = match context {
        KeyContext::List => vec![
            Keybind::new(key(KeyCode::Enter), Action::Select, "key_open"),
            Keybind::new(key(KeyCode::Char('s')), Action::OpenSettings, "key_settings"),
            Keybind::new(key(KeyCode::Char('a')), Action::ToggleAbout, "key_about"),
            Keybind::new(key(KeyCode::Char('q')), Action::Quit, "key_quit"),
            Keybind::new(key(KeyCode::Up), Action::NavigateUp, "key_move").hidden(),
            Keybind::new(key(KeyCode::Down), Action::NavigateDown, "key_move").hidden(),
            Keybind::new(key(KeyCode::Left), Action::NavigateLeft, "key_move").hidden(),
            Keybind::new(key(KeyCode::Right), Action::NavigateRight, "key_move").hidden(),
            Keybind::new(key(KeyCode::Char('k')), Action::NavigateUp, "key_move").hidden(),
            Keybind::new(key(KeyCode::Char('j')), Action::NavigateDown, "key_move").hidden(),
            Keybind::new(key(KeyCode::Char('h')), Action::NavigateLeft, "key_move").hidden(),
            Keybind::new(key(KeyCode::Char('l')), Action::NavigateRight, "key_move").hidden(),
        ],
        KeyContext::Detail => vec![
            Keybind::new(key(KeyCode::Esc), Action::Back, "key_back"),
            Keybind::new(key(KeyCode::Backspace), Action::Back, "key_back").hidden(),
        ],
        KeyContext::Settings => vec![
            Keybind::new(key(KeyCode::Char('d')), Action::ToggleDarkMode, "key_dark_mode"),
            Keybind::new(key(KeyCode::Char('l')), Action::ToggleLanguage, "key_language"),
            Keybind::new(key(KeyCode::Esc), Action::Back, "key_back"),
            Keybind::new(key(KeyCode::Backspace), Action::Back, "key_back").hidden(),
        ],
        KeyContext::About => vec![
            Keybind::new(key(KeyCode::Enter), Action::ToggleAbout, "ok"),
            Keybind::new(key(KeyCode::Esc), Action::ToggleAbout, "ok").hidden(),
            Keybind::new(key(KeyCode::Char('a')), Action::ToggleAbout, "ok").hidden(),
        ],
    };
    bindings.push(Keybind::new(ctrl('c'), Action::Quit, "key_quit").hidden());
    bindings
}

/// Maps a key press to an action in `context`.
#[must_use]
pub fn action_for(context: KeyContext, key: &KeyEvent) -> Option<Action> {
    bindings_for(context)
        .into_iter()
        .find(|binding| binding.matches(key))
        .map(|binding| binding.action)
}
