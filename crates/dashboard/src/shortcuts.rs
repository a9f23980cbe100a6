//! Keyboard input seen by the dashboard.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other(String),
}

impl Key {
    /// Maps a `KeyboardEvent.key` name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowDown" => Self::ArrowDown,
            "ArrowUp" => Self::ArrowUp,
            "Enter" => Self::Enter,
            "Escape" => Self::Escape,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// A key press anywhere on the page, with its modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlobalKey {
    pub key: String,
    pub ctrl: bool,
    pub meta: bool,
}

impl GlobalKey {
    pub fn new(key: &str, ctrl: bool, meta: bool) -> Self {
        Self { key: key.to_owned(), ctrl, meta }
    }

    /// Ctrl+K / Cmd+K jumps to the search box.
    pub fn is_focus_search_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && self.key == "k"
    }
}
