use serde_json::Value;

use super::theme::ThemeMode;
use super::zoom::ZoomCommand;

/// Every trigger the event coordinator routes.
/// Toolbar buttons, menu items, keyboard handlers and host notifications each
/// produce one of these; the coordinator's run loop consumes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // File
    OpenDialog,
    OpenPath(String),

    // View
    ToggleTheme,
    SystemThemeChanged(ThemeMode),
    Zoom(ZoomCommand),
    KeyPressed { key: char, command: bool },

    // Drag and drop
    DragEnter,
    DragLeave,
    DragDrop(Vec<String>),
}

impl Message {
    /// Decode a named host signal and its JSON payload.
    ///
    /// Unknown signals, malformed payloads and empty paths yield `None`.
    pub fn from_host_signal(name: &str, payload: &Value) -> Option<Self> {
        match name {
            "open-file-path" => payload
                .as_str()
                .filter(|path| !path.is_empty())
                .map(|path| Self::OpenPath(path.to_string())),
            "menu-open-file" => Some(Self::OpenDialog),
            "menu-toggle-theme" => Some(Self::ToggleTheme),
            "menu-zoom" => payload
                .as_str()
                .and_then(|command| command.parse().ok())
                .map(Self::Zoom),
            "drag-drop" => {
                let paths = payload
                    .get("paths")?
                    .as_array()?
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect();
                Some(Self::DragDrop(paths))
            }
            "drag-enter" => Some(Self::DragEnter),
            "drag-leave" => Some(Self::DragLeave),
            _ => None,
        }
    }
}
