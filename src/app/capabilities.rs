//! Narrow interfaces to everything the viewer core does not own.
//!
//! The core is single-threaded, so the asynchronous capabilities are
//! `?Send` and shared through `Rc`.

use async_trait::async_trait;

use crate::app::domain::ThemeMode;
use crate::app::infrastructure::error::Result;

/// Raw file content as handed back by a filesystem backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContents {
    Text(String),
    Bytes(Vec<u8>),
}

impl FileContents {
    /// Normalize to text. Invalid UTF-8 sequences become U+FFFD.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Bytes(bytes) => match String::from_utf8(bytes) {
                Ok(text) => text,
                Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
            },
        }
    }
}

#[async_trait(?Send)]
pub trait FileSystem {
    async fn read_text(&self, path: &str) -> Result<FileContents>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOptions {
    pub filters: Vec<DialogFilter>,
    pub multiple: bool,
    pub directory: bool,
}

#[async_trait(?Send)]
pub trait FileDialog {
    /// `Ok(None)` means the user cancelled.
    async fn open(&self, options: &DialogOptions) -> Result<Option<String>>;
}

#[async_trait(?Send)]
pub trait MarkdownRenderer {
    /// Produce an HTML fragment. The output is injected unsanitized.
    async fn render(&self, text: &str) -> Result<String>;
}

/// Device-local key/value store for the theme preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// One-shot query of the platform color scheme. Changes arrive as
/// [`Message::SystemThemeChanged`](crate::app::domain::Message::SystemThemeChanged).
pub trait SystemTheme {
    fn current(&self) -> Result<ThemeMode>;
}

/// Host query for a file the process was launched to open.
#[async_trait(?Send)]
pub trait PendingFileSource {
    async fn pending_file(&self) -> Result<Option<String>>;
}

/// Write-only display surface.
///
/// Each controller writes its own region: the loader owns content and
/// filename, the theme controller the theme attribute and indicator, the zoom
/// controller the font scale and label, the coordinator the drag-over flag.
pub trait Viewport {
    fn set_content(&self, html: &str);
    fn set_filename(&self, name: &str);
    fn set_theme(&self, mode: ThemeMode);
    fn set_theme_indicator(&self, glyph: &str);
    fn set_font_scale(&self, percent: u32);
    fn set_zoom_label(&self, label: &str);
    fn set_drag_over(&self, active: bool);
}
