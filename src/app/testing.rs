//! Scripted capabilities shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::Instant;

use crate::app::capabilities::{
    DialogOptions, FileContents, FileDialog, FileSystem, MarkdownRenderer, PendingFileSource, PreferenceStore,
    SystemTheme, Viewport,
};
use crate::app::coordinator::Capabilities;
use crate::app::domain::ThemeMode;
use crate::app::infrastructure::error::{AppError, Result};
use crate::app::infrastructure::preferences::MemoryPreferenceStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportWrite {
    Content(String),
    Filename(String),
    Theme(ThemeMode),
    ThemeIndicator(String),
    FontScale(u32),
    ZoomLabel(String),
    DragOver(bool),
}

/// Viewport that remembers every write in order.
#[derive(Debug, Default)]
pub struct RecordingViewport {
    writes: RefCell<Vec<ViewportWrite>>,
}

impl RecordingViewport {
    pub fn writes(&self) -> Vec<ViewportWrite> {
        self.writes.borrow().clone()
    }

    pub fn clear(&self) {
        self.writes.borrow_mut().clear();
    }

    fn last<T>(&self, pick: impl Fn(&ViewportWrite) -> Option<T>) -> Option<T> {
        self.writes.borrow().iter().rev().find_map(pick)
    }

    pub fn content(&self) -> Option<String> {
        self.last(|w| match w {
            ViewportWrite::Content(html) => Some(html.clone()),
            _ => None,
        })
    }

    pub fn filename(&self) -> Option<String> {
        self.last(|w| match w {
            ViewportWrite::Filename(name) => Some(name.clone()),
            _ => None,
        })
    }

    pub fn theme(&self) -> Option<ThemeMode> {
        self.last(|w| match w {
            ViewportWrite::Theme(mode) => Some(*mode),
            _ => None,
        })
    }

    pub fn theme_indicator(&self) -> Option<String> {
        self.last(|w| match w {
            ViewportWrite::ThemeIndicator(glyph) => Some(glyph.clone()),
            _ => None,
        })
    }

    pub fn font_scale(&self) -> Option<u32> {
        self.last(|w| match w {
            ViewportWrite::FontScale(percent) => Some(*percent),
            _ => None,
        })
    }

    pub fn zoom_label(&self) -> Option<String> {
        self.last(|w| match w {
            ViewportWrite::ZoomLabel(label) => Some(label.clone()),
            _ => None,
        })
    }

    pub fn drag_over(&self) -> Option<bool> {
        self.last(|w| match w {
            ViewportWrite::DragOver(active) => Some(*active),
            _ => None,
        })
    }

    fn push(&self, write: ViewportWrite) {
        self.writes.borrow_mut().push(write);
    }
}

impl Viewport for RecordingViewport {
    fn set_content(&self, html: &str) {
        self.push(ViewportWrite::Content(html.to_string()));
    }

    fn set_filename(&self, name: &str) {
        self.push(ViewportWrite::Filename(name.to_string()));
    }

    fn set_theme(&self, mode: ThemeMode) {
        self.push(ViewportWrite::Theme(mode));
    }

    fn set_theme_indicator(&self, glyph: &str) {
        self.push(ViewportWrite::ThemeIndicator(glyph.to_string()));
    }

    fn set_font_scale(&self, percent: u32) {
        self.push(ViewportWrite::FontScale(percent));
    }

    fn set_zoom_label(&self, label: &str) {
        self.push(ViewportWrite::ZoomLabel(label.to_string()));
    }

    fn set_drag_over(&self, active: bool) {
        self.push(ViewportWrite::DragOver(active));
    }
}

/// In-memory files; unknown paths fail with `NotFound`.
#[derive(Debug, Default)]
pub struct ScriptedFileSystem {
    files: HashMap<String, FileContents>,
    reads: RefCell<Vec<String>>,
}

impl ScriptedFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(self, path: &str, text: &str) -> Self {
        self.with_contents(path, FileContents::Text(text.to_string()))
    }

    pub fn with_contents(mut self, path: &str, contents: FileContents) -> Self {
        self.files.insert(path.to_string(), contents);
        self
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FileSystem for ScriptedFileSystem {
    async fn read_text(&self, path: &str) -> Result<FileContents> {
        self.reads.borrow_mut().push(path.to_string());
        self.files.get(path).cloned().ok_or_else(|| {
            AppError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{path}: not found"),
            ))
        })
    }
}

/// Wraps the text in `<article>`; can be told to stall or fail per input.
#[derive(Debug, Default)]
pub struct ScriptedRenderer {
    delays: HashMap<String, Duration>,
    failing: HashSet<String>,
}

impl ScriptedRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(mut self, text: &str, delay: Duration) -> Self {
        self.delays.insert(text.to_string(), delay);
        self
    }

    pub fn failing_on(mut self, text: &str) -> Self {
        self.failing.insert(text.to_string());
        self
    }
}

#[async_trait(?Send)]
impl MarkdownRenderer for ScriptedRenderer {
    async fn render(&self, text: &str) -> Result<String> {
        if let Some(delay) = self.delays.get(text) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing.contains(text) {
            return Err(AppError::Render(format!("cannot render {text}")));
        }
        Ok(format!("<article>{text}</article>"))
    }
}

/// Dialog answering from a queue; an exhausted queue means "cancelled".
#[derive(Debug, Default)]
pub struct ScriptedDialog {
    answers: RefCell<VecDeque<std::result::Result<Option<String>, String>>>,
    requests: RefCell<Vec<DialogOptions>>,
}

impl ScriptedDialog {
    pub fn new(answers: Vec<std::result::Result<Option<String>, String>>) -> Self {
        Self {
            answers: RefCell::new(answers.into()),
            requests: RefCell::default(),
        }
    }

    pub fn requests(&self) -> Vec<DialogOptions> {
        self.requests.borrow().clone()
    }
}

#[async_trait(?Send)]
impl FileDialog for ScriptedDialog {
    async fn open(&self, options: &DialogOptions) -> Result<Option<String>> {
        self.requests.borrow_mut().push(options.clone());
        match self.answers.borrow_mut().pop_front() {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(message)) => Err(AppError::Dialog(message)),
            None => Ok(None),
        }
    }
}

/// Pending-file query answering from a script; past the end it reports nothing.
#[derive(Debug)]
pub struct ScriptedPendingFiles {
    script: RefCell<VecDeque<std::result::Result<Option<String>, String>>>,
    created: Instant,
    calls: RefCell<Vec<Instant>>,
    stalls: HashMap<usize, Duration>,
}

impl ScriptedPendingFiles {
    pub fn new(script: Vec<std::result::Result<Option<String>, String>>) -> Self {
        Self {
            script: RefCell::new(script.into()),
            created: Instant::now(),
            calls: RefCell::default(),
            stalls: HashMap::new(),
        }
    }

    /// Hold the answer to the `call`-th query (1-based) for `delay`.
    pub fn with_stall(mut self, call: usize, delay: Duration) -> Self {
        self.stalls.insert(call, delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn call_offsets(&self) -> Vec<Duration> {
        self.calls
            .borrow()
            .iter()
            .map(|at| at.duration_since(self.created))
            .collect()
    }
}

#[async_trait(?Send)]
impl PendingFileSource for ScriptedPendingFiles {
    async fn pending_file(&self) -> Result<Option<String>> {
        let call = {
            let mut calls = self.calls.borrow_mut();
            calls.push(Instant::now());
            calls.len()
        };
        let answer = self.script.borrow_mut().pop_front();
        if let Some(delay) = self.stalls.get(&call) {
            tokio::time::sleep(*delay).await;
        }
        match answer {
            Some(Ok(answer)) => Ok(answer),
            Some(Err(message)) => Err(AppError::PendingFile(message)),
            None => Ok(None),
        }
    }
}

#[derive(Debug)]
pub struct FixedSystemTheme {
    mode: Option<ThemeMode>,
    queries: Cell<usize>,
}

impl FixedSystemTheme {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode: Some(mode),
            queries: Cell::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            mode: None,
            queries: Cell::new(0),
        }
    }

    pub fn queries(&self) -> usize {
        self.queries.get()
    }
}

impl SystemTheme for FixedSystemTheme {
    fn current(&self) -> Result<ThemeMode> {
        self.queries.set(self.queries.get() + 1);
        self.mode
            .ok_or_else(|| AppError::SystemTheme("no color scheme service".to_string()))
    }
}

/// Store whose every operation fails.
#[derive(Debug, Default)]
pub struct FailingPreferenceStore;

impl PreferenceStore for FailingPreferenceStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(AppError::Preferences("store unavailable".to_string()))
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(AppError::Preferences("store unavailable".to_string()))
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(AppError::Preferences("store unavailable".to_string()))
    }
}

/// A full set of scripted capabilities, with handles kept for assertions.
pub struct Harness {
    pub filesystem: Rc<ScriptedFileSystem>,
    pub dialog: Rc<ScriptedDialog>,
    pub renderer: Rc<ScriptedRenderer>,
    pub preferences: Rc<MemoryPreferenceStore>,
    pub system_theme: Rc<FixedSystemTheme>,
    pub pending_file: Rc<ScriptedPendingFiles>,
    pub viewport: Rc<RecordingViewport>,
}

impl Harness {
    pub fn new(filesystem: ScriptedFileSystem, renderer: ScriptedRenderer) -> Self {
        Self {
            filesystem: Rc::new(filesystem),
            dialog: Rc::new(ScriptedDialog::default()),
            renderer: Rc::new(renderer),
            preferences: Rc::new(MemoryPreferenceStore::new()),
            system_theme: Rc::new(FixedSystemTheme::new(ThemeMode::Light)),
            pending_file: Rc::new(ScriptedPendingFiles::new(Vec::new())),
            viewport: Rc::new(RecordingViewport::default()),
        }
    }

    pub fn with_dialog(mut self, dialog: ScriptedDialog) -> Self {
        self.dialog = Rc::new(dialog);
        self
    }

    pub fn with_pending_files(mut self, pending: ScriptedPendingFiles) -> Self {
        self.pending_file = Rc::new(pending);
        self
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            filesystem: self.filesystem.clone(),
            dialog: self.dialog.clone(),
            renderer: self.renderer.clone(),
            preferences: self.preferences.clone(),
            system_theme: self.system_theme.clone(),
            pending_file: self.pending_file.clone(),
            viewport: self.viewport.clone(),
        }
    }
}
