use std::cell::Cell;
use std::rc::Rc;

use serde_json::Value;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, error, trace};

use crate::app::capabilities::{
    FileDialog, FileSystem, MarkdownRenderer, PendingFileSource, PreferenceStore, SystemTheme, Viewport,
};
use crate::app::controllers::{DocumentLoader, LaunchReconciler, ThemeController, ZoomController};
use crate::app::domain::document::is_droppable;
use crate::app::domain::{LoadOrdering, Message, ZoomCommand};
use crate::app::file_filters::markdown_dialog_options;
use crate::app::infrastructure::launch::LaunchFile;

/// Everything the coordinator talks to but does not own.
pub struct Capabilities {
    pub filesystem: Rc<dyn FileSystem>,
    pub dialog: Rc<dyn FileDialog>,
    pub renderer: Rc<dyn MarkdownRenderer>,
    pub preferences: Rc<dyn PreferenceStore>,
    pub system_theme: Rc<dyn SystemTheme>,
    pub pending_file: Rc<dyn PendingFileSource>,
    pub viewport: Rc<dyn Viewport>,
}

/// Routes every trigger of one viewer window to its controller.
///
/// One instance per window. All handlers run on the current thread; loads
/// and dialogs suspend only their own task, so other triggers keep flowing
/// while a document is in flight.
pub struct EventCoordinator {
    theme: ThemeController,
    zoom: ZoomController,
    loader: Rc<DocumentLoader>,
    launch: Rc<LaunchReconciler>,
    dialog: Rc<dyn FileDialog>,
    viewport: Rc<dyn Viewport>,
    drag_over: Cell<bool>,
}

impl EventCoordinator {
    pub fn new(capabilities: Capabilities, ordering: LoadOrdering) -> Rc<Self> {
        let Capabilities {
            filesystem,
            dialog,
            renderer,
            preferences,
            system_theme,
            pending_file,
            viewport,
        } = capabilities;

        let loader = Rc::new(DocumentLoader::new(
            filesystem,
            renderer,
            viewport.clone(),
            ordering,
        ));
        let launch = Rc::new(LaunchReconciler::new(pending_file, loader.clone()));

        Rc::new(Self {
            theme: ThemeController::new(preferences, system_theme.as_ref(), viewport.clone()),
            zoom: ZoomController::new(viewport.clone()),
            loader,
            launch,
            dialog,
            viewport,
            drag_over: Cell::new(false),
        })
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn loader(&self) -> &Rc<DocumentLoader> {
        &self.loader
    }

    pub fn launch(&self) -> &Rc<LaunchReconciler> {
        &self.launch
    }

    /// Paint the initial theme and zoom, start the launch reconciler and
    /// route triggers until the channel closes.
    ///
    /// Taking the receiver by value means a trigger source can only ever be
    /// wired to one coordinator. Must run inside a `LocalSet`.
    pub async fn run(self: Rc<Self>, mut triggers: UnboundedReceiver<Message>) {
        self.theme.apply();
        self.zoom.apply();

        let launch = self.launch.clone();
        tokio::task::spawn_local(async move {
            launch.run().await;
        });

        while let Some(message) = triggers.recv().await {
            trace!(?message, "Trigger");
            tokio::task::spawn_local(Rc::clone(&self).handle(message));
        }
        debug!("Trigger channel closed");
    }

    /// Route a file the host reports as opened after startup (macOS "Open
    /// With", a Finder double-click).
    ///
    /// While the launch reconciler is still polling, the path is parked in
    /// `slot` for it to pick up. Afterwards it comes back as an
    /// `open-file-path` trigger for the caller to send.
    pub fn host_opened(&self, slot: &LaunchFile, path: &str) -> Option<Message> {
        if path.is_empty() {
            return None;
        }
        if self.launch.is_waiting() {
            debug!(path = %path, "Parking opened file for the launch reconciler");
            slot.offer(path);
            return None;
        }
        Message::from_host_signal("open-file-path", &Value::from(path))
    }

    /// Handle one trigger to completion.
    pub async fn handle(self: Rc<Self>, message: Message) {
        match message {
            Message::OpenDialog => self.open_with_dialog().await,
            Message::OpenPath(path) => {
                if !path.is_empty() {
                    self.loader.load(&path).await;
                }
            }
            Message::ToggleTheme => self.theme.toggle(),
            Message::SystemThemeChanged(mode) => self.theme.on_system_change(mode),
            Message::Zoom(command) => self.zoom.execute(command),
            Message::KeyPressed { key, command } => {
                if let Some(zoom) = shortcut_zoom(key, command) {
                    self.zoom.execute(zoom);
                }
            }
            Message::DragEnter => self.set_drag_over(true),
            Message::DragLeave => self.set_drag_over(false),
            Message::DragDrop(paths) => self.handle_drop(paths).await,
        }
    }

    async fn open_with_dialog(&self) {
        match self.dialog.open(&markdown_dialog_options()).await {
            Ok(Some(path)) => {
                self.loader.load(&path).await;
            }
            Ok(None) => debug!("Open dialog cancelled"),
            Err(err) => error!("Error: {err}"),
        }
    }

    async fn handle_drop(&self, paths: Vec<String>) {
        if self.drag_over.get() {
            self.set_drag_over(false);
        }
        let Some(path) = paths.into_iter().next() else {
            return;
        };
        if is_droppable(&path) {
            self.loader.load(&path).await;
        } else {
            debug!(path = %path, "Ignoring dropped file");
        }
    }

    fn set_drag_over(&self, active: bool) {
        self.drag_over.set(active);
        self.viewport.set_drag_over(active);
    }
}

/// Zoom bound to platform-modifier + `=`, `-`, `0`.
pub fn shortcut_zoom(key: char, command: bool) -> Option<ZoomCommand> {
    if !command {
        return None;
    }
    match key {
        '=' => Some(ZoomCommand::In),
        '-' => Some(ZoomCommand::Out),
        '0' => Some(ZoomCommand::Reset),
        _ => None,
    }
}
