use std::rc::Rc;
use std::time::Duration;

use fltk::{app, prelude::*};
use tokio::sync::mpsc;
use tokio::task::LocalSet;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use md_viewer::app::capabilities::SystemTheme;
use md_viewer::app::{
    AppError, Capabilities, EventCoordinator, JsonPreferenceStore, LaunchFile, Message,
    PlatformTheme, PulldownRenderer, Result, ThemeMode, TokioFileSystem, ViewerSettings,
    watch_system_theme,
};
use md_viewer::ui::file_dialogs::FltkFileDialog;
use md_viewer::ui::main_window::build_main_window;
use md_viewer::ui::menu::build_menu;
use md_viewer::ui::viewport::FltkViewport;

/// Pause between FLTK pumps; the coordinator's tasks run in between.
const FRAME: Duration = Duration::from_millis(16);

fn init_tracing(settings: &ViewerSettings) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() {
    let settings = ViewerSettings::load();
    init_tracing(&settings);

    if let Err(err) = run(settings) {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(settings: ViewerSettings) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    LocalSet::new().block_on(&runtime, event_loop(settings))
}

async fn event_loop(settings: ViewerSettings) -> Result<()> {
    let _app = app::App::default();
    let (fltk_tx, fltk_rx) = app::channel::<Message>();

    let mut widgets = build_main_window(&fltk_tx);
    build_menu(&mut widgets.menu, &fltk_tx);
    widgets.wind.show();
    let wind = widgets.wind.clone();

    let system_theme = Rc::new(PlatformTheme);
    let initial_system = system_theme.current().unwrap_or(ThemeMode::Light);

    let launch_file = LaunchFile::from_args(std::env::args().skip(1));
    let preferences = JsonPreferenceStore::open_default();
    info!(path = %preferences.path().display(), "Preferences");

    let capabilities = Capabilities {
        filesystem: Rc::new(TokioFileSystem),
        dialog: Rc::new(FltkFileDialog),
        renderer: Rc::new(PulldownRenderer),
        preferences: Rc::new(preferences),
        system_theme,
        pending_file: Rc::new(launch_file.clone()),
        viewport: Rc::new(FltkViewport::new(widgets)),
    };
    let coordinator = EventCoordinator::new(capabilities, settings.load_ordering);
    info!(ordering = ?settings.load_ordering, "Viewer started");

    #[cfg(target_os = "macos")]
    md_viewer::ui::open_events::install(coordinator.clone(), launch_file.clone(), fltk_tx);

    let (tx, rx) = mpsc::unbounded_channel();
    let watcher = watch_system_theme(tx.clone(), initial_system, settings.system_theme_poll_interval());
    let routing = tokio::task::spawn_local(coordinator.run(rx));

    while wind.shown() {
        app::wait_for(0.0).map_err(|e| AppError::Ui(e.to_string()))?;
        while let Some(message) = fltk_rx.recv() {
            if tx.send(message).is_err() {
                break;
            }
        }
        tokio::time::sleep(FRAME).await;
    }

    watcher.abort();
    drop(tx);
    routing.abort();
    info!("Viewer closed");
    Ok(())
}
