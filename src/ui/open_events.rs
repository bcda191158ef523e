//! Files the OS asks the running viewer to open (macOS "Open With", Finder
//! double-click). These arrive as Apple Events instead of launch arguments.

use std::cell::RefCell;
use std::rc::Rc;

use fltk::app::Sender;

use crate::app::coordinator::EventCoordinator;
use crate::app::domain::Message;
use crate::app::infrastructure::launch::LaunchFile;

struct OpenRoute {
    coordinator: Rc<EventCoordinator>,
    slot: LaunchFile,
    sender: Sender<Message>,
}

thread_local! {
    // FLTK's open callback is a plain fn pointer and fires on the UI thread.
    static OPEN_ROUTE: RefCell<Option<OpenRoute>> = const { RefCell::new(None) };
}

/// Route opened files into `slot` while launch polling runs, and as
/// `OpenPath` triggers on `sender` afterwards.
pub fn install(coordinator: Rc<EventCoordinator>, slot: LaunchFile, sender: Sender<Message>) {
    OPEN_ROUTE.with(|route| {
        *route.borrow_mut() = Some(OpenRoute {
            coordinator,
            slot,
            sender,
        });
    });
    fltk::app::raw_open_callback(Some(on_open));
}

fn deliver(path: &str) {
    OPEN_ROUTE.with(|route| {
        if let Some(route) = route.borrow().as_ref() {
            if let Some(message) = route.coordinator.host_opened(&route.slot, path) {
                route.sender.send(message);
            }
        }
    });
}

fn on_open(path: *const std::os::raw::c_char) {
    if path.is_null() {
        return;
    }
    // SAFETY: FLTK hands over a NUL-terminated path valid for the duration of the call.
    let path = unsafe { std::ffi::CStr::from_ptr(path) }.to_string_lossy().into_owned();
    tracing::info!(path = %path, "Host opened file");
    deliver(&path);
}
