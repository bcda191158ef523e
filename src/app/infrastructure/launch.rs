use std::cell::RefCell;
use std::rc::Rc;

use async_trait::async_trait;

use crate::app::capabilities::PendingFileSource;
use crate::app::infrastructure::error::Result;

/// Take-once slot for the file the process was launched to open.
///
/// Seeded from the command line; the host may refill it when an "opened"
/// event arrives before the UI is ready. Each offered path is handed out once.
#[derive(Debug, Default, Clone)]
pub struct LaunchFile {
    slot: Rc<RefCell<Option<String>>>,
}

impl LaunchFile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from launch arguments (program name already skipped). Flags such
    /// as macOS's `-psn_…` are ignored.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let launch = Self::new();
        if let Some(path) = args
            .into_iter()
            .find(|arg| !arg.is_empty() && !arg.starts_with('-'))
        {
            launch.offer(path);
        }
        launch
    }

    /// Replace the pending path.
    pub fn offer(&self, path: impl Into<String>) {
        *self.slot.borrow_mut() = Some(path.into());
    }
}

#[async_trait(?Send)]
impl PendingFileSource for LaunchFile {
    async fn pending_file(&self) -> Result<Option<String>> {
        Ok(self.slot.borrow_mut().take())
    }
}
