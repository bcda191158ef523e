use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use tokio::time::Instant;
use tracing::{debug, info, warn};

use crate::app::capabilities::PendingFileSource;
use crate::app::controllers::loader::DocumentLoader;

/// Offsets from startup at which the host is asked for a pending file.
pub const LAUNCH_POLL_OFFSETS: [Duration; 3] = [
    Duration::ZERO,
    Duration::from_millis(300),
    Duration::from_millis(1000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    Idle,
    Polling { attempts_made: usize },
    Found,
    Exhausted,
}

/// Picks up the file the process was launched with, which the host may only
/// deliver some time after the UI is ready.
pub struct LaunchReconciler {
    source: Rc<dyn PendingFileSource>,
    loader: Rc<DocumentLoader>,
    offsets: Vec<Duration>,
    state: Cell<LaunchState>,
}

impl LaunchReconciler {
    pub fn new(source: Rc<dyn PendingFileSource>, loader: Rc<DocumentLoader>) -> Self {
        Self::with_offsets(source, loader, LAUNCH_POLL_OFFSETS.to_vec())
    }

    pub fn with_offsets(
        source: Rc<dyn PendingFileSource>,
        loader: Rc<DocumentLoader>,
        offsets: Vec<Duration>,
    ) -> Self {
        Self {
            source,
            loader,
            offsets,
            state: Cell::new(LaunchState::Idle),
        }
    }

    pub fn state(&self) -> LaunchState {
        self.state.get()
    }

    /// Whether a pending file offered now would still be picked up.
    pub fn is_waiting(&self) -> bool {
        matches!(self.state.get(), LaunchState::Idle | LaunchState::Polling { .. })
    }

    /// Poll until a file turns up or every attempt came back empty.
    ///
    /// Each attempt fires at its own offset from the start, independent of
    /// how long earlier queries take. The first attempt that finds a path
    /// wins; the others are dropped. Only runs from `Idle`; later calls return
    /// the settled state untouched.
    pub async fn run(&self) -> LaunchState {
        if self.state.get() != LaunchState::Idle {
            return self.state.get();
        }

        let started = Instant::now();
        self.state.set(LaunchState::Polling { attempts_made: 0 });
        let mut attempts: FuturesUnordered<_> = self
            .offsets
            .iter()
            .enumerate()
            .map(|(index, offset)| self.attempt(index + 1, started + *offset))
            .collect();

        let mut attempts_made = 0;
        while let Some(pending) = attempts.next().await {
            attempts_made += 1;
            if let Some(path) = pending {
                drop(attempts);
                info!(path = %path, attempts_made, "Opening launch file");
                self.state.set(LaunchState::Found);
                self.loader.load(&path).await;
                return LaunchState::Found;
            }
            self.state.set(LaunchState::Polling { attempts_made });
        }

        self.state.set(LaunchState::Exhausted);
        debug!("Gave up waiting for a launch file");
        LaunchState::Exhausted
    }

    async fn attempt(&self, attempt: usize, at: Instant) -> Option<String> {
        tokio::time::sleep_until(at).await;
        match self.source.pending_file().await {
            Ok(Some(path)) if !path.is_empty() => Some(path),
            Ok(_) => {
                debug!(attempt, "No launch file yet");
                None
            }
            Err(err) => {
                warn!(attempt, "Error checking opened file: {err}");
                None
            }
        }
    }
}
