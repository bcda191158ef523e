use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, error, info};

use crate::app::capabilities::{FileSystem, MarkdownRenderer, Viewport};
use crate::app::domain::{DocumentRequest, LoadOrdering, RequestId};
use crate::app::infrastructure::error::Result;

/// How a single `load` settled. Failures are already reported in the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    Failed,
    /// A newer request was issued while this one was in flight; nothing was written.
    Superseded,
}

/// Reads a file, renders it and pushes the result (or an error placeholder)
/// into the viewport's content pane.
pub struct DocumentLoader {
    filesystem: Rc<dyn FileSystem>,
    renderer: Rc<dyn MarkdownRenderer>,
    viewport: Rc<dyn Viewport>,
    ordering: LoadOrdering,
    last_issued: Cell<u64>,
}

impl DocumentLoader {
    pub fn new(
        filesystem: Rc<dyn FileSystem>,
        renderer: Rc<dyn MarkdownRenderer>,
        viewport: Rc<dyn Viewport>,
        ordering: LoadOrdering,
    ) -> Self {
        Self {
            filesystem,
            renderer,
            viewport,
            ordering,
            last_issued: Cell::new(0),
        }
    }

    pub fn ordering(&self) -> LoadOrdering {
        self.ordering
    }

    /// Load `path` into the viewport. Never fails from the caller's point of view.
    pub async fn load(&self, path: &str) -> LoadOutcome {
        let request = self.issue(path);
        info!(path = %request.path, id = request.id.0, "Loading document");

        let result = self.fetch_and_render(&request).await;

        if self.is_stale(&request) {
            debug!(path = %request.path, id = request.id.0, "Discarding superseded load");
            return LoadOutcome::Superseded;
        }

        match result {
            Ok(html) => {
                self.viewport.set_content(&html);
                self.viewport.set_filename(request.display_name());
                LoadOutcome::Rendered
            }
            Err(err) => {
                error!(path = %request.path, "Error: {err}");
                self.viewport.set_content(&placeholder(&err));
                LoadOutcome::Failed
            }
        }
    }

    fn issue(&self, path: &str) -> DocumentRequest {
        let id = self.last_issued.get() + 1;
        self.last_issued.set(id);
        DocumentRequest::new(RequestId(id), path)
    }

    fn is_stale(&self, request: &DocumentRequest) -> bool {
        match self.ordering {
            LoadOrdering::LastCompleted => false,
            LoadOrdering::LatestRequest => request.id.0 != self.last_issued.get(),
        }
    }

    async fn fetch_and_render(&self, request: &DocumentRequest) -> Result<String> {
        let text = self.filesystem.read_text(&request.path).await?.into_text();
        self.renderer.render(&text).await
    }
}

/// Content shown in place of a document that could not be loaded.
pub fn placeholder(err: &dyn std::fmt::Display) -> String {
    format!("<p class=\"placeholder\">Error: {}</p>", err)
}
