use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

/// Extensions accepted from a drag-and-drop, matched case-insensitively.
static DROPPABLE_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(md|markdown|mdx|txt)$").expect("static pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestId(pub u64);

/// One attempt to show a file in the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRequest {
    pub id: RequestId,
    pub path: String,
}

impl DocumentRequest {
    pub fn new(id: RequestId, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }

    /// Text for the filename label.
    pub fn display_name(&self) -> &str {
        display_name(&self.path)
    }
}

/// How completions of overlapping loads are reconciled against the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LoadOrdering {
    /// Every load writes its result; whichever finishes last stays visible.
    #[default]
    LastCompleted,
    /// Results of loads superseded by a newer request are dropped.
    LatestRequest,
}

/// Last path segment, split on `/` (and `\` on Windows hosts).
///
/// The segment is returned verbatim, so a trailing separator yields `""`.
pub fn display_name(path: &str) -> &str {
    path.rsplit(is_separator).next().unwrap_or(path)
}

fn is_separator(c: char) -> bool {
    c == '/' || (cfg!(windows) && c == '\\')
}

/// Whether a dropped file should be opened.
pub fn is_droppable(path: &str) -> bool {
    DROPPABLE_EXTENSION.is_match(path)
}

/// Paths from a drop payload: one entry per line, either plain paths or
/// `file://` URIs. Comment lines of `text/uri-list` and URIs that do not name
/// a local file are skipped.
pub fn paths_from_uri_list(payload: &str) -> Vec<String> {
    payload
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| {
            if !line.starts_with("file:") {
                return Some(line.to_string());
            }
            Url::parse(line)
                .ok()
                .and_then(|uri| uri.to_file_path().ok())
                .map(|path| path.to_string_lossy().into_owned())
        })
        .collect()
}
