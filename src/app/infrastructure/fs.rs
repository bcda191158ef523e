use async_trait::async_trait;

use crate::app::capabilities::{FileContents, FileSystem};
use crate::app::infrastructure::error::Result;

/// Reads files through `tokio::fs`, returning raw bytes for the loader to decode.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioFileSystem;

#[async_trait(?Send)]
impl FileSystem for TokioFileSystem {
    async fn read_text(&self, path: &str) -> Result<FileContents> {
        let bytes = tokio::fs::read(path).await?;
        Ok(FileContents::Bytes(bytes))
    }
}
