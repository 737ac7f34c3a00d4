use std::path::Path;

use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::fs;

use crate::{entities::FileMover, errors::PdfRelocationFailed};

/// Moves files on the local filesystem. Falls back to copy + remove when a
/// plain rename is not possible (ex. across mount points).
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileMover;

impl LocalFileMover {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileMover for LocalFileMover {
    async fn move_file(&self, from: &Path, to: &Path) -> Result<(), ServerError> {
        let err = |e: &std::io::Error| {
            PdfRelocationFailed::with_debug(
                &from.display().to_string(),
                &to.display().to_string(),
                e,
            )
        };
        if let Some(parent) = to.parent() {
            fs::create_dir_all(parent).await.map_err(|e| err(&e))?;
        }
        if fs::rename(from, to).await.is_ok() {
            return Ok(());
        }
        fs::copy(from, to).await.map_err(|e| err(&e))?;
        fs::remove_file(from).await.map_err(|e| err(&e))?;
        Ok(())
    }
}
