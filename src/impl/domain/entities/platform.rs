use std::path::{Path, PathBuf};

use async_trait::async_trait;
use fractic_server_error::ServerError;

// Document production.
// ---

#[async_trait]
pub trait HtmlToPdf: Send + Sync {
    /// Rasterizes `html` into a temporary PDF file and returns its path. The
    /// file may be moved by the caller afterwards.
    async fn print_to_file(&self, html: &str) -> Result<PathBuf, ServerError>;
}

#[async_trait]
pub trait FileMover: Send + Sync {
    async fn move_file(&self, from: &Path, to: &Path) -> Result<(), ServerError>;
}

// Hand-off.
// ---

#[async_trait]
pub trait ShareTarget: Send + Sync {
    async fn is_available(&self) -> bool;
    async fn share(&self, path: &Path, dialog_title: &str, mime_type: &str)
        -> Result<(), ServerError>;
}

#[async_trait]
pub trait SaveTarget: Send + Sync {
    /// Returns `false` when the user dismissed the dialog without saving.
    async fn save(&self, path: &Path, file_name: &str, mime_type: &str)
        -> Result<bool, ServerError>;
}

// Input.
// ---

#[derive(Debug, Clone)]
pub struct PickedImage {
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait LogoPicker: Send + Sync {
    /// `None` when the user cancelled.
    async fn pick(&self) -> Result<Option<PickedImage>, ServerError>;
}
