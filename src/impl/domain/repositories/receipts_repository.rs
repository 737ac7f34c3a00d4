use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::entities::{Receipt, ReceiptId};

/// Ordered receipt history, newest first.
#[async_trait]
pub trait ReceiptsRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Receipt>, ServerError>;

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>, ServerError>;

    /// Adds at the front. When capacity is exceeded the oldest records are
    /// dropped in the same write.
    async fn insert(&self, receipt: Receipt) -> Result<(), ServerError>;

    /// Replaces the stored record with the same id. Returns `false` (and
    /// writes nothing) if there is none.
    async fn update(&self, receipt: Receipt) -> Result<bool, ServerError>;

    async fn set_pdf_uri(&self, id: &ReceiptId, pdf_uri: &str) -> Result<bool, ServerError>;

    /// Returns `false` (and writes nothing) if there is no such record.
    async fn delete(&self, id: &ReceiptId) -> Result<bool, ServerError>;
}
