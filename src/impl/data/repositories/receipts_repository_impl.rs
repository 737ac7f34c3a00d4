use async_trait::async_trait;
use fractic_server_error::ServerError;
use tokio::sync::Mutex;

use crate::{
    data::{datasources::key_value_datasource::KeyValueDatasource, models::receipt_model::ReceiptModel},
    domain::repositories::receipts_repository::ReceiptsRepository,
    entities::{Receipt, ReceiptId},
    errors::{DuplicateReceiptId, InvalidStoredReceipts, SerializeReceiptsFailed},
};

pub(crate) const DEFAULT_STORAGE_KEY: &str = "receipts";
pub(crate) const DEFAULT_CAPACITY: usize = 500;

/// Keeps the whole history as one JSON array under a single key.
///
/// Every mutation is a read-modify-write of the full list, serialized through
/// `write_lock` so that tasks sharing this repository never lose updates.
/// Other processes writing the same key are not excluded.
pub struct ReceiptsRepositoryImpl<DS: KeyValueDatasource> {
    datasource: DS,
    key: String,
    capacity: usize,
    write_lock: Mutex<()>,
}

impl<DS: KeyValueDatasource> ReceiptsRepositoryImpl<DS> {
    pub fn new(datasource: DS) -> Self {
        Self::with_settings(datasource, DEFAULT_STORAGE_KEY, DEFAULT_CAPACITY)
    }

    pub fn with_settings(datasource: DS, key: &str, capacity: usize) -> Self {
        Self {
            datasource,
            key: key.to_string(),
            capacity: capacity.max(1),
            write_lock: Mutex::new(()),
        }
    }

    async fn load(&self) -> Result<Vec<Receipt>, ServerError> {
        let Some(raw) = self.datasource.get(&self.key).await? else {
            return Ok(Vec::new());
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let models: Vec<ReceiptModel> = serde_json::from_str(&raw)
            .map_err(|e| InvalidStoredReceipts::with_debug(&self.key, &e))?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn store(&self, receipts: &[Receipt]) -> Result<(), ServerError> {
        let models: Vec<ReceiptModel> = receipts.iter().map(ReceiptModel::from).collect();
        let raw =
            serde_json::to_string(&models).map_err(|e| SerializeReceiptsFailed::with_debug(&e))?;
        self.datasource.set(&self.key, &raw).await
    }
}

#[async_trait]
impl<DS: KeyValueDatasource> ReceiptsRepository for ReceiptsRepositoryImpl<DS> {
    async fn list(&self) -> Result<Vec<Receipt>, ServerError> {
        self.load().await
    }

    async fn get(&self, id: &ReceiptId) -> Result<Option<Receipt>, ServerError> {
        Ok(self.load().await?.into_iter().find(|r| &r.id == id))
    }

    async fn insert(&self, receipt: Receipt) -> Result<(), ServerError> {
        let _guard = self.write_lock.lock().await;
        let mut receipts = self.load().await?;
        if receipts.iter().any(|r| r.id == receipt.id) {
            return Err(DuplicateReceiptId::new(&receipt.id.0));
        }
        let id = receipt.id.clone();
        receipts.insert(0, receipt);
        if receipts.len() > self.capacity {
            let evicted = receipts.len() - self.capacity;
            receipts.truncate(self.capacity);
            tracing::debug!(evicted, capacity = self.capacity, "evicted oldest receipts");
        }
        self.store(&receipts).await?;
        tracing::info!(receipt_id = %id, "receipt saved");
        Ok(())
    }

    async fn update(&self, receipt: Receipt) -> Result<bool, ServerError> {
        let _guard = self.write_lock.lock().await;
        let mut receipts = self.load().await?;
        let Some(slot) = receipts.iter_mut().find(|r| r.id == receipt.id) else {
            tracing::debug!(receipt_id = %receipt.id, "update of unknown receipt ignored");
            return Ok(false);
        };
        *slot = receipt;
        self.store(&receipts).await?;
        Ok(true)
    }

    async fn set_pdf_uri(&self, id: &ReceiptId, pdf_uri: &str) -> Result<bool, ServerError> {
        let _guard = self.write_lock.lock().await;
        let mut receipts = self.load().await?;
        let Some(slot) = receipts.iter_mut().find(|r| &r.id == id) else {
            return Ok(false);
        };
        slot.pdf_uri = Some(pdf_uri.to_string());
        self.store(&receipts).await?;
        Ok(true)
    }

    async fn delete(&self, id: &ReceiptId) -> Result<bool, ServerError> {
        let _guard = self.write_lock.lock().await;
        let mut receipts = self.load().await?;
        let before = receipts.len();
        receipts.retain(|r| &r.id != id);
        if receipts.len() == before {
            return Ok(false);
        }
        self.store(&receipts).await?;
        tracing::info!(receipt_id = %id, "receipt deleted");
        Ok(true)
    }
}
