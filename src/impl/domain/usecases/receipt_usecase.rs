use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use fractic_server_error::ServerError;

use crate::{
    domain::{
        logic::{
            logo::logo_data_uri,
            receipt_naming::{receipt_number, save_file_name},
            totals::compute_totals,
            validation::build_receipt,
        },
        repositories::receipts_repository::ReceiptsRepository,
        usecases::export_usecase::ExportUsecase,
    },
    entities::{HistoryEntry, LogoPicker, Receipt, ReceiptDraft, ReceiptId},
    errors::{InvalidLogoImage, ReceiptNotFound},
    presentation::utils::{format_currency, format_date},
};

#[async_trait]
pub(crate) trait ReceiptUsecase: Send + Sync {
    async fn submit(&self, draft: ReceiptDraft) -> Result<Receipt, ServerError>;
    async fn submit_and_export(&self, draft: ReceiptDraft) -> Result<Receipt, ServerError>;
    async fn export(&self, id: &ReceiptId) -> Result<Receipt, ServerError>;
    async fn ensure_pdf(&self, id: &ReceiptId) -> Result<PathBuf, ServerError>;
    async fn share(&self, id: &ReceiptId) -> Result<(), ServerError>;
    async fn save_to_device(&self, id: &ReceiptId) -> Result<bool, ServerError>;
    async fn history(&self) -> Result<Vec<HistoryEntry>, ServerError>;
    async fn delete(&self, id: &ReceiptId) -> Result<bool, ServerError>;
    async fn pick_logo(&self) -> Result<Option<String>, ServerError>;
}

pub(crate) struct ReceiptUsecaseImpl<R, E, L>
where
    R: ReceiptsRepository,
    E: ExportUsecase,
    L: LogoPicker,
{
    receipts_repository: R,
    export_usecase: E,
    logo_picker: L,
}

impl<R, E, L> ReceiptUsecaseImpl<R, E, L>
where
    R: ReceiptsRepository,
    E: ExportUsecase,
    L: LogoPicker,
{
    pub(crate) fn new(receipts_repository: R, export_usecase: E, logo_picker: L) -> Self {
        Self {
            receipts_repository,
            export_usecase,
            logo_picker,
        }
    }

    async fn load(&self, id: &ReceiptId) -> Result<Receipt, ServerError> {
        self.receipts_repository
            .get(id)
            .await?
            .ok_or_else(|| ReceiptNotFound::new(&id.0))
    }

    /// Exports and records the path. The record is only touched once the PDF
    /// is in its final place.
    async fn export_receipt(&self, mut receipt: Receipt) -> Result<Receipt, ServerError> {
        let path = self.export_usecase.export_to_pdf(&receipt).await?;
        let pdf_uri = path.display().to_string();
        if !self
            .receipts_repository
            .set_pdf_uri(&receipt.id, &pdf_uri)
            .await?
        {
            return Err(ReceiptNotFound::new(&receipt.id.0));
        }
        receipt.pdf_uri = Some(pdf_uri);
        Ok(receipt)
    }

    async fn ensure_pdf_for(&self, receipt: Receipt) -> Result<PathBuf, ServerError> {
        if let Some(uri) = &receipt.pdf_uri {
            return Ok(PathBuf::from(uri));
        }
        let exported = self.export_receipt(receipt).await?;
        Ok(exported.pdf_uri.map(PathBuf::from).unwrap_or_default())
    }
}

#[async_trait]
impl<R, E, L> ReceiptUsecase for ReceiptUsecaseImpl<R, E, L>
where
    R: ReceiptsRepository,
    E: ExportUsecase,
    L: LogoPicker,
{
    async fn submit(&self, draft: ReceiptDraft) -> Result<Receipt, ServerError> {
        let receipt = build_receipt(draft, ReceiptId::generate(), Utc::now())?;
        self.receipts_repository.insert(receipt.clone()).await?;
        Ok(receipt)
    }

    async fn submit_and_export(&self, draft: ReceiptDraft) -> Result<Receipt, ServerError> {
        let receipt = self.submit(draft).await?;
        self.export_receipt(receipt).await
    }

    async fn export(&self, id: &ReceiptId) -> Result<Receipt, ServerError> {
        let receipt = self.load(id).await?;
        self.export_receipt(receipt).await
    }

    async fn ensure_pdf(&self, id: &ReceiptId) -> Result<PathBuf, ServerError> {
        let receipt = self.load(id).await?;
        self.ensure_pdf_for(receipt).await
    }

    async fn share(&self, id: &ReceiptId) -> Result<(), ServerError> {
        let path = self.ensure_pdf(id).await?;
        self.export_usecase.share(&path).await
    }

    async fn save_to_device(&self, id: &ReceiptId) -> Result<bool, ServerError> {
        let receipt = self.load(id).await?;
        let file_name = save_file_name(&receipt);
        let path = self.ensure_pdf_for(receipt).await?;
        self.export_usecase.save(&path, &file_name).await
    }

    async fn history(&self) -> Result<Vec<HistoryEntry>, ServerError> {
        Ok(self
            .receipts_repository
            .list()
            .await?
            .into_iter()
            .map(|receipt| {
                let totals = compute_totals(&receipt);
                HistoryEntry {
                    receipt_number: receipt_number(&receipt),
                    formatted_total: format_currency(totals.total, &receipt.currency),
                    formatted_date: format_date(&receipt.created_at),
                    vehicle_summary: receipt
                        .vehicles
                        .iter()
                        .map(|v| v.summary())
                        .collect::<Vec<_>>()
                        .join("; "),
                    totals,
                    receipt,
                }
            })
            .collect())
    }

    async fn delete(&self, id: &ReceiptId) -> Result<bool, ServerError> {
        self.receipts_repository.delete(id).await
    }

    async fn pick_logo(&self) -> Result<Option<String>, ServerError> {
        let Some(image) = self.logo_picker.pick().await? else {
            return Ok(None);
        };
        if image.bytes.is_empty() {
            return Err(InvalidLogoImage::new("picked image is empty"));
        }
        Ok(Some(logo_data_uri(&image)))
    }
}
