use std::{path::PathBuf, time::Duration};

use chrono::{Datelike as _, Utc};
use fractic_server_error::ServerError;

use crate::{
    config::CarReceiptsConfig,
    data::{
        datasources::{key_value_datasource::KeyValueDatasource, local_file_mover::LocalFileMover},
        repositories::receipts_repository_impl::ReceiptsRepositoryImpl,
    },
    domain::{
        logic::validation::validate_draft,
        usecases::{
            export_usecase::ExportUsecaseImpl,
            receipt_usecase::{ReceiptUsecase as _, ReceiptUsecaseImpl},
        },
    },
    entities::{
        FieldIssue, FileMover, HistoryEntry, HtmlToPdf, LogoPicker, Receipt, ReceiptDraft,
        ReceiptId, SaveTarget, ShareTarget, TemplateId,
    },
};

/// Platform services the embedding app provides.
pub struct Platform<P, S, V, L, M = LocalFileMover>
where
    P: HtmlToPdf,
    S: ShareTarget,
    V: SaveTarget,
    L: LogoPicker,
    M: FileMover,
{
    pub printer: P,
    pub share_target: S,
    pub save_target: V,
    pub logo_picker: L,
    pub file_mover: M,
}

impl<P, S, V, L> Platform<P, S, V, L>
where
    P: HtmlToPdf,
    S: ShareTarget,
    V: SaveTarget,
    L: LogoPicker,
{
    /// Uses the local filesystem to move exported PDFs into place.
    pub fn new(printer: P, share_target: S, save_target: V, logo_picker: L) -> Self {
        Self {
            printer,
            share_target,
            save_target,
            logo_picker,
            file_mover: LocalFileMover::new(),
        }
    }
}

/// Entry point: create, list, export, share and delete receipts.
pub struct CarReceiptsUtil<DS, P, S, V, L, M = LocalFileMover>
where
    DS: KeyValueDatasource,
    P: HtmlToPdf,
    S: ShareTarget,
    V: SaveTarget,
    L: LogoPicker,
    M: FileMover,
{
    receipt_usecase:
        ReceiptUsecaseImpl<ReceiptsRepositoryImpl<DS>, ExportUsecaseImpl<P, S, V, M>, L>,
    default_currency: String,
    default_template: TemplateId,
}

impl<DS, P, S, V, L, M> CarReceiptsUtil<DS, P, S, V, L, M>
where
    DS: KeyValueDatasource,
    P: HtmlToPdf,
    S: ShareTarget,
    V: SaveTarget,
    L: LogoPicker,
    M: FileMover,
{
    pub fn new(
        config: &CarReceiptsConfig,
        datasource: DS,
        platform: Platform<P, S, V, L, M>,
    ) -> Self {
        let repository = ReceiptsRepositoryImpl::with_settings(
            datasource,
            &config.storage_key,
            config.max_receipts,
        );
        let export_usecase = ExportUsecaseImpl::new(
            platform.printer,
            platform.share_target,
            platform.save_target,
            platform.file_mover,
            config.documents_dir.clone(),
            config.pdf_timeout_secs.map(Duration::from_secs),
            config.share_dialog_title.clone(),
        );
        Self {
            receipt_usecase: ReceiptUsecaseImpl::new(
                repository,
                export_usecase,
                platform.logo_picker,
            ),
            default_currency: config.default_currency.clone(),
            default_template: config.default_template,
        }
    }

    /// Empty draft prefilled with the configured currency and template.
    pub fn new_draft(&self) -> ReceiptDraft {
        ReceiptDraft {
            currency: self.default_currency.clone(),
            template_id: self.default_template,
            ..Default::default()
        }
    }

    /// Field issues for live form feedback. Empty means the draft would be
    /// accepted by [`Self::submit`].
    pub fn validate(&self, draft: &ReceiptDraft) -> Vec<FieldIssue> {
        validate_draft(draft, Utc::now().year())
    }

    pub async fn submit(&self, draft: ReceiptDraft) -> Result<Receipt, ServerError> {
        self.receipt_usecase.submit(draft).await
    }

    /// Saves, then exports. If the export fails the receipt stays saved
    /// without a PDF and the export error is returned.
    pub async fn submit_and_export(&self, draft: ReceiptDraft) -> Result<Receipt, ServerError> {
        self.receipt_usecase.submit_and_export(draft).await
    }

    pub async fn export(&self, id: &ReceiptId) -> Result<Receipt, ServerError> {
        self.receipt_usecase.export(id).await
    }

    pub async fn ensure_pdf(&self, id: &ReceiptId) -> Result<PathBuf, ServerError> {
        self.receipt_usecase.ensure_pdf(id).await
    }

    pub async fn share(&self, id: &ReceiptId) -> Result<(), ServerError> {
        self.receipt_usecase.share(id).await
    }

    pub async fn save_to_device(&self, id: &ReceiptId) -> Result<bool, ServerError> {
        self.receipt_usecase.save_to_device(id).await
    }

    pub async fn history(&self) -> Result<Vec<HistoryEntry>, ServerError> {
        self.receipt_usecase.history().await
    }

    pub async fn delete(&self, id: &ReceiptId) -> Result<bool, ServerError> {
        self.receipt_usecase.delete(id).await
    }

    pub async fn pick_logo(&self) -> Result<Option<String>, ServerError> {
        self.receipt_usecase.pick_logo().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        data::datasources::key_value_datasource::FileKeyValueDatasource,
        entities::VehicleDraft,
        test_fixtures::{FakeLogoPicker, FakePdfPrinter, FakeSaveTarget, FakeShareTarget},
    };

    #[tokio::test]
    async fn end_to_end_with_file_store() {
        let tmp = tempfile::tempdir().unwrap();
        let config = CarReceiptsConfig::from_ron_str(&format!(
            r#"(documents_dir: "{}", default_currency: "EUR", default_template: card)"#,
            tmp.path().join("docs").display()
        ))
        .unwrap();
        let platform = Platform::new(
            FakePdfPrinter::new(tmp.path()),
            FakeShareTarget::default(),
            FakeSaveTarget::default(),
            FakeLogoPicker::default(),
        );
        let util = CarReceiptsUtil::new(
            &config,
            FileKeyValueDatasource::new(tmp.path().join("store")),
            platform,
        );

        let mut draft = util.new_draft();
        assert_eq!(draft.currency, "EUR");
        assert_eq!(draft.template_id, TemplateId::Card);
        assert!(!util.validate(&draft).is_empty());

        draft.company_name = "Acme".to_string();
        draft.vehicles.push(VehicleDraft {
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2021,
            mileage: None,
            vin: "1HGCM82633A004352".to_string(),
            cost: Some(800.0),
        });
        assert!(util.validate(&draft).is_empty());

        let receipt = util.submit_and_export(draft).await.unwrap();
        let pdf = util.ensure_pdf(&receipt.id).await.unwrap();
        assert!(pdf.starts_with(tmp.path().join("docs")));
        assert!(tmp.path().join("store/receipts.json").exists());

        let history = util.history().await.unwrap();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].formatted_total, "€800.00");

        assert!(util.delete(&receipt.id).await.unwrap());
        assert!(util.history().await.unwrap().is_empty());
    }
}
