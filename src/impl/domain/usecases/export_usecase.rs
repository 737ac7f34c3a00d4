use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use fractic_server_error::ServerError;

use crate::{
    data::datasources::local_file_mover::LocalFileMover,
    domain::logic::receipt_naming::{pdf_file_name, unique_pdf_file_name},
    entities::{FileMover, HtmlToPdf, Receipt, SaveTarget, ShareTarget},
    errors::{
        PdfGenerationFailed, PdfGenerationTimedOut, SaveFailed, ShareFailed, ShareUnavailable,
    },
    presentation::templates::render_receipt,
};

const PDF_MIME_TYPE: &str = "application/pdf";

#[async_trait]
pub(crate) trait ExportUsecase: Send + Sync {
    /// Renders, prints and files the PDF for `receipt`. Returns the final
    /// path. Does not touch the repository.
    async fn export_to_pdf(&self, receipt: &Receipt) -> Result<PathBuf, ServerError>;

    async fn share(&self, path: &Path) -> Result<(), ServerError>;

    /// `false` when the user cancelled.
    async fn save(&self, path: &Path, file_name: &str) -> Result<bool, ServerError>;
}

pub(crate) struct ExportUsecaseImpl<
    P,
    S,
    V,
    M = LocalFileMover, // Default.
> where
    P: HtmlToPdf,
    S: ShareTarget,
    V: SaveTarget,
    M: FileMover,
{
    printer: P,
    share_target: S,
    save_target: V,
    file_mover: M,
    documents_dir: PathBuf,
    timeout: Option<Duration>,
    share_dialog_title: String,
}

impl<P, S, V, M> ExportUsecaseImpl<P, S, V, M>
where
    P: HtmlToPdf,
    S: ShareTarget,
    V: SaveTarget,
    M: FileMover,
{
    pub(crate) fn new(
        printer: P,
        share_target: S,
        save_target: V,
        file_mover: M,
        documents_dir: PathBuf,
        timeout: Option<Duration>,
        share_dialog_title: String,
    ) -> Self {
        Self {
            printer,
            share_target,
            save_target,
            file_mover,
            documents_dir,
            timeout,
            share_dialog_title,
        }
    }

    async fn print(&self, receipt: &Receipt, html: &str) -> Result<PathBuf, ServerError> {
        let id = receipt.id.to_string();
        let printed = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.printer.print_to_file(html))
                .await
                .map_err(|_| PdfGenerationTimedOut::new(&id, limit.as_millis() as u64))?,
            None => self.printer.print_to_file(html).await,
        };
        printed.map_err(|e| PdfGenerationFailed::with_debug(&id, &e))
    }

    /// The short name unless a different receipt's PDF already sits there.
    async fn target_path(&self, receipt: &Receipt) -> PathBuf {
        let preferred = self.documents_dir.join(pdf_file_name(receipt));
        let owned = receipt.pdf_uri == Some(preferred.display().to_string());
        if owned || !tokio::fs::try_exists(&preferred).await.unwrap_or(false) {
            return preferred;
        }
        tracing::debug!(
            receipt_id = %receipt.id,
            taken = %preferred.display(),
            "short PDF name in use, falling back to full id"
        );
        self.documents_dir.join(unique_pdf_file_name(receipt))
    }

    #[cfg(test)]
    pub(crate) fn printer(&self) -> &P {
        &self.printer
    }

    #[cfg(test)]
    pub(crate) fn share_target(&self) -> &S {
        &self.share_target
    }

    #[cfg(test)]
    pub(crate) fn save_target(&self) -> &V {
        &self.save_target
    }
}

#[async_trait]
impl<P, S, V, M> ExportUsecase for ExportUsecaseImpl<P, S, V, M>
where
    P: HtmlToPdf,
    S: ShareTarget,
    V: SaveTarget,
    M: FileMover,
{
    async fn export_to_pdf(&self, receipt: &Receipt) -> Result<PathBuf, ServerError> {
        let html = render_receipt(receipt);
        tracing::debug!(
            receipt_id = %receipt.id,
            template = %receipt.template_id,
            html_len = html.len(),
            "rendered receipt"
        );

        let temp_path = self.print(receipt, &html).await.inspect_err(|e| {
            tracing::warn!(receipt_id = %receipt.id, error = ?e, "PDF generation failed");
        })?;

        let final_path = self.target_path(receipt).await;
        self.file_mover.move_file(&temp_path, &final_path).await?;
        tracing::info!(
            receipt_id = %receipt.id,
            path = %final_path.display(),
            "receipt exported"
        );
        Ok(final_path)
    }

    async fn share(&self, path: &Path) -> Result<(), ServerError> {
        if !self.share_target.is_available().await {
            tracing::warn!(path = %path.display(), "share requested but unavailable");
            return Err(ShareUnavailable::new());
        }
        self.share_target
            .share(path, &self.share_dialog_title, PDF_MIME_TYPE)
            .await
            .map_err(|e| ShareFailed::with_debug(&path.display().to_string(), &e))?;
        tracing::info!(path = %path.display(), "receipt shared");
        Ok(())
    }

    async fn save(&self, path: &Path, file_name: &str) -> Result<bool, ServerError> {
        let saved = self
            .save_target
            .save(path, file_name, PDF_MIME_TYPE)
            .await
            .map_err(|e| SaveFailed::with_debug(&path.display().to_string(), &e))?;
        tracing::info!(path = %path.display(), file_name, saved, "save to device finished");
        Ok(saved)
    }
}
