use std::path::{Path, PathBuf};

use fractic_server_error::ServerError;
use ron::from_str;
use serde_derive::Deserialize;
use tokio::fs;

use crate::{
    data::repositories::receipts_repository_impl::{DEFAULT_CAPACITY, DEFAULT_STORAGE_KEY},
    entities::TemplateId,
    errors::{InvalidRon, ReadError},
};

/// Settings for [`crate::util::CarReceiptsUtil`]. Every field may be omitted
/// from the RON source and falls back to its default.
///
/// ```text
/// (
///     storage_key: "receipts",
///     max_receipts: 500,
///     documents_dir: "/data/receipts",
///     default_template: professional,
///     pdf_timeout_secs: Some(30),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CarReceiptsConfig {
    /// Key the receipt history is stored under.
    pub storage_key: String,
    /// Oldest receipts are evicted beyond this count.
    pub max_receipts: usize,
    /// Where exported PDFs are moved to.
    pub documents_dir: PathBuf,
    /// Prefilled into new drafts.
    pub default_currency: String,
    pub default_template: TemplateId,
    /// Upper bound on HTML-to-PDF conversion. Unbounded when `None`.
    pub pdf_timeout_secs: Option<u64>,
    pub share_dialog_title: String,
}

impl Default for CarReceiptsConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_receipts: DEFAULT_CAPACITY,
            documents_dir: PathBuf::from("."),
            default_currency: "USD".to_string(),
            default_template: TemplateId::default(),
            pdf_timeout_secs: None,
            share_dialog_title: "Share Receipt PDF".to_string(),
        }
    }
}

impl CarReceiptsConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ServerError> {
        from_str(s).map_err(|e| InvalidRon::with_debug("CarReceiptsConfig", &e))
    }

    pub async fn from_ron_file<P: AsRef<Path>>(path: P) -> Result<Self, ServerError> {
        let s = fs::read_to_string(path)
            .await
            .map_err(|e| ReadError::with_debug(&e))?;
        Self::from_ron_str(&s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_struct_uses_defaults() {
        let config = CarReceiptsConfig::from_ron_str("()").unwrap();
        assert_eq!(config, CarReceiptsConfig::default());
        assert_eq!(config.storage_key, "receipts");
        assert_eq!(config.max_receipts, 500);
        assert_eq!(config.default_template, TemplateId::Minimal);
        assert_eq!(config.pdf_timeout_secs, None);
    }

    #[test]
    fn parses_overrides() {
        let config = CarReceiptsConfig::from_ron_str(
            r#"(
                storage_key: "fleet-receipts",
                max_receipts: 50,
                documents_dir: "/tmp/receipts",
                default_currency: "EUR",
                default_template: compact,
                pdf_timeout_secs: Some(15),
            )"#,
        )
        .unwrap();
        assert_eq!(config.storage_key, "fleet-receipts");
        assert_eq!(config.max_receipts, 50);
        assert_eq!(config.documents_dir, PathBuf::from("/tmp/receipts"));
        assert_eq!(config.default_currency, "EUR");
        assert_eq!(config.default_template, TemplateId::Compact);
        assert_eq!(config.pdf_timeout_secs, Some(15));
        assert_eq!(config.share_dialog_title, "Share Receipt PDF");
    }

    #[test]
    fn rejects_malformed_ron() {
        assert!(CarReceiptsConfig::from_ron_str("(max_receipts: \"many\")").is_err());
        assert!(CarReceiptsConfig::from_ron_str("(default_template: neon)").is_err());
    }

    #[tokio::test]
    async fn reads_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("receipts.ron");
        fs::write(&path, "(max_receipts: 10)").await.unwrap();

        let config = CarReceiptsConfig::from_ron_file(&path).await.unwrap();
        assert_eq!(config.max_receipts, 10);

        assert!(CarReceiptsConfig::from_ron_file(dir.path().join("missing.ron"))
            .await
            .is_err());
    }
}
