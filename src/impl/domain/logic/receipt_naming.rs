use crate::entities::Receipt;

/// Human-presentable receipt number, ex. "240309-0d9a7c52". Cosmetic only.
pub fn receipt_number(receipt: &Receipt) -> String {
    format!(
        "{}-{}",
        receipt.created_at.format("%y%m%d"),
        receipt.id.short()
    )
}

/// Name of the exported PDF in the documents directory.
pub fn pdf_file_name(receipt: &Receipt) -> String {
    format!(
        "Receipt-{}-{}.pdf",
        receipt.id.short(),
        receipt.created_at.format("%Y%m%d")
    )
}

/// Fallback for [`pdf_file_name`] when the short id is already taken by
/// another receipt's PDF from the same day.
pub fn unique_pdf_file_name(receipt: &Receipt) -> String {
    format!(
        "Receipt-{}-{}.pdf",
        receipt.id,
        receipt.created_at.format("%Y%m%d")
    )
}

/// Name suggested to the user when saving the PDF to device storage.
pub fn save_file_name(receipt: &Receipt) -> String {
    format!("Receipt_{}.pdf", receipt.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::acme_receipt;

    #[test]
    fn names_derive_from_id_and_creation_date() {
        let r = acme_receipt();
        assert_eq!(receipt_number(&r), "240309-0d9a7c52");
        assert_eq!(pdf_file_name(&r), "Receipt-0d9a7c52-20240309.pdf");
        assert_eq!(
            unique_pdf_file_name(&r),
            "Receipt-0d9a7c52-5e1f-4b7a-9c3d-2f8e6a1b4c70-20240309.pdf"
        );
        assert_eq!(
            save_file_name(&r),
            "Receipt_0d9a7c52-5e1f-4b7a-9c3d-2f8e6a1b4c70.pdf"
        );
    }
}
