use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Config-related.
define_client_error!(InvalidRon, "Invalid {ron_type} (invalid RON format).", { ron_type: &str });

// Validation-related.
define_client_error!(InvalidReceipt, "Invalid receipt: {details}.", { details: &str });
define_client_error!(
    InvalidLogoImage,
    "Invalid logo image: {details}.",
    { details: &str }
);

// Persistence-related.
define_internal_error!(
    StoreReadFailed,
    "Failed to read key '{key}' from the receipt store.",
    { key: &str }
);
define_internal_error!(
    StoreWriteFailed,
    "Failed to write key '{key}' to the receipt store.",
    { key: &str }
);
define_internal_error!(
    InvalidStoredReceipts,
    "Stored receipts under key '{key}' could not be parsed.",
    { key: &str }
);
define_internal_error!(SerializeReceiptsFailed, "Failed to serialize receipts.");
define_client_error!(
    InvalidStoredDate,
    "Invalid ISO date-time: {date}.",
    { date: &str }
);
define_client_error!(
    DuplicateReceiptId,
    "A receipt with id '{id}' already exists.",
    { id: &str }
);
define_client_error!(ReceiptNotFound, "Receipt '{id}' not found.", { id: &str });

// Export-related.
define_internal_error!(
    PdfGenerationFailed,
    "PDF generation failed for receipt '{id}'.",
    { id: &str }
);
define_internal_error!(
    PdfGenerationTimedOut,
    "PDF generation for receipt '{id}' did not finish within {limit_ms} ms.",
    { id: &str, limit_ms: u64 }
);
define_internal_error!(
    PdfRelocationFailed,
    "Could not move generated PDF from '{from}' to '{to}'.",
    { from: &str, to: &str }
);

// Share/save-related.
define_client_error!(ShareUnavailable, "Sharing is not available on this device.");
define_internal_error!(ShareFailed, "Sharing '{path}' failed.", { path: &str });
define_internal_error!(SaveFailed, "Saving '{path}' failed.", { path: &str });
