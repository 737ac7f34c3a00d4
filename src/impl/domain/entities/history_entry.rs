use super::{receipt::Receipt, totals::ReceiptTotals};

/// A stored receipt together with the figures shown in the history list.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub receipt: Receipt,
    pub totals: ReceiptTotals,
    pub receipt_number: String,
    pub formatted_total: String,
    pub formatted_date: String,
    /// Vehicle summaries joined, ex. "2021 Toyota Camry • VIN: ...".
    pub vehicle_summary: String,
}
