/// Monetary summary of a receipt, in the receipt's currency. Unrounded.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReceiptTotals {
    pub vehicle_cost: f64,
    pub service_charge: f64,
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}
