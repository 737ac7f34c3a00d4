use std::fmt;

use super::template::TemplateId;

/// Raw form input for a new receipt, before validation.
///
/// Text fields are taken as typed; blank optional fields are treated as
/// absent.
#[derive(Debug, Clone, Default)]
pub struct ReceiptDraft {
    pub company_name: String,
    pub company_address: Option<String>,
    pub company_phone: Option<String>,
    pub company_email: Option<String>,
    pub company_logo: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub vehicles: Vec<VehicleDraft>,
    pub service_charge: f64,
    pub tax_rate: Option<f64>,
    pub currency: String,
    pub notes: Option<String>,
    pub template_id: TemplateId,
}

#[derive(Debug, Clone, Default)]
pub struct VehicleDraft {
    pub make: String,
    pub model: String,
    pub year: i32,
    pub mileage: Option<i64>,
    pub vin: String,
    pub cost: Option<f64>,
}

/// A single invalid form field. `field` uses form paths, ex. "vehicles[1].vin".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub(crate) fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}
