use std::fmt;

use chrono::{DateTime, Utc};

use super::{template::TemplateId, vehicle::Vehicle};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReceiptId(pub String);

impl ReceiptId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// First 8 characters of the id, used for receipt numbers and file names.
    pub fn short(&self) -> &str {
        match self.0.char_indices().nth(8) {
            Some((end, _)) => &self.0[..end],
            None => &self.0,
        }
    }
}

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Company {
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    /// Embeddable data URI, ex. "data:image/png;base64,...".
    pub logo: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.address.is_none()
    }
}

/// How the vehicle cost of a receipt is priced.
///
/// Older records carry a single aggregate cost for all vehicles, newer ones
/// carry a cost on each vehicle. Decided once when a record is read, never
/// re-inferred from field presence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VehiclePricing {
    /// Each vehicle's own cost counts; a vehicle without one contributes 0.
    Itemized,
    /// Vehicles carry no cost; `car_cost` is the total and is shown split
    /// evenly across vehicles.
    LegacyAggregate { car_cost: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub id: ReceiptId,
    pub created_at: DateTime<Utc>,
    pub company: Company,
    pub customer: Option<Customer>,
    pub vehicles: Vec<Vehicle>,
    pub pricing: VehiclePricing,
    pub service_charge: f64,
    /// Fraction, ex. 0.07 for 7%.
    pub tax_rate: Option<f64>,
    pub currency: String,
    pub notes: Option<String>,
    pub template_id: TemplateId,
    pub pdf_uri: Option<String>,
}
