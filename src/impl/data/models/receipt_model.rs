use crate::entities::{
    Company, Customer, Receipt, ReceiptId, TemplateId, Vehicle, VehicleId, VehiclePricing,
};

use super::iso_date_time_model::ISODateTimeModel;

// Stored shape of a receipt. Accepts both the multi-vehicle layout and the
// older single `vehicle` layout; always writes the multi-vehicle layout.

#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReceiptModel {
    pub id: String,
    #[serde(rename = "dateISO")]
    pub date_iso: ISODateTimeModel,
    pub company: CompanyModel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer: Option<CustomerModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicles: Option<Vec<VehicleModel>>,
    #[serde(default, skip_serializing)]
    pub vehicle: Option<LegacyVehicleModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub car_cost: Option<f64>,
    #[serde(default)]
    pub service_charge: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub template_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdf_uri: Option<String>,
}

#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CompanyModel {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_base64: Option<String>,
}

#[derive(Debug, Clone, Default, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerModel {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

#[derive(Debug, Clone, serde_derive::Serialize, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VehicleModel {
    pub id: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage: Option<u64>,
    pub vin: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<f64>,
}

#[derive(Debug, Clone, serde_derive::Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LegacyVehicleModel {
    pub make: String,
    pub model: String,
    pub year: i32,
    #[serde(default)]
    pub mileage: Option<u64>,
    pub vin: String,
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.filter(|s| !s.trim().is_empty())
}

// Stored -> domain.
// ---

impl From<ReceiptModel> for Receipt {
    fn from(m: ReceiptModel) -> Self {
        let vehicles: Vec<Vehicle> = match (m.vehicles, m.vehicle) {
            (Some(vehicles), _) => vehicles.into_iter().map(Into::into).collect(),
            (None, Some(legacy)) => vec![Vehicle {
                id: VehicleId(format!("{}-v0", m.id)),
                make: legacy.make,
                model: legacy.model,
                year: legacy.year,
                mileage: legacy.mileage,
                vin: legacy.vin,
                cost: None,
            }],
            (None, None) => Vec::new(),
        };

        // The pricing mode is decided here and nowhere else.
        let pricing = match m.car_cost {
            Some(car_cost) if vehicles.iter().all(|v| v.cost.is_none()) => {
                VehiclePricing::LegacyAggregate { car_cost }
            }
            _ => VehiclePricing::Itemized,
        };

        let customer = m.customer.map(Customer::from).filter(|c| !c.is_empty());

        Receipt {
            id: ReceiptId(m.id),
            created_at: m.date_iso.into(),
            company: m.company.into(),
            customer,
            vehicles,
            pricing,
            service_charge: m.service_charge,
            tax_rate: m.tax_rate,
            currency: m.currency,
            notes: non_blank(m.notes),
            template_id: TemplateId::from_tag(&m.template_id),
            pdf_uri: non_blank(m.pdf_uri),
        }
    }
}

impl From<CompanyModel> for Company {
    fn from(m: CompanyModel) -> Self {
        Company {
            name: m.name,
            address: non_blank(m.address),
            phone: non_blank(m.phone),
            email: non_blank(m.email),
            logo: non_blank(m.logo_base64),
        }
    }
}

impl From<CustomerModel> for Customer {
    fn from(m: CustomerModel) -> Self {
        Customer {
            name: non_blank(m.name),
            email: non_blank(m.email),
            phone: non_blank(m.phone),
            address: non_blank(m.address),
        }
    }
}

impl From<VehicleModel> for Vehicle {
    fn from(m: VehicleModel) -> Self {
        Vehicle {
            id: VehicleId(m.id),
            make: m.make,
            model: m.model,
            year: m.year,
            mileage: m.mileage,
            vin: m.vin,
            cost: m.cost,
        }
    }
}

// Domain -> stored.
// ---

impl From<&Receipt> for ReceiptModel {
    fn from(r: &Receipt) -> Self {
        // Itemized receipts also carry the summed cost for older readers, but
        // only when there is something to sum; otherwise the record would read
        // back as a legacy one.
        let car_cost = match r.pricing {
            VehiclePricing::LegacyAggregate { car_cost } => Some(car_cost),
            VehiclePricing::Itemized if r.vehicles.iter().any(|v| v.cost.is_some()) => {
                Some(r.vehicles.iter().map(|v| v.cost.unwrap_or(0.0)).sum())
            }
            VehiclePricing::Itemized => None,
        };

        ReceiptModel {
            id: r.id.0.clone(),
            date_iso: r.created_at.into(),
            company: CompanyModel {
                name: r.company.name.clone(),
                address: r.company.address.clone(),
                phone: r.company.phone.clone(),
                email: r.company.email.clone(),
                logo_base64: r.company.logo.clone(),
            },
            customer: r.customer.as_ref().map(|c| CustomerModel {
                name: c.name.clone(),
                email: c.email.clone(),
                phone: c.phone.clone(),
                address: c.address.clone(),
            }),
            vehicles: Some(
                r.vehicles
                    .iter()
                    .map(|v| VehicleModel {
                        id: v.id.0.clone(),
                        make: v.make.clone(),
                        model: v.model.clone(),
                        year: v.year,
                        mileage: v.mileage,
                        vin: v.vin.clone(),
                        cost: match r.pricing {
                            VehiclePricing::Itemized => v.cost,
                            VehiclePricing::LegacyAggregate { .. } => None,
                        },
                    })
                    .collect(),
            ),
            vehicle: None,
            car_cost,
            service_charge: r.service_charge,
            tax_rate: r.tax_rate,
            currency: r.currency.clone(),
            notes: r.notes.clone(),
            template_id: r.template_id.tag().to_string(),
            pdf_uri: r.pdf_uri.clone(),
        }
    }
}
