use std::sync::LazyLock;

use chrono::{DateTime, Datelike as _, SubsecRound as _, Utc};
use fractic_server_error::ServerError;
use regex::Regex;

use crate::{
    domain::logic::logo::check_logo_data_uri,
    entities::{
        Company, Customer, FieldIssue, Receipt, ReceiptDraft, ReceiptId, Vehicle, VehicleDraft,
        VehicleId, VehiclePricing,
    },
    errors::InvalidReceipt,
};

const MIN_COMPANY_NAME_LEN: usize = 2;
const MIN_VIN_LEN: usize = 5;
const MIN_CURRENCY_LEN: usize = 3;
const MIN_YEAR: i32 = 1900;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("hardcoded regex should be valid")
});

/// Collects every problem with the draft. Empty means the draft is valid.
///
/// `current_year` bounds vehicle years (up to next year's models).
pub fn validate_draft(draft: &ReceiptDraft, current_year: i32) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    if draft.company_name.trim().chars().count() < MIN_COMPANY_NAME_LEN {
        issues.push(FieldIssue::new("companyName", "Company name required"));
    }
    check_email(&mut issues, "companyEmail", &draft.company_email);
    check_email(&mut issues, "customerEmail", &draft.customer_email);
    if let Some(logo) = non_blank(&draft.company_logo) {
        if let Err(reason) = check_logo_data_uri(&logo) {
            issues.push(FieldIssue::new("companyLogo", reason));
        }
    }

    if draft.vehicles.is_empty() {
        issues.push(FieldIssue::new("vehicles", "At least one vehicle is required"));
    }
    for (i, v) in draft.vehicles.iter().enumerate() {
        check_vehicle(&mut issues, i, v, current_year);
    }

    if !is_non_negative_amount(draft.service_charge) {
        issues.push(FieldIssue::new("serviceCharge", "Must be a non-negative amount"));
    }
    if let Some(rate) = draft.tax_rate {
        if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
            issues.push(FieldIssue::new("taxRate", "Must be between 0 and 1"));
        }
    }
    if draft.currency.trim().chars().count() < MIN_CURRENCY_LEN {
        issues.push(FieldIssue::new("currency", "Currency code like USD"));
    }

    issues
}

fn check_vehicle(issues: &mut Vec<FieldIssue>, i: usize, v: &VehicleDraft, current_year: i32) {
    let field = |name: &str| format!("vehicles[{i}].{name}");
    if v.make.trim().is_empty() {
        issues.push(FieldIssue::new(field("make"), "Required"));
    }
    if v.model.trim().is_empty() {
        issues.push(FieldIssue::new(field("model"), "Required"));
    }
    if v.year < MIN_YEAR || v.year > current_year + 1 {
        issues.push(FieldIssue::new(
            field("year"),
            format!("Must be between {MIN_YEAR} and {}", current_year + 1),
        ));
    }
    if matches!(v.mileage, Some(m) if m < 0) {
        issues.push(FieldIssue::new(field("mileage"), "Must not be negative"));
    }
    if v.vin.trim().chars().count() < MIN_VIN_LEN {
        issues.push(FieldIssue::new(field("vin"), "VIN too short"));
    }
    if matches!(v.cost, Some(c) if !is_non_negative_amount(c)) {
        issues.push(FieldIssue::new(field("cost"), "Must be a non-negative amount"));
    }
}

fn check_email(issues: &mut Vec<FieldIssue>, field: &str, email: &Option<String>) {
    if let Some(email) = non_blank(email) {
        if !EMAIL.is_match(&email) {
            issues.push(FieldIssue::new(field, "Invalid email"));
        }
    }
}

fn is_non_negative_amount(amount: f64) -> bool {
    amount.is_finite() && amount >= 0.0
}

fn non_blank(s: &Option<String>) -> Option<String> {
    s.as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Validates the draft and builds a new itemized receipt from it.
///
/// `created_at` is kept to millisecond precision, the precision it is stored
/// with.
pub(crate) fn build_receipt(
    draft: ReceiptDraft,
    id: ReceiptId,
    created_at: DateTime<Utc>,
) -> Result<Receipt, ServerError> {
    let issues = validate_draft(&draft, created_at.year());
    if !issues.is_empty() {
        let details = issues
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("; ");
        return Err(InvalidReceipt::new(&details));
    }

    let customer = Customer {
        name: non_blank(&draft.customer_name),
        email: non_blank(&draft.customer_email),
        phone: non_blank(&draft.customer_phone),
        address: non_blank(&draft.customer_address),
    };

    Ok(Receipt {
        id,
        created_at: created_at.trunc_subsecs(3),
        company: Company {
            name: draft.company_name.trim().to_string(),
            address: non_blank(&draft.company_address),
            phone: non_blank(&draft.company_phone),
            email: non_blank(&draft.company_email),
            logo: non_blank(&draft.company_logo),
        },
        customer: (!customer.is_empty()).then_some(customer),
        vehicles: draft
            .vehicles
            .into_iter()
            .map(|v| Vehicle {
                id: VehicleId::generate(),
                make: v.make.trim().to_string(),
                model: v.model.trim().to_string(),
                year: v.year,
                mileage: v.mileage.map(|m| m as u64),
                vin: v.vin.trim().to_string(),
                cost: v.cost,
            })
            .collect(),
        pricing: VehiclePricing::Itemized,
        service_charge: draft.service_charge,
        tax_rate: draft.tax_rate,
        currency: draft.currency.trim().to_uppercase(),
        notes: non_blank(&draft.notes),
        template_id: draft.template_id,
        pdf_uri: None,
    })
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Timelike as _};

    use super::*;
    use crate::{data::models::receipt_model::ReceiptModel, entities::TemplateId};

    fn valid_draft() -> ReceiptDraft {
        ReceiptDraft {
            company_name: "Acme Shipping".to_string(),
            company_email: Some("ops@acme.test".to_string()),
            customer_name: Some("Dana Lee".to_string()),
            vehicles: vec![VehicleDraft {
                make: "Honda".to_string(),
                model: "Civic".to_string(),
                year: 2019,
                mileage: Some(42000),
                vin: "2HGFC2F59KH500123".to_string(),
                cost: Some(1500.0),
            }],
            service_charge: 250.0,
            tax_rate: Some(0.07),
            currency: "usd".to_string(),
            template_id: TemplateId::Card,
            ..Default::default()
        }
    }

    #[test]
    fn valid_draft_has_no_issues() {
        assert!(validate_draft(&valid_draft(), 2024).is_empty());
    }

    #[test]
    fn reports_every_invalid_field() {
        let mut d = valid_draft();
        d.company_name = "A".to_string();
        d.customer_email = Some("not-an-email".to_string());
        d.vehicles[0].vin = "123".to_string();
        d.vehicles[0].year = 1850;
        d.vehicles[0].cost = Some(-1.0);
        d.service_charge = -5.0;
        d.tax_rate = Some(1.5);
        d.currency = "$".to_string();

        let fields: Vec<String> = validate_draft(&d, 2024)
            .into_iter()
            .map(|i| i.field)
            .collect();
        assert_eq!(
            fields,
            vec![
                "companyName",
                "customerEmail",
                "vehicles[0].year",
                "vehicles[0].vin",
                "vehicles[0].cost",
                "serviceCharge",
                "taxRate",
                "currency",
            ]
        );
    }

    #[test]
    fn requires_at_least_one_vehicle() {
        let mut d = valid_draft();
        d.vehicles.clear();
        let issues = validate_draft(&d, 2024);
        assert_eq!(issues, vec![FieldIssue::new("vehicles", "At least one vehicle is required")]);
    }

    #[test]
    fn accepts_next_years_models_only() {
        let mut d = valid_draft();
        d.vehicles[0].year = 2025;
        assert!(validate_draft(&d, 2024).is_empty());
        d.vehicles[0].year = 2026;
        assert_eq!(validate_draft(&d, 2024)[0].field, "vehicles[0].year");
    }

    #[test]
    fn blank_optional_emails_are_ignored() {
        let mut d = valid_draft();
        d.company_email = Some("   ".to_string());
        d.customer_email = Some(String::new());
        assert!(validate_draft(&d, 2024).is_empty());
    }

    #[test]
    fn build_normalizes_fields() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut d = valid_draft();
        d.customer_name = Some("  ".to_string());
        d.notes = Some("Handle with care".to_string());
        let r = build_receipt(d, ReceiptId("fixed".to_string()), now).unwrap();
        assert_eq!(r.currency, "USD");
        assert_eq!(r.customer, None);
        assert_eq!(r.pricing, VehiclePricing::Itemized);
        assert_eq!(r.vehicles[0].mileage, Some(42000));
        assert_eq!(r.notes.as_deref(), Some("Handle with care"));
        assert_eq!(r.pdf_uri, None);
        assert_eq!(r.created_at, now);
    }

    #[test]
    fn build_rejects_invalid_draft() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap();
        let mut d = valid_draft();
        d.vehicles.clear();
        assert!(build_receipt(d, ReceiptId::generate(), now).is_err());
    }

    #[test]
    fn creation_time_matches_its_stored_form() {
        let now = Utc
            .with_ymd_and_hms(2024, 5, 1, 8, 0, 0)
            .unwrap()
            .with_nanosecond(123_456_789)
            .unwrap();
        let r = build_receipt(valid_draft(), ReceiptId("fixed".to_string()), now).unwrap();
        assert_eq!(r.created_at.timestamp_subsec_nanos(), 123_000_000);

        let json = serde_json::to_string(&ReceiptModel::from(&r)).unwrap();
        let stored: Receipt = serde_json::from_str::<ReceiptModel>(&json).unwrap().into();
        assert_eq!(stored.created_at, r.created_at);
        assert_eq!(stored, r);
    }
}
