use crate::entities::{Receipt, ReceiptTotals, VehiclePricing};

/// Splits `total` into `count` equal shares. Empty when `count` is 0.
pub fn distribute_evenly(total: f64, count: usize) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    vec![total / count as f64; count]
}

/// Cost shown next to each vehicle, in vehicle order.
pub fn resolve_vehicle_costs(receipt: &Receipt) -> Vec<f64> {
    match receipt.pricing {
        VehiclePricing::Itemized => receipt
            .vehicles
            .iter()
            .map(|v| v.cost.unwrap_or(0.0))
            .collect(),
        VehiclePricing::LegacyAggregate { car_cost } => {
            distribute_evenly(car_cost, receipt.vehicles.len())
        }
    }
}

/// Total vehicle cost. For legacy receipts this is the stored aggregate
/// itself, not the sum of its distributed shares.
pub fn vehicle_cost(receipt: &Receipt) -> f64 {
    match receipt.pricing {
        VehiclePricing::Itemized => receipt
            .vehicles
            .iter()
            .map(|v| v.cost.unwrap_or(0.0))
            .sum(),
        VehiclePricing::LegacyAggregate { car_cost } => car_cost,
    }
}

/// Whether a tax line applies. An absent or zero rate means no tax line.
pub fn shows_tax_line(receipt: &Receipt) -> bool {
    matches!(receipt.tax_rate, Some(rate) if rate != 0.0)
}

pub fn compute_totals(receipt: &Receipt) -> ReceiptTotals {
    let vehicle_cost = vehicle_cost(receipt);
    let service_charge = receipt.service_charge;
    let subtotal = vehicle_cost + service_charge;
    let tax = match receipt.tax_rate {
        Some(rate) if rate != 0.0 => subtotal * rate,
        _ => 0.0,
    };
    ReceiptTotals {
        vehicle_cost,
        service_charge,
        subtotal,
        tax,
        total: subtotal + tax,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone as _, Utc};

    use super::*;
    use crate::entities::{Company, ReceiptId, TemplateId, Vehicle, VehicleId};

    fn vehicle(n: usize, cost: Option<f64>) -> Vehicle {
        Vehicle {
            id: VehicleId(format!("v{n}")),
            make: "Toyota".to_string(),
            model: "Camry".to_string(),
            year: 2021,
            mileage: None,
            vin: format!("VIN0000{n}"),
            cost,
        }
    }

    fn receipt(vehicles: Vec<Vehicle>, pricing: VehiclePricing) -> Receipt {
        Receipt {
            id: ReceiptId("0d9a7c52-1111-4f3e-8a2b-5c6d7e8f9a0b".to_string()),
            created_at: Utc.with_ymd_and_hms(2024, 3, 9, 14, 30, 0).unwrap(),
            company: Company {
                name: "Acme".to_string(),
                address: None,
                phone: None,
                email: None,
                logo: None,
            },
            customer: None,
            vehicles,
            pricing,
            service_charge: 0.0,
            tax_rate: None,
            currency: "USD".to_string(),
            notes: None,
            template_id: TemplateId::Minimal,
            pdf_uri: None,
        }
    }

    #[test]
    fn itemized_costs_sum_exactly() {
        let mut r = receipt(
            vec![vehicle(1, Some(1200.5)), vehicle(2, Some(799.25))],
            VehiclePricing::Itemized,
        );
        r.service_charge = 150.0;
        let t = compute_totals(&r);
        assert_eq!(t.vehicle_cost, 1200.5 + 799.25);
        assert_eq!(t.tax, 0.0);
        assert_eq!(t.total, t.vehicle_cost + t.service_charge + t.tax);
    }

    #[test]
    fn zero_tax_rate_yields_no_tax() {
        let mut r = receipt(vec![vehicle(1, Some(100.0))], VehiclePricing::Itemized);
        r.tax_rate = Some(0.0);
        let t = compute_totals(&r);
        assert_eq!(t.tax, 0.0);
        assert_eq!(t.total, 100.0);
        assert!(!shows_tax_line(&r));
    }

    #[test]
    fn seven_percent_of_one_thousand() {
        let mut r = receipt(vec![vehicle(1, Some(900.0))], VehiclePricing::Itemized);
        r.service_charge = 100.0;
        r.tax_rate = Some(0.07);
        let t = compute_totals(&r);
        assert_eq!(t.subtotal, 1000.0);
        assert!((t.tax - 70.0).abs() < 1e-9);
        assert!((t.total - 1070.0).abs() < 1e-9);
        assert!(shows_tax_line(&r));
    }

    #[test]
    fn acme_example_totals() {
        let mut r = receipt(vec![vehicle(1, Some(20000.0))], VehiclePricing::Itemized);
        r.service_charge = 500.0;
        r.tax_rate = Some(0.05);
        let t = compute_totals(&r);
        assert_eq!(
            t,
            ReceiptTotals {
                vehicle_cost: 20000.0,
                service_charge: 500.0,
                subtotal: 20500.0,
                tax: 1025.0,
                total: 21525.0,
            }
        );
    }

    #[test]
    fn legacy_cost_is_distributed_for_display_but_kept_exact_in_total() {
        let r = receipt(
            vec![vehicle(1, None), vehicle(2, None), vehicle(3, None)],
            VehiclePricing::LegacyAggregate { car_cost: 1000.0 },
        );
        let shares = resolve_vehicle_costs(&r);
        assert_eq!(shares, vec![1000.0 / 3.0; 3]);
        assert_eq!(compute_totals(&r).vehicle_cost, 1000.0);
    }

    #[test]
    fn mixed_itemized_costs_treat_missing_as_zero() {
        let r = receipt(
            vec![vehicle(1, Some(500.0)), vehicle(2, None)],
            VehiclePricing::Itemized,
        );
        assert_eq!(resolve_vehicle_costs(&r), vec![500.0, 0.0]);
        assert_eq!(compute_totals(&r).vehicle_cost, 500.0);
    }

    #[test]
    fn all_zero_receipt_has_all_zero_totals() {
        let r = receipt(vec![vehicle(1, None)], VehiclePricing::Itemized);
        assert_eq!(compute_totals(&r), ReceiptTotals::default());
    }

    #[test]
    fn legacy_receipt_without_vehicles_keeps_aggregate() {
        let r = receipt(vec![], VehiclePricing::LegacyAggregate { car_cost: 4200.0 });
        assert!(resolve_vehicle_costs(&r).is_empty());
        assert_eq!(compute_totals(&r).vehicle_cost, 4200.0);
    }

    #[test]
    fn distribute_evenly_handles_zero_count() {
        assert!(distribute_evenly(10.0, 0).is_empty());
        assert_eq!(distribute_evenly(10.0, 4), vec![2.5; 4]);
    }
}
