use std::collections::HashMap;

use crate::{entities::Receipt, presentation::utils::fill_placeholders};

use super::{optional, ReceiptView};

const SKELETON: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"/>
<style>
  @page { size: A4; margin: 16mm; }
  body { font-family: Inter, Roboto, Arial, sans-serif; color:#0b1220; }
  .wrap { border:1px solid #e6e8ee; border-radius:16px; padding:18px; }
  .top { display:flex; justify-content:space-between; align-items:center; margin-bottom:12px; }
  .brand { display:flex; gap:10px; align-items:center; }
  .logo { width:64px; height:64px; object-fit:contain; border-radius:12px; border:1px solid #e6e8ee; padding:6px; }
  .h1 { font-weight:800; font-size:22px; margin:0; }
  .muted { color:#667085; font-size:12px; }
  .grid { display:grid; grid-template-columns:1fr 1fr; gap:12px; margin:12px 0; }
  .card { border:1px solid #e6e8ee; border-radius:12px; padding:12px; }
  .title { font-size:12px; text-transform:uppercase; color:#667085; letter-spacing:.06em; margin-bottom:8px; }
  .row { display:flex; justify-content:space-between; font-size:12px; padding:6px 0; }
  .row + .row { border-top:1px dashed #e6e8ee; }
  .total { font-weight:800; font-size:14px; }
  table { width:100%; border-collapse:collapse; }
  th, td { text-align:left; padding:8px; font-size:12px; }
  tbody tr:not(:last-child) td { border-bottom:1px dashed #e6e8ee; }
  .vehicle-section { margin:15px 0; }
  .vehicle-title { font-size:14px; font-weight:600; margin:10px 0 5px 0; color:#334155; }
  .vehicle-cost { color:#059669; font-weight:600; }
  .charges-summary { margin-top:15px; }
  .footer { margin-top:14px; text-align:center; }
</style></head>
<body>
  <div class="wrap">
    <div class="top">
      <div class="brand">
        {{Logo}}
        <div>
          <div class="h1">{{CompanyName}}</div>
          {{CompanyContact}}
        </div>
      </div>
      <div class="muted">#{{ReceiptNumber}}<br/>{{Date}}</div>
    </div>

    <div class="grid">
      <div class="card">
        <div class="title">Customer</div>
        <div>{{CustomerName}}</div>
        {{CustomerDetails}}
      </div>
      <div class="card">
        <div class="title">Vehicles</div>
        {{Vehicles}}
      </div>
    </div>

    <div class="card charges-summary">
      <div class="title">Charges Summary</div>
      <div class="row"><span>Vehicle Costs</span><span>{{VehicleCost}}</span></div>
      <div class="row"><span>Service Charge</span><span>{{ServiceCharge}}</span></div>
      {{TaxRow}}
      <div class="row total"><span>Total</span><span>{{Total}}</span></div>
    </div>

    {{Notes}}

    <div class="muted footer">Thank you for your business. For questions, contact {{Contact}}.</div>
  </div>
</body></html>
"#;

pub(crate) fn render(receipt: &Receipt) -> String {
    let v = ReceiptView::new(receipt);

    let vehicles: String = v
        .vehicles
        .iter()
        .map(|row| {
            format!(
                r#"
        <div class="vehicle-section">
          <div class="vehicle-title">Vehicle #{} <span class="vehicle-cost">({})</span></div>
          <table>
            <tbody>
              <tr><td>Make</td><td>{}</td></tr>
              <tr><td>Model</td><td>{}</td></tr>
              <tr><td>Year</td><td>{}</td></tr>
              <tr><td>Mileage</td><td>{}</td></tr>
              <tr><td>VIN</td><td>{}</td></tr>
            </tbody>
          </table>
        </div>"#,
                row.number, row.cost, row.make, row.model, row.year, row.mileage, row.vin
            )
        })
        .collect();

    let customer_details: String = [&v.customer_email, &v.customer_phone, &v.customer_address]
        .into_iter()
        .map(|field| optional(field, |s| format!(r#"<div class="muted">{}</div>"#, s)))
        .collect();

    let placeholders: HashMap<&str, String> = HashMap::from([
        ("Logo", v.logo_img("logo")),
        ("CompanyName", v.company_name.clone()),
        (
            "CompanyContact",
            if v.company_contact.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="muted">{}</div>"#, v.company_contact)
            },
        ),
        ("ReceiptNumber", v.receipt_number.clone()),
        ("Date", v.date.clone()),
        ("CustomerName", v.customer_name.clone()),
        ("CustomerDetails", customer_details),
        ("Vehicles", vehicles),
        ("VehicleCost", v.vehicle_cost.clone()),
        ("ServiceCharge", v.service_charge.clone()),
        (
            "TaxRow",
            v.tax_row(|label, amount| {
                format!(
                    r#"<div class="row"><span>{}</span><span>{}</span></div>"#,
                    label, amount
                )
            }),
        ),
        ("Total", v.total.clone()),
        (
            "Notes",
            optional(&v.notes, |n| {
                format!(
                    r#"<div class="card" style="margin-top:12px;"><div class="title">Notes</div><div>{}</div></div>"#,
                    n
                )
            }),
        ),
        ("Contact", v.contact.clone()),
    ]);

    fill_placeholders(SKELETON, &placeholders)
}
