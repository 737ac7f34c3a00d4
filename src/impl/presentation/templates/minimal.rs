use std::collections::HashMap;

use crate::{entities::Receipt, presentation::utils::fill_placeholders};

use super::{optional, ReceiptView};

const SKELETON: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <style>
    @page { size: A4; margin: 18mm; }
    :root { --brand:#0f172a; --muted:#64748b; --border:#e2e8f0; }
    * { box-sizing:border-box; }
    body { font-family: -apple-system, Segoe UI, Roboto, Inter, Arial, sans-serif; color:#0f172a; line-height:1.35; }
    .header { display:flex; align-items:center; justify-content:space-between; gap:16px; border-bottom:1px solid var(--border); padding-bottom:12px; margin-bottom:16px; }
    .brand { display:flex; align-items:center; gap:12px; }
    .logo { width:56px; height:56px; object-fit:contain; border-radius:8px; border:1px solid var(--border); padding:6px; }
    .company h1 { font-size:20px; margin:0; color:var(--brand); }
    .company p { margin:2px 0; color:var(--muted); font-size:12px; }
    .badge { display:inline-block; padding:2px 8px; border-radius:999px; background:#eef2ff; color:#4338ca; font-size:10px; font-weight:600; }
    .meta { display:grid; grid-template-columns:repeat(3,1fr); gap:12px; border:1px solid var(--border); border-radius:10px; padding:12px; margin:14px 0 18px 0; background:#fcfdff; }
    .meta div { font-size:12px; }
    .label { color:var(--muted); text-transform:uppercase; letter-spacing:.04em; font-size:10px; }
    .value { margin-top:2px; font-weight:600; }
    .section-title { margin:16px 0 8px; font-size:12px; color:var(--muted); text-transform:uppercase; letter-spacing:.06em; }
    .card { border:1px solid var(--border); border-radius:12px; overflow:hidden; }
    table { border-collapse:collapse; width:100%; }
    th, td { text-align:left; padding:10px 12px; font-size:12px; }
    thead th { background:#f8fafc; color:#334155; text-transform:uppercase; letter-spacing:.06em; font-size:10px; }
    tbody tr:not(:last-child) td { border-bottom:1px dashed var(--border); }
    .row { display:flex; justify-content:space-between; font-size:12px; }
    .row.total { font-weight:700; font-size:14px; margin-top:6px; border-top:1px dashed var(--border); padding-top:8px; }
    .vehicle-table { margin-bottom:20px; }
    .vehicle-table h3 { margin:0 0 10px 0; font-size:14px; color:#334155; }
    .vehicle-cost { color:#059669; font-weight:600; }
    .footer { margin-top:28px; padding-top:12px; border-top:1px solid var(--border); color:var(--muted); font-size:11px; }
  </style>
</head>
<body>
  <div class="header">
    <div class="brand">
      {{Logo}}
      <div class="company">
        <h1>{{CompanyName}}</h1>
        {{CompanyContact}}
      </div>
    </div>
    <div class="badge">Car Shipping Receipt</div>
  </div>

  <div class="meta">
    <div><div class="label">Date</div><div class="value">{{Date}}</div></div>
    <div><div class="label">Receipt #</div><div class="value">{{ReceiptNumber}}</div></div>
    <div><div class="label">Customer</div><div class="value">{{CustomerName}}</div>{{CustomerDetails}}</div>
  </div>

  <div class="section-title">Vehicles</div>
  {{Vehicles}}

  <div class="section-title">Charges Summary</div>
  <div class="card" style="padding:10px 12px;">
    <div class="row"><span>Vehicle Costs</span><span>{{VehicleCost}}</span></div>
    <div class="row"><span>Service Charge</span><span>{{ServiceCharge}}</span></div>
    {{TaxRow}}
    <div class="row total"><span>Total</span><span>{{Total}}</span></div>
  </div>

  {{Notes}}

  <div class="footer">
    Thank you for your business. For questions, contact {{Contact}}.
  </div>
</body>
</html>
"#;

pub(crate) fn render(receipt: &Receipt) -> String {
    let v = ReceiptView::new(receipt);

    let vehicles: String = v
        .vehicles
        .iter()
        .map(|row| {
            format!(
                r#"
  <div class="vehicle-table">
    <h3>Vehicle #{} <span class="vehicle-cost">({})</span></h3>
    <div class="card">
      <table>
        <thead><tr><th>Make</th><th>Model</th><th>Year</th><th>Mileage</th><th>VIN</th></tr></thead>
        <tbody>
          <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>
        </tbody>
      </table>
    </div>
  </div>"#,
                row.number, row.cost, row.make, row.model, row.year, row.mileage, row.vin
            )
        })
        .collect();

    let customer_details: String = [&v.customer_email, &v.customer_phone, &v.customer_address]
        .into_iter()
        .map(|field| optional(field, |s| format!(r#"<div class="label">{}</div>"#, s)))
        .collect();

    let placeholders: HashMap<&str, String> = HashMap::from([
        ("Logo", v.logo_img("logo")),
        ("CompanyName", v.company_name.clone()),
        (
            "CompanyContact",
            if v.company_contact.is_empty() {
                String::new()
            } else {
                format!("<p>{}</p>", v.company_contact)
            },
        ),
        ("Date", v.date.clone()),
        ("ReceiptNumber", v.receipt_number.clone()),
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
                    r#"<div class="section-title">Notes</div><div class="card" style="padding:12px; font-size:12px;">{}</div>"#,
                    n
                )
            }),
        ),
        ("Contact", v.contact.clone()),
    ]);

    fill_placeholders(SKELETON, &placeholders)
}
