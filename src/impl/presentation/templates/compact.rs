use std::collections::HashMap;

use crate::{entities::Receipt, presentation::utils::fill_placeholders};

use super::{optional, ReceiptView};

// Narrow, single-column layout. Keeps a multi-vehicle receipt on one page.
const SKELETON: &str = r#"<!DOCTYPE html>
<html><head><meta charset="utf-8"/>
<style>
  @page { size: A5; margin: 10mm; }
  body { font-family: 'Helvetica Neue', Arial, sans-serif; font-size: 10px; color: #111827; margin: 0; }
  .head { display: flex; align-items: center; gap: 8px; border-bottom: 1px solid #111827; padding-bottom: 6px; }
  .logo { width: 36px; height: 36px; object-fit: contain; }
  .name { font-size: 14px; font-weight: 700; }
  .sub { color: #6b7280; font-size: 9px; }
  .meta { display: flex; justify-content: space-between; margin: 6px 0; font-size: 9px; }
  .blk { margin: 6px 0; }
  .k { color: #6b7280; text-transform: uppercase; font-size: 8px; letter-spacing: .05em; }
  .veh { display: flex; justify-content: space-between; padding: 3px 0; border-bottom: 1px dotted #d1d5db; }
  .veh .vin { color: #6b7280; font-size: 8px; }
  .line { display: flex; justify-content: space-between; padding: 2px 0; }
  .line.total { font-weight: 700; font-size: 12px; border-top: 1px solid #111827; margin-top: 3px; padding-top: 4px; }
  .foot { margin-top: 10px; text-align: center; color: #6b7280; font-size: 8px; }
</style></head>
<body>
  <div class="head">
    {{Logo}}
    <div>
      <div class="name">{{CompanyName}}</div>
      {{CompanyContact}}
    </div>
  </div>
  <div class="meta"><span>No. {{ReceiptNumber}}</span><span>{{Date}}</span></div>
  <div class="blk">
    <div class="k">Customer</div>
    <div>{{CustomerName}}</div>
    {{CustomerDetails}}
  </div>
  <div class="blk">
    <div class="k">Vehicles</div>
    {{Vehicles}}
  </div>
  <div class="blk">
    <div class="line"><span>Vehicles</span><span>{{VehicleCost}}</span></div>
    <div class="line"><span>Service</span><span>{{ServiceCharge}}</span></div>
    {{TaxRow}}
    <div class="line total"><span>Total</span><span>{{Total}}</span></div>
  </div>
  {{Notes}}
  <div class="foot">Contact: {{Contact}}</div>
</body></html>
"#;

// Unit only goes with an actual reading, not the "-" placeholder.
fn mileage(value: &str) -> String {
    if value == "-" {
        value.to_string()
    } else {
        format!("{} mi", value)
    }
}

pub(crate) fn render(receipt: &Receipt) -> String {
    let v = ReceiptView::new(receipt);

    let vehicles: String = v
        .vehicles
        .iter()
        .map(|row| {
            format!(
                r#"
    <div class="veh"><div>{}. {} {} {} <span class="vin">VIN {} • {}</span></div><div>{}</div></div>"#,
                row.number,
                row.year,
                row.make,
                row.model,
                row.vin,
                mileage(&row.mileage),
                row.cost
            )
        })
        .collect();

    let customer_details: String = [&v.customer_email, &v.customer_phone, &v.customer_address]
        .into_iter()
        .map(|field| optional(field, |s| format!(r#"<div class="sub">{}</div>"#, s)))
        .collect();

    let placeholders: HashMap<&str, String> = HashMap::from([
        ("Logo", v.logo_img("logo")),
        ("CompanyName", v.company_name.clone()),
        (
            "CompanyContact",
            if v.company_contact.is_empty() {
                String::new()
            } else {
                format!(r#"<div class="sub">{}</div>"#, v.company_contact)
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
                    r#"<div class="line"><span>{}</span><span>{}</span></div>"#,
                    label, amount
                )
            }),
        ),
        ("Total", v.total.clone()),
        (
            "Notes",
            optional(&v.notes, |n| {
                format!(r#"<div class="blk"><div class="k">Notes</div><div>{}</div></div>"#, n)
            }),
        ),
        ("Contact", v.contact.clone()),
    ]);

    fill_placeholders(SKELETON, &placeholders)
}
