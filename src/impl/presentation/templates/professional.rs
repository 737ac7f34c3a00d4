use std::collections::HashMap;

use crate::{entities::Receipt, presentation::utils::fill_placeholders};

use super::{optional, ReceiptView};

const SKELETON: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <style>
    @page { size: A4; margin: 22mm 20mm; }
    body { font-family: Georgia, 'Times New Roman', serif; color: #1f2937; font-size: 12px; line-height: 1.5; }
    .letterhead { display: table; width: 100%; border-bottom: 3px double #1f2937; padding-bottom: 14px; }
    .letterhead > div { display: table-cell; vertical-align: middle; }
    .letterhead .logo-cell { width: 90px; }
    .logo { max-width: 80px; max-height: 80px; }
    .company-name { font-size: 24px; letter-spacing: .02em; margin: 0; }
    .company-contact { color: #4b5563; font-size: 11px; margin: 4px 0 0 0; }
    .doc-title { text-align: right; }
    .doc-title h2 { font-size: 18px; margin: 0; text-transform: uppercase; letter-spacing: .15em; color: #374151; }
    .parties { display: table; width: 100%; margin: 20px 0; }
    .parties > div { display: table-cell; width: 50%; vertical-align: top; }
    .caption { font-size: 10px; text-transform: uppercase; letter-spacing: .1em; color: #6b7280; border-bottom: 1px solid #d1d5db; margin-bottom: 6px; padding-bottom: 2px; }
    .parties p { margin: 1px 0; }
    .details td { padding: 2px 8px 2px 0; }
    table.items { width: 100%; border-collapse: collapse; margin-top: 8px; }
    table.items th { border-top: 1px solid #1f2937; border-bottom: 1px solid #1f2937; padding: 6px 4px; text-align: left; font-size: 10px; text-transform: uppercase; letter-spacing: .08em; }
    table.items td { padding: 6px 4px; border-bottom: 1px solid #e5e7eb; }
    table.items .num { text-align: right; }
    table.totals { margin-left: auto; margin-top: 16px; border-collapse: collapse; min-width: 260px; }
    table.totals td { padding: 4px 8px; }
    table.totals td.num { text-align: right; }
    table.totals tr.grand td { border-top: 2px solid #1f2937; font-weight: bold; font-size: 14px; }
    .notes { margin-top: 24px; }
    .footer { margin-top: 36px; border-top: 1px solid #d1d5db; padding-top: 10px; text-align: center; font-style: italic; color: #4b5563; font-size: 11px; }
  </style>
</head>
<body>
  <div class="letterhead">
    <div class="logo-cell">{{Logo}}</div>
    <div>
      <h1 class="company-name">{{CompanyName}}</h1>
      {{CompanyContact}}
    </div>
    <div class="doc-title"><h2>Receipt</h2></div>
  </div>

  <div class="parties">
    <div>
      <div class="caption">Billed To</div>
      <p><strong>{{CustomerName}}</strong></p>
      {{CustomerDetails}}
    </div>
    <div>
      <div class="caption">Receipt Details</div>
      <table class="details">
        <tr><td>Receipt No.</td><td><strong>{{ReceiptNumber}}</strong></td></tr>
        <tr><td>Date Issued</td><td>{{Date}}</td></tr>
      </table>
    </div>
  </div>

  <div class="caption">Vehicles Shipped</div>
  <table class="items">
    <thead>
      <tr><th>No.</th><th>Vehicle</th><th>Mileage</th><th>VIN</th><th class="num">Amount</th></tr>
    </thead>
    <tbody>
      {{Vehicles}}
    </tbody>
  </table>

  <table class="totals">
    <tr><td>Vehicle Costs</td><td class="num">{{VehicleCost}}</td></tr>
    <tr><td>Service Charge</td><td class="num">{{ServiceCharge}}</td></tr>
    {{TaxRow}}
    <tr class="grand"><td>Total Due</td><td class="num">{{Total}}</td></tr>
  </table>

  {{Notes}}

  <div class="footer">
    Thank you for your business. For any questions regarding this receipt, please contact {{Contact}}.
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
      <tr><td>{}</td><td>{} {} {}</td><td>{}</td><td>{}</td><td class="num">{}</td></tr>"#,
                row.number, row.year, row.make, row.model, row.mileage, row.vin, row.cost
            )
        })
        .collect();

    let customer_details: String = [&v.customer_address, &v.customer_email, &v.customer_phone]
        .into_iter()
        .map(|field| optional(field, |s| format!("<p>{}</p>", s)))
        .collect();

    let placeholders: HashMap<&str, String> = HashMap::from([
        ("Logo", v.logo_img("logo")),
        ("CompanyName", v.company_name.clone()),
        (
            "CompanyContact",
            if v.company_contact.is_empty() {
                String::new()
            } else {
                format!(r#"<p class="company-contact">{}</p>"#, v.company_contact)
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
                format!(r#"<tr><td>{}</td><td class="num">{}</td></tr>"#, label, amount)
            }),
        ),
        ("Total", v.total.clone()),
        (
            "Notes",
            optional(&v.notes, |n| {
                format!(
                    r#"<div class="notes"><div class="caption">Notes</div><p>{}</p></div>"#,
                    n
                )
            }),
        ),
        ("Contact", v.contact.clone()),
    ]);

    fill_placeholders(SKELETON, &placeholders)
}
