use std::collections::HashMap;

use crate::{entities::Receipt, presentation::utils::fill_placeholders};

use super::{optional, ReceiptView};

const SKELETON: &str = r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8" />
  <style>
    @page { size: A4; margin: 20mm; }
    :root {
      --primary: #3b82f6;
      --secondary: #10b981;
      --dark: #1e293b;
      --light: #f8fafc;
      --gray: #94a3b8;
      --border: #e2e8f0;
    }
    * { box-sizing: border-box; }
    body {
      font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
      color: var(--dark);
      line-height: 1.6;
      background: linear-gradient(135deg, #f0f9ff 0%, #e0f2fe 100%);
      margin: 0;
    }
    .container { max-width: 800px; margin: 0 auto; background: white; border-radius: 16px; overflow: hidden; box-shadow: 0 10px 25px rgba(0,0,0,0.05); }
    .header { background: linear-gradient(120deg, var(--primary) 0%, #60a5fa 100%); color: white; padding: 30px; display: flex; justify-content: space-between; align-items: center; }
    .header h1 { margin: 0; font-size: 28px; font-weight: 700; }
    .header p { margin: 4px 0 0 0; opacity: 0.9; font-size: 13px; }
    .logo { width: 72px; height: 72px; object-fit: contain; background: white; border-radius: 14px; padding: 8px; }
    .receipt-info { text-align: right; font-size: 13px; }
    .receipt-info p { margin: 2px 0; }
    .content { padding: 30px; }
    .section { margin-bottom: 28px; }
    .section-title { font-size: 16px; font-weight: 600; color: var(--primary); margin: 0 0 12px 0; padding-bottom: 6px; border-bottom: 2px solid var(--border); }
    .customer p { margin: 2px 0; font-size: 14px; }
    table { width: 100%; border-collapse: collapse; }
    th { background: var(--light); color: var(--gray); text-transform: uppercase; font-size: 11px; letter-spacing: .05em; text-align: left; padding: 10px; }
    td { padding: 12px 10px; border-bottom: 1px solid var(--border); font-size: 13px; }
    td.amount { text-align: right; color: var(--secondary); font-weight: 600; }
    .summary { background: var(--light); border-radius: 12px; padding: 20px; }
    .summary-row { display: flex; justify-content: space-between; padding: 6px 0; font-size: 14px; }
    .summary-row.total { border-top: 2px solid var(--border); margin-top: 8px; padding-top: 12px; font-size: 18px; font-weight: 700; color: var(--primary); }
    .notes { background: #fffbeb; border-left: 4px solid #f59e0b; padding: 14px 18px; border-radius: 8px; font-size: 13px; }
    .footer { text-align: center; padding: 20px 30px; color: var(--gray); font-size: 12px; border-top: 1px solid var(--border); }
  </style>
</head>
<body>
  <div class="container">
    <div class="header">
      <div>
        {{Logo}}
        <h1>{{CompanyName}}</h1>
        {{CompanyContact}}
      </div>
      <div class="receipt-info">
        <p>Receipt #: {{ReceiptNumber}}</p>
        <p>Date: {{Date}}</p>
      </div>
    </div>

    <div class="content">
      <div class="section customer">
        <h2 class="section-title">Bill To</h2>
        <p><strong>{{CustomerName}}</strong></p>
        {{CustomerDetails}}
      </div>

      <div class="section">
        <h2 class="section-title">Vehicle Details</h2>
        <table>
          <thead>
            <tr><th>#</th><th>Make</th><th>Model</th><th>Year</th><th>Mileage</th><th>VIN</th><th>Cost</th></tr>
          </thead>
          <tbody>
            {{Vehicles}}
          </tbody>
        </table>
      </div>

      <div class="section summary">
        <div class="summary-row"><span>Vehicle Costs</span><span>{{VehicleCost}}</span></div>
        <div class="summary-row"><span>Service Charge</span><span>{{ServiceCharge}}</span></div>
        {{TaxRow}}
        <div class="summary-row total"><span>Total</span><span>{{Total}}</span></div>
      </div>

      {{Notes}}
    </div>

    <div class="footer">
      <p>Thank you for your business! For any questions, please contact {{Contact}}.</p>
    </div>
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
            <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class="amount">{}</td></tr>"#,
                row.number, row.make, row.model, row.year, row.mileage, row.vin, row.cost
            )
        })
        .collect();

    let customer_details: String = [&v.customer_email, &v.customer_phone, &v.customer_address]
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
                format!("<p>{}</p>", v.company_contact)
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
                    r#"<div class="summary-row"><span>{}</span><span>{}</span></div>"#,
                    label, amount
                )
            }),
        ),
        ("Total", v.total.clone()),
        (
            "Notes",
            optional(&v.notes, |n| {
                format!(
                    r#"<div class="section"><h2 class="section-title">Notes</h2><div class="notes">{}</div></div>"#,
                    n
                )
            }),
        ),
        ("Contact", v.contact.clone()),
    ]);

    fill_placeholders(SKELETON, &placeholders)
}
