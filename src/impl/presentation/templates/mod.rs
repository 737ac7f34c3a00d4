use crate::{
    domain::logic::{
        receipt_naming::receipt_number,
        totals::{compute_totals, resolve_vehicle_costs},
    },
    entities::{Receipt, TemplateId},
    presentation::utils::{
        escape_html, escape_html_multiline, format_currency, format_date, format_tax_rate,
    },
};

pub(crate) mod card;
pub(crate) mod compact;
pub(crate) mod minimal;
pub(crate) mod modern;
pub(crate) mod professional;

type RenderFn = fn(&Receipt) -> String;

const REGISTRY: [(TemplateId, RenderFn); 5] = [
    (TemplateId::Minimal, minimal::render),
    (TemplateId::Card, card::render),
    (TemplateId::Modern, modern::render),
    (TemplateId::Professional, professional::render),
    (TemplateId::Compact, compact::render),
];

const DEFAULT_RENDER: RenderFn = minimal::render;

/// Renders `receipt` as a complete HTML document using the given layout.
/// Pure: the same inputs always produce the same output.
pub fn render(template_id: TemplateId, receipt: &Receipt) -> String {
    let render_fn = REGISTRY
        .iter()
        .find(|(id, _)| *id == template_id)
        .map(|(_, f)| *f)
        .unwrap_or(DEFAULT_RENDER);
    render_fn(receipt)
}

/// Like [`render`], for a raw template tag. Unknown tags use the default
/// layout.
pub fn render_tag(tag: &str, receipt: &Receipt) -> String {
    render(TemplateId::from_tag(tag), receipt)
}

/// Renders with the receipt's own template.
pub fn render_receipt(receipt: &Receipt) -> String {
    render(receipt.template_id, receipt)
}

// Data shared by all layouts. Every text field is already HTML-escaped and
// every amount already formatted.
// ---

pub(crate) struct VehicleRow {
    pub number: usize,
    pub make: String,
    pub model: String,
    pub year: String,
    pub mileage: String,
    pub vin: String,
    pub cost: String,
}

pub(crate) struct TaxLine {
    pub label: String,
    pub amount: String,
}

pub(crate) struct ReceiptView {
    pub company_name: String,
    /// Address, email and phone joined with " • ". Empty if none.
    pub company_contact: String,
    pub logo_src: Option<String>,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub customer_address: Option<String>,
    pub receipt_number: String,
    pub date: String,
    pub vehicles: Vec<VehicleRow>,
    pub vehicle_cost: String,
    pub service_charge: String,
    pub tax: Option<TaxLine>,
    pub total: String,
    pub notes: Option<String>,
    /// Who to contact, for footers: email, else phone, else company name.
    pub contact: String,
}

impl ReceiptView {
    pub(crate) fn new(r: &Receipt) -> Self {
        let totals = compute_totals(r);
        let cur = |n: f64| format_currency(n, &r.currency);
        let company = &r.company;
        let customer = r.customer.as_ref();

        let company_contact = [&company.address, &company.email, &company.phone]
            .into_iter()
            .flatten()
            .map(|s| escape_html(s))
            .collect::<Vec<_>>()
            .join(" • ");

        let vehicles = r
            .vehicles
            .iter()
            .zip(resolve_vehicle_costs(r))
            .enumerate()
            .map(|(i, (v, cost))| VehicleRow {
                number: i + 1,
                make: escape_html(&v.make),
                model: escape_html(&v.model),
                year: v.year.to_string(),
                mileage: v
                    .mileage
                    .map_or_else(|| "-".to_string(), |m| m.to_string()),
                vin: escape_html(&v.vin),
                cost: cur(cost),
            })
            .collect();

        let tax = match r.tax_rate {
            Some(rate) if rate != 0.0 => Some(TaxLine {
                label: format!("Tax ({})", format_tax_rate(rate)),
                amount: cur(totals.tax),
            }),
            _ => None,
        };

        let company_name = if company.name.trim().is_empty() {
            "Receipt".to_string()
        } else {
            escape_html(&company.name)
        };
        let contact = company
            .email
            .as_deref()
            .or(company.phone.as_deref())
            .map(escape_html)
            .unwrap_or_else(|| company_name.clone());

        ReceiptView {
            company_name,
            company_contact,
            logo_src: company.logo.as_deref().map(escape_html),
            customer_name: customer
                .and_then(|c| c.name.as_deref())
                .map_or_else(|| "-".to_string(), escape_html),
            customer_email: customer.and_then(|c| c.email.as_deref()).map(escape_html),
            customer_phone: customer.and_then(|c| c.phone.as_deref()).map(escape_html),
            customer_address: customer.and_then(|c| c.address.as_deref()).map(escape_html),
            receipt_number: escape_html(&receipt_number(r)),
            date: format_date(&r.created_at),
            vehicles,
            vehicle_cost: cur(totals.vehicle_cost),
            service_charge: cur(totals.service_charge),
            tax,
            total: cur(totals.total),
            notes: r.notes.as_deref().map(escape_html_multiline),
            contact,
        }
    }

    /// `<img>` tag for the logo with the given CSS class, or empty.
    pub(crate) fn logo_img(&self, class: &str) -> String {
        self.logo_src
            .as_ref()
            .map(|src| format!(r#"<img class="{}" src="{}" />"#, class, src))
            .unwrap_or_default()
    }

    /// Tax row rendered by `row`, or empty when no tax applies.
    pub(crate) fn tax_row(&self, row: impl Fn(&str, &str) -> String) -> String {
        self.tax
            .as_ref()
            .map(|t| row(&t.label, &t.amount))
            .unwrap_or_default()
    }
}

/// Renders `inner` through `wrap` when present, else nothing.
pub(crate) fn optional(inner: &Option<String>, wrap: impl Fn(&str) -> String) -> String {
    inner.as_deref().map(wrap).unwrap_or_default()
}
