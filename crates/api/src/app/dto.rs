//! Request DTOs and JSON mapping helpers.

use serde::Deserialize;
use serde_json::{json, Value};

use ledgerdash_views::format::{format_cents, format_currency, format_date_local, y_axis_labels};
use ledgerdash_views::{generate_pagination, CustomerSummary, InvoiceRow, Page};

use crate::app::services::DashboardData;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceRequest {
    pub customer_id: String,
    /// Minor currency units (cents). The legacy dollars-to-cents conversion
    /// at the form layer is gone; the API accepts one unit only.
    pub amount: i64,
    pub status: String,
    /// ISO 8601 date; defaults to today when omitted.
    pub date: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateInvoiceRequest {
    pub customer_id: Option<String>,
    pub amount: Option<i64>,
    pub status: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCustomerRequest {
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateCustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

/// Query params shared by the list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub query: String,
    pub page: Option<i64>,
    pub status: Option<String>,
}

// -------------------------
// Response mapping
// -------------------------

pub fn invoice_row_to_json(row: &InvoiceRow) -> Value {
    json!({
        "id": row.id,
        "customer_id": row.customer_id,
        "name": row.name,
        "email": row.email,
        "image_url": row.image_url,
        "status": row.status,
        "amount": row.amount,
        "amount_formatted": format_cents(row.amount),
        "date": row.date,
        "date_formatted": format_date_local(row.date),
    })
}

pub fn customer_summary_to_json(summary: &CustomerSummary) -> Value {
    json!({
        "id": summary.id,
        "name": summary.name,
        "email": summary.email,
        "image_url": summary.image_url,
        "total_invoices": summary.total_invoices,
        "total_pending": summary.total_pending,
        "total_pending_formatted": format_cents(summary.total_pending),
        "total_paid": summary.total_paid,
        "total_paid_formatted": format_cents(summary.total_paid),
    })
}

/// A list page with the numbers and window the pager control renders.
pub fn page_to_json<T>(page: &Page<T>, map: impl Fn(&T) -> Value) -> Value {
    json!({
        "items": page.items.iter().map(map).collect::<Vec<_>>(),
        "page": page.page,
        "total_pages": page.total_pages,
        "pagination": generate_pagination(page.page, page.total_pages),
    })
}

pub fn dashboard_to_json(data: &DashboardData) -> Value {
    let (y_axis, top_label) = y_axis_labels(&data.revenue);
    json!({
        "cards": {
            "collected": format_currency(data.totals.collected as f64),
            "pending": format_currency(data.totals.pending as f64),
            "total_invoices": data.totals.invoice_count,
            "total_customers": data.totals.customer_count,
        },
        "latest_invoices": data.latest.iter().map(invoice_row_to_json).collect::<Vec<_>>(),
        "revenue": data.revenue,
        "y_axis": y_axis,
        "top_label": top_label,
    })
}
