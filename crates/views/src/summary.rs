//! Aggregation engine: per-customer invoice totals and dashboard cards.

use std::collections::HashMap;

use serde::Serialize;

use ledgerdash_core::{Customer, CustomerId, Invoice, InvoiceStatus};

/// One customer with its invoice totals, for the customers table.
///
/// Sums stay in minor units; display formatting happens at the edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: u64,
    pub total_pending: i64,
    pub total_paid: i64,
}

/// The four dashboard card values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardTotals {
    pub invoice_count: u64,
    pub customer_count: u64,
    /// Sum of paid invoice amounts, minor units.
    pub collected: i64,
    /// Sum of pending invoice amounts, minor units.
    pub pending: i64,
}

#[derive(Debug, Default, Clone, Copy)]
struct Totals {
    invoices: u64,
    pending: i64,
    paid: i64,
}

/// Compute per-customer invoice counts and status sums.
///
/// Single pass over invoices building accumulators keyed by `customer_id`,
/// then one pass merging them onto the customer list, so this stays
/// O(customers + invoices). Customers without invoices get zeros; invoices
/// whose customer is absent from `customers` contribute to no summary.
pub fn customer_summaries(customers: Vec<Customer>, invoices: &[Invoice]) -> Vec<CustomerSummary> {
    let mut by_customer: HashMap<&CustomerId, Totals> = HashMap::new();
    for inv in invoices {
        let totals = by_customer.entry(&inv.customer_id).or_default();
        totals.invoices += 1;
        match inv.status {
            InvoiceStatus::Paid => totals.paid += inv.amount,
            InvoiceStatus::Pending => totals.pending += inv.amount,
        }
    }

    customers
        .into_iter()
        .map(|c| {
            let totals = by_customer.get(&c.id).copied().unwrap_or_default();
            CustomerSummary {
                total_invoices: totals.invoices,
                total_pending: totals.pending,
                total_paid: totals.paid,
                image_url: c.image_url.unwrap_or_default(),
                id: c.id,
                name: c.name,
                email: c.email,
            }
        })
        .collect()
}

/// Compute the dashboard card values across all records.
pub fn dashboard_totals(customers: &[Customer], invoices: &[Invoice]) -> DashboardTotals {
    let mut collected = 0i64;
    let mut pending = 0i64;
    for inv in invoices {
        match inv.status {
            InvoiceStatus::Paid => collected += inv.amount,
            InvoiceStatus::Pending => pending += inv.amount,
        }
    }
    DashboardTotals {
        invoice_count: invoices.len() as u64,
        customer_count: customers.len() as u64,
        collected,
        pending,
    }
}
