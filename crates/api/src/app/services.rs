//! Fetch/derive orchestration behind the HTTP handlers.
//!
//! Each method fetches fresh records (independent fetches for one render are
//! awaited together), runs the pure pipeline from `ledgerdash-views`, and
//! hands plain rows back to the handler. Nothing is cached between requests.

use std::sync::Arc;

use ledgerdash_core::{Customer, CustomerId, Invoice, InvoiceId, InvoiceStatus, RevenuePoint};
use ledgerdash_store::{
    CustomerPatch, DataSource, InvoicePatch, InvoiceSelector, NewCustomer, NewInvoice, StoreResult,
};
use ledgerdash_views::{
    customer_index, customer_summaries, dashboard_totals, filter_rows, invoice_rows, paginate,
    sort_latest_first, CustomerSummary, DashboardTotals, InvoiceRow, Page, ITEMS_PER_PAGE,
    LATEST_INVOICES,
};

/// Everything the dashboard overview renders in one request.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub totals: DashboardTotals,
    pub latest: Vec<InvoiceRow>,
    pub revenue: Vec<RevenuePoint>,
}

pub struct AppServices {
    source: Arc<dyn DataSource>,
}

impl AppServices {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self { source }
    }

    /// One page of the invoices table: fetch, join, filter, sort, slice.
    ///
    /// A `status` filter is offered to the backend for pre-narrowing and
    /// re-applied locally, since pushdown may over-return.
    pub async fn invoice_page(
        &self,
        query: &str,
        page: i64,
        status: Option<InvoiceStatus>,
    ) -> StoreResult<Page<InvoiceRow>> {
        let selector = InvoiceSelector {
            status,
            ..Default::default()
        };
        let (invoices, customers) = tokio::try_join!(
            self.source.list_invoices_matching(&selector),
            self.source.list_customers(),
        )?;

        let index = customer_index(customers);
        let mut rows = invoice_rows(invoices, &index);
        rows.retain(|row| selector.status.is_none_or(|s| row.status == s));
        let mut rows = filter_rows(rows, query);
        sort_latest_first(&mut rows);
        Ok(paginate(rows, page, ITEMS_PER_PAGE))
    }

    /// The most recent joined invoice rows for the dashboard panel.
    pub async fn latest_invoices(&self) -> StoreResult<Vec<InvoiceRow>> {
        let (invoices, customers) =
            tokio::try_join!(self.source.list_invoices(), self.source.list_customers())?;
        let index = customer_index(customers);
        let mut rows = invoice_rows(invoices, &index);
        sort_latest_first(&mut rows);
        rows.truncate(LATEST_INVOICES);
        Ok(rows)
    }

    /// One page of the customers table with per-customer invoice totals.
    pub async fn customer_page(&self, query: &str, page: i64) -> StoreResult<Page<CustomerSummary>> {
        let (customers, invoices) =
            tokio::try_join!(self.source.list_customers(), self.source.list_invoices())?;
        let mut summaries = customer_summaries(customers, &invoices);
        // Stable listing order for a map-backed store.
        summaries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.as_str().cmp(b.id.as_str())));
        let summaries = filter_rows(summaries, query);
        Ok(paginate(summaries, page, ITEMS_PER_PAGE))
    }

    pub async fn dashboard(&self) -> StoreResult<DashboardData> {
        let (invoices, customers, revenue) = tokio::try_join!(
            self.source.list_invoices(),
            self.source.list_customers(),
            self.source.list_revenue(),
        )?;

        let totals = dashboard_totals(&customers, &invoices);
        let index = customer_index(customers);
        let mut latest = invoice_rows(invoices, &index);
        sort_latest_first(&mut latest);
        latest.truncate(LATEST_INVOICES);

        Ok(DashboardData {
            totals,
            latest,
            revenue,
        })
    }

    // Single-entity lookups and writes pass straight through to the store;
    // handlers own the HTTP mapping.

    pub async fn get_invoice(&self, id: &InvoiceId) -> StoreResult<Option<Invoice>> {
        self.source.get_invoice(id).await
    }

    pub async fn create_invoice(&self, new: NewInvoice) -> StoreResult<Invoice> {
        self.source.create_invoice(new).await
    }

    pub async fn update_invoice(&self, id: &InvoiceId, patch: InvoicePatch) -> StoreResult<Invoice> {
        self.source.update_invoice(id, patch).await
    }

    pub async fn delete_invoice(&self, id: &InvoiceId) -> StoreResult<()> {
        self.source.delete_invoice(id).await
    }

    pub async fn get_customer(&self, id: &CustomerId) -> StoreResult<Option<Customer>> {
        self.source.get_customer(id).await
    }

    pub async fn create_customer(&self, new: NewCustomer) -> StoreResult<Customer> {
        self.source.create_customer(new).await
    }

    pub async fn update_customer(&self, id: &CustomerId, patch: CustomerPatch) -> StoreResult<Customer> {
        self.source.update_customer(id, patch).await
    }

    pub async fn delete_customer(&self, id: &CustomerId) -> StoreResult<()> {
        self.source.delete_customer(id).await
    }
}
