//! The `DataSource` trait: everything the pipeline asks of a backend.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use ledgerdash_core::{Customer, CustomerId, Invoice, InvoiceId, InvoiceStatus, RevenuePoint};

pub type StoreResult<T> = Result<T, StoreError>;

/// Storage-layer error.
///
/// `Unavailable` aborts the whole page computation upstream; there are no
/// retries anywhere in this workspace.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend was unreachable or rejected the request outright.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The addressed record does not exist.
    #[error("record not found")]
    NotFound,

    /// The backend rejected a write as malformed.
    #[error("invalid write: {0}")]
    Invalid(String),
}

/// Fields for creating a customer; the store assigns the id.
#[derive(Debug, Clone, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub image_url: Option<String>,
}

/// Partial customer update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub image_url: Option<String>,
}

/// Fields for creating an invoice; the store assigns the id and stamps
/// today's date when none is given.
#[derive(Debug, Clone, Deserialize)]
pub struct NewInvoice {
    pub customer_id: CustomerId,
    /// Minor currency units (cents).
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: Option<NaiveDate>,
}

/// Partial invoice update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvoicePatch {
    pub customer_id: Option<CustomerId>,
    pub amount: Option<i64>,
    pub status: Option<InvoiceStatus>,
    pub date: Option<NaiveDate>,
}

/// Criteria a query-capable backend can evaluate natively.
///
/// Free-text search spans joined customer fields, so it can never be pushed
/// down; status and date-range narrowing can be.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceSelector {
    pub status: Option<InvoiceStatus>,
    pub issued_on_or_after: Option<NaiveDate>,
    pub issued_before: Option<NaiveDate>,
}

impl InvoiceSelector {
    pub fn matches(&self, invoice: &Invoice) -> bool {
        if let Some(status) = self.status {
            if invoice.status != status {
                return false;
            }
        }
        if let Some(from) = self.issued_on_or_after {
            if invoice.date < from {
                return false;
            }
        }
        if let Some(until) = self.issued_before {
            if invoice.date >= until {
                return false;
            }
        }
        true
    }
}

/// Read and write access to the externally persisted records.
///
/// All reads hand back owned snapshots; nothing here is cached, and every
/// request recomputes its views from a fresh fetch.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn list_customers(&self) -> StoreResult<Vec<Customer>>;
    async fn get_customer(&self, id: &CustomerId) -> StoreResult<Option<Customer>>;
    async fn create_customer(&self, new: NewCustomer) -> StoreResult<Customer>;
    async fn update_customer(&self, id: &CustomerId, patch: CustomerPatch) -> StoreResult<Customer>;
    async fn delete_customer(&self, id: &CustomerId) -> StoreResult<()>;

    async fn list_invoices(&self) -> StoreResult<Vec<Invoice>>;
    async fn get_invoice(&self, id: &InvoiceId) -> StoreResult<Option<Invoice>>;
    async fn create_invoice(&self, new: NewInvoice) -> StoreResult<Invoice>;
    async fn update_invoice(&self, id: &InvoiceId, patch: InvoicePatch) -> StoreResult<Invoice>;
    async fn delete_invoice(&self, id: &InvoiceId) -> StoreResult<()>;

    async fn list_revenue(&self) -> StoreResult<Vec<RevenuePoint>>;

    /// Fetch invoices matching `selector`, pre-narrowed when the backend has
    /// a native query language.
    ///
    /// Contract: the result may be any superset of the matching invoices
    /// (the default is a full scan); the local pipeline re-applies the
    /// predicate, so both strategies produce identical pages.
    async fn list_invoices_matching(&self, selector: &InvoiceSelector) -> StoreResult<Vec<Invoice>> {
        let _ = selector;
        self.list_invoices().await
    }
}
