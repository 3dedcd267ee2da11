//! `ledgerdash-store` — the data-access collaborator.
//!
//! Defines the [`DataSource`] trait the pipeline fetches through, and an
//! in-memory implementation used by dev servers and tests. A production
//! backend (remote document store) implements the same trait; callers never
//! see which one they talk to.

pub mod memory;
pub mod source;

pub use memory::InMemoryDataSource;
pub use source::{
    CustomerPatch, DataSource, InvoicePatch, InvoiceSelector, NewCustomer, NewInvoice, StoreError,
    StoreResult,
};
