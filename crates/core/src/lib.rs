//! `ledgerdash-core` — plain entity records shared across the workspace.
//!
//! This crate contains **pure domain** data (no IO, no HTTP, no storage):
//! the customer/invoice/revenue records as the backing store hands them out,
//! their identifiers, and the domain error taxonomy.

pub mod error;
pub mod id;
pub mod record;

pub use error::DomainError;
pub use id::{CustomerId, InvoiceId};
pub use record::{Customer, Invoice, InvoiceStatus, RevenuePoint};
