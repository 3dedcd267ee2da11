//! `ledgerdash-views` — the list-view data pipeline.
//!
//! Derives disposable view rows from freshly fetched records, in order:
//! join (invoices onto their customers), aggregate (per-customer totals),
//! filter (free-text substring match), sort (date descending, stable),
//! paginate (fixed page size). Everything here is pure and deterministic;
//! fetching belongs to `ledgerdash-store` and rendering to the API layer.

pub mod format;
pub mod join;
pub mod pager;
pub mod summary;
pub mod table;

pub use join::{customer_index, invoice_rows, InvoiceRow};
pub use pager::{generate_pagination, PageItem};
pub use summary::{customer_summaries, dashboard_totals, CustomerSummary, DashboardTotals};
pub use table::{filter_rows, page_count, paginate, sort_latest_first, Page, Searchable};

/// Rows per list page, shared by the pipeline and the pager display helper.
pub const ITEMS_PER_PAGE: usize = 6;

/// How many rows the dashboard "latest invoices" panel shows.
pub const LATEST_INVOICES: usize = 5;
