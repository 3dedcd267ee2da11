//! Filter, sort, and paginate denormalized rows into list pages.

use serde::Serialize;

use crate::join::InvoiceRow;
use crate::summary::CustomerSummary;

/// Rows that expose the display fields free-text search runs over.
pub trait Searchable {
    /// Push the stringified fields a query is matched against.
    fn haystack(&self, out: &mut Vec<String>);
}

impl Searchable for InvoiceRow {
    // Raw values: the amount is matched as stored (minor units), the date as
    // its ISO form, not the formatted display strings.
    fn haystack(&self, out: &mut Vec<String>) {
        out.push(self.name.clone());
        out.push(self.email.clone());
        out.push(self.status.as_str().to_string());
        out.push(self.amount.to_string());
        out.push(self.date.to_string());
    }
}

impl Searchable for CustomerSummary {
    // Name and email only; derived totals are not searchable.
    fn haystack(&self, out: &mut Vec<String>) {
        out.push(self.name.clone());
        out.push(self.email.clone());
    }
}

/// One page of rows plus the numbers the pager needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-indexed page actually served (non-positive input coerces to 1).
    pub page: u32,
    pub total_pages: u32,
}

/// Keep the rows whose haystack contains the lower-cased query.
///
/// An empty query matches everything.
pub fn filter_rows<T: Searchable>(rows: Vec<T>, query: &str) -> Vec<T> {
    let q = query.to_lowercase();
    if q.is_empty() {
        return rows;
    }
    let mut fields = Vec::new();
    rows.into_iter()
        .filter(|row| {
            fields.clear();
            row.haystack(&mut fields);
            fields.iter().any(|v| v.to_lowercase().contains(&q))
        })
        .collect()
}

/// Sort invoice rows most recent first.
///
/// `sort_by` is stable, so rows sharing a date keep their fetch order and
/// the output is deterministic.
pub fn sort_latest_first(rows: &mut [InvoiceRow]) {
    rows.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Number of pages needed for `len` rows: `ceil(len / per_page)`, never 0.
pub fn page_count(len: usize, per_page: usize) -> u32 {
    (len.div_ceil(per_page)).max(1) as u32
}

/// Slice out the requested 1-indexed page.
///
/// A page beyond the range yields an empty slice, not an error; zero or
/// negative pages are served as page 1.
pub fn paginate<T>(rows: Vec<T>, page: i64, per_page: usize) -> Page<T> {
    let total_pages = page_count(rows.len(), per_page);
    // Clamp before narrowing so absurd page numbers stay out of range
    // instead of wrapping back into it.
    let page = page.clamp(1, u32::MAX as i64) as u32;
    let offset = (page as usize - 1).saturating_mul(per_page);
    let items = rows.into_iter().skip(offset).take(per_page).collect();
    Page {
        items,
        page,
        total_pages,
    }
}
