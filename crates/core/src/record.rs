//! Entity records as persisted by the backing store.
//!
//! These are plain immutable data carriers: the core only reads them and
//! derives view rows; all writes go through explicit store operations.

use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::id::{CustomerId, InvoiceId};

/// A customer as stored remotely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub email: String,
    /// Avatar reference; absent customers get an empty placeholder in views.
    pub image_url: Option<String>,
}

/// Invoice payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }
}

impl core::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvoiceStatus::Pending),
            "paid" => Ok(InvoiceStatus::Paid),
            other => Err(DomainError::validation(format!(
                "status must be \"pending\" or \"paid\", got {other:?}"
            ))),
        }
    }
}

/// An invoice as stored remotely.
///
/// `amount` is in minor currency units (cents). `customer_id` should
/// reference an existing customer, but view derivation tolerates a dangling
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// One month of aggregated revenue for the dashboard chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenuePoint {
    pub month: String,
    pub revenue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_known_values_only() {
        assert_eq!("paid".parse::<InvoiceStatus>().unwrap(), InvoiceStatus::Paid);
        assert_eq!(
            "pending".parse::<InvoiceStatus>().unwrap(),
            InvoiceStatus::Pending
        );
        assert!("overdue".parse::<InvoiceStatus>().is_err());
        assert!("Paid".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn invoice_serializes_with_lowercase_status_and_iso_date() {
        let inv = Invoice {
            id: InvoiceId::new("inv-1"),
            customer_id: CustomerId::new("cus-1"),
            amount: 1500,
            status: InvoiceStatus::Paid,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        };
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["status"], "paid");
        assert_eq!(json["date"], "2024-01-05");
        assert_eq!(json["amount"], 1500);
    }
}
