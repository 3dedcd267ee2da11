//! Join engine: denormalize invoices with their owning customer.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use ledgerdash_core::{Customer, CustomerId, Invoice, InvoiceId, InvoiceStatus};

/// Display name substituted when an invoice references a missing customer.
pub const UNKNOWN_CUSTOMER: &str = "Unknown";

/// One invoice flattened with its customer's display fields.
///
/// Never persisted; recomputed per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvoiceRow {
    pub id: InvoiceId,
    pub customer_id: CustomerId,
    /// Minor currency units (cents).
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Build a request-scoped lookup of customers keyed by identifier.
///
/// Rebuilt on every request; there is deliberately no shared cache because
/// no invalidation exists and staleness would be a correctness risk.
pub fn customer_index(customers: Vec<Customer>) -> HashMap<CustomerId, Customer> {
    customers.into_iter().map(|c| (c.id.clone(), c)).collect()
}

/// Merge each invoice with its customer's display fields.
///
/// Output length equals input length and order is preserved. A dangling
/// `customer_id` is not an error: the row gets placeholder display values.
pub fn invoice_rows(
    invoices: Vec<Invoice>,
    customers: &HashMap<CustomerId, Customer>,
) -> Vec<InvoiceRow> {
    invoices
        .into_iter()
        .map(|inv| {
            let customer = customers.get(&inv.customer_id);
            InvoiceRow {
                name: customer
                    .map(|c| c.name.clone())
                    .unwrap_or_else(|| UNKNOWN_CUSTOMER.to_string()),
                email: customer.map(|c| c.email.clone()).unwrap_or_default(),
                image_url: customer
                    .and_then(|c| c.image_url.clone())
                    .unwrap_or_default(),
                id: inv.id,
                customer_id: inv.customer_id,
                amount: inv.amount,
                status: inv.status,
                date: inv.date,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn customer(id: &str, name: &str, email: &str) -> Customer {
        Customer {
            id: CustomerId::new(id),
            name: name.to_string(),
            email: email.to_string(),
            image_url: Some(format!("/avatars/{id}.png")),
        }
    }

    fn invoice(id: &str, customer_id: &str, amount: i64, date: &str) -> Invoice {
        Invoice {
            id: InvoiceId::new(id),
            customer_id: CustomerId::new(customer_id),
            amount,
            status: InvoiceStatus::Pending,
            date: date.parse().unwrap(),
        }
    }

    #[test]
    fn joins_matching_customers_in_input_order() {
        let index = customer_index(vec![
            customer("A", "Alice", "alice@example.com"),
            customer("B", "Bob", "bob@example.com"),
        ]);
        let rows = invoice_rows(
            vec![
                invoice("1", "A", 1500, "2024-01-05"),
                invoice("2", "B", 2000, "2024-02-10"),
            ],
            &index,
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name, "Alice");
        assert_eq!(rows[0].email, "alice@example.com");
        assert_eq!(rows[0].image_url, "/avatars/A.png");
        assert_eq!(rows[1].name, "Bob");
    }

    #[test]
    fn dangling_reference_degrades_to_placeholders() {
        let index = customer_index(vec![customer("A", "Alice", "alice@example.com")]);
        let rows = invoice_rows(vec![invoice("1", "GONE", 500, "2024-03-01")], &index);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, UNKNOWN_CUSTOMER);
        assert_eq!(rows[0].email, "");
        assert_eq!(rows[0].image_url, "");
    }

    proptest! {
        #[test]
        fn output_length_equals_invoice_count(
            invoice_count in 0usize..40,
            customer_count in 0usize..10,
        ) {
            let index = customer_index(
                (0..customer_count)
                    .map(|i| customer(&format!("c{i}"), &format!("Customer {i}"), "x@y.z"))
                    .collect(),
            );
            // Reference both existing and missing customers.
            let invoices: Vec<_> = (0..invoice_count)
                .map(|i| invoice(&format!("i{i}"), &format!("c{}", i % (customer_count + 2)), 100, "2024-06-01"))
                .collect();

            let rows = invoice_rows(invoices, &index);
            prop_assert_eq!(rows.len(), invoice_count);
        }
    }
}
