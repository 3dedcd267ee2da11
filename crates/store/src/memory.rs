//! In-memory `DataSource` for dev servers and tests.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use ledgerdash_core::{Customer, CustomerId, Invoice, InvoiceId, RevenuePoint};

use crate::source::{
    CustomerPatch, DataSource, InvoicePatch, InvoiceSelector, NewCustomer, NewInvoice, StoreError,
    StoreResult,
};

/// Process-local store backed by `RwLock`ed maps, one per collection.
///
/// Ids are minted as UUIDv7 strings (time-ordered), mirroring how the real
/// backend assigns opaque document ids. A poisoned lock is reported as the
/// store being unavailable rather than panicking.
#[derive(Debug, Default)]
pub struct InMemoryDataSource {
    customers: RwLock<HashMap<CustomerId, Customer>>,
    invoices: RwLock<HashMap<InvoiceId, Invoice>>,
    revenue: RwLock<Vec<RevenuePoint>>,
}

impl InMemoryDataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the revenue collection (seed/test helper).
    pub fn set_revenue(&self, points: Vec<RevenuePoint>) {
        if let Ok(mut revenue) = self.revenue.write() {
            *revenue = points;
        }
    }

    fn mint_id() -> String {
        Uuid::now_v7().to_string()
    }
}

fn poisoned() -> StoreError {
    StoreError::Unavailable("store lock poisoned".to_string())
}

#[async_trait]
impl DataSource for InMemoryDataSource {
    async fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        let map = self.customers.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    async fn get_customer(&self, id: &CustomerId) -> StoreResult<Option<Customer>> {
        let map = self.customers.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }

    async fn create_customer(&self, new: NewCustomer) -> StoreResult<Customer> {
        if new.name.trim().is_empty() {
            return Err(StoreError::Invalid("customer name is required".to_string()));
        }
        let customer = Customer {
            id: CustomerId::new(Self::mint_id()),
            name: new.name,
            email: new.email,
            image_url: new.image_url,
        };
        let mut map = self.customers.write().map_err(|_| poisoned())?;
        map.insert(customer.id.clone(), customer.clone());
        Ok(customer)
    }

    async fn update_customer(&self, id: &CustomerId, patch: CustomerPatch) -> StoreResult<Customer> {
        let mut map = self.customers.write().map_err(|_| poisoned())?;
        let customer = map.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(name) = patch.name {
            customer.name = name;
        }
        if let Some(email) = patch.email {
            customer.email = email;
        }
        if let Some(image_url) = patch.image_url {
            customer.image_url = Some(image_url);
        }
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: &CustomerId) -> StoreResult<()> {
        let mut map = self.customers.write().map_err(|_| poisoned())?;
        map.remove(id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn list_invoices(&self) -> StoreResult<Vec<Invoice>> {
        let map = self.invoices.read().map_err(|_| poisoned())?;
        Ok(map.values().cloned().collect())
    }

    async fn get_invoice(&self, id: &InvoiceId) -> StoreResult<Option<Invoice>> {
        let map = self.invoices.read().map_err(|_| poisoned())?;
        Ok(map.get(id).cloned())
    }

    async fn create_invoice(&self, new: NewInvoice) -> StoreResult<Invoice> {
        if new.amount <= 0 {
            return Err(StoreError::Invalid("amount must be positive".to_string()));
        }
        let invoice = Invoice {
            id: InvoiceId::new(Self::mint_id()),
            customer_id: new.customer_id,
            amount: new.amount,
            status: new.status,
            date: new.date.unwrap_or_else(|| chrono::Utc::now().date_naive()),
        };
        let mut map = self.invoices.write().map_err(|_| poisoned())?;
        map.insert(invoice.id.clone(), invoice.clone());
        Ok(invoice)
    }

    async fn update_invoice(&self, id: &InvoiceId, patch: InvoicePatch) -> StoreResult<Invoice> {
        let mut map = self.invoices.write().map_err(|_| poisoned())?;
        let invoice = map.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(amount) = patch.amount {
            if amount <= 0 {
                return Err(StoreError::Invalid("amount must be positive".to_string()));
            }
            invoice.amount = amount;
        }
        if let Some(customer_id) = patch.customer_id {
            invoice.customer_id = customer_id;
        }
        if let Some(status) = patch.status {
            invoice.status = status;
        }
        if let Some(date) = patch.date {
            invoice.date = date;
        }
        Ok(invoice.clone())
    }

    async fn delete_invoice(&self, id: &InvoiceId) -> StoreResult<()> {
        let mut map = self.invoices.write().map_err(|_| poisoned())?;
        map.remove(id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    async fn list_revenue(&self) -> StoreResult<Vec<RevenuePoint>> {
        let revenue = self.revenue.read().map_err(|_| poisoned())?;
        Ok(revenue.clone())
    }

    /// This backend has a trivial "query language": it narrows in memory so
    /// callers exercise the same pushdown path a remote backend would take.
    async fn list_invoices_matching(&self, selector: &InvoiceSelector) -> StoreResult<Vec<Invoice>> {
        let map = self.invoices.read().map_err(|_| poisoned())?;
        Ok(map
            .values()
            .filter(|inv| selector.matches(inv))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ledgerdash_core::InvoiceStatus;

    #[tokio::test]
    async fn create_then_get_roundtrips() {
        let store = InMemoryDataSource::new();
        let customer = store
            .create_customer(NewCustomer {
                name: "Alice".to_string(),
                email: "alice@example.com".to_string(),
                image_url: None,
            })
            .await
            .unwrap();

        let fetched = store.get_customer(&customer.id).await.unwrap();
        assert_eq!(fetched, Some(customer));
    }

    #[tokio::test]
    async fn create_invoice_stamps_today_when_no_date_given() {
        let store = InMemoryDataSource::new();
        let invoice = store
            .create_invoice(NewInvoice {
                customer_id: CustomerId::new("A"),
                amount: 1500,
                status: InvoiceStatus::Pending,
                date: None,
            })
            .await
            .unwrap();
        assert_eq!(invoice.date, chrono::Utc::now().date_naive());
    }

    #[tokio::test]
    async fn rejects_non_positive_amounts() {
        let store = InMemoryDataSource::new();
        let err = store
            .create_invoice(NewInvoice {
                customer_id: CustomerId::new("A"),
                amount: 0,
                status: InvoiceStatus::Paid,
                date: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn update_patches_only_given_fields() {
        let store = InMemoryDataSource::new();
        let invoice = store
            .create_invoice(NewInvoice {
                customer_id: CustomerId::new("A"),
                amount: 1000,
                status: InvoiceStatus::Pending,
                date: Some("2024-05-01".parse().unwrap()),
            })
            .await
            .unwrap();

        let updated = store
            .update_invoice(
                &invoice.id,
                InvoicePatch {
                    status: Some(InvoiceStatus::Paid),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.amount, 1000);
        assert_eq!(updated.customer_id, invoice.customer_id);
    }

    #[tokio::test]
    async fn delete_missing_record_is_not_found() {
        let store = InMemoryDataSource::new();
        let err = store
            .delete_invoice(&InvoiceId::new("nope"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::NotFound));
    }

    #[tokio::test]
    async fn selector_narrows_by_status_and_date() {
        let store = InMemoryDataSource::new();
        for (amount, status, date) in [
            (100, InvoiceStatus::Paid, "2024-01-05"),
            (200, InvoiceStatus::Pending, "2024-02-10"),
            (300, InvoiceStatus::Paid, "2024-03-15"),
        ] {
            store
                .create_invoice(NewInvoice {
                    customer_id: CustomerId::new("A"),
                    amount,
                    status,
                    date: Some(date.parse().unwrap()),
                })
                .await
                .unwrap();
        }

        let paid = store
            .list_invoices_matching(&InvoiceSelector {
                status: Some(InvoiceStatus::Paid),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(paid.len(), 2);

        let early = store
            .list_invoices_matching(&InvoiceSelector {
                issued_before: Some("2024-02-01".parse().unwrap()),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(early.len(), 1);
        assert_eq!(early[0].amount, 100);
    }
}
