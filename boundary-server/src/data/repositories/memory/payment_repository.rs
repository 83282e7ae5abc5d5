use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::data::payment_repository::{NewPayment, PaymentRepository};
use crate::domain::failure::Failure;
use crate::domain::payment::{Customer, Item, Payment};

#[derive(Debug)]
struct PaymentRow {
    payment: Payment,
    settled: bool,
}

#[derive(Debug, Default)]
struct Ledger {
    rows: Vec<PaymentRow>,
    next_id: i64,
}

#[derive(Debug, Default)]
pub(crate) struct MemoryPaymentRepository {
    items: Vec<Item>,
    customers: Vec<Customer>,
    ledger: RwLock<Ledger>,
}

impl MemoryPaymentRepository {
    pub(crate) fn new(items: Vec<Item>, customers: Vec<Customer>) -> Self {
        Self {
            items,
            customers,
            ledger: RwLock::new(Ledger::default()),
        }
    }

    /// Catalog the server starts with.
    pub(crate) fn seeded() -> Self {
        let items = vec![
            Item {
                id: 1,
                name: "Course pass".to_string(),
                price_cents: 4900,
                purchasable: true,
            },
            Item {
                id: 2,
                name: "Mentoring session".to_string(),
                price_cents: 12000,
                purchasable: true,
            },
            Item {
                id: 3,
                name: "Legacy bundle".to_string(),
                price_cents: 1500,
                purchasable: false,
            },
        ];
        let customers = vec![
            Customer { id: 1, active: true },
            Customer { id: 2, active: true },
            Customer {
                id: 3,
                active: false,
            },
        ];
        Self::new(items, customers)
    }
}

#[async_trait]
impl PaymentRepository for MemoryPaymentRepository {
    async fn get_item(&self, id: i64) -> Result<Option<Item>, Failure> {
        Ok(self.items.iter().find(|item| item.id == id).cloned())
    }

    async fn list_items(&self) -> Result<Vec<Item>, Failure> {
        Ok(self.items.clone())
    }

    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, Failure> {
        Ok(self
            .customers
            .iter()
            .find(|customer| customer.id == id)
            .cloned())
    }

    async fn reserve_payment(&self, input: NewPayment) -> Result<i64, Failure> {
        let mut ledger = self.ledger.write().await;

        if let Some(row) = ledger.rows.iter().find(|row| {
            row.payment.customer_id == input.customer_id && row.payment.item_id == input.item_id
        }) {
            return Err(Failure::conflict("item already purchased")
                .with_detail(serde_json::json!({ "payment_id": row.payment.id })));
        }

        ledger.next_id += 1;
        let id = ledger.next_id;
        ledger.rows.push(PaymentRow {
            payment: Payment {
                id,
                item_id: input.item_id,
                customer_id: input.customer_id,
                amount_cents: input.amount_cents,
                created_at: Utc::now(),
            },
            settled: false,
        });
        Ok(id)
    }

    async fn confirm_payment(&self, id: i64, amount_cents: i64) -> Result<Payment, Failure> {
        let mut ledger = self.ledger.write().await;
        let row = ledger
            .rows
            .iter_mut()
            .find(|row| row.payment.id == id && !row.settled)
            .ok_or_else(|| Failure::unexpected(format!("no pending payment with id {id}")))?;

        row.settled = true;
        row.payment.amount_cents = amount_cents;
        row.payment.created_at = Utc::now();
        Ok(row.payment.clone())
    }

    async fn release_payment(&self, id: i64) -> Result<(), Failure> {
        let mut ledger = self.ledger.write().await;
        let before = ledger.rows.len();
        ledger.rows.retain(|row| row.settled || row.payment.id != id);

        if ledger.rows.len() == before {
            return Err(Failure::unexpected(format!(
                "no pending payment with id {id}"
            )));
        }
        Ok(())
    }
}
