use async_trait::async_trait;

use crate::domain::failure::Failure;
use crate::domain::payment::{Customer, Item, Payment};

#[derive(Debug, Clone)]
pub(crate) struct NewPayment {
    pub(crate) item_id: i64,
    pub(crate) customer_id: i64,
    pub(crate) amount_cents: i64,
}

#[async_trait]
pub(crate) trait PaymentRepository: Send + Sync {
    async fn get_item(&self, id: i64) -> Result<Option<Item>, Failure>;
    async fn list_items(&self) -> Result<Vec<Item>, Failure>;
    async fn get_customer(&self, id: i64) -> Result<Option<Customer>, Failure>;

    /// Atomically claims the (customer, item) pair and returns the payment id.
    ///
    /// Fails with `Conflict` (detail `{"payment_id": ..}`) when the pair already
    /// has a payment, settled or still pending.
    async fn reserve_payment(&self, input: NewPayment) -> Result<i64, Failure>;

    /// Settles a reserved payment with the amount actually charged.
    async fn confirm_payment(&self, id: i64, amount_cents: i64) -> Result<Payment, Failure>;

    /// Drops a reservation whose charge did not go through.
    async fn release_payment(&self, id: i64) -> Result<(), Failure>;
}
