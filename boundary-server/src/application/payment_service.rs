use std::time::Duration;

use tracing::{info, warn};

use crate::data::payment_repository::{NewPayment, PaymentRepository};
use crate::domain::failure::Failure;
use crate::domain::payment::{Item, Payment};
use crate::infrastructure::payment_gateway::PaymentGateway;

const CHARGE_TIMEOUT: Duration = Duration::from_secs(30);

pub(crate) struct PaymentService<R: PaymentRepository, G: PaymentGateway> {
    repo: R,
    gateway: G,
}

impl<R: PaymentRepository, G: PaymentGateway> PaymentService<R, G> {
    pub(crate) fn new(repo: R, gateway: G) -> Self {
        Self { repo, gateway }
    }

    pub(crate) async fn purchase_item(
        &self,
        customer_id: i64,
        item_id: i64,
    ) -> Result<Payment, Failure> {
        let customer = self
            .repo
            .get_customer(customer_id)
            .await?
            .ok_or_else(|| Failure::not_found(format!("customer id: {customer_id}")))?;
        if !customer.active {
            return Err(Failure::permission("inactive customers cannot purchase items"));
        }

        let item = self
            .repo
            .get_item(item_id)
            .await?
            .ok_or_else(|| Failure::not_found(format!("item id: {item_id}")))?;
        if !item.purchasable {
            return Err(Failure::validation_field(
                "item_id",
                "item is not available for purchase",
            ));
        }

        let reservation = self
            .repo
            .reserve_payment(NewPayment {
                item_id: item.id,
                customer_id: customer.id,
                amount_cents: item.price_cents,
            })
            .await?;

        let charged = tokio::time::timeout(
            CHARGE_TIMEOUT,
            self.gateway.charge(customer.id, item.price_cents),
        )
        .await
        .unwrap_or_else(|_| Err(Failure::timeout("payment provider did not answer")));

        let receipt = match charged {
            Ok(receipt) => receipt,
            Err(failure) => {
                if let Err(release) = self.repo.release_payment(reservation).await {
                    warn!(payment_id = reservation, error = %release, "reservation not released");
                }
                return Err(failure);
            }
        };
        info!(
            customer_id = customer.id,
            item_id = item.id,
            reference = %receipt.reference,
            "item charged"
        );

        self.repo
            .confirm_payment(reservation, receipt.amount_cents)
            .await
    }

    pub(crate) async fn list_items(&self) -> Result<Vec<Item>, Failure> {
        self.repo.list_items().await
    }
}
