use async_trait::async_trait;
use tracing::info;

use crate::domain::failure::{Failure, FailureKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChargeReceipt {
    pub(crate) reference: String,
    pub(crate) amount_cents: i64,
}

#[async_trait]
pub(crate) trait PaymentGateway: Send + Sync {
    async fn charge(&self, customer_id: i64, amount_cents: i64) -> Result<ChargeReceipt, Failure>;
}

pub(crate) type DynPaymentGateway = Box<dyn PaymentGateway>;

#[async_trait]
impl<G: PaymentGateway + ?Sized> PaymentGateway for Box<G> {
    async fn charge(&self, customer_id: i64, amount_cents: i64) -> Result<ChargeReceipt, Failure> {
        (**self).charge(customer_id, amount_cents).await
    }
}

/// Gateway that accepts every positive charge without talking to a provider.
#[derive(Debug, Clone, Default)]
pub(crate) struct SandboxGateway;

#[async_trait]
impl PaymentGateway for SandboxGateway {
    async fn charge(&self, customer_id: i64, amount_cents: i64) -> Result<ChargeReceipt, Failure> {
        if amount_cents <= 0 {
            return Err(Failure::new(
                FailureKind::Value,
                "charge amount must be positive",
            ));
        }

        let reference = format!("sandbox-{customer_id}-{amount_cents}");
        info!(customer_id, amount_cents, %reference, "sandbox charge accepted");

        Ok(ChargeReceipt {
            reference,
            amount_cents,
        })
    }
}
