// Sandbox payment widget for local development and tests

use super::widget::{OrderAmount, PaymentConfirmation, PaymentOutcome, PaymentWidget};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::info;

/// What the simulated buyer does once the order is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SandboxDecision {
    #[default]
    Approve,
    Cancel,
}

impl FromStr for SandboxDecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "approve" => Ok(SandboxDecision::Approve),
            "cancel" => Ok(SandboxDecision::Cancel),
            other => Err(format!("unknown sandbox outcome '{}' (expected approve or cancel)", other)),
        }
    }
}

#[derive(Clone)]
pub struct SandboxWidget {
    client_id: String,
    decision: SandboxDecision,
    latency: Duration,
    orders: Arc<RwLock<HashMap<String, OrderAmount>>>,
}

impl SandboxWidget {
    pub fn new(client_id: impl Into<String>, decision: SandboxDecision, latency: Duration) -> Self {
        Self {
            client_id: client_id.into(),
            decision,
            latency,
            orders: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub async fn order(&self, order_id: &str) -> Option<OrderAmount> {
        self.orders.read().await.get(order_id).cloned()
    }
}

#[async_trait]
impl PaymentWidget for SandboxWidget {
    fn name(&self) -> &str {
        "sandbox"
    }

    async fn create_order(&self, amount: &OrderAmount) -> anyhow::Result<String> {
        let order_id = uuid::Uuid::new_v4().to_string();
        self.orders
            .write()
            .await
            .insert(order_id.clone(), amount.clone());
        info!(
            "Sandbox order {} created for {} {} (client {})",
            order_id, amount.value, amount.currency_code, self.client_id
        );
        Ok(order_id)
    }

    async fn await_approval(&self, order_id: &str) -> anyhow::Result<PaymentOutcome> {
        let amount = self
            .order(order_id)
            .await
            .ok_or_else(|| anyhow::anyhow!("Unknown order: {}", order_id))?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let outcome = match self.decision {
            SandboxDecision::Approve => PaymentOutcome::Approved(PaymentConfirmation {
                order_id: order_id.to_string(),
                amount,
                status: "COMPLETED".to_string(),
                captured_at: Utc::now(),
            }),
            SandboxDecision::Cancel => PaymentOutcome::Cancelled {
                order_id: order_id.to_string(),
                reason: "Buyer closed the payment window".to_string(),
            },
        };
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_decision_from_str() {
        assert_eq!("approve".parse::<SandboxDecision>().unwrap(), SandboxDecision::Approve);
        assert_eq!(" CANCEL ".parse::<SandboxDecision>().unwrap(), SandboxDecision::Cancel);
        assert!("refund".parse::<SandboxDecision>().is_err());
    }

    #[tokio::test]
    async fn test_approved_order_carries_amount() {
        let widget = SandboxWidget::new("test", SandboxDecision::Approve, Duration::ZERO);
        let amount = OrderAmount::new(Money::from_cents(4000), "USD");

        let order_id = widget.create_order(&amount).await.unwrap();
        match widget.await_approval(&order_id).await.unwrap() {
            PaymentOutcome::Approved(confirmation) => {
                assert_eq!(confirmation.order_id, order_id);
                assert_eq!(confirmation.amount.value, "40.00");
                assert_eq!(confirmation.amount.currency_code, "USD");
            }
            other => panic!("expected approval, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cancelled_order() {
        let widget = SandboxWidget::new("test", SandboxDecision::Cancel, Duration::ZERO);
        let order_id = widget
            .create_order(&OrderAmount::new(Money::from_cents(100), "USD"))
            .await
            .unwrap();

        assert!(matches!(
            widget.await_approval(&order_id).await.unwrap(),
            PaymentOutcome::Cancelled { .. }
        ));
    }

    #[tokio::test]
    async fn test_unknown_order_is_an_error() {
        let widget = SandboxWidget::new("test", SandboxDecision::Approve, Duration::ZERO);
        assert!(widget.await_approval("missing").await.is_err());
    }
}
