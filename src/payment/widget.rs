// Payment widget contract and its fixed-shape configuration

use crate::models::Money;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub type AmountProvider = Arc<dyn Fn() -> Money + Send + Sync>;
pub type ApproveHandler = Arc<dyn Fn(&PaymentConfirmation) + Send + Sync>;
pub type CancelHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Amount of a single purchase unit, two-place decimal string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderAmount {
    pub currency_code: String,
    pub value: String,
}

impl OrderAmount {
    pub fn new(amount: Money, currency: impl Into<String>) -> Self {
        Self {
            currency_code: currency.into(),
            value: amount.to_string(),
        }
    }
}

/// Payload delivered with an approved payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfirmation {
    pub order_id: String,
    pub amount: OrderAmount,
    pub status: String,
    pub captured_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaymentOutcome {
    Approved(PaymentConfirmation),
    Cancelled { order_id: String, reason: String },
}

/// Configuration handed to the widget: currency, where the amount comes
/// from, and what to call when the flow ends.
#[derive(Clone)]
pub struct PaymentWidgetConfig {
    pub currency: String,
    pub amount_provider: AmountProvider,
    pub on_approve: ApproveHandler,
    pub on_cancel: CancelHandler,
}

impl PaymentWidgetConfig {
    pub fn new<F>(currency: impl Into<String>, amount_provider: F) -> Self
    where
        F: Fn() -> Money + Send + Sync + 'static,
    {
        Self {
            currency: currency.into(),
            amount_provider: Arc::new(amount_provider),
            on_approve: Arc::new(|_| {}),
            on_cancel: Arc::new(|_| {}),
        }
    }

    pub fn on_approve<F>(mut self, handler: F) -> Self
    where
        F: Fn(&PaymentConfirmation) + Send + Sync + 'static,
    {
        self.on_approve = Arc::new(handler);
        self
    }

    pub fn on_cancel<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str) + Send + Sync + 'static,
    {
        self.on_cancel = Arc::new(handler);
        self
    }

    /// Read the current amount from the provider
    pub fn order_amount(&self) -> OrderAmount {
        OrderAmount::new((self.amount_provider)(), self.currency.clone())
    }
}

impl fmt::Debug for PaymentWidgetConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentWidgetConfig")
            .field("currency", &self.currency)
            .finish_non_exhaustive()
    }
}

/// An external payment widget. It owns its own UI and order lifecycle; the
/// storefront only creates an order for an amount and waits for the buyer.
#[async_trait]
pub trait PaymentWidget: Send + Sync {
    /// Widget name for logs and the status bar
    fn name(&self) -> &str;

    /// Create an order and return the widget's order id
    async fn create_order(&self, amount: &OrderAmount) -> anyhow::Result<String>;

    /// Wait for the buyer to approve or abandon the order
    async fn await_approval(&self, order_id: &str) -> anyhow::Result<PaymentOutcome>;
}
