//! Checkout Adapter
//!
//! Collects the buyer's contact fields and forwards the cart total to the
//! payment widget. Completion is reported through the configured
//! `on_approve` / `on_cancel` hooks; the adapter applies no business rule to
//! the outcome.

use crate::payment::{OrderAmount, PaymentOutcome, PaymentWidget, PaymentWidgetConfig};
use crate::types::CheckoutError;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use validator::{Validate, ValidationError};

/// Contact form fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Email,
    Phone,
    Location,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Email, ContactField::Phone, ContactField::Location];

    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            ContactField::Phone => "phone",
            ContactField::Location => "location",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Email => "Email",
            ContactField::Phone => "Phone Number",
            ContactField::Location => "Location",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ContactDetails {
    #[validate(custom(function = "required_text"))]
    pub email: String,
    #[validate(custom(function = "required_text"))]
    pub phone: String,
    #[validate(custom(function = "required_text"))]
    pub location: String,
}

fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

impl ContactDetails {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Location => &self.location,
        }
    }

    pub fn field_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Email => &mut self.email,
            ContactField::Phone => &mut self.phone,
            ContactField::Location => &mut self.location,
        }
    }

    /// Required-field check; lists every missing field in form order
    pub fn check(&self) -> Result<(), CheckoutError> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let invalid = errors.field_errors();
        let missing: Vec<String> = ContactField::ALL
            .iter()
            .map(ContactField::id)
            .filter(|id| invalid.keys().any(|k| *k == *id))
            .map(str::to_string)
            .collect();
        Err(CheckoutError::MissingFields(missing))
    }
}

#[derive(Clone)]
pub struct CheckoutAdapter {
    widget: Arc<dyn PaymentWidget>,
    config: PaymentWidgetConfig,
}

impl CheckoutAdapter {
    pub fn new(widget: Arc<dyn PaymentWidget>, config: PaymentWidgetConfig) -> Self {
        Self { widget, config }
    }

    pub fn widget_name(&self) -> &str {
        self.widget.name()
    }

    /// The amount the widget will be asked to collect right now
    pub fn order_amount(&self) -> OrderAmount {
        self.config.order_amount()
    }

    /// Validate the contact fields, then run the widget's order flow
    pub async fn submit(&self, contact: &ContactDetails) -> Result<PaymentOutcome, CheckoutError> {
        contact.check()?;

        let amount = self.order_amount();
        info!(
            "Checkout via {} widget: {} {}",
            self.widget.name(),
            amount.value,
            amount.currency_code
        );

        let order_id = match self.widget.create_order(&amount).await {
            Ok(id) => id,
            Err(e) => return Err(self.fail(e)),
        };

        let outcome = match self.widget.await_approval(&order_id).await {
            Ok(outcome) => outcome,
            Err(e) => return Err(self.fail(e)),
        };

        match &outcome {
            PaymentOutcome::Approved(confirmation) => {
                info!("Payment approved for order {}", confirmation.order_id);
                (self.config.on_approve)(confirmation);
            }
            PaymentOutcome::Cancelled { order_id, reason } => {
                warn!("Payment for order {} not completed: {}", order_id, reason);
                (self.config.on_cancel)(reason);
            }
        }
        Ok(outcome)
    }

    fn fail(&self, error: anyhow::Error) -> CheckoutError {
        let reason = error.to_string();
        warn!("Payment widget failed: {}", reason);
        (self.config.on_cancel)(&reason);
        CheckoutError::Payment(reason)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::payment::{SandboxDecision, SandboxWidget};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
    use std::time::Duration;

    fn contact() -> ContactDetails {
        ContactDetails {
            email: "buyer@example.com".to_string(),
            phone: "555-0100".to_string(),
            location: "Dublin".to_string(),
        }
    }

    struct BrokenWidget;

    #[async_trait]
    impl PaymentWidget for BrokenWidget {
        fn name(&self) -> &str {
            "broken"
        }

        async fn create_order(&self, _amount: &OrderAmount) -> anyhow::Result<String> {
            anyhow::bail!("widget script failed to load")
        }

        async fn await_approval(&self, _order_id: &str) -> anyhow::Result<PaymentOutcome> {
            unreachable!("no order is ever created")
        }
    }

    #[test]
    fn test_complete_contact_passes() {
        assert!(contact().check().is_ok());
    }

    #[test]
    fn test_missing_fields_listed_in_form_order() {
        let details = ContactDetails {
            email: String::new(),
            phone: "555".to_string(),
            location: "   ".to_string(),
        };
        match details.check() {
            Err(CheckoutError::MissingFields(fields)) => assert_eq!(fields, vec!["email", "location"]),
            other => panic!("expected missing fields, got {:?}", other),
        }
    }

    #[test]
    fn test_field_accessors() {
        let mut details = ContactDetails::default();
        details.field_mut(ContactField::Phone).push_str("123");
        assert_eq!(details.field(ContactField::Phone), "123");
        assert_eq!(ContactField::Location.label(), "Location");
    }

    #[test]
    fn test_missing_field_blocks_widget() {
        let widget = Arc::new(SandboxWidget::new("test", SandboxDecision::Approve, Duration::ZERO));
        let adapter = CheckoutAdapter::new(widget, PaymentWidgetConfig::new("USD", || Money::from_cents(100)));

        let result = tokio_test::block_on(adapter.submit(&ContactDetails::default()));
        assert!(matches!(result, Err(CheckoutError::MissingFields(ref f)) if f.len() == 3));
    }

    #[tokio::test]
    async fn test_approval_invokes_hook_with_amount() {
        let approved = Arc::new(AtomicU64::new(0));
        let seen = approved.clone();
        let config = PaymentWidgetConfig::new("USD", || Money::from_cents(4000)).on_approve(move |c| {
            let cents = (c.amount.value.parse::<f64>().unwrap() * 100.0).round() as u64;
            seen.store(cents, Ordering::SeqCst);
        });
        let widget = Arc::new(SandboxWidget::new("test", SandboxDecision::Approve, Duration::ZERO));
        let adapter = CheckoutAdapter::new(widget, config);

        assert_eq!(adapter.order_amount().value, "40.00");
        let outcome = adapter.submit(&contact()).await.unwrap();

        assert!(matches!(outcome, PaymentOutcome::Approved(_)));
        assert_eq!(approved.load(Ordering::SeqCst), 4000);
    }

    #[tokio::test]
    async fn test_cancellation_invokes_cancel_hook() {
        let cancels = Arc::new(AtomicUsize::new(0));
        let seen = cancels.clone();
        let config = PaymentWidgetConfig::new("EUR", || Money::from_cents(999)).on_cancel(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        let widget = Arc::new(SandboxWidget::new("test", SandboxDecision::Cancel, Duration::ZERO));
        let adapter = CheckoutAdapter::new(widget, config);

        let outcome = adapter.submit(&contact()).await.unwrap();
        assert!(matches!(outcome, PaymentOutcome::Cancelled { .. }));
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_widget_failure_reported() {
        let cancels = Arc::new(AtomicUsize::new(0));
        let seen = cancels.clone();
        let config = PaymentWidgetConfig::new("USD", || Money::from_cents(100)).on_cancel(move |_| {
            seen.fetch_add(1, Ordering::SeqCst);
        });
        let adapter = CheckoutAdapter::new(Arc::new(BrokenWidget), config);

        let result = adapter.submit(&contact()).await;
        assert!(matches!(result, Err(CheckoutError::Payment(_))));
        assert_eq!(cancels.load(Ordering::SeqCst), 1);
    }
}
