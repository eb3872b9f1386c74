use crate::core::{EmailNotifier, InvoiceGenerator, Order, OrderRequest, Result, ValidationPolicy};
use crate::utils::validation::{
    validate_non_empty_string, validate_non_negative_amount, validate_non_negative_count,
};

/// Runs an order through its three collaborators in a fixed sequence:
/// total, placement, invoice, notification.
///
/// The collaborators are fixed at construction. No step's outcome gates a
/// later one, and repeated calls repeat every side effect.
pub struct OrderManager<O: Order, I: InvoiceGenerator, E: EmailNotifier> {
    order: O,
    invoice_generator: I,
    email_notifier: E,
    policy: ValidationPolicy,
}

/// Manager whose collaborators are chosen at runtime.
pub type DynOrderManager =
    OrderManager<Box<dyn Order>, Box<dyn InvoiceGenerator>, Box<dyn EmailNotifier>>;

impl<O: Order, I: InvoiceGenerator, E: EmailNotifier> OrderManager<O, I, E> {
    pub fn new(order: O, invoice_generator: I, email_notifier: E) -> Self {
        Self {
            order,
            invoice_generator,
            email_notifier,
            policy: ValidationPolicy::Permissive,
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> ValidationPolicy {
        self.policy
    }

    pub fn process_order(
        &self,
        price: f64,
        quantity: i32,
        customer_name: &str,
        address: &str,
        invoice_target: &str,
        destination: &str,
    ) -> Result<()> {
        let _span = tracing::info_span!("process_order", customer = customer_name).entered();

        if self.policy == ValidationPolicy::Strict {
            validate_non_negative_amount("price", price)?;
            validate_non_negative_count("quantity", quantity)?;
            validate_non_empty_string("customer_name", customer_name)?;
            validate_non_empty_string("address", address)?;
            validate_non_empty_string("invoice_target", invoice_target)?;
            validate_non_empty_string("destination", destination)?;
        }

        tracing::debug!("step 1/4: calculate total");
        let total = self.order.calculate_total(price, quantity);

        tracing::debug!("step 2/4: place order");
        self.order.place_order(customer_name, address);

        tracing::debug!("step 3/4: generate invoice");
        self.invoice_generator.generate_invoice(invoice_target);

        tracing::debug!("step 4/4: send notification");
        self.email_notifier.send_notification(destination);

        tracing::info!(total, invoice_target, destination, "order processed");
        Ok(())
    }

    pub fn process(&self, request: &OrderRequest) -> Result<()> {
        self.process_order(
            request.price,
            request.quantity,
            &request.customer_name,
            &request.address,
            &request.invoice_target,
            &request.destination,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{EmailService, InvoiceService, MemoryReporter, OrderProcessor};
    use crate::utils::error::OrderFlowError;
    use std::sync::Arc;

    fn manager(
        reporter: &MemoryReporter,
    ) -> OrderManager<OrderProcessor, InvoiceService, EmailService> {
        OrderManager::new(
            OrderProcessor::new(Arc::new(reporter.clone())),
            InvoiceService::new(Arc::new(reporter.clone())),
            EmailService::new(Arc::new(reporter.clone())),
        )
    }

    #[test]
    fn test_demo_transcript() {
        let reporter = MemoryReporter::new();
        manager(&reporter).process(&OrderRequest::demo()).unwrap();

        assert_eq!(
            reporter.lines(),
            vec![
                "Order total: $20.0",
                "Order placed for: John Doe at 123 Main St",
                "Invoice generated: order_123.pdf",
                "Email notification sent to: johndoe@example.com",
            ]
        );
    }

    #[test]
    fn test_permissive_accepts_anything() {
        let reporter = MemoryReporter::new();
        let manager = manager(&reporter);
        assert_eq!(manager.policy(), ValidationPolicy::Permissive);

        manager.process_order(-1.0, -3, "", "", "", "").unwrap();
        assert_eq!(reporter.lines().len(), 4);
        assert_eq!(reporter.lines()[0], "Order total: $3.0");
    }

    #[test]
    fn test_strict_rejects_before_any_step() {
        let reporter = MemoryReporter::new();
        let manager = manager(&reporter).with_policy(ValidationPolicy::Strict);

        let err = manager
            .process_order(10.0, -1, "John Doe", "123 Main St", "order_123.pdf", "a@b.c")
            .unwrap_err();
        match err {
            OrderFlowError::ValidationError { field, .. } => assert_eq!(field, "quantity"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(reporter.lines().is_empty());
    }

    #[test]
    fn test_strict_runs_all_steps_for_valid_input() {
        let reporter = MemoryReporter::new();
        let manager = manager(&reporter).with_policy(ValidationPolicy::Strict);

        manager.process_order(0.0, 0, "A", "B", "c.pdf", "d@e.f").unwrap();
        assert_eq!(reporter.lines().len(), 4);
        assert_eq!(reporter.lines()[0], "Order total: $0.0");
    }
}
