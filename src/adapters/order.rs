use crate::adapters::reporter::StdoutReporter;
use crate::domain::ports::{Order, Reporter};
use crate::utils::format::format_amount;
use std::sync::Arc;

/// Baseline pricing: `price * quantity`, no surcharge.
pub struct OrderProcessor {
    reporter: Arc<dyn Reporter>,
}

impl OrderProcessor {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }
}

impl Default for OrderProcessor {
    fn default() -> Self {
        Self::new(StdoutReporter::shared())
    }
}

impl Order for OrderProcessor {
    fn calculate_total(&self, price: f64, quantity: i32) -> f64 {
        let total = price * f64::from(quantity);
        tracing::debug!(price, quantity, total, "calculated order total");
        self.reporter
            .report(&format!("Order total: ${}", format_amount(total)));
        total
    }

    fn place_order(&self, customer_name: &str, address: &str) {
        self.reporter.report(&format!(
            "Order placed for: {} at {}",
            customer_name, address
        ));
    }
}

/// Adds a percentage surcharge on top of `price * quantity`.
pub struct SurchargeOrderProcessor {
    percent: f64,
    reporter: Arc<dyn Reporter>,
}

impl SurchargeOrderProcessor {
    pub fn new(percent: f64, reporter: Arc<dyn Reporter>) -> Self {
        Self { percent, reporter }
    }

    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl Order for SurchargeOrderProcessor {
    fn calculate_total(&self, price: f64, quantity: i32) -> f64 {
        let subtotal = price * f64::from(quantity);
        let total = subtotal * (1.0 + self.percent / 100.0);
        tracing::debug!(
            price,
            quantity,
            subtotal,
            percent = self.percent,
            total,
            "calculated order total with surcharge"
        );
        self.reporter.report(&format!(
            "Order total (incl. {}% surcharge): ${}",
            self.percent,
            format_amount(total)
        ));
        total
    }

    fn place_order(&self, customer_name: &str, address: &str) {
        self.reporter.report(&format!(
            "Order placed for: {} at {}",
            customer_name, address
        ));
    }
}
