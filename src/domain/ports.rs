/// Sink for the human-readable lines each capability emits.
pub trait Reporter: Send + Sync {
    fn report(&self, line: &str);
}

/// Pricing and placement of an order.
pub trait Order: Send + Sync {
    /// Computes and reports the total. Inputs are not checked.
    fn calculate_total(&self, price: f64, quantity: i32) -> f64;
    fn place_order(&self, customer_name: &str, address: &str);
}

pub trait InvoiceGenerator: Send + Sync {
    fn generate_invoice(&self, target_name: &str);
}

pub trait EmailNotifier: Send + Sync {
    fn send_notification(&self, destination: &str);
}

impl<T: Order + ?Sized> Order for Box<T> {
    fn calculate_total(&self, price: f64, quantity: i32) -> f64 {
        (**self).calculate_total(price, quantity)
    }

    fn place_order(&self, customer_name: &str, address: &str) {
        (**self).place_order(customer_name, address)
    }
}

impl<T: InvoiceGenerator + ?Sized> InvoiceGenerator for Box<T> {
    fn generate_invoice(&self, target_name: &str) {
        (**self).generate_invoice(target_name)
    }
}

impl<T: EmailNotifier + ?Sized> EmailNotifier for Box<T> {
    fn send_notification(&self, destination: &str) {
        (**self).send_notification(destination)
    }
}
