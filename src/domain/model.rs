use serde::{Deserialize, Serialize};

/// The six scalar arguments of one `process_order` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub price: f64,
    pub quantity: i32,
    pub customer_name: String,
    pub address: String,
    pub invoice_target: String,
    pub destination: String,
}

impl OrderRequest {
    pub fn new(
        price: f64,
        quantity: i32,
        customer_name: impl Into<String>,
        address: impl Into<String>,
        invoice_target: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            price,
            quantity,
            customer_name: customer_name.into(),
            address: address.into(),
            invoice_target: invoice_target.into(),
            destination: destination.into(),
        }
    }

    /// The fixed order used by the demonstration entry point.
    pub fn demo() -> Self {
        Self::new(
            10.0,
            2,
            "John Doe",
            "123 Main St",
            "order_123.pdf",
            "johndoe@example.com",
        )
    }
}

/// Whether the manager checks a request before running it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationPolicy {
    /// Accept every request as-is.
    #[default]
    Permissive,
    /// Reject negative or non-finite amounts and blank identifiers up front.
    Strict,
}
