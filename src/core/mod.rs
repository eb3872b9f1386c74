pub mod manager;

pub use crate::domain::model::{OrderRequest, ValidationPolicy};
pub use crate::domain::ports::{EmailNotifier, InvoiceGenerator, Order, Reporter};
pub use crate::utils::error::Result;
