//! Order processing wired from three narrow capabilities: pricing and
//! placement ([`Order`]), invoicing ([`InvoiceGenerator`]) and notification
//! ([`EmailNotifier`]). [`OrderManager`] receives one of each at construction
//! and runs them in a fixed sequence for every order.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;
pub use config::WiringConfig;

pub use adapters::{
    EmailService, FormatInvoiceService, InvoiceService, MemoryReporter, OrderProcessor,
    SmsService, StdoutReporter, SurchargeOrderProcessor,
};
pub use crate::core::manager::{DynOrderManager, OrderManager};
pub use domain::model::{OrderRequest, ValidationPolicy};
pub use domain::ports::{EmailNotifier, InvoiceGenerator, Order, Reporter};
pub use utils::error::{OrderFlowError, Result};
