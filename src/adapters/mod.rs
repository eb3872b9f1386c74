// Adapters layer: concrete capability variants and report sinks.

pub mod invoice;
pub mod notifier;
pub mod order;
pub mod reporter;

pub use invoice::{FormatInvoiceService, InvoiceService};
pub use notifier::{EmailService, SmsService};
pub use order::{OrderProcessor, SurchargeOrderProcessor};
pub use reporter::{MemoryReporter, StdoutReporter};
