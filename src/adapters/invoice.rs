use crate::adapters::reporter::StdoutReporter;
use crate::domain::ports::{InvoiceGenerator, Reporter};
use std::path::Path;
use std::sync::Arc;

/// Reports the invoice under the target name exactly as given.
pub struct InvoiceService {
    reporter: Arc<dyn Reporter>,
}

impl InvoiceService {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }
}

impl Default for InvoiceService {
    fn default() -> Self {
        Self::new(StdoutReporter::shared())
    }
}

impl InvoiceGenerator for InvoiceService {
    fn generate_invoice(&self, target_name: &str) {
        tracing::debug!(target_name, "generating invoice");
        self.reporter
            .report(&format!("Invoice generated: {}", target_name));
    }
}

/// Selects an output format by swapping the target's extension,
/// e.g. `order_123.pdf` becomes `order_123.html`.
pub struct FormatInvoiceService {
    extension: String,
    reporter: Arc<dyn Reporter>,
}

impl FormatInvoiceService {
    pub fn new(extension: impl Into<String>, reporter: Arc<dyn Reporter>) -> Self {
        Self {
            extension: extension.into(),
            reporter,
        }
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn rename(&self, target_name: &str) -> String {
        Path::new(target_name)
            .with_extension(&self.extension)
            .to_string_lossy()
            .into_owned()
    }
}

impl InvoiceGenerator for FormatInvoiceService {
    fn generate_invoice(&self, target_name: &str) {
        let renamed = self.rename(target_name);
        tracing::debug!(target_name, renamed = %renamed, "generating invoice in alternate format");
        self.reporter
            .report(&format!("Invoice generated: {}", renamed));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reporter::MemoryReporter;

    #[test]
    fn test_invoice_reports_target_verbatim() {
        let reporter = MemoryReporter::new();
        let invoice = InvoiceService::new(Arc::new(reporter.clone()));

        invoice.generate_invoice("order_123.pdf");
        invoice.generate_invoice("");
        assert_eq!(
            reporter.lines(),
            vec!["Invoice generated: order_123.pdf", "Invoice generated: "]
        );
    }

    #[test]
    fn test_format_invoice_swaps_extension() {
        let reporter = MemoryReporter::new();
        let invoice = FormatInvoiceService::new("html", Arc::new(reporter.clone()));
        assert_eq!(invoice.extension(), "html");

        invoice.generate_invoice("order_123.pdf");
        assert_eq!(reporter.lines(), vec!["Invoice generated: order_123.html"]);
    }

    #[test]
    fn test_format_invoice_appends_missing_extension() {
        let invoice = FormatInvoiceService::new("html", Arc::new(MemoryReporter::new()));

        assert_eq!(invoice.rename("order_123"), "order_123.html");
        assert_eq!(invoice.rename("archive.tar.gz"), "archive.tar.html");
    }
}
