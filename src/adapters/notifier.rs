use crate::adapters::reporter::StdoutReporter;
use crate::domain::ports::{EmailNotifier, Reporter};
use std::sync::Arc;

pub struct EmailService {
    reporter: Arc<dyn Reporter>,
}

impl EmailService {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }
}

impl Default for EmailService {
    fn default() -> Self {
        Self::new(StdoutReporter::shared())
    }
}

impl EmailNotifier for EmailService {
    fn send_notification(&self, destination: &str) {
        tracing::debug!(destination, channel = "email", "sending notification");
        self.reporter
            .report(&format!("Email notification sent to: {}", destination));
    }
}

/// Same contract as [`EmailService`], delivered over SMS.
pub struct SmsService {
    reporter: Arc<dyn Reporter>,
}

impl SmsService {
    pub fn new(reporter: Arc<dyn Reporter>) -> Self {
        Self { reporter }
    }
}

impl EmailNotifier for SmsService {
    fn send_notification(&self, destination: &str) {
        tracing::debug!(destination, channel = "sms", "sending notification");
        self.reporter
            .report(&format!("SMS notification sent to: {}", destination));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::reporter::MemoryReporter;

    #[test]
    fn test_email_and_sms_channels() {
        let reporter = MemoryReporter::new();
        let email = EmailService::new(Arc::new(reporter.clone()));
        let sms = SmsService::new(Arc::new(reporter.clone()));

        email.send_notification("johndoe@example.com");
        sms.send_notification("+15550100");

        assert_eq!(
            reporter.lines(),
            vec![
                "Email notification sent to: johndoe@example.com",
                "SMS notification sent to: +15550100",
            ]
        );
    }
}
