use crate::adapters::{
    EmailService, FormatInvoiceService, InvoiceService, OrderProcessor, SmsService,
    SurchargeOrderProcessor,
};
use crate::core::manager::{DynOrderManager, OrderManager};
use crate::core::{EmailNotifier, InvoiceGenerator, Order, Reporter, ValidationPolicy};
use crate::utils::error::{OrderFlowError, Result};
use crate::utils::validation::{validate_file_extension, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, LazyLock};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("placeholder pattern is valid"));

/// Selects which variant backs each capability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WiringConfig {
    #[serde(default)]
    pub order: OrderConfig,
    #[serde(default)]
    pub invoice: InvoiceConfig,
    #[serde(default)]
    pub notifier: NotifierConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderConfig {
    #[default]
    Standard,
    Surcharge { percent: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InvoiceConfig {
    #[default]
    Standard,
    Format { extension: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NotifierConfig {
    #[default]
    Email,
    Sms,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub strict: bool,
}

const MAX_SURCHARGE_PERCENT: f64 = 1000.0;

impl WiringConfig {
    /// Loads and parses a wiring file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OrderFlowError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| OrderFlowError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> String {
        PLACEHOLDER
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn policy(&self) -> ValidationPolicy {
        if self.validation.strict {
            ValidationPolicy::Strict
        } else {
            ValidationPolicy::Permissive
        }
    }

    pub fn build_order(&self, reporter: Arc<dyn Reporter>) -> Box<dyn Order> {
        match &self.order {
            OrderConfig::Standard => Box::new(OrderProcessor::new(reporter)),
            OrderConfig::Surcharge { percent } => {
                Box::new(SurchargeOrderProcessor::new(*percent, reporter))
            }
        }
    }

    pub fn build_invoice_generator(&self, reporter: Arc<dyn Reporter>) -> Box<dyn InvoiceGenerator> {
        match &self.invoice {
            InvoiceConfig::Standard => Box::new(InvoiceService::new(reporter)),
            InvoiceConfig::Format { extension } => {
                Box::new(FormatInvoiceService::new(extension.clone(), reporter))
            }
        }
    }

    pub fn build_email_notifier(&self, reporter: Arc<dyn Reporter>) -> Box<dyn EmailNotifier> {
        match &self.notifier {
            NotifierConfig::Email => Box::new(EmailService::new(reporter)),
            NotifierConfig::Sms => Box::new(SmsService::new(reporter)),
        }
    }

    /// Validates, then wires all three capabilities to one reporter.
    pub fn build_manager(&self, reporter: Arc<dyn Reporter>) -> Result<DynOrderManager> {
        self.validate()?;
        tracing::debug!(config = ?self, "wiring order manager");

        Ok(OrderManager::new(
            self.build_order(Arc::clone(&reporter)),
            self.build_invoice_generator(Arc::clone(&reporter)),
            self.build_email_notifier(reporter),
        )
        .with_policy(self.policy()))
    }
}

impl Validate for WiringConfig {
    fn validate(&self) -> Result<()> {
        if let OrderConfig::Surcharge { percent } = &self.order {
            validate_range("order.percent", *percent, 0.0, MAX_SURCHARGE_PERCENT)?;
        }
        if let InvoiceConfig::Format { extension } = &self.invoice {
            validate_file_extension("invoice.extension", extension)?;
        }
        Ok(())
    }
}
