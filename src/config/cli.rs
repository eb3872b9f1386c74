use crate::core::manager::DynOrderManager;
use crate::core::{OrderRequest, Reporter};
use crate::utils::error::Result;
use crate::WiringConfig;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Clone, Parser)]
#[command(name = "order-flow")]
#[command(about = "Process one order: total, placement, invoice, notification")]
pub struct CliConfig {
    /// Unit price. The six order arguments come all together or not at all;
    /// with none, the demonstration order is processed.
    #[arg(
        allow_negative_numbers = true,
        requires_all = ["quantity", "customer_name", "address", "invoice_target", "destination"]
    )]
    pub price: Option<f64>,

    /// Number of units
    #[arg(allow_negative_numbers = true, requires = "price")]
    pub quantity: Option<i32>,

    #[arg(requires = "price")]
    pub customer_name: Option<String>,

    #[arg(requires = "price")]
    pub address: Option<String>,

    /// Invoice file name
    #[arg(requires = "price")]
    pub invoice_target: Option<String>,

    /// Notification destination
    #[arg(requires = "price")]
    pub destination: Option<String>,

    /// TOML file selecting the capability variants
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Reject negative amounts and blank fields
    #[arg(long)]
    pub strict: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn request(&self) -> OrderRequest {
        match (
            self.price,
            self.quantity,
            &self.customer_name,
            &self.address,
            &self.invoice_target,
            &self.destination,
        ) {
            (
                Some(price),
                Some(quantity),
                Some(customer_name),
                Some(address),
                Some(invoice_target),
                Some(destination),
            ) => OrderRequest::new(
                price,
                quantity,
                customer_name.clone(),
                address.clone(),
                invoice_target.clone(),
                destination.clone(),
            ),
            _ => OrderRequest::demo(),
        }
    }

    /// Reads the wiring file if one was given; `--strict` overrides its policy.
    pub fn wiring(&self) -> Result<WiringConfig> {
        let mut wiring = match &self.config {
            Some(path) => {
                tracing::info!("Loading wiring from: {}", path.display());
                WiringConfig::from_file(path)?
            }
            None => WiringConfig::default(),
        };
        if self.strict {
            wiring.validation.strict = true;
        }
        Ok(wiring)
    }

    pub fn build_manager(&self, reporter: Arc<dyn Reporter>) -> Result<DynOrderManager> {
        self.wiring()?.build_manager(reporter)
    }
}
