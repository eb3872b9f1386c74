use clap::Parser;
use order_flow::utils::logger;
use order_flow::{CliConfig, StdoutReporter};

fn main() {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting order-flow CLI");
    tracing::debug!("CLI config: {:?}", config);

    // build_manager validates the wiring, so every failure lands here.
    let result = config
        .build_manager(StdoutReporter::shared())
        .and_then(|manager| manager.process(&config.request()));

    if let Err(e) = result {
        tracing::error!(
            "Order processing failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(e.severity().exit_code());
    }
}
