use order_flow::utils::logger;
use order_flow::{EmailService, InvoiceService, OrderManager, OrderProcessor, OrderRequest};

fn main() -> anyhow::Result<()> {
    logger::init_cli_logger(false);

    let order = OrderProcessor::default();
    let invoice_generator = InvoiceService::default();
    let email_notifier = EmailService::default();

    let order_manager = OrderManager::new(order, invoice_generator, email_notifier);

    let request = OrderRequest::demo();
    order_manager.process_order(
        request.price,
        request.quantity,
        &request.customer_name,
        &request.address,
        &request.invoice_target,
        &request.destination,
    )?;

    Ok(())
}
