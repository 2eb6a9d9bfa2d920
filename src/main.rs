use std::rc::Rc;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use shop_events::domain::customer::{
    Address, ConsoleLog1Handler, ConsoleLog2Handler, Customer, CustomerCreatedEvent,
    CustomerUpdateAddressEvent, SendEmailWhenCustomerIsUpdateAddressHandler,
};
use shop_events::domain::product::{Product, ProductCreatedEvent, SendEmailWhenProductIsCreatedHandler};
use shop_events::domain::ShopEvent;
use shop_events::event_dispatch::{EventDispatcher, NamedEvent, SharedHandler};
use shop_events::metrics::DispatchMetrics;

fn main() -> anyhow::Result<()> {
    // Structured logging, overridable with RUST_LOG
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,shop_events=debug")),
        )
        .init();

    tracing::info!("Starting shop event dispatch demo");

    // === 1. Wire dispatcher and handlers ===
    let metrics = DispatchMetrics::new()?;
    let mut dispatcher = EventDispatcher::<ShopEvent>::new().with_metrics(metrics.clone());

    let product_email: SharedHandler<ShopEvent> = Rc::new(SendEmailWhenProductIsCreatedHandler);
    dispatcher.register(ProductCreatedEvent::EVENT_TYPE, Rc::clone(&product_email));
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Rc::new(ConsoleLog1Handler));
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Rc::new(ConsoleLog2Handler));
    dispatcher.register(
        CustomerUpdateAddressEvent::EVENT_TYPE,
        Rc::new(SendEmailWhenCustomerIsUpdateAddressHandler),
    );

    tracing::debug!(registry = ?dispatcher, "Handlers registered");

    // === 2. Produce events from domain actions ===
    let (product, product_created) =
        Product::create("p1", "Product 1", "Product 1 description", 10.0)?;
    dispatcher.notify(&product_created.into())?;
    tracing::info!(product_id = product.id(), "✅ Product created");

    let (mut customer, customer_created) = Customer::create("1", "Customer 1")?;
    dispatcher.notify(&customer_created.into())?;

    customer.set_address(Address::new("Street 1", 123, "13330-250", "São Paulo")?);
    customer.activate()?;

    let address_changed = customer.change_address(Address::new("Street 7", 123, "01110-250", "São Paulo")?);
    dispatcher.notify(&address_changed.into())?;
    tracing::info!(customer_id = customer.id(), "✅ Customer address changed");

    // === 3. Unregistered handlers stop receiving events ===
    dispatcher.unregister(ProductCreatedEvent::EVENT_TYPE, &product_email);
    let (_, second_product) = Product::create("p2", "Product 2", "Product 2 description", 25.0)?;
    dispatcher.notify(&second_product.into())?;

    dispatcher.unregister_all();

    let events_notified: u64 = [
        ProductCreatedEvent::EVENT_TYPE,
        CustomerCreatedEvent::EVENT_TYPE,
        CustomerUpdateAddressEvent::EVENT_TYPE,
    ]
    .iter()
    .map(|event_type| metrics.events_notified.with_label_values(&[*event_type]).get())
    .sum();

    tracing::info!(events_notified, "🎉 Demo complete!");

    Ok(())
}
