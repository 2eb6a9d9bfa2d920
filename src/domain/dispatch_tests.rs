// Dispatcher wired with the real domain handlers and events.

use std::cell::RefCell;
use std::rc::Rc;

use uuid::Uuid;

use crate::domain::customer::{
    Address, ConsoleLog1Handler, ConsoleLog2Handler, Customer, CustomerCreatedEvent,
    CustomerUpdateAddressEvent, SendEmailWhenCustomerIsUpdateAddressHandler,
};
use crate::domain::product::{Product, ProductCreatedEvent, SendEmailWhenProductIsCreatedHandler};
use crate::domain::ShopEvent;
use crate::event_dispatch::{DomainEvent, EventDispatcher, EventHandler, NamedEvent, SharedHandler};

/// Wraps a real handler and records every call before delegating
struct Spy<H> {
    inner: H,
    label: &'static str,
    calls: RefCell<Vec<Uuid>>,
    order: Rc<RefCell<Vec<&'static str>>>,
}

impl<H> Spy<H> {
    fn new(inner: H, label: &'static str, order: &Rc<RefCell<Vec<&'static str>>>) -> Rc<Self> {
        Rc::new(Self {
            inner,
            label,
            calls: RefCell::new(Vec::new()),
            order: Rc::clone(order),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl<H: EventHandler<ShopEvent>> EventHandler<ShopEvent> for Spy<H> {
    fn handle(&self, event: &ShopEvent) -> anyhow::Result<()> {
        self.calls.borrow_mut().push(event.event_id());
        self.order.borrow_mut().push(self.label);
        self.inner.handle(event)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}

fn shared<H: EventHandler<ShopEvent> + 'static>(spy: &Rc<Spy<H>>) -> SharedHandler<ShopEvent> {
    spy.clone()
}

fn order_log() -> Rc<RefCell<Vec<&'static str>>> {
    Rc::new(RefCell::new(Vec::new()))
}

// ============================================================================
// Product
// ============================================================================

#[test]
fn test_register_product_handler() {
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    let handler: SharedHandler<ShopEvent> = Rc::new(SendEmailWhenProductIsCreatedHandler);

    dispatcher.register(ProductCreatedEvent::EVENT_TYPE, Rc::clone(&handler));

    let handlers = dispatcher.handlers_for("ProductCreatedEvent").unwrap();
    assert_eq!(handlers.len(), 1);
    assert!(Rc::ptr_eq(&handlers[0], &handler));
}

#[test]
fn test_unregister_product_handler() {
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    let handler: SharedHandler<ShopEvent> = Rc::new(SendEmailWhenProductIsCreatedHandler);

    dispatcher.register("ProductCreatedEvent", Rc::clone(&handler));
    dispatcher.unregister("ProductCreatedEvent", &handler);

    assert_eq!(dispatcher.handlers_for("ProductCreatedEvent").map(<[_]>::len), Some(0));
}

#[test]
fn test_unregister_all_product_handlers() {
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    dispatcher.register("ProductCreatedEvent", Rc::new(SendEmailWhenProductIsCreatedHandler));

    dispatcher.unregister_all();

    assert!(dispatcher.handlers_for("ProductCreatedEvent").is_none());
}

#[test]
fn test_notify_product_handler() {
    let order = order_log();
    let spy = Spy::new(SendEmailWhenProductIsCreatedHandler, "email", &order);
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    dispatcher.register(ProductCreatedEvent::EVENT_TYPE, shared(&spy));

    let (_product, created) =
        Product::create("p1", "Product 1", "Product 1 description", 10.0).unwrap();
    let event = ShopEvent::from(created);
    dispatcher.notify(&event).unwrap();

    assert_eq!(spy.call_count(), 1);
    assert_eq!(spy.calls.borrow()[0], event.event_id());
}

// ============================================================================
// Customer
// ============================================================================

#[test]
fn test_register_two_customer_handlers() {
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    let first: SharedHandler<ShopEvent> = Rc::new(ConsoleLog1Handler);
    let second: SharedHandler<ShopEvent> = Rc::new(ConsoleLog2Handler);

    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Rc::clone(&first));
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Rc::clone(&second));

    let handlers = dispatcher.handlers_for("CustomerCreatedEvent").unwrap();
    assert_eq!(handlers.len(), 2);
    assert!(handlers[0].name().ends_with("ConsoleLog1Handler"));
    assert!(handlers[1].name().ends_with("ConsoleLog2Handler"));
}

#[test]
fn test_unregister_all_customer_handlers() {
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Rc::new(ConsoleLog1Handler));
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Rc::new(ConsoleLog2Handler));

    dispatcher.unregister_all();

    assert!(dispatcher.handlers_for("CustomerCreatedEvent").is_none());
    assert!(dispatcher.event_handlers().is_empty());
}

#[test]
fn test_notify_customer_created_handlers_in_order() {
    let order = order_log();
    let first = Spy::new(ConsoleLog1Handler, "log1", &order);
    let second = Spy::new(ConsoleLog2Handler, "log2", &order);
    let address_spy = Spy::new(SendEmailWhenCustomerIsUpdateAddressHandler, "address", &order);

    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, shared(&first));
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, shared(&second));
    dispatcher.register(CustomerUpdateAddressEvent::EVENT_TYPE, shared(&address_spy));

    let (_customer, created) = Customer::create("1", "Customer 1").unwrap();
    dispatcher.notify(&created.into()).unwrap();

    assert_eq!(first.call_count(), 1);
    assert_eq!(second.call_count(), 1);
    assert_eq!(address_spy.call_count(), 0);
    assert_eq!(*order.borrow(), vec!["log1", "log2"]);
}

#[test]
fn test_notify_customer_address_changed_handler() {
    let order = order_log();
    let spy = Spy::new(SendEmailWhenCustomerIsUpdateAddressHandler, "address", &order);
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    dispatcher.register(CustomerUpdateAddressEvent::EVENT_TYPE, shared(&spy));

    let mut customer = Customer::new("1", "Customer 1").unwrap();
    customer.set_address(Address::new("Street 1", 123, "13330-250", "São Paulo").unwrap());

    let new_address = Address::new("Street 7", 123, "01110-250", "São Paulo").unwrap();
    let event = ShopEvent::from(customer.change_address(new_address.clone()));
    dispatcher.notify(&event).unwrap();

    assert_eq!(spy.call_count(), 1);
    match &event {
        ShopEvent::CustomerUpdateAddress(e) => assert_eq!(e.address, new_address),
        other => panic!("unexpected event: {:?}", other),
    }
}

#[test]
fn test_update_address_routes_on_literal_key() {
    let order = order_log();
    let spy = Spy::new(SendEmailWhenCustomerIsUpdateAddressHandler, "address", &order);
    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    dispatcher.register("CustomerUpdateAddressEvent", shared(&spy));

    let mut customer = Customer::new("1", "Customer 1").unwrap();
    let new_address = Address::new("Street 7", 123, "01110-250", "São Paulo").unwrap();
    dispatcher.notify(&customer.change_address(new_address).into()).unwrap();

    assert_eq!(spy.call_count(), 1);
}

#[test]
fn test_unregistered_spy_is_not_notified() {
    let order = order_log();
    let first = Spy::new(ConsoleLog1Handler, "log1", &order);
    let second = Spy::new(ConsoleLog2Handler, "log2", &order);
    let first_shared = shared(&first);

    let mut dispatcher = EventDispatcher::<ShopEvent>::new();
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Rc::clone(&first_shared));
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, shared(&second));
    dispatcher.unregister(CustomerCreatedEvent::EVENT_TYPE, &first_shared);

    let (_customer, created) = Customer::create("1", "Customer 1").unwrap();
    dispatcher.notify(&created.into()).unwrap();

    assert_eq!(first.call_count(), 0);
    assert_eq!(second.call_count(), 1);
}

#[test]
fn test_typed_dispatcher_over_single_event() {
    let mut dispatcher = EventDispatcher::<CustomerCreatedEvent>::new();
    dispatcher.register(CustomerCreatedEvent::EVENT_TYPE, Rc::new(ConsoleLog1Handler));

    let (_customer, created) = Customer::create("1", "Customer 1").unwrap();
    assert!(dispatcher.notify(&created).is_ok());
}
