//! Observer pattern: back-in-stock alerts.
//!
//! `IphoneObservable` keeps weak handles to its observers, so subscribing
//! never extends an observer's lifetime. Subscribers are alerted only when
//! the stock count moves off zero, not on every restock.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use crate::stream::AlertSender;

/// Something that wants to hear about stock changes.
pub trait NotificationAlertObserver {
    fn update(&self);
}

/// A subject that observers can subscribe to.
pub trait StocksObservable {
    /// Subscribe an observer. Duplicates are kept, in insertion order.
    ///
    /// Only a weak handle is stored; dropping every other `Rc` to the
    /// observer silently unsubscribes it.
    fn add(&mut self, observer: Rc<dyn NotificationAlertObserver>);

    /// Unsubscribe the first entry that is `observer`. No-op if absent.
    fn remove(&mut self, observer: &dyn NotificationAlertObserver);

    /// Call `update` on every live observer, in insertion order.
    fn notify_subscribers(&self);
}

/// Stock tracker for the iPhone.
#[derive(Default)]
pub struct IphoneObservable {
    observers: Vec<Weak<dyn NotificationAlertObserver>>,
    stock_count: i32,
}

impl IphoneObservable {
    pub const PRODUCT: &'static str = "iPhone";

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `new_stock` (which may be negative) to the count, saturating at
    /// the `i32` bounds.
    ///
    /// Observers are notified first if, and only if, the count was zero.
    pub fn set_stock_count(&mut self, new_stock: i32) {
        if self.stock_count == 0 {
            tracing::info!(
                product = Self::PRODUCT,
                restock = new_stock,
                "stock moving off zero, alerting subscribers"
            );
            self.notify_subscribers();
        }
        self.stock_count = self.stock_count.saturating_add(new_stock);
    }

    pub fn stock_count(&self) -> i32 {
        self.stock_count
    }

    /// Number of subscriptions whose observer is still alive.
    pub fn len(&self) -> usize {
        self.observers
            .iter()
            .filter(|o| o.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl StocksObservable for IphoneObservable {
    fn add(&mut self, observer: Rc<dyn NotificationAlertObserver>) {
        self.observers.retain(|o| o.strong_count() > 0);
        self.observers.push(Rc::downgrade(&observer));
    }

    fn remove(&mut self, observer: &dyn NotificationAlertObserver) {
        if let Some(index) = self
            .observers
            .iter()
            .position(|o| std::ptr::addr_eq(o.as_ptr(), observer))
        {
            self.observers.remove(index);
        }
    }

    fn notify_subscribers(&self) {
        tracing::debug!(subscribers = self.len(), "notifying");
        for observer in self.observers.iter().filter_map(Weak::upgrade) {
            observer.update();
        }
    }
}

/// Messages an alert observer has delivered.
#[derive(Debug, Default)]
struct Outbox(RefCell<Vec<String>>);

impl Outbox {
    fn deliver(&self, message: String) {
        tracing::info!("{}", message);
        self.0.borrow_mut().push(message);
    }

    fn sent(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

/// Mails a subscriber when the product is back.
#[derive(Debug)]
pub struct EmailAlertObserver {
    email: String,
    product: String,
    outbox: Outbox,
}

impl EmailAlertObserver {
    pub fn new(email: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            product: product.into(),
            outbox: Outbox::default(),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Every mail sent so far, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.outbox.sent()
    }
}

impl NotificationAlertObserver for EmailAlertObserver {
    fn update(&self) {
        self.outbox.deliver(format!(
            "mail sent to {}: {} is back in stock",
            self.email, self.product
        ));
    }
}

/// Texts a subscriber when the product is back.
#[derive(Debug)]
pub struct MobileAlertObserver {
    phone: String,
    product: String,
    outbox: Outbox,
}

impl MobileAlertObserver {
    pub fn new(phone: impl Into<String>, product: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
            product: product.into(),
            outbox: Outbox::default(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Every text sent so far, oldest first.
    pub fn sent(&self) -> Vec<String> {
        self.outbox.sent()
    }
}

impl NotificationAlertObserver for MobileAlertObserver {
    fn update(&self) {
        self.outbox.deliver(format!(
            "sms sent to {}: {} is back in stock",
            self.phone, self.product
        ));
    }
}

/// Event pushed by [`StreamAlertObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockAlert {
    pub product: String,
}

/// Forwards each notification into an event stream for async consumers.
///
/// Sending never blocks: when the stream is full or gone the alert is
/// counted in [`dropped`](Self::dropped) and discarded.
#[derive(Debug)]
pub struct StreamAlertObserver {
    product: String,
    sender: AlertSender,
    dropped: Cell<usize>,
}

impl StreamAlertObserver {
    pub fn new(product: impl Into<String>, sender: AlertSender) -> Self {
        Self {
            product: product.into(),
            sender,
            dropped: Cell::new(0),
        }
    }

    pub fn dropped(&self) -> usize {
        self.dropped.get()
    }
}

impl NotificationAlertObserver for StreamAlertObserver {
    fn update(&self) {
        let alert = StockAlert {
            product: self.product.clone(),
        };
        if let Err(reason) = self.sender.try_send(alert) {
            self.dropped.set(self.dropped.get() + 1);
            tracing::warn!(product = %self.product, ?reason, "stock alert dropped");
        }
    }
}
