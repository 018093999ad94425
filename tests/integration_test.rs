//! Integration tests for Patterncraft
//!
//! These tests drive each pattern through the public API the way the demos do.

use std::cell::RefCell;
use std::rc::Rc;

use patterncraft::prelude::*;
use patterncraft::DEFAULT_ALERT_BUFFER;

// =============================================================================
// Decorator
// =============================================================================

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_milk_and_sugar_coffee() {
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    coffee = Box::new(MilkDecorator::new(coffee));
    coffee = Box::new(SugarDecorator::new(coffee));

    assert!(approx_eq(coffee.cost(), 5.7));
    assert_eq!(coffee.description(), "Simple Coffee, Milk, Sugar");
}

#[test]
fn test_fully_loaded_coffee_receipt() {
    let coffee = SimpleCoffee.with_milk().with_sugar().with_caramel();

    assert!(approx_eq(coffee.cost(), 7.7));
    assert_eq!(
        receipt_line(&coffee),
        "Simple Coffee, Milk, Sugar, Caramel Cost: $7.7"
    );
}

#[test]
fn test_deep_decorator_chain() {
    let mut coffee: Box<dyn Coffee> = Box::new(SimpleCoffee);
    for _ in 0..100 {
        coffee = Box::new(CaramelDecorator::new(coffee));
    }

    assert!(approx_eq(coffee.cost(), 5.0 + 100.0 * CaramelDecorator::COST));
    assert_eq!(coffee.description().matches(", Caramel").count(), 100);
    assert!(coffee.description().starts_with("Simple Coffee, Caramel"));
}

// =============================================================================
// Observer
// =============================================================================

/// Counts how often it was updated.
#[derive(Default)]
struct Counter {
    hits: RefCell<u32>,
}

impl Counter {
    fn hits(&self) -> u32 {
        *self.hits.borrow()
    }
}

impl NotificationAlertObserver for Counter {
    fn update(&self) {
        *self.hits.borrow_mut() += 1;
    }
}

#[test]
fn test_one_alert_per_run_from_zero() {
    let counter = Rc::new(Counter::default());
    let mut iphone = IphoneObservable::new();
    iphone.add(counter.clone());

    // Two runs starting from zero: [5, 2, -7] and [1, 1].
    for restock in [5, 2, -7, 1, 1] {
        iphone.set_stock_count(restock);
    }

    assert_eq!(counter.hits(), 2);
    assert_eq!(iphone.stock_count(), 2);
}

#[test]
fn test_observer_lifecycle() {
    let email = Rc::new(EmailAlertObserver::new("a@example.com", "iPhone"));
    let mobile = Rc::new(MobileAlertObserver::new("user_1", "iPhone"));

    let mut iphone = IphoneObservable::new();
    iphone.add(email.clone());
    iphone.add(mobile.clone());

    iphone.set_stock_count(1);
    iphone.set_stock_count(-1);
    iphone.remove(&*email);
    iphone.set_stock_count(1);

    assert_eq!(email.sent().len(), 1);
    assert_eq!(mobile.sent().len(), 2);
    assert_eq!(email.email(), "a@example.com");
    assert_eq!(mobile.phone(), "user_1");
}

#[test]
fn test_subject_does_not_own_observers() {
    let counter = Rc::new(Counter::default());
    let mut iphone = IphoneObservable::new();
    iphone.add(counter.clone());

    assert_eq!(Rc::strong_count(&counter), 1);

    drop(counter);
    assert!(iphone.is_empty());
    iphone.notify_subscribers();

    let fresh = Rc::new(Counter::default());
    iphone.add(fresh.clone());
    assert_eq!(iphone.len(), 1);

    drop(fresh);
    assert_eq!(iphone.len(), 0);
}

#[tokio::test]
async fn test_alerts_reach_stream() {
    use futures::StreamExt;

    let (sender, stream) = alert_channel(DEFAULT_ALERT_BUFFER);
    let feed = Rc::new(StreamAlertObserver::new("iPhone", sender));

    let mut iphone = IphoneObservable::new();
    iphone.add(feed.clone());
    iphone.set_stock_count(3);
    iphone.set_stock_count(-3);
    iphone.set_stock_count(4);
    assert_eq!(feed.dropped(), 0);

    drop(iphone);
    drop(feed);

    let alerts: Vec<StockAlert> = stream.collect().await;
    assert_eq!(
        alerts,
        vec![
            StockAlert {
                product: "iPhone".to_string()
            };
            2
        ]
    );
}

#[test]
fn test_alerts_dropped_when_stream_closed() {
    let (sender, stream) = alert_channel(1);
    drop(stream);

    let feed = Rc::new(StreamAlertObserver::new("iPhone", sender));
    let mut iphone = IphoneObservable::new();
    iphone.add(feed.clone());
    iphone.notify_subscribers();

    assert_eq!(feed.dropped(), 1);
}

// =============================================================================
// Strategy
// =============================================================================

#[test]
fn test_sport_and_normal_differ() {
    let sports = Vehicle::of_kind(VehicleKind::Sports);
    let good = Vehicle::of_kind(VehicleKind::Good);

    assert_eq!(sports.drive(), "Sports Drive Capability");
    assert_eq!(good.drive(), "Normal Drive Capability");
    assert_eq!(sports.strategy().name(), "sport");
    assert_eq!(good.strategy().name(), "normal");
}

#[test]
fn test_vehicle_from_registry() {
    let registry = default_strategies();

    let vehicle = registry.vehicle("normal").unwrap();
    assert!(vehicle.strategy().is::<NormalDriveStrategy>());

    let err = registry.vehicle("hover").unwrap_err();
    assert_eq!(err, RegistryError::NotFound("hover".to_string()));

    let root: PatternError = err.into();
    assert!(root.to_string().contains("hover"));
}

#[test]
fn test_unknown_strategy_names_skipped() {
    let (fleet, unknown) = default_strategies().vehicles(vec![
        "hover".to_string(),
        "normal".to_string(),
    ]);

    assert_eq!(fleet.len(), 1);
    assert_eq!(fleet[0].drive(), "Normal Drive Capability");
    assert_eq!(unknown.len(), 1);
    assert_eq!(unknown[0].to_string(), "No behavior registered as: hover");
}

#[test]
fn test_registry_accepts_new_strategies() {
    use std::any::Any;

    #[derive(Debug, Clone)]
    struct ReverseDriveStrategy;

    impl Behavior for ReverseDriveStrategy {
        fn name(&self) -> &str {
            "reverse"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    impl DriveStrategy for ReverseDriveStrategy {
        fn drive(&self) -> &str {
            "Reverse Drive Capability"
        }
    }

    let mut registry = default_strategies();
    registry
        .register_unique(Box::new(ReverseDriveStrategy))
        .unwrap();
    assert!(registry
        .register_unique(Box::new(SportsDriveStrategy))
        .is_err());

    assert_eq!(registry.names(), vec!["normal", "sport", "reverse"]);
    assert_eq!(
        registry.vehicle("reverse").unwrap().drive(),
        "Reverse Drive Capability"
    );
}
