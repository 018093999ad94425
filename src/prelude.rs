//! Prelude module for convenient imports.
//!
//! # Example
//!
//! ```rust
//! use patterncraft::prelude::*;
//! ```

// Configuration
pub use crate::config::{Config, DemoConfig};

// Behaviors and registry
pub use crate::behavior::{Behavior, BehaviorExt};
pub use crate::registry::{Registry, RegistryBuilder};

// Patterns
pub use crate::decorator::{
    receipt_line, CaramelDecorator, Coffee, CoffeeExt, MilkDecorator, SimpleCoffee, SugarDecorator,
};
pub use crate::observer::{
    EmailAlertObserver, IphoneObservable, MobileAlertObserver, NotificationAlertObserver,
    StockAlert, StocksObservable, StreamAlertObserver,
};
pub use crate::strategy::{
    default_strategies, CloneableStrategy, DriveStrategy, NormalDriveStrategy,
    SportsDriveStrategy, StrategyRegistry, Vehicle, VehicleKind,
};

// Streams
pub use crate::stream::{alert_channel, AlertSender, AlertStream, Undelivered};

// Errors
pub use crate::error::{PatternError, PatternResult, RegistryError, RegistryResult};
