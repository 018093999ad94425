//! # Patterncraft
//!
//! **Patterncraft** expresses three classic object-oriented design patterns
//! with Rust trait objects: polymorphic behavior composed by delegation.
//!
//! ## Patterns
//!
//! ```text
//! decorator - Coffee priced and described layer by layer (Box<dyn Coffee> chains)
//! observer  - Back-in-stock alerts, fired when stock leaves zero (Weak observer handles)
//! strategy  - Vehicles bound to a drive strategy at construction (Box<dyn DriveStrategy>)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use patterncraft::prelude::*;
//!
//! let coffee = SimpleCoffee.with_milk().with_sugar();
//! assert_eq!(receipt_line(&coffee), "Simple Coffee, Milk, Sugar Cost: $5.7");
//!
//! let vehicle = Vehicle::of_kind(VehicleKind::Sports);
//! assert_eq!(vehicle.drive(), "Sports Drive Capability");
//! ```
//!
//! ## Supporting pieces
//!
//! - `Behavior` and `Registry` for named, swappable strategies
//! - `alert_channel` for handing stock alerts to async consumers
//! - `Config` / `DemoConfig` for the demo binaries
//! - Error types built on `thiserror`

mod behavior;
mod config;
mod error;
mod registry;
pub mod stream;

pub mod decorator;
pub mod observer;
pub mod strategy;

pub mod prelude;

// Re-export core types
pub use behavior::{Behavior, BehaviorExt};
pub use config::{Config, DemoConfig, DEFAULT_ALERT_BUFFER};
pub use error::{PatternError, PatternResult, RegistryError, RegistryResult};
pub use registry::{Registry, RegistryBuilder};
pub use stream::{alert_channel, AlertSender, AlertStream, Undelivered};
