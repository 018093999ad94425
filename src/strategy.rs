//! Strategy pattern: vehicles with pluggable drive behavior.
//!
//! A `Vehicle` is bound to one `DriveStrategy` when it is built and simply
//! delegates `drive` to it. To drive differently, build another vehicle.

use std::any::Any;

use crate::behavior::Behavior;
use crate::error::{RegistryError, RegistryResult};
use crate::registry::{Registry, RegistryBuilder};

/// How a vehicle drives.
pub trait DriveStrategy: Behavior + CloneableStrategy {
    /// Performs the drive and reports what happened.
    fn drive(&self) -> &str;
}

/// Clones a strategy behind a trait object.
///
/// Implemented automatically for every `DriveStrategy + Clone`.
pub trait CloneableStrategy {
    fn clone_box(&self) -> Box<dyn DriveStrategy>;
}

impl<T> CloneableStrategy for T
where
    T: DriveStrategy + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn DriveStrategy> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn DriveStrategy> {
    fn clone(&self) -> Self {
        (**self).clone_box()
    }
}

/// Everyday driving.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalDriveStrategy;

impl Behavior for NormalDriveStrategy {
    fn name(&self) -> &str {
        "normal"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl DriveStrategy for NormalDriveStrategy {
    fn drive(&self) -> &str {
        "Normal Drive Capability"
    }
}

/// Sport-tuned driving.
#[derive(Debug, Clone, Copy, Default)]
pub struct SportsDriveStrategy;

impl Behavior for SportsDriveStrategy {
    fn name(&self) -> &str {
        "sport"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl DriveStrategy for SportsDriveStrategy {
    fn drive(&self) -> &str {
        "Sports Drive Capability"
    }
}

/// The stock vehicle line-up and the strategy each one ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    Sports,
    OffRoad,
    Good,
}

impl VehicleKind {
    pub fn strategy(self) -> Box<dyn DriveStrategy> {
        match self {
            VehicleKind::Sports | VehicleKind::OffRoad => Box::new(SportsDriveStrategy),
            VehicleKind::Good => Box::new(NormalDriveStrategy),
        }
    }
}

/// A vehicle bound to a single drive strategy for its whole life.
#[derive(Debug, Clone)]
pub struct Vehicle {
    strategy: Box<dyn DriveStrategy>,
}

impl Vehicle {
    pub fn new(strategy: Box<dyn DriveStrategy>) -> Self {
        Self { strategy }
    }

    pub fn of_kind(kind: VehicleKind) -> Self {
        Self::new(kind.strategy())
    }

    pub fn drive(&self) -> &str {
        tracing::debug!(strategy = self.strategy.name(), "driving");
        self.strategy.drive()
    }

    pub fn strategy(&self) -> &dyn DriveStrategy {
        self.strategy.as_ref()
    }
}

/// Drive strategies addressable by name.
pub type StrategyRegistry = Registry<dyn DriveStrategy>;

impl Registry<dyn DriveStrategy> {
    /// Build a vehicle bound to a copy of the strategy registered as `name`.
    pub fn vehicle(&self, name: &str) -> RegistryResult<Vehicle> {
        let strategy = self.require(name)?;
        Ok(Vehicle::new(strategy.clone_box()))
    }

    /// Build one vehicle per known name, in order.
    ///
    /// Unknown names are skipped and returned alongside the fleet.
    pub fn vehicles<I, S>(&self, names: I) -> (Vec<Vehicle>, Vec<RegistryError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut fleet = Vec::new();
        let mut unknown = Vec::new();
        for name in names {
            match self.vehicle(name.as_ref()) {
                Ok(vehicle) => fleet.push(vehicle),
                Err(err) => unknown.push(err),
            }
        }
        (fleet, unknown)
    }
}

/// Registry holding `"normal"` and `"sport"`.
pub fn default_strategies() -> StrategyRegistry {
    RegistryBuilder::<dyn DriveStrategy>::new()
        .with(Box::new(NormalDriveStrategy))
        .with(Box::new(SportsDriveStrategy))
        .build()
}
