//! Decorator pattern: coffee priced and described layer by layer.
//!
//! Every decorator exclusively owns the coffee it wraps and calls through to
//! it, adding a fixed increment to `cost` and a fixed suffix to
//! `description`. Chains may be arbitrarily deep; `SimpleCoffee` ends them.
//!
//! ```rust
//! use patterncraft::decorator::{Coffee, CoffeeExt, SimpleCoffee};
//!
//! let coffee = SimpleCoffee.with_milk().with_sugar();
//! assert_eq!(coffee.description(), "Simple Coffee, Milk, Sugar");
//! assert!((coffee.cost() - 5.7).abs() < 1e-9);
//! ```

/// Anything that can be sold as a coffee.
pub trait Coffee {
    /// Total price of this coffee including every layer.
    fn cost(&self) -> f64;

    /// Human-readable description, base first then each layer in wrap order.
    fn description(&self) -> String;
}

/// Base coffee with no extras.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleCoffee;

impl SimpleCoffee {
    pub const COST: f64 = 5.0;
    pub const DESCRIPTION: &'static str = "Simple Coffee";
}

impl Coffee for SimpleCoffee {
    fn cost(&self) -> f64 {
        Self::COST
    }

    fn description(&self) -> String {
        Self::DESCRIPTION.to_string()
    }
}

/// Adds milk.
pub struct MilkDecorator {
    coffee: Box<dyn Coffee>,
}

impl MilkDecorator {
    pub const COST: f64 = 0.5;
    pub const SUFFIX: &'static str = ", Milk";

    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        tracing::debug!(topping = "milk", "wrapping coffee");
        Self { coffee }
    }
}

impl Coffee for MilkDecorator {
    fn cost(&self) -> f64 {
        self.coffee.cost() + Self::COST
    }

    fn description(&self) -> String {
        self.coffee.description() + Self::SUFFIX
    }
}

/// Adds sugar.
pub struct SugarDecorator {
    coffee: Box<dyn Coffee>,
}

impl SugarDecorator {
    pub const COST: f64 = 0.2;
    pub const SUFFIX: &'static str = ", Sugar";

    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        tracing::debug!(topping = "sugar", "wrapping coffee");
        Self { coffee }
    }
}

impl Coffee for SugarDecorator {
    fn cost(&self) -> f64 {
        self.coffee.cost() + Self::COST
    }

    fn description(&self) -> String {
        self.coffee.description() + Self::SUFFIX
    }
}

/// Adds caramel.
pub struct CaramelDecorator {
    coffee: Box<dyn Coffee>,
}

impl CaramelDecorator {
    pub const COST: f64 = 2.0;
    pub const SUFFIX: &'static str = ", Caramel";

    pub fn new(coffee: Box<dyn Coffee>) -> Self {
        tracing::debug!(topping = "caramel", "wrapping coffee");
        Self { coffee }
    }
}

impl Coffee for CaramelDecorator {
    fn cost(&self) -> f64 {
        self.coffee.cost() + Self::COST
    }

    fn description(&self) -> String {
        self.coffee.description() + Self::SUFFIX
    }
}

/// Fluent wrapping for any owned coffee.
pub trait CoffeeExt: Coffee + Sized + 'static {
    fn with_milk(self) -> MilkDecorator {
        MilkDecorator::new(Box::new(self))
    }

    fn with_sugar(self) -> SugarDecorator {
        SugarDecorator::new(Box::new(self))
    }

    fn with_caramel(self) -> CaramelDecorator {
        CaramelDecorator::new(Box::new(self))
    }
}

impl<C: Coffee + 'static> CoffeeExt for C {}

/// Formats a coffee the way the menu board prints it,
/// e.g. `Simple Coffee, Milk Cost: $5.5`.
pub fn receipt_line(coffee: &dyn Coffee) -> String {
    format!("{} Cost: ${:.1}", coffee.description(), coffee.cost())
}
