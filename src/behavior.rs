//! Base trait for named, pluggable behaviors.
//!
//! A `Behavior` is anything that can be registered in a `Registry` and
//! swapped in behind a trait object, such as a drive strategy.

use std::any::Any;
use std::fmt::Debug;

/// Base trait for all pluggable behaviors.
///
/// # Example
///
/// ```rust
/// use patterncraft::Behavior;
/// use std::any::Any;
///
/// #[derive(Debug)]
/// struct Cruise;
///
/// impl Behavior for Cruise {
///     fn name(&self) -> &str {
///         "cruise"
///     }
///
///     fn as_any(&self) -> &dyn Any {
///         self
///     }
/// }
/// ```
pub trait Behavior: Send + Sync + Debug {
    /// Returns the unique name of this behavior.
    ///
    /// This name is used for registration and lookup in the registry.
    fn name(&self) -> &str;

    /// Downcast to concrete type for advanced usage.
    fn as_any(&self) -> &dyn Any;
}

/// Extension trait for behavior type checking.
pub trait BehaviorExt: Behavior {
    /// Check if this behavior is of type T.
    fn is<T: Behavior + 'static>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast to type T.
    fn downcast_ref<T: Behavior + 'static>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

impl<B: Behavior + ?Sized> BehaviorExt for B {}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Idle {
        name: String,
    }

    impl Behavior for Idle {
        fn name(&self) -> &str {
            &self.name
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[derive(Debug)]
    struct Reverse;

    impl Behavior for Reverse {
        fn name(&self) -> &str {
            "reverse"
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    #[test]
    fn test_behavior_downcast() {
        let behavior: Box<dyn Behavior> = Box::new(Idle {
            name: "idle".to_string(),
        });

        assert_eq!(behavior.name(), "idle");
        assert!(behavior.is::<Idle>());
        assert!(!behavior.is::<Reverse>());
        assert_eq!(behavior.downcast_ref::<Idle>().unwrap().name, "idle");
        assert!(behavior.downcast_ref::<Reverse>().is_none());
    }
}
