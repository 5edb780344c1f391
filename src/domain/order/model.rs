use serde::Serialize;
use std::fmt;

use super::builder::OrderBuilder;
use super::value_objects::Size;

// ============================================================================
// Order - Immutable Pizza Order
// ============================================================================
//
// Fields are private and there are no setters, so an `Order` never changes
// after it is built. The only constructor is visible inside `domain::order`
// and is called from `OrderBuilder::build`.
//
// `Serialize` is derived but `Deserialize` is not: deserializing would be a
// second way to construct an order.
//
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Order {
    size: Size,
    pepperoni: bool,
    onions: bool,
    spinach: bool,
    olives: bool,
}

impl Order {
    /// Snapshot the builder's current state. Copies values in; the order
    /// keeps no reference to the builder.
    pub(super) fn from_builder(builder: &OrderBuilder) -> Self {
        Self {
            size: builder.size,
            pepperoni: builder.pepperoni,
            onions: builder.onions,
            spinach: builder.spinach,
            olives: builder.olives,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pepperoni(&self) -> bool {
        self.pepperoni
    }

    pub fn onions(&self) -> bool {
        self.onions
    }

    pub fn spinach(&self) -> bool {
        self.spinach
    }

    pub fn olives(&self) -> bool {
        self.olives
    }

    /// Names of the toppings on this order, in menu order
    pub fn toppings(&self) -> Vec<&'static str> {
        [
            (self.pepperoni, "pepperoni"),
            (self.onions, "onions"),
            (self.spinach, "spinach"),
            (self.olives, "olives"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let toppings = self.toppings();
        if toppings.is_empty() {
            write!(f, "{} pizza (plain)", self.size)
        } else {
            write!(f, "{} pizza with {}", self.size, toppings.join(", "))
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
