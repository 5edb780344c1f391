use super::model::Order;
use super::value_objects::Size;

// ============================================================================
// Order Builder
// ============================================================================
//
// Size is required and fixed at construction; toppings default to false and
// are set through chainable setters. `build` borrows the builder, so one
// builder can be finalized any number of times as a prototype.
//
// ============================================================================

/// Mutable assembler for [`Order`].
///
/// ```
/// use pizza_order::{OrderBuilder, Size};
///
/// let order = OrderBuilder::new(Size::Small)
///     .olives(true)
///     .onions(true)
///     .build();
///
/// assert!(order.olives() && order.onions());
/// assert!(!order.pepperoni() && !order.spinach());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBuilder {
    pub(super) size: Size,
    pub(super) pepperoni: bool,
    pub(super) onions: bool,
    pub(super) spinach: bool,
    pub(super) olives: bool,
}

impl OrderBuilder {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            pepperoni: false,
            onions: false,
            spinach: false,
            olives: false,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn pepperoni(mut self, pepperoni: bool) -> Self {
        self.pepperoni = pepperoni;
        self
    }

    pub fn onions(mut self, onions: bool) -> Self {
        self.onions = onions;
        self
    }

    pub fn spinach(mut self, spinach: bool) -> Self {
        self.spinach = spinach;
        self
    }

    pub fn olives(mut self, olives: bool) -> Self {
        self.olives = olives;
        self
    }

    /// Snapshot the current configuration. Leaves the builder untouched.
    pub fn build(&self) -> Order {
        let order = Order::from_builder(self);

        tracing::debug!(
            size = %order.size(),
            pepperoni = order.pepperoni(),
            onions = order.onions(),
            spinach = order.spinach(),
            olives = order.olives(),
            "Order built"
        );

        order
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        for size in Size::ALL {
            let order = OrderBuilder::new(size).build();

            assert_eq!(order.size(), size);
            assert!(order.toppings().is_empty());
        }
    }

    #[test]
    fn test_demonstration_order() {
        let order = OrderBuilder::new(Size::Small)
            .olives(true)
            .onions(true)
            .build();

        assert_eq!(order.size(), Size::Small);
        assert!(!order.pepperoni());
        assert!(order.onions());
        assert!(!order.spinach());
        assert!(order.olives());
    }

    #[test]
    fn test_last_write_wins() {
        let order = OrderBuilder::new(Size::Medium)
            .pepperoni(true)
            .pepperoni(false)
            .olives(false)
            .olives(true)
            .build();

        assert!(!order.pepperoni());
        assert!(order.olives());
    }

    #[test]
    fn test_build_twice_gives_equal_orders() {
        let builder = OrderBuilder::new(Size::Large).spinach(true);

        let first = builder.build();
        let second = builder.build();

        assert_eq!(first, second);
    }

    #[test]
    fn test_build_does_not_reset_builder() {
        let builder = OrderBuilder::new(Size::Small).onions(true);
        let before = builder;

        let _ = builder.build();

        assert_eq!(builder, before);
        assert_eq!(builder.size(), Size::Small);
    }

    #[test]
    fn test_reuse_with_one_more_setter() {
        let builder = OrderBuilder::new(Size::Medium).olives(true);
        let first = builder.build();

        let builder = builder.pepperoni(true);
        let second = builder.build();

        assert_eq!(first.size(), second.size());
        assert_eq!(first.onions(), second.onions());
        assert_eq!(first.spinach(), second.spinach());
        assert_eq!(first.olives(), second.olives());
        assert!(!first.pepperoni());
        assert!(second.pepperoni());
    }

    #[test]
    fn test_earlier_order_unaffected_by_later_setters() {
        let builder = OrderBuilder::new(Size::Large);
        let plain = builder.build();

        let _loaded = builder
            .pepperoni(true)
            .onions(true)
            .spinach(true)
            .olives(true)
            .build();

        assert!(plain.toppings().is_empty());
    }
}
