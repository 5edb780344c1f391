// ============================================================================
// Order Domain - Pizza Orders Built Through a Builder
// ============================================================================
//
// This module contains ALL order-specific code:
// - Value objects (Size)
// - Order (immutable snapshot of a pizza configuration)
// - OrderBuilder (the only way to construct an Order)
// - Errors (OrderError enum)
//
// `Order`'s constructor is private to this module, so code outside it can
// only obtain an order from `OrderBuilder::build`.
//
// ============================================================================

pub mod value_objects;
pub mod model;
pub mod builder;
pub mod errors;

// Re-export for convenience
pub use value_objects::*;
pub use model::*;
pub use builder::*;
pub use errors::*;
