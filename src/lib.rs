//! Immutable pizza orders assembled through a chainable builder.
//!
//! An [`OrderBuilder`] is created with a required [`Size`], accumulates
//! toppings through setters that each return the builder, and produces an
//! [`Order`] snapshot on [`OrderBuilder::build`]. Orders have no setters and
//! no public constructor.
//!
//! ```
//! use pizza_order::{OrderBuilder, Size};
//!
//! let builder = OrderBuilder::new(Size::Large).pepperoni(true);
//! let first = builder.build();
//! let second = builder.spinach(true).build();
//!
//! assert!(!first.spinach());
//! assert!(second.pepperoni() && second.spinach());
//! ```

pub mod cli;
pub mod domain;

pub use domain::order::{Order, OrderBuilder, OrderError, Size};
