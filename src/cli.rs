//! Command-line interface for the demo binary
//!
//! Parses a size and topping flags, builds the order and prints it as JSON.

use anyhow::Result;
use clap::Parser;

use crate::domain::order::{Order, OrderBuilder, Size};

/// Build a pizza order and print it as JSON
#[derive(Parser, Debug)]
#[command(name = "pizza-order")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Pizza size: small, medium or large
    #[arg(short, long)]
    pub size: Option<Size>,

    /// Add pepperoni
    #[arg(long)]
    pub pepperoni: bool,

    /// Add onions
    #[arg(long)]
    pub onions: bool,

    /// Add spinach
    #[arg(long)]
    pub spinach: bool,

    /// Add olives
    #[arg(long)]
    pub olives: bool,

    /// Indent the JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl Cli {
    fn has_toppings(&self) -> bool {
        self.pepperoni || self.onions || self.spinach || self.olives
    }

    /// Builder described by the arguments. With no size and no toppings this
    /// is the demonstration order: a small pizza with olives and onions.
    pub fn builder(&self) -> OrderBuilder {
        match self.size {
            None if !self.has_toppings() => {
                OrderBuilder::new(Size::Small).olives(true).onions(true)
            }
            size => OrderBuilder::new(size.unwrap_or(Size::Small))
                .pepperoni(self.pepperoni)
                .onions(self.onions)
                .spinach(self.spinach)
                .olives(self.olives),
        }
    }

    pub fn render(&self, order: &Order) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(order)?
        } else {
            serde_json::to_string(order)?
        };
        Ok(json)
    }

    /// Build the order and return its JSON rendering
    pub fn run(&self) -> Result<String> {
        let order = self.builder().build();
        tracing::info!("Built {}", order);
        self.render(&order)
    }
}
