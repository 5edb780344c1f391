use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use pizza_order::cli::Cli;

fn main() -> anyhow::Result<()> {
    // Structured logging to stderr, INFO by default, overridable via RUST_LOG
    // Example: RUST_LOG=trace pizza-order --size large --olives
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,pizza_order=debug"))
        )
        .init();

    let cli = Cli::parse();
    tracing::debug!(?cli, "Parsed arguments");

    let json = cli.run()?;
    println!("{json}");

    Ok(())
}
