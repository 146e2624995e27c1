//! Form Mapper Binary

use clap::Parser;
use form_mapper::{log_filter, run, Cli, Outcome};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let rust_log = std::env::var("RUST_LOG").ok();

    // Logs go to stderr; stdout only carries the result summary
    tracing_subscriber::registry()
        .with(log_filter(cli.verbose, rust_log.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Form Mapper v{}", env!("CARGO_PKG_VERSION"));

    match run(&cli)? {
        Outcome::Written { path, rows } => {
            println!("Saved: {}", path.display());
            println!("Total: {}", rows);
        }
        Outcome::NoFields => {
            println!("No fields found in {}", cli.primary.display());
        }
    }

    Ok(())
}
