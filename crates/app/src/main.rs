//! LifeTube command-line client.

use std::io::Write;

use clap::Parser;
use lifetube::{Cli, run};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut stdout = std::io::stdout();
    if let Err(e) = run(cli, &mut stdout).await {
        let _ = stdout.flush();
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
