//! Chatter TUI entry point.

use chatter_tui::runtime::Runtime;
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Chatter terminal client
#[derive(Parser, Debug)]
#[command(name = "chatter")]
#[command(about = "Terminal client for the chatter line-oriented chat protocol")]
#[command(version)]
struct Args {
    /// Server address: a host name, or host:port to override the well-known
    /// port (59001)
    server: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let runtime = Runtime::new(args.server)?;
    Ok(runtime.run().await?)
}
