//! WebSearch-RS: A unified multi-provider search gateway written in Rust
//!
//! This is the CLI entry point: parse flags, load configuration, run
//! one search, print one JSON document.

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use websearch_rs::cli::Cli;
use websearch_rs::{config, output, Gateway, HttpClient, Provider, SearchError};

#[tokio::main]
async fn main() {
    // Logs go to stderr so stdout stays a single JSON document.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let provider = cli.provider;
    let query = cli.query.clone();
    let compact = cli.compact;

    let settings = config::load(cli.config.as_deref());
    let overrides = cli.overrides();

    let client = match HttpClient::new() {
        Ok(client) => client,
        Err(e) => fail(&e, provider, query.as_deref()),
    };

    let gateway = Gateway::new(client);
    match gateway.execute(provider, overrides, &settings).await {
        Ok(response) => println!("{}", output::render_response(&response, compact)),
        Err(e) => fail(&e, provider, query.as_deref()),
    }
}

/// Print the error report to stderr and exit with the taxonomy's code.
fn fail(error: &SearchError, provider: Provider, query: Option<&str>) -> ! {
    eprintln!("{}", output::render_error(error, provider, query));
    std::process::exit(error.exit_code());
}
