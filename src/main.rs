//! Electra terminal client
//!
//! Signs in against the election API and drives the same guarded views as
//! the browser front end.

mod cli;

use clap::Parser;

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    let config = match cli.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    if let Err(e) = electra::logging::init(&config.logging) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    tracing::debug!(api = %config.api.base_url, "Electra v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = cli::run(cli, config).await {
        tracing::debug!("{:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
