use clap::Parser;
use mbta_client::cli::dispatcher::Dispatcher;
use mbta_client::cli::main_types::Cli;
use mbta_client::storage::config::Config;
use mbta_client::storage::credentials::resolve_api_key;
use mbta_client::utils::logging::init_logging;
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli
        .config_dir
        .as_ref()
        .map(|dir| PathBuf::from(dir).join("config.toml"));

    let config = match Config::load(config_path.clone()) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading config: {}", err);
            std::process::exit(1);
        }
    };

    let cancel = CancellationToken::new();
    let ctrl_c_token = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            log::debug!("Interrupt received, cancelling request");
            ctrl_c_token.cancel();
        }
    });

    let dispatcher = Dispatcher::new(
        config,
        config_path,
        cli.url,
        resolve_api_key(cli.api_key),
        cancel,
    );

    if let Err(e) = dispatcher.dispatch(cli.command).await {
        eprintln!("{} {}", e.severity().label(), e.display_friendly());
        if let Some(hint) = e.troubleshooting_hint() {
            eprintln!("hint: {}", hint);
        }
        std::process::exit(1);
    }
}
