mod cli;
mod commands;
mod error;
mod output;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use fleetreg_api::RegistryClient;

use crate::cli::{Cli, Command};
use crate::error::CliError;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    init_tracing(cli.global.verbose);

    if let Err(err) = run(cli).await {
        let code = err.exit_code();
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(code);
    }
}

fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();
}

async fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        // Config commands don't need a client
        Command::Config(args) => commands::config_cmd::handle(&args, &cli.global),

        // Shell completions generation
        Command::Completions(args) => {
            use clap::CommandFactory;
            use clap_complete::generate;

            let mut cmd = Cli::command();
            generate(args.shell, &mut cmd, "fleetreg", &mut std::io::stdout());
            Ok(())
        }

        // All other commands talk to the registry
        cmd => {
            let client_config = build_client_config(&cli.global)?;
            let client = RegistryClient::new(client_config)?;

            tracing::debug!(command = ?cmd, "dispatching command");
            commands::dispatch(cmd, &client, &cli.global).await
        }
    }
}

/// Build a `ClientConfig` from the config file plus CLI flag overrides.
fn build_client_config(
    global: &cli::GlobalOpts,
) -> Result<fleetreg_api::ClientConfig, CliError> {
    let mut cfg = fleetreg_config::load_config_or_default();

    if let Some(ref server) = global.server {
        cfg.base_url = server.clone();
    }
    if let Some(ref portal) = global.portal {
        cfg.portal = portal.clone();
    }
    if let Some(timeout) = global.timeout {
        cfg.timeout = timeout;
    }
    if global.no_offline_fallback {
        cfg.offline_fallback = false;
    }

    Ok(cfg.to_client_config()?)
}
