use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use mintterm::catalog::Catalog;
use mintterm::cli::{self, Cli, Command};
use mintterm::config::{Config, MintSettings};
use mintterm::controller::Controller;
use mintterm::logging::{default_log_path, init_tracing, LogTarget};
use mintterm::ui::app::App;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_overrides(cli.rpc_url.clone(), cli.catalog.clone());
    config.validate()?;

    let log_target = match cli.command {
        None => LogTarget::File(cli.log_file.clone().unwrap_or_else(default_log_path)),
        Some(_) => LogTarget::Stderr,
    };
    init_tracing(log_target).context("failed to initialise logging")?;

    let catalog = Catalog::load(config.catalog.path.as_deref())?;
    if let Some(Command::Catalog) = &cli.command {
        print!("{}", cli::list_catalog(&catalog));
        return Ok(());
    }

    let settings = MintSettings::from_config(&config)?;
    let controller = Controller::new(cli::wallet_from_config(&config)?, settings);
    if !controller.has_provider() {
        tracing::warn!("no wallet.rpc_url configured, running without a wallet");
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    match cli.command {
        None => {
            let app = App::new(controller.clone(), Arc::new(catalog));
            mintterm::ui::runtime::run(app, controller, runtime.handle())?;
        }
        Some(Command::Status) => {
            println!("{}", runtime.block_on(cli::status(&controller, &catalog)));
        }
        Some(Command::Mint { edition }) => {
            let report = runtime.block_on(cli::mint(&controller, &catalog, &edition))?;
            println!("{report}");
        }
        Some(Command::Catalog) => {}
    }
    Ok(())
}
