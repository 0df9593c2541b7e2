//! Report Designer - command-line front end
//!
//! Creates, validates, rearranges and exports report templates.

mod cli;
mod commands;
mod state;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::state::Session;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // RUST_LOG wins over --log-level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.as_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Err(error) = run(cli).await {
        eprintln!("error: {:#}", error);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let mut session = Session::from_paths(cli.settings.as_deref(), cli.catalog.as_deref())?;

    match cli.command {
        Command::New { sample, output } => commands::run_new(&mut session, sample, &output).await,
        Command::Validate { template } => commands::run_validate(&mut session, &template).await,
        Command::Export { template, output } => {
            commands::run_export(&mut session, &template, output.as_deref()).await
        }
        Command::Catalog { json } => commands::run_catalog(session.engine.catalog(), json),
        Command::Align {
            template,
            edge,
            ids,
            output,
        } => {
            commands::run_align(&mut session, &template, edge.into(), &ids, output.as_deref()).await
        }
        Command::Distribute {
            template,
            direction,
            ids,
            output,
        } => {
            commands::run_distribute(&mut session, &template, direction.into(), &ids, output.as_deref())
                .await
        }
    }
}
