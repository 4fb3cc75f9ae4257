use clap::Parser;
use maintainers_audit::cli::{Cli, Commands};
use maintainers_audit::commands::{handle_audit, handle_graph, handle_shares};
use std::process::ExitCode;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // stdout carries the report; logs go to stderr.
    let filter = EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match &cli.command {
        Commands::Audit(args) => handle_audit(args),
        Commands::Shares { report } => {
            handle_shares(cli.json, report)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Graph { report, output } => {
            handle_graph(cli.json, report, output)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
