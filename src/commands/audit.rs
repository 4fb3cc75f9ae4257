use crate::cli::AuditArgs;
use crate::config::AuditConfig;
use crate::services::aliases::AliasTable;
use crate::services::cache::CachedSource;
use crate::services::github::GithubClient;
use crate::services::output::render_report;
use crate::services::pipeline::run_audit;
use std::process::ExitCode;

/// Prints the report to stdout and violations to stderr.
/// Validation failure still prints the full report, then exits 1.
pub fn handle_audit(args: &AuditArgs) -> anyhow::Result<ExitCode> {
    let config = AuditConfig::from_args(args)?;
    let aliases = AliasTable::load(config.alias_file.as_deref())?;

    let client = GithubClient::new(&config)?;
    let repos = client.list_repositories()?;
    let source = CachedSource::new(client, &config.cache_dir);

    let outcome = run_audit(&repos, &aliases, &source);

    println!("{}", render_report(&outcome.report)?);
    for violation in &outcome.validation.violations {
        eprintln!("{}", violation);
    }

    if outcome.validation.failed {
        Ok(ExitCode::from(1))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
