use crate::services::github::{DEFAULT_API_URL, DEFAULT_RAW_URL};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_ORG: &str = "elifesciences";
pub const DEFAULT_REPORT: &str = "report.json";
pub const DEFAULT_CHART: &str = "output.svg";

#[derive(Parser, Debug)]
#[command(
    name = "maintainers-audit",
    version,
    about = "Audit maintainers.txt ownership across a GitHub organization"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = "warn",
        help = "Log filter written to stderr (e.g. info, debug, maintainers_audit=debug)"
    )]
    pub log_level: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect every repository's maintainers.txt and print the ownership report
    Audit(AuditArgs),
    /// Print each maintainer's fractional ownership share from a report
    Shares {
        #[arg(long, default_value = DEFAULT_REPORT)]
        report: PathBuf,
    },
    /// Render ownership shares from a report as an SVG pie chart
    Graph {
        #[arg(long, default_value = DEFAULT_REPORT)]
        report: PathBuf,
        #[arg(long, default_value = DEFAULT_CHART)]
        output: PathBuf,
    },
}

#[derive(Args, Debug, Clone)]
pub struct AuditArgs {
    #[arg(help = "JSON map of maintainer id to alias; enables unknown-maintainer checks")]
    pub alias_file: Option<PathBuf>,
    #[arg(long, default_value = DEFAULT_ORG)]
    pub org: String,
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,
    #[arg(long, default_value = DEFAULT_RAW_URL)]
    pub raw_url: String,
    #[arg(long, default_value = ".", help = "Directory holding <repo>--maintainers.txt files")]
    pub cache_dir: PathBuf,
    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,
}
