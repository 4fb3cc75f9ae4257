use crate::cli::AuditArgs;
use crate::domain::errors::ConfigError;
use std::path::PathBuf;

pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Everything an audit run needs, resolved up front so services never read
/// the environment themselves.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    pub token: String,
    pub org: String,
    pub api_url: String,
    pub raw_url: String,
    pub cache_dir: PathBuf,
    pub timeout_ms: u64,
    pub alias_file: Option<PathBuf>,
}

impl AuditConfig {
    pub fn from_args(args: &AuditArgs) -> Result<Self, ConfigError> {
        Self::with_token(args, std::env::var(TOKEN_ENV).ok())
    }

    pub fn with_token(args: &AuditArgs, token: Option<String>) -> Result<Self, ConfigError> {
        let token = token.ok_or_else(|| ConfigError::MissingCredential(TOKEN_ENV.to_string()))?;
        Ok(Self {
            token,
            org: args.org.clone(),
            api_url: args.api_url.clone(),
            raw_url: args.raw_url.clone(),
            cache_dir: args.cache_dir.clone(),
            timeout_ms: args.timeout_ms,
            alias_file: args.alias_file.clone(),
        })
    }
}
