use std::path::PathBuf;

/// Fatal configuration problems. Raised before any report output is produced.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("envvar {0} not set")]
    MissingCredential(String),
    #[error("alias file does not exist: {}", .0.display())]
    AliasFileMissing(PathBuf),
    #[error("alias file is empty: {}", .0.display())]
    AliasFileEmpty(PathBuf),
    #[error("failed to read alias file {}: {source}", .path.display())]
    AliasFileRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("alias file {} is not a JSON map of string to string: {source}", .path.display())]
    AliasFileMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to read report {}: {source}", .path.display())]
    ReportRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("report {} is not a JSON map of project to maintainer list: {source}", .path.display())]
    ReportMalformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}
