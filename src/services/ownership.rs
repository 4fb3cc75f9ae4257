use crate::domain::errors::ConfigError;
use crate::domain::models::{OwnershipShare, ProjectMaintainers, ShareRow};
use std::path::Path;

/// Splits one unit of ownership per project equally among its listed
/// maintainers and sums the fractions per alias.
///
/// Duplicates within a project each earn a full `1/N`. Projects without
/// maintainers contribute nothing.
pub fn aggregate(mapping: &ProjectMaintainers) -> OwnershipShare {
    let mut shares = OwnershipShare::new();
    for maintainers in mapping.values() {
        if maintainers.is_empty() {
            continue;
        }
        let portion = 1.0 / maintainers.len() as f64;
        for alias in maintainers {
            *shares.entry(alias.clone()).or_insert(0.0) += portion;
        }
    }
    shares
}

/// Largest share first, ties broken by alias.
pub fn ranked(shares: &OwnershipShare) -> Vec<ShareRow> {
    let mut rows: Vec<ShareRow> = shares
        .iter()
        .map(|(maintainer, share)| ShareRow {
            maintainer: maintainer.clone(),
            share: *share,
        })
        .collect();
    rows.sort_by(|a, b| {
        b.share
            .total_cmp(&a.share)
            .then_with(|| a.maintainer.cmp(&b.maintainer))
    });
    rows
}

/// Reads a report previously emitted by `audit`.
pub fn load_report(path: &Path) -> Result<ProjectMaintainers, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReportRead {
        path: path.to_path_buf(),
        source,
    })?;
    let report: ProjectMaintainers =
        serde_json::from_str(&raw).map_err(|source| ConfigError::ReportMalformed {
            path: path.to_path_buf(),
            source,
        })?;
    tracing::debug!(path = %path.display(), projects = report.len(), "loaded report");
    Ok(report)
}
