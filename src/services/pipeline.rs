use crate::domain::models::{ProjectMaintainers, Repository, ValidationResult};
use crate::services::aliases::AliasTable;
use crate::services::parser::parse_maintainers;
use crate::services::validation::validate;
use std::collections::BTreeMap;

/// Supplies the raw `maintainers.txt` text for a repository.
///
/// Failures are reported as an empty string, which parses to "no maintainers".
pub trait MaintainersSource {
    fn maintainers_text(&self, repo: &Repository) -> String;
}

impl<F> MaintainersSource for F
where
    F: Fn(&Repository) -> String,
{
    fn maintainers_text(&self, repo: &Repository) -> String {
        self(repo)
    }
}

#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub report: ProjectMaintainers,
    pub validation: ValidationResult,
}

/// Raw text per active repository, keyed by repository name.
fn collect_raw<S: MaintainersSource + ?Sized>(
    repos: &[Repository],
    source: &S,
) -> BTreeMap<String, String> {
    let mut raw = BTreeMap::new();
    for repo in repos {
        if repo.archived {
            tracing::debug!(repo = %repo.name, "skipping archived repository");
            continue;
        }
        raw.insert(repo.name.clone(), source.maintainers_text(repo));
    }
    raw
}

fn build_report(raw: &BTreeMap<String, String>, aliases: &AliasTable) -> ProjectMaintainers {
    raw.iter()
        .map(|(project, text)| (project.clone(), parse_maintainers(text, aliases)))
        .collect()
}

/// Fetch everything, then parse, then validate.
pub fn run_audit<S: MaintainersSource + ?Sized>(
    repos: &[Repository],
    aliases: &AliasTable,
    source: &S,
) -> AuditOutcome {
    let raw = collect_raw(repos, source);
    let report = build_report(&raw, aliases);
    let validation = validate(&report, aliases);
    tracing::info!(
        projects = report.len(),
        violations = validation.violations.len(),
        "audit complete"
    );
    AuditOutcome { report, validation }
}
