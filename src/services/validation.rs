use crate::domain::models::{ProjectMaintainers, ValidationResult, Violation};
use crate::services::aliases::AliasTable;

/// Checks every project for an empty maintainer list and, when an alias
/// policy is configured, for aliases the table does not know.
///
/// Every violation is collected; nothing short-circuits.
pub fn validate(mapping: &ProjectMaintainers, aliases: &AliasTable) -> ValidationResult {
    let mut violations = Vec::new();

    for (project, maintainers) in mapping {
        if maintainers.is_empty() {
            violations.push(Violation::NoMaintainers {
                project: project.clone(),
            });
        }
    }

    if aliases.is_enabled() {
        for (project, maintainers) in mapping {
            for alias in maintainers {
                if !aliases.knows_alias(alias) {
                    violations.push(Violation::UnknownMaintainer {
                        project: project.clone(),
                        alias: alias.clone(),
                    });
                }
            }
        }
    }

    ValidationResult {
        failed: !violations.is_empty(),
        violations,
    }
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::domain::models::{ProjectMaintainers, Violation};
    use crate::services::aliases::AliasTable;
    use std::collections::BTreeMap;

    fn mapping(entries: &[(&str, &[&str])]) -> ProjectMaintainers {
        entries
            .iter()
            .map(|(p, ms)| (p.to_string(), ms.iter().map(|m| m.to_string()).collect()))
            .collect()
    }

    fn jdoe_table() -> AliasTable {
        let mut m = BTreeMap::new();
        m.insert("jdoe".to_string(), "john.doe@example.org".to_string());
        AliasTable::from_forward(m)
    }

    #[test]
    fn passes_without_alias_policy_when_everyone_is_maintained() {
        let m = mapping(&[("x", &["alice"]), ("y", &["bob", "carol"])]);
        let r = validate(&m, &AliasTable::empty());
        assert!(r.passed());
        assert!(r.violations.is_empty());
    }

    #[test]
    fn empty_project_fails_even_without_alias_policy() {
        let m = mapping(&[("x", &["alice"]), ("orphan", &[])]);
        let r = validate(&m, &AliasTable::empty());
        assert!(r.failed);
        assert_eq!(r.messages(), vec!["project has no maintainers: orphan"]);
    }

    #[test]
    fn unknown_alias_is_reported_with_project() {
        let m = mapping(&[("X", &["john.doe@example.org", "alice"])]);
        let r = validate(&m, &jdoe_table());
        assert!(r.failed);
        assert_eq!(
            r.violations,
            vec![Violation::UnknownMaintainer {
                project: "X".to_string(),
                alias: "alice".to_string()
            }]
        );
        assert_eq!(
            r.messages(),
            vec!["project 'X' has an unknown maintainer: alice"]
        );
    }

    #[test]
    fn collects_every_violation() {
        let m = mapping(&[
            ("a", &[]),
            ("b", &["alice", "alice"]),
            ("c", &["john.doe@example.org"]),
            ("d", &[]),
        ]);
        let r = validate(&m, &jdoe_table());
        assert!(r.failed);
        assert_eq!(r.violations.len(), 4);
        let msgs = r.messages();
        assert!(msgs.contains(&"project has no maintainers: a".to_string()));
        assert!(msgs.contains(&"project has no maintainers: d".to_string()));
        assert_eq!(
            msgs.iter()
                .filter(|m| *m == "project 'b' has an unknown maintainer: alice")
                .count(),
            2
        );
    }

    #[test]
    fn raw_identifier_is_not_a_known_alias() {
        let m = mapping(&[("x", &["jdoe"])]);
        assert!(validate(&m, &jdoe_table()).failed);
    }
}
