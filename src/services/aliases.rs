use crate::domain::errors::ConfigError;
use std::collections::BTreeMap;
use std::path::Path;

/// Raw maintainer identifier <=> canonical alias.
///
/// `reverse` is always the inverse of `forward`. When several identifiers share
/// an alias the one sorting last wins; nothing validates against that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    forward: BTreeMap<String, String>,
    reverse: BTreeMap<String, String>,
}

impl AliasTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_forward(forward: BTreeMap<String, String>) -> Self {
        let reverse = forward
            .iter()
            .map(|(id, alias)| (alias.clone(), id.clone()))
            .collect();
        Self { forward, reverse }
    }

    /// Loads `{"foo": "f.bar@example.org", ...}` from `path`.
    /// No path means no alias policy: an empty table.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p,
            None => return Ok(Self::empty()),
        };
        if !path.exists() {
            return Err(ConfigError::AliasFileMissing(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::AliasFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        if raw.is_empty() {
            return Err(ConfigError::AliasFileEmpty(path.to_path_buf()));
        }
        let forward: BTreeMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| ConfigError::AliasFileMalformed {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), entries = forward.len(), "loaded alias table");
        Ok(Self::from_forward(forward))
    }

    /// Alias for `id`, or `id` itself when unmapped.
    pub fn resolve<'a>(&'a self, id: &'a str) -> &'a str {
        self.forward.get(id).map(String::as_str).unwrap_or(id)
    }

    /// An empty table means "no validation requested", not "nothing is known".
    pub fn is_enabled(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn knows_alias(&self, alias: &str) -> bool {
        self.reverse.contains_key(alias)
    }
}
