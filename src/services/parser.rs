use crate::services::aliases::AliasTable;

/// Lines starting with this mark a notification channel, not a maintainer.
pub const CHANNEL_MARKER: char = '#';

/// Parses the raw contents of a `maintainers.txt` file into a list of aliases.
///
/// Only the whole text is trimmed; lines are matched exactly as written.
/// Empty or unreadable input is a valid "no maintainers" outcome.
pub fn parse_maintainers(raw: &str, aliases: &AliasTable) -> Vec<String> {
    let contents = raw.trim();
    if contents.is_empty() {
        return Vec::new();
    }
    contents
        .split('\n')
        .filter(|line| !line.starts_with(CHANNEL_MARKER))
        .map(|line| aliases.resolve(line).to_string())
        .collect()
}
