use crate::domain::models::Repository;
use crate::services::pipeline::MaintainersSource;
use std::path::{Path, PathBuf};

/// Fetch-or-read-cache wrapper around another source.
///
/// Fetched text is written back even when empty, so a repository without a
/// maintainers file is not fetched again on the next run.
pub struct CachedSource<S> {
    inner: S,
    dir: PathBuf,
}

impl<S: MaintainersSource> CachedSource<S> {
    pub fn new(inner: S, dir: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            dir: dir.into(),
        }
    }

    pub fn cache_path(&self, repo: &Repository) -> PathBuf {
        cache_path(&self.dir, &repo.name)
    }
}

impl<S: MaintainersSource> MaintainersSource for CachedSource<S> {
    fn maintainers_text(&self, repo: &Repository) -> String {
        let path = self.cache_path(repo);
        if path.exists() {
            tracing::debug!(path = %path.display(), "reading cached maintainers file");
            return match std::fs::read_to_string(&path) {
                Ok(txt) => txt,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "failed to read file contents");
                    String::new()
                }
            };
        }

        let contents = self.inner.maintainers_text(repo);
        if let Err(e) = write_cache(&path, &contents) {
            tracing::warn!(path = %path.display(), error = %e, "failed to write file");
        }
        contents
    }
}

/// `<dir>/<repo>--maintainers.txt`
pub fn cache_path(dir: &Path, repo: &str) -> PathBuf {
    dir.join(format!("{}--maintainers.txt", repo))
}

fn write_cache(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, contents)
}
