//! Resource retrieval.
//!
//! Transport is injected: the orchestrator asks a [`ResourceFetcher`] for
//! the raw text of `{resource_base_path}/{locale}.json` and parses it
//! itself. [`FsResourceFetcher`] covers native hosts and tests; browser
//! hosts supply their own adapter over their fetch primitive.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Failed to retrieve '{path}': {message}")]
pub struct FetchError {
    /// Resource path as requested (e.g. "locales/fr.json").
    pub path: String,
    pub message: String,
}

impl FetchError {
    #[must_use]
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { path: path.into(), message: message.into() }
    }
}

/// Asynchronous retrieval of a translation resource's raw text.
pub trait ResourceFetcher {
    /// Retrieve the resource at `path`.
    ///
    /// # Errors
    /// Returns [`FetchError`] when the resource cannot be retrieved.
    fn fetch(&self, path: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

/// Fetcher reading resources from a directory tree.
#[derive(Debug, Clone, Default)]
pub struct FsResourceFetcher {
    root: PathBuf,
}

impl FsResourceFetcher {
    /// Resources are resolved relative to `root`, so
    /// "locales/fr.json" maps to `{root}/locales/fr.json`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ResourceFetcher for FsResourceFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        let full_path = self.root.join(path);
        tracing::debug!("Reading translation resource from: {:?}", full_path);

        tokio::fs::read_to_string(full_path)
            .await
            .map_err(|e| FetchError::new(path, e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[rstest]
    #[tokio::test]
    async fn fetch_reads_resource_under_root() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("locales")).unwrap();
        fs::write(temp_dir.path().join("locales/fr.json"), r#"{"title": "Accueil"}"#).unwrap();

        let fetcher = FsResourceFetcher::new(temp_dir.path());
        let body = fetcher.fetch("locales/fr.json").await;

        assert_eq!(body.unwrap(), r#"{"title": "Accueil"}"#);
    }

    #[rstest]
    #[tokio::test]
    async fn fetch_missing_resource_is_an_error() {
        let temp_dir = TempDir::new().unwrap();

        let fetcher = FsResourceFetcher::new(temp_dir.path());
        let result = fetcher.fetch("locales/fr.json").await;

        let err = result.unwrap_err();
        assert_eq!(err.path, "locales/fr.json");
        assert!(!err.message.is_empty());
    }
}
