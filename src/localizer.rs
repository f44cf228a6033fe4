//! Pipeline orchestration.

use thiserror::Error;

use crate::apply::apply;
use crate::config::{
    ConfigError,
    LocalizerSettings,
};
use crate::document::DocumentScope;
use crate::fetch::{
    FetchError,
    ResourceFetcher,
};
use crate::locale::resolve_locale;
use crate::resource::{
    ResourceNode,
    flatten,
};

/// Failure of the retrieval stage. Resolution and flattening are total and
/// cannot fail.
#[derive(Error, Debug)]
pub enum LocalizeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to parse translation resource: {0}")]
    Parse(#[from] serde_json::Error),
}

/// What a pipeline run did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The resolved locale is the default; no fetch, no mutation.
    Skipped { locale: String },

    /// Translations were applied. `keys` is the flattened table size.
    Applied { locale: String, keys: usize },
}

/// Wires the pipeline together: resolve → fetch → flatten → apply.
#[derive(Debug, Clone, Default)]
pub struct Localizer {
    settings: LocalizerSettings,
}

impl Localizer {
    #[must_use]
    pub fn new(settings: LocalizerSettings) -> Self {
        Self { settings }
    }

    /// Build a localizer from a (possibly partial) JSON settings document.
    ///
    /// # Errors
    /// - JSON parse error or wrongly typed field
    /// - Validation error
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(Self::new(LocalizerSettings::from_json(json)?))
    }

    #[must_use]
    pub fn settings(&self) -> &LocalizerSettings {
        &self.settings
    }

    /// Run the pipeline once for a page load.
    ///
    /// `reported_language` is the host-supplied language tag (e.g. the
    /// browser's `navigator.language`). When it resolves to the default
    /// locale the document is assumed to already be authored in it, and
    /// the run returns [`Outcome::Skipped`] without touching the fetcher
    /// or the document.
    ///
    /// # Errors
    /// - [`LocalizeError::Fetch`]: the resource could not be retrieved
    /// - [`LocalizeError::Parse`]: the resource is not valid JSON
    pub async fn run<F, D>(
        &self,
        reported_language: Option<&str>,
        fetcher: &F,
        scope: &mut D,
    ) -> Result<Outcome, LocalizeError>
    where
        F: ResourceFetcher,
        D: DocumentScope,
    {
        let locale = resolve_locale(reported_language, &self.settings);

        if locale == self.settings.default_locale {
            tracing::debug!("Resolved locale '{}' is the default, nothing to do", locale);
            return Ok(Outcome::Skipped { locale });
        }

        let path = format!("{}/{locale}.json", self.settings.resource_base_path);
        tracing::debug!("Fetching translation resource: {path}");
        let body = fetcher.fetch(&path).await?;

        let tree: ResourceNode = serde_json::from_str(&body)?;
        let flat = flatten(&tree);
        tracing::debug!("Applying {} translations for locale '{}'", flat.len(), locale);
        apply(&flat, scope);

        Ok(Outcome::Applied { locale, keys: flat.len() })
    }

    /// Fire-and-forget entry point.
    ///
    /// Runs the pipeline and swallows retrieval failures after logging
    /// them, so a missing or malformed resource leaves the page in its
    /// authored language instead of propagating an error into the host.
    pub async fn initialize<F, D>(&self, reported_language: Option<&str>, fetcher: &F, scope: &mut D)
    where
        F: ResourceFetcher,
        D: DocumentScope,
    {
        if let Err(err) = self.run(reported_language, fetcher, scope).await {
            tracing::warn!("Localization skipped: {err}");
        }
    }
}
