//! Localizer configuration types.

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "allowedLocales[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Settings for the localization pipeline.
///
/// Every field has a default, so a partial JSON document merges over the
/// defaults field by field. A field of the wrong type is a parse error, not
/// a silent fallback.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocalizerSettings {
    /// Reduce a region-qualified tag ("fr-CA") to its primary subtag
    /// ("fr") before checking the allow-list.
    pub two_letter_matching: bool,

    /// Locale the document is authored in. Needs no resource file and no
    /// membership in `allowed_locales`.
    pub default_locale: String,

    /// Locales a translation resource exists for.
    pub allowed_locales: Vec<String>,

    /// Directory-like prefix under which `{locale}.json` resources live.
    pub resource_base_path: String,
}

impl Default for LocalizerSettings {
    fn default() -> Self {
        Self {
            two_letter_matching: true,
            default_locale: "en".to_string(),
            allowed_locales: vec!["en".to_string()],
            resource_base_path: "locales".to_string(),
        }
    }
}

impl LocalizerSettings {
    /// Parse settings from a (possibly partial) JSON document and validate
    /// them.
    ///
    /// # Errors
    /// - JSON parse error or wrongly typed field
    /// - Validation error
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        Ok(settings)
    }

    /// # Errors
    /// - `default_locale` or `resource_base_path` is empty
    /// - An entry of `allowed_locales` is empty
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.default_locale.is_empty() {
            errors.push(ValidationError::new(
                "defaultLocale",
                "The default locale cannot be empty. Please specify a language code, for example: \"en\"",
            ));
        }

        if self.resource_base_path.is_empty() {
            errors.push(ValidationError::new(
                "resourceBasePath",
                "The base path cannot be empty. Please specify a path prefix, for example: \"locales\"",
            ));
        }

        for (index, locale) in self.allowed_locales.iter().enumerate() {
            if locale.is_empty() {
                errors.push(ValidationError::new(
                    format!("allowedLocales[{index}]"),
                    "A locale code cannot be empty",
                ));
            }
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
