//! Locale resolution.

use crate::config::LocalizerSettings;

/// Resolve the locale to translate into from the runtime-reported language
/// tag.
///
/// With `two_letter_matching` enabled, a region-qualified tag is truncated
/// at the first `-` or `_` separator ("fr-CA" → "fr", "en_US" → "en") and
/// the primary subtag is checked against the allow-list. Everything else —
/// an absent tag, matching disabled, or a primary subtag outside the
/// allow-list — resolves to the default locale.
///
/// Total: every input maps to a member of the allow-list or the default.
///
/// # Examples
/// ```
/// use page_localizer::config::LocalizerSettings;
/// use page_localizer::locale::resolve_locale;
///
/// let settings = LocalizerSettings {
///     allowed_locales: vec!["fr".to_string()],
///     ..LocalizerSettings::default()
/// };
///
/// assert_eq!(resolve_locale(Some("fr-CA"), &settings), "fr");
/// assert_eq!(resolve_locale(Some("de-DE"), &settings), "en");
/// assert_eq!(resolve_locale(None, &settings), "en");
/// ```
#[must_use]
pub fn resolve_locale(raw_tag: Option<&str>, settings: &LocalizerSettings) -> String {
    let Some(tag) = raw_tag.filter(|t| !t.is_empty()) else {
        return settings.default_locale.clone();
    };

    if settings.two_letter_matching {
        let primary = tag.split(['-', '_']).next().unwrap_or(tag);
        if settings.allowed_locales.iter().any(|allowed| allowed == primary) {
            return primary.to_string();
        }
    }

    settings.default_locale.clone()
}
