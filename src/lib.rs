//! page-localizer
//!
//! Client-side localization pipeline: resolve the visitor's locale against
//! an allow-list, fetch and flatten a nested translation resource, and
//! rewrite the translatable elements of a document.
//!
//! The pipeline treats both the resource transport and the document tree as
//! injected collaborators ([`fetch::ResourceFetcher`] and
//! [`document::DocumentScope`]), so every stage is testable without a
//! browser or a network.

pub mod apply;
pub mod config;
pub mod document;
pub mod fetch;
pub mod locale;
pub mod localizer;
pub mod resource;

mod test_utils;

pub use config::LocalizerSettings;
pub use localizer::{
    Localizer,
    Outcome,
};
