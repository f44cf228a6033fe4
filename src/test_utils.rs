//! Test doubles shared across test modules.
#![cfg(test)]

use std::sync::Mutex;
use std::sync::atomic::{
    AtomicUsize,
    Ordering,
};

use crate::document::{
    DocumentScope,
    TranslatableElement,
};
use crate::fetch::{
    FetchError,
    ResourceFetcher,
};

/// In-memory stand-in for a DOM element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct MockElement {
    pub tag_name: String,
    pub translation_key: String,
    pub content: String,
    pub placeholder: Option<String>,
}

impl MockElement {
    pub(crate) fn new(tag_name: &str, translation_key: &str, content: &str) -> Self {
        Self {
            tag_name: tag_name.to_string(),
            translation_key: translation_key.to_string(),
            content: content.to_string(),
            placeholder: None,
        }
    }
}

impl TranslatableElement for MockElement {
    fn tag_name(&self) -> &str {
        &self.tag_name
    }

    fn translation_key(&self) -> &str {
        &self.translation_key
    }

    fn set_placeholder(&mut self, value: &str) {
        self.placeholder = Some(value.to_string());
    }

    fn set_content(&mut self, value: &str) {
        self.content = value.to_string();
    }
}

/// In-memory stand-in for a document: all elements carry a key.
#[derive(Debug, Clone, Default)]
pub(crate) struct MockDocument {
    pub elements: Vec<MockElement>,
}

impl MockDocument {
    pub(crate) fn new(elements: Vec<MockElement>) -> Self {
        Self { elements }
    }
}

impl DocumentScope for MockDocument {
    fn translatable_elements(&mut self) -> Vec<&mut dyn TranslatableElement> {
        self.elements.iter_mut().map(|e| e as &mut dyn TranslatableElement).collect()
    }
}

/// Fetcher returning a fixed body, counting calls and recording paths.
#[derive(Debug, Default)]
pub(crate) struct StaticFetcher {
    body: String,
    calls: AtomicUsize,
    last_path: Mutex<Option<String>>,
}

impl StaticFetcher {
    pub(crate) fn new(body: &str) -> Self {
        Self { body: body.to_string(), ..Self::default() }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub(crate) fn last_path(&self) -> Option<String> {
        self.last_path.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }
}

impl ResourceFetcher for StaticFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_path.lock().unwrap_or_else(std::sync::PoisonError::into_inner) =
            Some(path.to_string());
        Ok(self.body.clone())
    }
}

/// Fetcher failing every request with a fixed message.
#[derive(Debug)]
pub(crate) struct FailingFetcher {
    message: String,
}

impl FailingFetcher {
    pub(crate) fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}

impl ResourceFetcher for FailingFetcher {
    async fn fetch(&self, path: &str) -> Result<String, FetchError> {
        Err(FetchError::new(path, self.message.clone()))
    }
}
