//! Translation application.

use std::collections::HashMap;

use crate::document::{
    DocumentScope,
    WriteTarget,
    write_target_for_tag,
};

/// Apply a flattened translation table to every translatable element in
/// scope.
///
/// Value-bearing elements receive the value in their placeholder, all
/// others as their content. A key with no entry in `flat` leaves the
/// element's authored text untouched, so an incomplete resource degrades
/// to partially translated rather than partially blank; each miss is
/// logged.
pub fn apply(flat: &HashMap<String, String>, scope: &mut dyn DocumentScope) {
    for element in scope.translatable_elements() {
        let Some(value) = flat.get(element.translation_key()) else {
            tracing::warn!(
                "No translation for key '{}', leaving element untouched",
                element.translation_key()
            );
            continue;
        };

        match write_target_for_tag(element.tag_name()) {
            WriteTarget::Placeholder => element.set_placeholder(value),
            WriteTarget::Content => element.set_content(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use googletest::prelude::*;

    use super::*;
    use crate::test_utils::{
        MockDocument,
        MockElement,
    };

    fn flat(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
    }

    #[googletest::test]
    fn writes_content_on_content_bearing_elements() {
        let mut document =
            MockDocument::new(vec![MockElement::new("div", "nav.home.title", "Home")]);

        apply(&flat(&[("nav.home.title", "Accueil")]), &mut document);

        expect_that!(document.elements[0].content, eq("Accueil"));
        expect_that!(document.elements[0].placeholder, none());
    }

    #[googletest::test]
    fn writes_placeholder_on_value_bearing_elements() {
        let mut document = MockDocument::new(vec![
            MockElement::new("INPUT", "form.name", "authored"),
            MockElement::new("TEXTAREA", "form.message", "authored"),
        ]);

        apply(&flat(&[("form.name", "Nom"), ("form.message", "Message")]), &mut document);

        expect_that!(document.elements[0].placeholder, some(eq("Nom")));
        expect_that!(document.elements[0].content, eq("authored"));
        expect_that!(document.elements[1].placeholder, some(eq("Message")));
        expect_that!(document.elements[1].content, eq("authored"));
    }

    #[googletest::test]
    fn replaces_existing_content() {
        let mut document = MockDocument::new(vec![MockElement::new(
            "p",
            "intro",
            "Authored <em>intro</em> text",
        )]);

        apply(&flat(&[("intro", "Texte <em>traduit</em>")]), &mut document);

        expect_that!(document.elements[0].content, eq("Texte <em>traduit</em>"));
    }

    #[googletest::test]
    fn missing_key_leaves_authored_text() {
        let mut document = MockDocument::new(vec![
            MockElement::new("div", "known", "old"),
            MockElement::new("div", "unknown", "authored"),
            MockElement::new("INPUT", "also.unknown", "authored"),
        ]);

        apply(&flat(&[("known", "new")]), &mut document);

        expect_that!(document.elements[0].content, eq("new"));
        expect_that!(document.elements[1].content, eq("authored"));
        expect_that!(document.elements[2].placeholder, none());
    }

    #[googletest::test]
    fn empty_table_mutates_nothing() {
        let mut document = MockDocument::new(vec![MockElement::new("div", "a", "authored")]);

        apply(&HashMap::new(), &mut document);

        expect_that!(document.elements[0].content, eq("authored"));
    }
}
