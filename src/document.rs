//! Document collaborator traits.
//!
//! The pipeline never reaches for an ambient document. Hosts hand it an
//! implementation of [`DocumentScope`] — a DOM adapter in the browser, a
//! mock in tests — and the applicator writes through these traits only.

/// Where a translated value is written on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteTarget {
    /// The element's placeholder/hint attribute (form controls).
    Placeholder,
    /// The element's rendered inner content, replacing what was there.
    Content,
}

/// Classify an element by tag name.
///
/// Single-line and multi-line text inputs are value-bearing and take the
/// translation in their placeholder; everything else takes it as content.
/// Comparison is ASCII case-insensitive since DOM implementations report
/// upper-case tag names.
#[must_use]
pub fn write_target_for_tag(tag_name: &str) -> WriteTarget {
    if tag_name.eq_ignore_ascii_case("input") || tag_name.eq_ignore_ascii_case("textarea") {
        WriteTarget::Placeholder
    } else {
        WriteTarget::Content
    }
}

/// An element opted in to translation via a translation-key attribute.
pub trait TranslatableElement {
    /// Tag name as the host reports it (e.g. "INPUT", "div").
    fn tag_name(&self) -> &str;

    /// Dot-path key from the element's translation-key attribute.
    fn translation_key(&self) -> &str;

    /// Write the value to the placeholder/hint attribute.
    fn set_placeholder(&mut self, value: &str);

    /// Replace the element's rendered content with the value.
    fn set_content(&mut self, value: &str);
}

/// The set of translatable elements in a document at one point in time.
pub trait DocumentScope {
    /// Every element in scope carrying a translation-key attribute.
    ///
    /// The selection is a snapshot: elements added to the document after
    /// this call are never retroactively translated.
    fn translatable_elements(&mut self) -> Vec<&mut dyn TranslatableElement>;
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("input", WriteTarget::Placeholder)]
    #[case("INPUT", WriteTarget::Placeholder)]
    #[case("textarea", WriteTarget::Placeholder)]
    #[case("TEXTAREA", WriteTarget::Placeholder)]
    #[case("div", WriteTarget::Content)]
    #[case("SPAN", WriteTarget::Content)]
    #[case("h1", WriteTarget::Content)]
    // Only the two text-input kinds are value-bearing
    #[case("select", WriteTarget::Content)]
    #[case("button", WriteTarget::Content)]
    fn write_target_by_tag(#[case] tag: &str, #[case] expected: WriteTarget) {
        assert_eq!(write_target_for_tag(tag), expected);
    }
}
