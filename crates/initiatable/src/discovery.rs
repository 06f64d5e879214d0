//! Element discovery.

use std::fmt;

use crate::element::Element;

/// Matches elements by tag and, optionally, one attribute value.
///
/// The default selector is `table[data-role="datatable"]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    attribute: Option<(String, String)>,
}

impl Default for Selector {
    fn default() -> Self {
        Selector::tag("table").with_attr("data-role", "datatable")
    }
}

impl Selector {
    /// Matches every element.
    pub fn any() -> Self {
        Selector {
            tag: None,
            attribute: None,
        }
    }

    /// Matches elements with the given tag.
    pub fn tag(tag: &str) -> Self {
        Selector {
            tag: Some(tag.to_string()),
            attribute: None,
        }
    }

    /// Also requires `name` to be present with exactly `value`.
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.attribute = Some((name.to_string(), value.to_string()));
        self
    }

    /// Returns `true` if `element` matches.
    pub fn matches(&self, element: &Element) -> bool {
        let tag_ok = self.tag.as_deref().map_or(true, |t| element.is(t));
        let attr_ok = self.attribute.as_ref().map_or(true, |(name, value)| {
            element
                .attributes
                .get(name)
                .and_then(|v| v.as_str())
                .is_some_and(|v| v == value)
        });
        tag_ok && attr_ok
    }

    /// Matching elements under `root` (inclusive), in document order.
    pub fn find<'a>(&self, root: &'a Element) -> Vec<&'a Element> {
        let mut found = Vec::new();
        root.walk(&mut |el| {
            if self.matches(el) {
                found.push(el);
            }
        });
        found
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag.as_deref().unwrap_or("*"))?;
        if let Some((name, value)) = &self.attribute {
            write!(f, "[{}=\"{}\"]", name, value)?;
        }
        Ok(())
    }
}

/// Calls `visit` on every element under `root` (inclusive) that matches,
/// in document order, stopping at the first error.
pub(crate) fn for_each_match<E>(
    root: &mut Element,
    selector: &Selector,
    visit: &mut impl FnMut(&mut Element) -> Result<(), E>,
) -> Result<(), E> {
    if selector.matches(root) {
        visit(root)?;
    }
    for child in &mut root.children {
        for_each_match(child, selector, visit)?;
    }
    Ok(())
}
