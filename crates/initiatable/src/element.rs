//! Minimal element tree.
//!
//! Just enough of a document to carry attributes, find header cells and
//! walk descendants in document order. Hosts with a real DOM convert into
//! this shape (or build it directly) before calling the builder.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Deserializer, Serialize};

use initiatable_resolve::Value;

/// Attributes of one element, in insertion order.
///
/// Keys are lower-cased on the way in, matching how browsers normalize
/// attribute names. Setting an existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeBag {
    entries: Vec<(String, Value)>,
}

impl AttributeBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, returning the previous value.
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Option<Value> {
        let key = key.to_ascii_lowercase();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Gets an attribute by key (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    /// Removes an attribute, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        let index = self
            .entries
            .iter()
            .position(|(k, _)| k.eq_ignore_ascii_case(key))?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates attributes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates attributes under `prefix`, with the prefix stripped.
    ///
    /// With `"data-"` this is the element's dataset.
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a Value)> + 'a {
        self.iter()
            .filter_map(move |(k, v)| k.strip_prefix(prefix).map(|rest| (rest, v)))
    }

    /// Returns the number of attributes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no attributes.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: AsRef<str>, V: Into<Value>> FromIterator<(K, V)> for AttributeBag {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut bag = AttributeBag::new();
        for (k, v) in iter {
            bag.set(k.as_ref(), v);
        }
        bag
    }
}

impl Serialize for AttributeBag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// Entries are read in document order so that later keys win, as with `set`.
struct AttributeBagVisitor;

impl<'de> Visitor<'de> for AttributeBagVisitor {
    type Value = AttributeBag;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map of attribute names to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<AttributeBag, A::Error> {
        let mut bag = AttributeBag::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            bag.set(&key, value);
        }
        Ok(bag)
    }
}

impl<'de> Deserialize<'de> for AttributeBag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(AttributeBagVisitor)
    }
}

/// A node in the element tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Tag name, compared case-insensitively.
    pub tag: String,
    #[serde(default, skip_serializing_if = "AttributeBag::is_empty")]
    pub attributes: AttributeBag,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Creates an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            ..Default::default()
        }
    }

    /// Adds an attribute.
    pub fn attr(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.attributes.set(key, value);
        self
    }

    /// Adds a child element.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Adds several child elements.
    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Returns `true` if this element has the given tag.
    pub fn is(&self, tag: &str) -> bool {
        self.tag.eq_ignore_ascii_case(tag)
    }

    /// The `id` attribute, if it is text.
    pub fn id(&self) -> Option<&str> {
        self.attributes.get("id").and_then(Value::as_str)
    }

    /// Header cells: every `th` inside a `thead`, in document order.
    pub fn header_cells(&self) -> Vec<&Element> {
        let mut cells = Vec::new();
        collect_header_cells(self, false, &mut cells);
        cells
    }

    /// Visits this element and its descendants in document order.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Element)) {
        visit(self);
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// Counts elements (this one included) for which `matches` holds.
    pub fn count(&self, matches: impl Fn(&Element) -> bool) -> usize {
        let mut n = 0;
        self.walk(&mut |el| {
            if matches(el) {
                n += 1;
            }
        });
        n
    }
}

fn collect_header_cells<'a>(el: &'a Element, in_head: bool, cells: &mut Vec<&'a Element>) {
    for child in &el.children {
        let in_head = in_head || child.is("thead");
        if in_head && child.is("th") {
            cells.push(child);
        }
        collect_header_cells(child, in_head, cells);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> Element {
        Element::new("table")
            .child(
                Element::new("thead").child(
                    Element::new("tr").children([
                        Element::new("th").attr("id", "a"),
                        Element::new("th").attr("id", "b"),
                    ]),
                ),
            )
            .child(
                Element::new("tbody")
                    .child(Element::new("tr").child(Element::new("th").attr("id", "body"))),
            )
    }

    #[test]
    fn keys_are_lower_cased_and_unique() {
        let mut bag = AttributeBag::new();
        assert_eq!(bag.set("data-DT_Paging", "true"), None);
        assert_eq!(bag.set("data-dt_paging", "false"), Some(Value::from("true")));
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.get("DATA-DT_PAGING"), Some(&Value::from("false")));
    }

    #[test]
    fn remove_returns_value() {
        let mut bag: AttributeBag = [("data-role", "datatable")].into_iter().collect();
        assert_eq!(bag.remove("data-role"), Some(Value::from("datatable")));
        assert!(bag.is_empty());
        assert_eq!(bag.remove("data-role"), None);
    }

    #[test]
    fn prefix_view_strips_prefix() {
        let bag: AttributeBag = [("class", "x"), ("data-dt_info", "false"), ("data-role", "t")]
            .into_iter()
            .collect();
        let data: Vec<_> = bag.with_prefix("data-").map(|(k, _)| k).collect();
        assert_eq!(data, ["dt_info", "role"]);
    }

    #[test]
    fn header_cells_only_under_thead() {
        let t = table();
        let ids: Vec<_> = t.header_cells().into_iter().filter_map(Element::id).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn walk_is_document_order() {
        let t = table();
        let mut tags = Vec::new();
        t.walk(&mut |el| tags.push(el.tag.clone()));
        assert_eq!(tags, ["table", "thead", "tr", "th", "th", "tbody", "tr", "th"]);
        assert_eq!(t.count(|el| el.is("TH")), 3);
    }

    #[test]
    fn deserializes_from_json() {
        let el: Element = serde_json::from_value(serde_json::json!({
            "tag": "table",
            "attributes": {"data-dt_pageLength": "25"},
            "children": [{"tag": "thead"}]
        }))
        .unwrap();
        assert_eq!(el.attributes.get("data-dt_pagelength"), Some(&Value::from("25")));
        assert_eq!(el.children.len(), 1);
    }

    #[test]
    fn deserialized_attributes_keep_source_order() {
        let el: Element = serde_json::from_str(
            r#"{"tag": "table", "attributes": {
                "id": "t",
                "data-dt_Paging": "true",
                "class": "display",
                "data-dt_paging": "false"
            }}"#,
        )
        .unwrap();
        let keys: Vec<_> = el.attributes.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["id", "data-dt_paging", "class"]);
        assert_eq!(el.attributes.get("data-dt_paging"), Some(&Value::from("false")));
    }
}
