//! Response tree normalization.
//!
//! Converts a [`RawNode`] tree into [`CanonicalValue`]s. Rules are applied per
//! node in priority order:
//!
//! 1. A node with a grouping wrapper child (`array` holding at least one
//!    `array` item) becomes a `List`, one record per item, in document order.
//! 2. A node with any element children becomes a `Record` keyed by the
//!    snake-cased child names. A repeated name keeps the last occurrence.
//!    Text mixed in with the children is kept under [`TEXT_FIELD`].
//! 3. A childless node with empty or absent text becomes `Null`.
//! 4. Anything else becomes `Text` with the raw string.
//!
//! The rules are total: every node maps to exactly one outcome. An `array`
//! child without items is an ordinary field. The normalizer knows nothing
//! about catalog schemas and never parses numbers or dates.

pub mod field_name;

pub use field_name::snake_case;

use tracing::warn;

use crate::error::ShapeError;
use crate::model::{CanonicalRecord, CanonicalValue, RawNode};

/// Field holding a node's own text when it also has element children, or
/// when a grouped item carries text but no fields.
pub const TEXT_FIELD: &str = "text";

/// Normalizes one node.
pub fn normalize(node: RawNode) -> CanonicalValue {
    if node.children.iter().any(RawNode::is_wrapper) {
        return CanonicalValue::List(collect_grouped(node));
    }

    if !node.children.is_empty() {
        return CanonicalValue::Record(record_from_children(node.text, node.children));
    }

    match node.text {
        Some(text) if !text.is_empty() => CanonicalValue::Text(text),
        _ => CanonicalValue::Null,
    }
}

/// Normalizes a node that must describe a collection of records.
///
/// Every `array` child counts as a wrapper here, so `<data><array/></data>`
/// is an empty collection, and so is a `Null` node (no children, no text).
pub fn normalize_collection(node: RawNode) -> Result<Vec<CanonicalRecord>, ShapeError> {
    if node.children.iter().any(RawNode::is_group) {
        return Ok(collect_grouped(node));
    }
    match normalize(node) {
        CanonicalValue::Null => Ok(Vec::new()),
        other => Err(ShapeError::NotACollection { found: other.kind() }),
    }
}

/// Normalizes one grouped item as a record.
///
/// Items without element children become `{text: Text | Null}`.
pub fn normalize_record(node: RawNode) -> CanonicalRecord {
    if node.children.is_empty() {
        let value = match node.text {
            Some(text) if !text.is_empty() => CanonicalValue::Text(text),
            _ => CanonicalValue::Null,
        };
        let mut record = CanonicalRecord::new();
        record.insert(TEXT_FIELD, value);
        return record;
    }
    record_from_children(node.text, node.children)
}

fn record_from_children(text: Option<String>, children: Vec<RawNode>) -> CanonicalRecord {
    let mut record = CanonicalRecord::new();
    if let Some(text) = text.filter(|t| !t.is_empty()) {
        record.insert(TEXT_FIELD, CanonicalValue::Text(text));
    }
    for child in children {
        let name = snake_case(&child.name);
        record.insert(name, normalize(child));
    }
    record
}

fn collect_grouped(node: RawNode) -> Vec<CanonicalRecord> {
    let name = node.name;
    let mut records = Vec::new();
    let mut ignored = usize::from(node.text.is_some_and(|t| !t.is_empty()));

    for child in node.children {
        if !child.is_group() {
            ignored += 1;
            continue;
        }
        if child.text().is_some() {
            ignored += 1;
        }
        for item in child.children {
            if item.is_group() {
                records.push(normalize_record(item));
            } else {
                ignored += 1;
            }
        }
    }

    if ignored > 0 {
        warn!(element = %name, ignored, "ignoring content beside grouped items");
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(fields: &[(&str, &str)]) -> RawNode {
        RawNode::item(fields.iter().map(|(k, v)| RawNode::leaf(*k, *v)))
    }

    #[test]
    fn test_leaf_text() {
        assert_eq!(normalize(RawNode::leaf("n", "5")), CanonicalValue::from("5"));
    }

    #[test]
    fn test_leaf_empty_is_null() {
        assert_eq!(normalize(RawNode::leaf("n", "")), CanonicalValue::Null);
        assert_eq!(normalize(RawNode::new("n")), CanonicalValue::Null);
    }

    #[test]
    fn test_text_is_not_trimmed_or_parsed() {
        assert_eq!(normalize(RawNode::leaf("n", " 007 ")), CanonicalValue::from(" 007 "));
    }

    #[test]
    fn test_nested_record() {
        let node = RawNode::new("r")
            .with_child(RawNode::leaf("a", "1"))
            .with_child(RawNode::leaf("b", "2"));
        let expected = CanonicalRecord::new().with("a", "1").with("b", "2");
        assert_eq!(normalize(node), CanonicalValue::Record(expected));
    }

    #[test]
    fn test_field_names_are_snake_cased() {
        let node = RawNode::new("r")
            .with_child(RawNode::leaf("articleId", "1"))
            .with_child(RawNode::leaf("BrandName", "FEBI"));
        let value = normalize(node);
        let record = value.as_record().unwrap();
        assert_eq!(record.text("article_id"), Some("1"));
        assert_eq!(record.text("brand_name"), Some("FEBI"));
    }

    #[test]
    fn test_repeated_collection() {
        let node = RawNode::collection(
            "items",
            [item(&[("id", "1")]), item(&[("id", "2")]), item(&[("id", "3")])],
        );
        let value = normalize(node);
        let list = value.as_list().unwrap();
        assert_eq!(list.len(), 3);
        let ids: Vec<_> = list.iter().filter_map(|r| r.text("id")).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_collection_of_nested_collections() {
        let inner = RawNode::collection("oenNumbers", [item(&[("brandName", "BMW"), ("oeNumber", "1")])]);
        let node = RawNode::collection("data", [RawNode::item([RawNode::leaf("articleId", "9"), inner])]);
        let records = normalize_collection(node).unwrap();
        assert_eq!(records.len(), 1);
        let oe = records[0].list("oen_numbers");
        assert_eq!(oe.len(), 1);
        assert_eq!(oe[0].text("brand_name"), Some("BMW"));
    }

    #[test]
    fn test_array_without_items_is_a_field() {
        let node = RawNode::new("codes").with_child(RawNode::leaf("array", "X1"));
        let expected = CanonicalRecord::new().with("array", "X1");
        assert_eq!(normalize(node), CanonicalValue::Record(expected));

        let node = RawNode::new("oenNumbers").with_child(RawNode::new("array"));
        let expected = CanonicalRecord::new().with("array", CanonicalValue::Null);
        assert_eq!(normalize(node), CanonicalValue::Record(expected));
    }

    #[test]
    fn test_mixed_text_is_kept() {
        let node = RawNode::new("r")
            .with_text("IMPORTANT")
            .with_child(RawNode::leaf("a", "1"));
        let expected = CanonicalRecord::new().with(TEXT_FIELD, "IMPORTANT").with("a", "1");
        assert_eq!(normalize(node), CanonicalValue::Record(expected));
    }

    #[test]
    fn test_mixed_text_in_grouped_item_is_kept() {
        let node = RawNode::collection("items", [item(&[("id", "1")]).with_text("note")]);
        let value = normalize(node);
        let list = value.as_list().unwrap();
        assert_eq!(list[0].text(TEXT_FIELD), Some("note"));
        assert_eq!(list[0].text("id"), Some("1"));
    }

    #[test]
    fn test_items_across_several_wrappers_keep_document_order() {
        let node = RawNode::new("items")
            .with_child(RawNode::new("array").with_child(item(&[("id", "1")])))
            .with_child(RawNode::new("array").with_child(item(&[("id", "2")])));
        let value = normalize(node);
        let ids: Vec<_> = value.as_list().unwrap().iter().filter_map(|r| r.text("id")).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_wrapper_takes_priority_over_siblings() {
        let node = RawNode::new("items")
            .with_child(RawNode::leaf("count", "1"))
            .with_child(RawNode::new("array").with_child(item(&[("id", "1")])));
        let value = normalize(node);
        assert_eq!(value.as_list().map(<[_]>::len), Some(1));
    }

    #[test]
    fn test_text_only_item_becomes_text_record() {
        let node = RawNode::new("codes")
            .with_child(RawNode::new("array").with_child(RawNode::leaf("array", "X1")).with_child(RawNode::new("array")));
        let value = normalize(node);
        let list = value.as_list().unwrap();
        assert_eq!(list[0].text(TEXT_FIELD), Some("X1"));
        assert_eq!(list[1].get(TEXT_FIELD), Some(&CanonicalValue::Null));
    }

    // Observed behavior of the service encoding, kept as-is: when a record
    // repeats a field name only the last occurrence survives.
    #[test]
    fn test_duplicate_field_names_last_write_wins() {
        let node = RawNode::new("r")
            .with_child(RawNode::leaf("attrValue", "first"))
            .with_child(RawNode::leaf("attr_value", "second"));
        let value = normalize(node);
        let record = value.as_record().unwrap();
        assert_eq!(record.len(), 1);
        assert_eq!(record.text("attr_value"), Some("second"));
    }

    #[test]
    fn test_normalize_collection_rejects_records() {
        let node = RawNode::new("data").with_child(RawNode::leaf("status", "500"));
        assert_eq!(
            normalize_collection(node),
            Err(ShapeError::NotACollection { found: crate::model::ValueKind::Record })
        );
        assert_eq!(normalize_collection(RawNode::new("data")), Ok(vec![]));
    }

    #[test]
    fn test_normalize_collection_accepts_empty_wrapper() {
        let node = RawNode::new("data").with_child(RawNode::new("array"));
        assert_eq!(normalize_collection(node), Ok(vec![]));
    }

    #[test]
    fn test_normalize_collection_keeps_only_grouped_items() {
        let node = RawNode::new("data").with_child(
            RawNode::new("array")
                .with_child(item(&[("id", "1")]))
                .with_child(RawNode::leaf("status", "200")),
        );
        let records = normalize_collection(node).unwrap();
        assert_eq!(records, vec![CanonicalRecord::new().with("id", "1")]);
    }

    fn arb_node() -> impl Strategy<Value = RawNode> {
        let name = || "[a-zA-Z]{1,6}|array";
        let text = || proptest::option::of("[a-z0-9]{0,3}");
        let leaf = (name(), text()).prop_map(|(name, text)| RawNode { name, text, children: Vec::new() });
        leaf.prop_recursive(4, 32, 4, move |inner| {
            (name(), text(), proptest::collection::vec(inner, 0..4))
                .prop_map(|(name, text, children)| RawNode { name, text, children })
        })
    }

    proptest! {
        #[test]
        fn prop_outcome_matches_rules(node in arb_node()) {
            let has_wrapper = node.children.iter().any(RawNode::is_wrapper);
            let has_children = !node.children.is_empty();
            let has_text = node.text().is_some();
            let value = normalize(node);
            match value {
                CanonicalValue::List(_) => prop_assert!(has_wrapper),
                CanonicalValue::Record(record) => {
                    prop_assert!(has_children && !has_wrapper);
                    prop_assert!(!has_text || record.get(TEXT_FIELD).is_some());
                }
                CanonicalValue::Text(_) => prop_assert!(!has_children && has_text),
                CanonicalValue::Null => prop_assert!(!has_children && !has_text),
            }
        }

        #[test]
        fn prop_list_length_counts_grouped_items(node in arb_node()) {
            let expected: usize = node
                .children
                .iter()
                .filter(|c| c.is_group())
                .map(|c| c.children.iter().filter(|i| i.is_group()).count())
                .sum();
            if let CanonicalValue::List(records) = normalize(node) {
                prop_assert_eq!(records.len(), expected);
            }
        }
    }
}
