//! The read-only view of a document tree that paths are evaluated against.
//!
//! Any tree of objects, arrays and scalars can be queried once it implements
//! [`Document`]. Implementations are provided for [`serde_json::Value`] (built
//! with `preserve_order`, so members come back in insertion order) and for the
//! crate's own [`Value`].

use crate::value::Value;

/// Capabilities the evaluator needs from a document node.
///
/// Member and element iteration must follow document order; wildcard results
/// are reported in exactly that order.
pub trait Document {
    fn is_object(&self) -> bool;

    fn is_array(&self) -> bool;

    /// Member `key` of an object. `None` for a missing key or a non-object.
    fn member(&self, key: &str) -> Option<&Self>;

    /// Element `index` of an array. `None` when out of bounds or a non-array.
    fn element(&self, index: usize) -> Option<&Self>;

    /// Object members in document order. Empty for non-objects.
    fn members(&self) -> Box<dyn Iterator<Item = (&str, &Self)> + '_>;

    /// Array elements in document order. Empty for non-arrays.
    fn elements(&self) -> Box<dyn Iterator<Item = &Self> + '_>;

    /// Number of members or elements; zero for scalars.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Direct children: member values of an object or elements of an array.
    fn children(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        if self.is_object() {
            Box::new(self.members().map(|(_, v)| v))
        } else {
            self.elements()
        }
    }
}

impl Document for serde_json::Value {
    fn is_object(&self) -> bool {
        self.is_object()
    }

    fn is_array(&self) -> bool {
        self.is_array()
    }

    fn member(&self, key: &str) -> Option<&Self> {
        self.as_object()?.get(key)
    }

    fn element(&self, index: usize) -> Option<&Self> {
        self.as_array()?.get(index)
    }

    fn members(&self) -> Box<dyn Iterator<Item = (&str, &Self)> + '_> {
        match self {
            serde_json::Value::Object(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), v))),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        match self {
            serde_json::Value::Array(arr) => Box::new(arr.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn len(&self) -> usize {
        match self {
            serde_json::Value::Object(map) => map.len(),
            serde_json::Value::Array(arr) => arr.len(),
            _ => 0,
        }
    }
}

impl Document for Value {
    fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    fn member(&self, key: &str) -> Option<&Self> {
        match self {
            Value::Object(map) => map.get(key),
            _ => None,
        }
    }

    fn element(&self, index: usize) -> Option<&Self> {
        match self {
            Value::Array(arr) => arr.get(index),
            _ => None,
        }
    }

    fn members(&self) -> Box<dyn Iterator<Item = (&str, &Self)> + '_> {
        match self {
            Value::Object(map) => Box::new(map.iter().map(|(k, v)| (k.as_str(), v))),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &Self> + '_> {
        match self {
            Value::Array(arr) => Box::new(arr.iter()),
            _ => Box::new(std::iter::empty()),
        }
    }

    fn len(&self) -> usize {
        match self {
            Value::Object(map) => map.len(),
            Value::Array(arr) => arr.len(),
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serde_members_keep_insertion_order() {
        let doc = json!({"zeta": 1, "alpha": 2, "mid": 3});
        let keys: Vec<&str> = Document::members(&doc).map(|(k, _)| k).collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn scalars_have_no_children() {
        let doc = json!("text");
        assert!(Document::is_empty(&doc));
        assert_eq!(Document::children(&doc).count(), 0);
        assert!(Document::member(&doc, "len").is_none());
    }

    #[test]
    fn owned_value_matches_serde_view() {
        let source = json!({"b": [1, 2], "a": {"c": null}});
        let owned = Value::from(source.clone());

        assert_eq!(Document::len(&owned), Document::len(&source));
        assert_eq!(
            Document::member(&owned, "b").and_then(|b| b.element(1)),
            Some(&Value::Number(2.into()))
        );
        assert_eq!(
            Document::member(&owned, "a").and_then(|a| a.member("c")),
            Some(&Value::Null)
        );
        assert_eq!(serde_json::Value::from(owned), source);
    }
}
