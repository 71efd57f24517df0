use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Insertion-ordered map of named attributes holding JSON-like values.
///
/// Backs the geolocation adapters, which fill it once from a decoded response
/// body, but is usable on its own for accumulating facts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeStore {
    attributes: IndexMap<String, Value>,
}

impl AttributeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a JSON object into a store, keeping the key order of the body.
    pub fn from_json_str(body: &str) -> serde_json::Result<Self> {
        serde_json::from_str(body)
    }

    /// Set `key` to `value`, overwriting any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Replace the whole contents.
    pub fn set_all(&mut self, attributes: IndexMap<String, Value>) {
        self.attributes = attributes;
    }

    /// Add the entries of `attributes` whose keys are not present yet.
    /// Existing keys keep their value.
    pub fn merge_existing(&mut self, attributes: impl IntoIterator<Item = (String, Value)>) {
        for (key, value) in attributes {
            self.attributes.entry(key).or_insert(value);
        }
    }

    /// Append `value` to the list stored at `key`.
    ///
    /// An absent or `null` attribute starts a new one-element list. Any other
    /// non-list value is left untouched and reported as [`Error::NotAList`].
    pub fn append(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        match self.attributes.get_mut(key) {
            Some(Value::Array(items)) => items.push(value.into()),
            Some(slot) if slot.is_null() => *slot = Value::Array(vec![value.into()]),
            Some(_) => return Err(not_a_list(key)),
            None => {
                self.attributes
                    .insert(key.to_string(), Value::Array(vec![value.into()]));
            }
        }
        Ok(())
    }

    /// Remove every element equal to `value` from the list at `key`; the
    /// remaining elements keep their order. An absent key is left absent.
    pub fn remove_value(&mut self, key: &str, value: &Value) -> Result<()> {
        match self.attributes.get_mut(key) {
            Some(Value::Array(items)) => {
                items.retain(|item| item != value);
                Ok(())
            }
            Some(_) => Err(not_a_list(key)),
            None => Ok(()),
        }
    }

    pub fn all(&self) -> &IndexMap<String, Value> {
        &self.attributes
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Two-level lookup. `subkey` addresses an object member, or an array
    /// element when it parses as an index.
    pub fn get_nested(&self, key: &str, subkey: &str) -> Option<&Value> {
        match self.attributes.get(key)? {
            Value::Object(map) => map.get(subkey),
            Value::Array(items) => items.get(subkey.parse::<usize>().ok()?),
            _ => None,
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, Value> {
        self.attributes
    }
}

fn not_a_list(key: &str) -> Error {
    Error::NotAList {
        key: key.to_string(),
    }
}

impl FromIterator<(String, Value)> for AttributeStore {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            attributes: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AttributeStore {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn pairs(v: Value) -> Vec<(String, Value)> {
        match v {
            Value::Object(map) => map.into_iter().collect(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn set_overwrites() {
        let mut store = AttributeStore::new();
        store.set("a", 1);
        store.set("a", "one");
        assert_eq!(store.get("a"), Some(&json!("one")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn merge_keeps_existing_keys() {
        let mut store = AttributeStore::new();
        store.set("a", 1);
        store.merge_existing(pairs(json!({"a": 2, "b": 3})));
        assert_eq!(store.get("a"), Some(&json!(1)));
        assert_eq!(store.get("b"), Some(&json!(3)));
    }

    #[test]
    fn set_all_replaces_contents() {
        let mut store = AttributeStore::new();
        store.set("old", true);
        store.set_all(pairs(json!({"new": 1})).into_iter().collect());
        assert!(!store.has("old"));
        assert!(store.has("new"));
    }

    #[test]
    fn append_to_absent_key_creates_list() {
        let mut store = AttributeStore::new();
        store.append("list", "x").unwrap();
        assert_eq!(store.get("list"), Some(&json!(["x"])));
        store.append("list", "y").unwrap();
        assert_eq!(store.get("list"), Some(&json!(["x", "y"])));
    }

    #[test]
    fn append_to_null_creates_list() {
        let mut store = AttributeStore::new();
        store.set("list", Value::Null);
        store.append("list", 1).unwrap();
        assert_eq!(store.get("list"), Some(&json!([1])));
    }

    #[test]
    fn append_to_scalar_is_rejected() {
        let mut store = AttributeStore::new();
        store.set("name", "value");
        let err = store.append("name", "x").unwrap_err();
        assert!(matches!(err, Error::NotAList { ref key } if key == "name"));
        assert_eq!(store.get("name"), Some(&json!("value")));
    }

    #[test]
    fn remove_value_drops_all_equal_items() {
        let mut store = AttributeStore::new();
        store.set("list", json!(["x", "y", "x"]));
        store.remove_value("list", &json!("x")).unwrap();
        assert_eq!(store.get("list"), Some(&json!(["y"])));
    }

    #[test]
    fn remove_value_on_absent_key_is_noop() {
        let mut store = AttributeStore::new();
        store.remove_value("list", &json!("x")).unwrap();
        assert!(!store.has("list"));
    }

    #[test]
    fn remove_value_on_scalar_is_rejected() {
        let mut store = AttributeStore::new();
        store.set("n", 5);
        assert!(store.remove_value("n", &json!(5)).is_err());
    }

    #[test]
    fn nested_lookup() {
        let store = AttributeStore::from_json_str(
            r#"{"location": {"country": {"code": "FR"}}, "tags": ["a", "b"], "ip": "1.1.1.1"}"#,
        )
        .unwrap();
        assert_eq!(
            store.get_nested("location", "country"),
            Some(&json!({"code": "FR"}))
        );
        assert_eq!(store.get_nested("tags", "1"), Some(&json!("b")));
        assert_eq!(store.get_nested("tags", "9"), None);
        assert_eq!(store.get_nested("ip", "x"), None);
        assert_eq!(store.get_nested("missing", "x"), None);
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn json_order_is_preserved() {
        let store = AttributeStore::from_json_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let keys: Vec<&String> = store.all().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
        let iterated: Vec<&String> = (&store).into_iter().map(|(k, _)| k).collect();
        assert_eq!(iterated, keys);
    }

    #[test]
    fn non_object_json_is_rejected() {
        assert!(AttributeStore::from_json_str("[1, 2]").is_err());
    }
}
