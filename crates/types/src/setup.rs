//! Ordered key-value configuration records.
//!
//! Setups drive the `\<name>Setup{...}` blocks of the LaTeX preamble and the
//! per-record `style = {...}` entries. Field order is significant and is kept
//! exactly as declared in the input.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum SetupValue {
    Bool(bool),
    Text(String),
    Nested(Setup),
}

impl From<bool> for SetupValue {
    fn from(b: bool) -> Self {
        SetupValue::Bool(b)
    }
}

impl From<&str> for SetupValue {
    fn from(s: &str) -> Self {
        SetupValue::Text(s.to_string())
    }
}

impl From<String> for SetupValue {
    fn from(s: String) -> Self {
        SetupValue::Text(s)
    }
}

impl From<f64> for SetupValue {
    fn from(n: f64) -> Self {
        SetupValue::Text(n.to_string())
    }
}

impl From<Setup> for SetupValue {
    fn from(s: Setup) -> Self {
        SetupValue::Nested(s)
    }
}

/// A configuration record whose fields are walked in declaration order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Setup {
    entries: Vec<(String, SetupValue)>,
}

impl Setup {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field. A repeated name keeps its first position and takes the new value.
    pub fn with(mut self, name: &str, value: impl Into<SetupValue>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: &str, value: impl Into<SetupValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| key == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name.to_string(), value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&SetupValue> {
        self.entries.iter().find(|(key, _)| key == name).map(|(_, v)| v)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &SetupValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Converts a JSON object. `null` fields are skipped; lists are rejected.
    pub fn from_map(map: &Map<String, Value>) -> Result<Self, String> {
        let mut setup = Setup::new();
        for (key, value) in map {
            let value = match value {
                Value::Null => continue,
                Value::Bool(b) => SetupValue::Bool(*b),
                Value::String(s) => SetupValue::Text(s.clone()),
                Value::Number(n) => SetupValue::Text(n.to_string()),
                Value::Object(inner) => SetupValue::Nested(Setup::from_map(inner)?),
                Value::Array(_) => {
                    return Err(format!("setup field '{}' cannot hold a list", key));
                }
            };
            setup.entries.push((key.clone(), value));
        }
        Ok(setup)
    }
}

impl<'de> Deserialize<'de> for Setup {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Setup::from_map(&map).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_declaration_order_is_kept() {
        let setup: Setup =
            serde_json::from_value(json!({"title": "a", "authors": "b", "year": "c"})).unwrap();
        let keys: Vec<&str> = setup.entries().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "authors", "year"]);
    }

    #[test]
    fn test_values_are_classified() {
        let setup: Setup = serde_json::from_value(json!({
            "swap": false,
            "portion_photo": 0.2,
            "inner": {"space": "2em"},
            "skipped": null
        }))
        .unwrap();
        assert_eq!(setup.len(), 3);
        assert_eq!(setup.get("swap"), Some(&SetupValue::Bool(false)));
        assert_eq!(setup.get("portion_photo"), Some(&SetupValue::Text("0.2".into())));
        assert_eq!(
            setup.get("inner"),
            Some(&SetupValue::Nested(Setup::new().with("space", "2em")))
        );
    }

    #[test]
    fn test_lists_are_rejected() {
        let result: Result<Setup, _> = serde_json::from_value(json!({"bad": [1, 2]}));
        assert!(result.is_err());
    }

    #[test]
    fn test_set_replaces_in_place() {
        let setup = Setup::new().with("a", "1").with("b", "2").with("a", "3");
        let pairs: Vec<_> = setup.entries().map(|(k, v)| (k.to_string(), v.clone())).collect();
        assert_eq!(
            pairs,
            vec![
                ("a".to_string(), SetupValue::Text("3".into())),
                ("b".to_string(), SetupValue::Text("2".into())),
            ]
        );
    }
}
