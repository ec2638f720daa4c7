//! Bound parameter values

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Mapping from parameter name to the value bound by a parser
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, Value>);

impl Parameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a value, replacing any previous one under the same name
    pub fn insert<S: Into<String>>(&mut self, name: S, value: Value) -> Option<Value> {
        self.0.insert(name.into(), value)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// String value of a parameter
    #[must_use]
    pub fn str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Numeric value of a parameter
    #[must_use]
    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Integer value of a parameter
    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Boolean value of a parameter
    #[must_use]
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }

    /// String items of a list parameter; non-string items are skipped
    #[must_use]
    pub fn list(&self, name: &str) -> Vec<&str> {
        self.get(name)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Numeric items of a list parameter; non-numeric items are skipped
    #[must_use]
    pub fn numbers(&self, name: &str) -> Vec<f64> {
        self.get(name)
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_f64).collect())
            .unwrap_or_default()
    }

    /// Deserialize every bound value into a typed struct
    pub fn deserialize_into<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::to_value(self).and_then(serde_json::from_value)
    }
}

impl<S: Into<String>> FromIterator<(S, Value)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (S, Value)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct AddArgs {
        a: f64,
        b: f64,
    }

    #[test]
    fn test_typed_getters() {
        let params: Parameters = [
            ("name", json!("world")),
            ("count", json!(3)),
            ("ratio", json!(0.5)),
            ("loud", json!(true)),
            ("items", json!(["x", "y"])),
        ]
        .into_iter()
        .collect();

        assert_eq!(params.str("name"), Some("world"));
        assert_eq!(params.integer("count"), Some(3));
        assert_eq!(params.number("ratio"), Some(0.5));
        assert_eq!(params.flag("loud"), Some(true));
        assert_eq!(params.list("items"), vec!["x", "y"]);
        assert_eq!(params.str("missing"), None);
        assert!(params.list("missing").is_empty());
    }

    #[test]
    fn test_numeric_list_and_iteration() {
        let mut params = Parameters::new();
        params.insert("values", json!([1.0, 2.5, "x"]));
        params.insert("op", json!("sum"));

        assert!(params.contains("values"));
        assert!(!params.contains("missing"));
        assert_eq!(params.numbers("values"), vec![1.0, 2.5]);
        assert!(params.numbers("op").is_empty());

        let names: Vec<&str> = params.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["op", "values"]);
    }

    #[test]
    fn test_deserialize_into_struct() {
        let params: Parameters = [("a", json!(2.0)), ("b", json!(3.5))].into_iter().collect();
        let args: AddArgs = params.deserialize_into().unwrap();
        assert_eq!(args, AddArgs { a: 2.0, b: 3.5 });
    }

    #[test]
    fn test_deserialize_reports_missing_field() {
        let params: Parameters = [("a", json!(2.0))].into_iter().collect();
        assert!(params.deserialize_into::<AddArgs>().is_err());
    }
}
