//! Routes and their metadata bags.
//!
//! A [`Route`] is an externally owned descriptor of a navigable path. The
//! host router constructs it from routing tables; guards only read it. The
//! metadata bag is free-form JSON keyed by strings, so route configuration
//! can attach arbitrary per-route values without this crate knowing their
//! shapes in advance.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Descriptor of a navigable path with free-form per-route metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Route {
    /// The route's path as registered with the host router.
    pub path: String,
    /// Free-form key/value metadata supplied by route configuration.
    #[serde(default)]
    pub data: Map<String, Value>,
}

impl Route {
    /// Create a route with an empty metadata bag.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            data: Map::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_data_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Look up a metadata value, treating falsy values as unset.
    ///
    /// Route configuration formats conflate "key absent" with "key present
    /// but empty"; both read back as `None` here.
    pub fn data_value(&self, key: &str) -> Option<&Value> {
        self.data.get(key).filter(|value| is_truthy(value))
    }

    /// Look up a metadata value as a string, treating falsy values as unset.
    pub fn data_str(&self, key: &str) -> Option<&str> {
        self.data_value(key).and_then(Value::as_str)
    }
}

/// Truthiness of a metadata value.
///
/// `Null`, `false`, the empty string, and numeric zero are falsy; every
/// other value is truthy. Arrays and objects are truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::String(text) => !text.is_empty(),
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn data_value_skips_falsy_entries() {
        let route = Route::new("/settings")
            .with_data_entry("empty", "")
            .with_data_entry("off", false)
            .with_data_entry("zero", 0)
            .with_data_entry("none", Value::Null)
            .with_data_entry("flag", "beta");

        assert_eq!(route.data_value("absent"), None);
        assert_eq!(route.data_value("empty"), None);
        assert_eq!(route.data_value("off"), None);
        assert_eq!(route.data_value("zero"), None);
        assert_eq!(route.data_value("none"), None);
        assert_eq!(route.data_str("flag"), Some("beta"));
    }

    #[test]
    fn truthiness_matches_route_configuration_conventions() {
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("beta")));
        assert!(is_truthy(&json!(1)));
        assert!(is_truthy(&json!([])));
        assert!(is_truthy(&json!({})));
    }

    #[test]
    fn route_round_trips_through_serde() {
        let route = Route::new("/account").with_data_entry("flag", "beta");
        let json = match serde_json::to_string(&route) {
            Ok(json) => json,
            Err(err) => panic!("serialize failed: {err}"),
        };
        let back: Route = match serde_json::from_str(&json) {
            Ok(back) => back,
            Err(err) => panic!("deserialize failed: {err}"),
        };
        assert_eq!(route, back);
    }
}
