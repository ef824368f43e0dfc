use std::collections::BTreeMap;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Answer of `GET /environments`: environment name to its URL.
pub(crate) type EnvironmentListDto = BTreeMap<String, String>;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub(crate) struct SearchResultDto {
    pub(crate) total: u64,
    pub(crate) start: u64,
    pub(crate) rows: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub(crate) struct NodeDto {
    #[serde(deserialize_with = "lenient")]
    pub(crate) name: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub(crate) chef_environment: Option<String>,
    #[serde(deserialize_with = "lenient_run_list")]
    pub(crate) run_list: Vec<String>,
    #[serde(deserialize_with = "lenient")]
    pub(crate) automatic: Map<String, Value>,
    #[serde(rename = "override", deserialize_with = "lenient")]
    pub(crate) overrides: Map<String, Value>,
    #[serde(deserialize_with = "lenient")]
    pub(crate) normal: Map<String, Value>,
    #[serde(deserialize_with = "lenient")]
    pub(crate) default: Map<String, Value>,
}

/// A field of the wrong shape (or `null`) falls back to its default instead of failing the node.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;

    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Keeps the string entries of a run-list; anything else is ignored.
fn lenient_run_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(entries) => Ok(entries
            .into_iter()
            .filter_map(|entry| entry.as_str().map(|entry| entry.to_string()))
            .collect()),
        _ => Ok(Vec::new()),
    }
}

impl NodeDto {
    /// Merged attribute lookup, highest Chef precedence first.
    pub(crate) fn attribute(&self, key: &str) -> Option<&Value> {
        [&self.automatic, &self.overrides, &self.normal, &self.default]
            .into_iter()
            .filter_map(|bag| bag.get(key))
            .find(|value| !value.is_null())
    }

    pub(crate) fn nested_attribute(&self, key: &str, child: &str) -> Option<&Value> {
        [&self.automatic, &self.overrides, &self.normal, &self.default]
            .into_iter()
            .filter_map(|bag| bag.get(key).and_then(|value| value.get(child)))
            .find(|value| !value.is_null())
    }
}
