use std::fmt;
use serde::de::Error;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub(crate) const UNKNOWN: &str = "Unknown";

/// A collected value, or the `Unknown` placeholder when the server had none.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Fact<T> {
    Known(T),
    Unknown,
}

impl<T> Fact<T> {
    pub(crate) fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Fact<U> {
        match self {
            Fact::Known(value) => Fact::Known(f(value)),
            Fact::Unknown => Fact::Unknown,
        }
    }
}

impl<T> Default for Fact<T> {
    fn default() -> Self {
        Fact::Unknown
    }
}

impl<T> From<Option<T>> for Fact<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Fact::Known(value),
            None => Fact::Unknown,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Fact<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fact::Known(value) => write!(f, "{}", value),
            Fact::Unknown => write!(f, "{}", UNKNOWN),
        }
    }
}

impl<T: Serialize> Serialize for Fact<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Fact::Known(value) => value.serialize(serializer),
            Fact::Unknown => serializer.serialize_str(UNKNOWN),
        }
    }
}

struct Placeholder;

impl<'de> Deserialize<'de> for Placeholder {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value == UNKNOWN {
            Ok(Placeholder)
        } else {
            Err(D::Error::custom("not a placeholder"))
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FactRepr<T> {
    Placeholder(Placeholder),
    Value(T),
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Fact<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match FactRepr::<T>::deserialize(deserializer)? {
            FactRepr::Placeholder(_) => Ok(Fact::Unknown),
            FactRepr::Value(value) => Ok(Fact::Known(value)),
        }
    }
}
