//! Environment entity - a named deployment context
//!
//! An environment holds a flat key/value mapping persisted next to the project
//! (`.azure/<name>/.env`). A few well-known keys carry identity: the
//! environment name, the subscription and the preferred location.

use std::collections::BTreeMap;

/// Key holding the environment name
pub const ENV_NAME_KEY: &str = "AZURE_ENV_NAME";
/// Key holding the subscription identifier
pub const SUBSCRIPTION_ID_KEY: &str = "AZURE_SUBSCRIPTION_ID";
/// Key holding the preferred location (used as the picker default)
pub const LOCATION_KEY: &str = "AZURE_LOCATION";

/// A named deployment target context
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    name: String,
    values: BTreeMap<String, String>,
}

impl Environment {
    /// Create an empty environment with its name recorded in the values.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut values = BTreeMap::new();
        values.insert(ENV_NAME_KEY.to_string(), name.clone());
        Self { name, values }
    }

    /// Rehydrate an environment from persisted values.
    pub fn with_values(name: impl Into<String>, values: BTreeMap<String, String>) -> Self {
        let mut env = Self::new(name);
        for (key, value) in values {
            if key != ENV_NAME_KEY {
                env.values.insert(key, value);
            }
        }
        env
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Subscription identifier, or an empty string when not configured
    pub fn subscription_id(&self) -> &str {
        self.get(SUBSCRIPTION_ID_KEY).unwrap_or("")
    }

    pub fn set_subscription_id(&mut self, subscription_id: impl Into<String>) {
        self.set(SUBSCRIPTION_ID_KEY, subscription_id);
    }

    /// Preferred location, if one was recorded
    pub fn location(&self) -> Option<&str> {
        self.get(LOCATION_KEY).filter(|l| !l.is_empty())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Merge a set of values; incoming values win on key collision.
    pub fn merge<I, K, V>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in entries {
            self.set(key, value);
        }
    }
}
