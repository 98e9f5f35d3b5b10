//! Dotenv Environment Store
//!
//! Implements the EnvironmentStore port. Each environment is a `.env` file of
//! `KEY="value"` lines under `.azure/<name>/`; the default environment is
//! recorded in `.azure/config.json`.

use std::collections::BTreeMap;
use std::fs;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::entities::Environment;
use crate::domain::ports::EnvironmentStore;
use crate::domain::value_objects::ProjectLayout;
use crate::error::{ProvisionError, ProvisionResult};
use crate::infrastructure::fs::atomic_write;

const CONFIG_VERSION: u32 = 1;

/// `.azure/config.json`
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StateConfig {
    #[serde(default)]
    version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_environment: Option<String>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

/// File-backed environment store rooted at a project layout
#[derive(Debug, Clone)]
pub struct DotenvEnvironmentStore {
    layout: ProjectLayout,
}

impl DotenvEnvironmentStore {
    pub fn new(layout: ProjectLayout) -> Self {
        Self { layout }
    }

    fn read_config(&self) -> ProvisionResult<StateConfig> {
        match fs::read_to_string(self.layout.config_file()) {
            Ok(raw) => Ok(serde_json::from_str(&raw)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StateConfig::default()),
            Err(e) => Err(e.into()),
        }
    }
}

impl EnvironmentStore for DotenvEnvironmentStore {
    fn load_or_init(&self, name: &str) -> ProvisionResult<Environment> {
        let path = self.layout.environment_file(name);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Environment::with_values(name, parse_dotenv(&raw))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(environment = name, "initializing new environment");
                Ok(Environment::new(name))
            }
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, name: &str) -> bool {
        self.layout.environment_file(name).is_file()
    }

    fn save(&self, env: &Environment) -> ProvisionResult<()> {
        let path = self.layout.environment_file(env.name());
        atomic_write(&path, render_dotenv(env.values()).as_bytes()).map_err(|e| {
            ProvisionError::EnvironmentPersist(format!("{}: {}", path.display(), e))
        })?;
        tracing::debug!(path = %path.display(), keys = env.values().len(), "saved environment");
        Ok(())
    }

    fn default_environment(&self) -> ProvisionResult<Option<String>> {
        Ok(self
            .read_config()?
            .default_environment
            .filter(|name| !name.is_empty()))
    }

    fn set_default(&self, name: &str) -> ProvisionResult<()> {
        let mut config = self.read_config()?;
        config.version = CONFIG_VERSION;
        config.default_environment = Some(name.to_string());

        let path = self.layout.config_file();
        let content = serde_json::to_string_pretty(&config)?;
        atomic_write(&path, content.as_bytes()).map_err(|e| {
            ProvisionError::EnvironmentPersist(format!("{}: {}", path.display(), e))
        })
    }
}

/// Parse `.env` content. Blank lines and `#` comments are skipped; values
/// may be bare, single-quoted (literal) or double-quoted (with escapes).
fn parse_dotenv(content: &str) -> BTreeMap<String, String> {
    let mut values = BTreeMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, raw)) = line.split_once('=') else {
            tracing::warn!(line, "ignoring malformed .env line");
            continue;
        };

        let raw = raw.trim();
        let value = if let Some(inner) = raw
            .strip_prefix('"')
            .and_then(|r| r.strip_suffix('"'))
        {
            unescape(inner)
        } else if let Some(inner) = raw
            .strip_prefix('\'')
            .and_then(|r| r.strip_suffix('\''))
        {
            inner.to_string()
        } else {
            raw.to_string()
        };
        values.insert(key.trim().to_string(), value);
    }

    values
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}

/// Render values as sorted `KEY="value"` lines.
fn render_dotenv(values: &BTreeMap<String, String>) -> String {
    let mut out = String::new();
    for (key, value) in values {
        out.push_str(key);
        out.push_str("=\"");
        for c in value.chars() {
            match c {
                '"' => out.push_str("\\\""),
                '\\' => out.push_str("\\\\"),
                '\n' => out.push_str("\\n"),
                '\r' => out.push_str("\\r"),
                other => out.push(other),
            }
        }
        out.push_str("\"\n");
    }
    out
}
