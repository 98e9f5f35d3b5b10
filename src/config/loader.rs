//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ProvisionError, ProvisionResult};

use super::types::{Config, PROJECT_CONFIG_FILE};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ProvisionResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ProvisionError::Config {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults.
///
/// The first readable file wins; a file that fails to parse is logged and skipped.
pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
    let user_config = dirs::config_dir().map(|dir| dir.join("provisio/config.toml"));
    let project_config = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));

    for candidate in [project_config, user_config].into_iter().flatten() {
        if !candidate.exists() {
            continue;
        }
        match load_with_warnings(&candidate) {
            Ok((config, warnings)) => {
                tracing::debug!(path = %candidate.display(), "loaded config");
                return (with_env_overrides(config), warnings);
            }
            Err(e) => tracing::warn!("ignoring config: {}", e),
        }
    }

    (with_env_overrides(Config::default()), Vec::new())
}

/// Apply environment variable overrides (PROVISIO_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_overrides<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // PROVISIO_POLL_INTERVAL_SECS
    if let Some(value) = lookup("PROVISIO_POLL_INTERVAL_SECS") {
        match value.trim().parse::<u64>() {
            Ok(secs) => config.provision.poll_interval_secs = secs,
            Err(_) => tracing::warn!(%value, "ignoring invalid PROVISIO_POLL_INTERVAL_SECS"),
        }
    }

    // PROVISIO_AZ_CLI
    if let Some(cli) = lookup("PROVISIO_AZ_CLI") {
        if !cli.trim().is_empty() {
            config.azure.cli = cli;
        }
    }

    // PROVISIO_NO_PROMPT
    if let Some(value) = lookup("PROVISIO_NO_PROMPT") {
        config.provision.no_prompt = is_truthy(&value);
    }

    config
}

fn is_truthy(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    !(value.is_empty() || value == "0" || value == "false" || value == "no")
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "provision",
        "poll_interval_secs",
        "module",
        "no_prompt",
        "azure",
        "cli",
        "portal_url",
        "output",
        "color",
        "animation",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
