//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DeployError, DeployResult};

use super::env_validator::{levenshtein, EnvVarValidator};
use super::types::{Config, Verbosity};

/// Config file looked up in the project directory
pub const PROJECT_CONFIG_FILE: &str = "robodeploy.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Configuration plus where it came from.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: Config,
    /// File that was read, `None` when running on defaults
    pub path: Option<PathBuf>,
    pub warnings: Vec<ConfigWarning>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DeployResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let mut config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DeployError::ConfigParse {
        file: path.to_path_buf(),
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
                line: find_line_number(&content, &path_str),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    // A relative source in a file is relative to that file.
    if let Some(source) = config.source.as_mut() {
        if source.is_relative() {
            if let Some(dir) = path.parent() {
                *source = dir.join(&*source);
            }
        }
    }

    Ok((config, warnings))
}

/// Load from an explicit file, the project config, the user config, or defaults.
///
/// An explicit file must exist. Project and user files are optional.
/// Environment overrides are applied on top of whatever was found.
pub fn load_layered(explicit: Option<&Path>, project_root: Option<&Path>) -> DeployResult<LoadedConfig> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => project_root
            .map(|root| root.join(PROJECT_CONFIG_FILE))
            .filter(|p| p.is_file())
            .or_else(|| user_config_path().filter(|p| p.is_file())),
    };

    let (config, warnings) = match &candidate {
        Some(path) => load_with_warnings(path).map_err(|e| match e {
            DeployError::Io(source) => DeployError::ConfigParse {
                file: path.clone(),
                message: source.to_string(),
            },
            other => other,
        })?,
        None => (Config::default(), Vec::new()),
    };

    Ok(LoadedConfig {
        config: with_env_overrides(config),
        path: candidate,
        warnings,
    })
}

/// Apply environment variable overrides (ROBODEPLOY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply environment overrides from an arbitrary lookup (for testing)
pub fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    if let Some(user) = get_env("ROBODEPLOY_USER") {
        config.remote.user = user;
    }
    if let Some(host) = get_env("ROBODEPLOY_HOST") {
        config.remote.host = host;
    }
    if let Some(path) = get_env("ROBODEPLOY_REMOTE_PATH") {
        config.remote.path = path;
    }

    if let Some(verbosity) = get_env("ROBODEPLOY_VERBOSITY") {
        let validator = EnvVarValidator::new("ROBODEPLOY_VERBOSITY", Verbosity::VALID);
        config.output.verbosity = validator.parse(&verbosity, Verbosity::parse, Verbosity::Normal);
    }

    config
}

/// `~/.config/robodeploy/config.toml` (or the platform equivalent)
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("robodeploy").join("config.toml"))
}

/// Line of `key = ...` (or of a `[table]` header) for a dotted key path.
fn find_line_number(content: &str, key_path: &str) -> Option<usize> {
    let (section, key) = key_path.rsplit_once('.').unwrap_or(("", key_path));
    let mut current = String::new();

    for (i, line) in content.lines().enumerate() {
        let trimmed = line.trim();
        if let Some(header) = trimmed.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            current = header.trim().to_string();
            if current == key_path {
                return Some(i + 1);
            }
            continue;
        }

        if current != section {
            continue;
        }
        let is_assignment = trimmed
            .strip_prefix(key)
            .is_some_and(|rest| rest.trim_start().starts_with('='));
        if is_assignment {
            return Some(i + 1);
        }
    }

    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "source",
        "remote",
        "user",
        "host",
        "path",
        "build",
        "script",
        "output",
        "verbosity",
        "color",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}
