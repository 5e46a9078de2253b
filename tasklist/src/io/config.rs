//! Host configuration stored in `tasklist.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::theme::ThemeMode;

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tasklist.toml";

/// Host configuration (TOML).
///
/// Intended to be edited by humans. Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TasklistConfig {
    /// Theme the session starts with.
    pub theme: ThemeMode,

    /// Start with the six sample tasks instead of an empty list.
    pub seed_sample_tasks: bool,

    /// Emit ANSI colors when rendering text.
    pub color: bool,

    /// Text shown in place of the list when there are no tasks.
    pub empty_placeholder: String,

    /// Hint shown next to the input prompt.
    pub input_placeholder: String,
}

impl Default for TasklistConfig {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            seed_sample_tasks: false,
            color: true,
            empty_placeholder: "No tasks yet. Add one above!".to_string(),
            input_placeholder: "Add a new task".to_string(),
        }
    }
}

impl TasklistConfig {
    pub fn validate(&self) -> Result<()> {
        if self.empty_placeholder.trim().is_empty() {
            return Err(anyhow!("empty_placeholder must not be blank"));
        }
        if self.input_placeholder.trim().is_empty() {
            return Err(anyhow!("input_placeholder must not be blank"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `TasklistConfig::default()`.
pub fn load_config(path: &Path) -> Result<TasklistConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config missing, using defaults");
        let cfg = TasklistConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TasklistConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    debug!(path = %path.display(), theme = %cfg.theme, "config loaded");
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &TasklistConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create directory {}", parent.display()))?;
    }
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
