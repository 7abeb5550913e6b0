mod schema;
mod validation;

pub use schema::{Config, EntryConfig, EntryValue};
pub use validation::{duplicate_subjects, validate_config};

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use crate::subjects::{CsvSubjects, SubjectSource};

/// Get the config directory path (~/.config/gradebook/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("gradebook"))
}

/// Get the default config file path (~/.config/gradebook/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses default path (~/.config/gradebook/config.yaml)
///
/// A relative `subjects_file` is resolved against the config file's directory.
///
/// # Errors
///
/// Returns an error if:
/// - The config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => p,
        None => get_config_path()?,
    };

    if !config_path.exists() {
        anyhow::bail!(
            "Config file not found at {}. Create ~/.config/gradebook/config.yaml",
            config_path.display()
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    let mut config: Config = serde_saphyr::from_str(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))?;

    if let (Some(file), Some(dir)) = (config.subjects_file.as_mut(), config_path.parent()) {
        *file = resolve_path(dir, file.as_path());
    }

    tracing::debug!(
        "Loaded config from {} ({} entries)",
        config_path.display(),
        config.entries.len()
    );
    Ok(config)
}

/// The subject source a validated config points at.
pub fn subject_source(config: &Config) -> Box<dyn SubjectSource> {
    match (&config.subjects_file, &config.subjects) {
        (Some(file), _) => {
            let mut source = CsvSubjects::new(file);
            if let Some(column) = &config.subject_column {
                source = source.with_column(column);
            }
            Box::new(source)
        }
        (None, subjects) => Box::new(subjects.clone().unwrap_or_default()),
    }
}

/// Join `path` onto `base` unless it is already absolute.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base.join(path)
    } else {
        path.to_path_buf()
    }
}
