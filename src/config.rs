use crate::dataset::DataPaths;
use crate::domain::constants::{
    DEFAULT_DATA_DIR, FUZZY_CUTOFF, MAX_SUGGESTIONS, REPORTED_SUGGESTIONS,
};
use anyhow::Context;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub lookup: LookupSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            lookup: LookupSettings::default(),
        }
    }
}

impl Settings {
    pub fn data_paths(&self) -> DataPaths {
        DataPaths::in_dir(&self.data_dir)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.lookup.validate()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LookupSettings {
    /// Minimum similarity for a brand to be offered as a suggestion.
    pub fuzzy_cutoff: f64,
    /// Candidates offered for disambiguation.
    pub max_suggestions: usize,
    /// Suggestions shown when a name stays unresolved.
    pub reported_suggestions: usize,
}

impl Default for LookupSettings {
    fn default() -> Self {
        Self {
            fuzzy_cutoff: FUZZY_CUTOFF,
            max_suggestions: MAX_SUGGESTIONS,
            reported_suggestions: REPORTED_SUGGESTIONS,
        }
    }
}

impl LookupSettings {
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(0.0..=1.0).contains(&self.fuzzy_cutoff) {
            anyhow::bail!(
                "fuzzy_cutoff must be between 0 and 1, got {}",
                self.fuzzy_cutoff
            );
        }
        if self.max_suggestions == 0 {
            anyhow::bail!("max_suggestions must be at least 1");
        }
        Ok(())
    }
}

fn default_config_path() -> Option<PathBuf> {
    let home = std::env::var("HOME").ok()?;
    Some(PathBuf::from(home).join(".config/drugcheck/config.toml"))
}

/// Defaults, then the config file, then the explicit data dir override.
///
/// An explicitly passed config file must exist; the per-user default is
/// optional.
pub fn load_settings(
    config: Option<&Path>,
    data_dir: Option<&Path>,
) -> anyhow::Result<Settings> {
    let path = match config {
        Some(p) => Some(p.to_path_buf()),
        None => default_config_path().filter(|p| p.exists()),
    };
    let mut settings = match path {
        Some(p) => {
            let raw = std::fs::read_to_string(&p)
                .with_context(|| format!("failed to read config {}", p.display()))?;
            tracing::debug!(path = %p.display(), "loaded config file");
            toml::from_str(&raw)
                .with_context(|| format!("invalid config {}", p.display()))?
        }
        None => Settings::default(),
    };
    if let Some(dir) = data_dir {
        settings.data_dir = dir.to_path_buf();
    }
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn partial_config_keeps_defaults() {
        let s: Settings = toml::from_str("[lookup]\nfuzzy_cutoff = 0.7\n").unwrap();
        assert_eq!(s.lookup.fuzzy_cutoff, 0.7);
        assert_eq!(s.lookup.max_suggestions, MAX_SUGGESTIONS);
        assert_eq!(s.data_dir, PathBuf::from(DEFAULT_DATA_DIR));
    }

    #[test]
    fn data_dir_override_wins_over_file() {
        let tmp = TempDir::new().unwrap();
        let cfg = tmp.path().join("config.toml");
        std::fs::write(&cfg, "data_dir = \"from-file\"\n").unwrap();

        let s = load_settings(Some(&cfg), None).unwrap();
        assert_eq!(s.data_dir, PathBuf::from("from-file"));

        let s = load_settings(Some(&cfg), Some(Path::new("from-cli"))).unwrap();
        assert_eq!(s.data_dir, PathBuf::from("from-cli"));
    }

    #[test]
    fn out_of_range_cutoff_is_rejected() {
        let tmp = TempDir::new().unwrap();
        let cfg = tmp.path().join("config.toml");
        std::fs::write(&cfg, "[lookup]\nfuzzy_cutoff = 1.5\n").unwrap();
        assert!(load_settings(Some(&cfg), None).is_err());
    }

    #[test]
    fn explicit_missing_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_settings(Some(&tmp.path().join("nope.toml")), None).is_err());
    }
}
