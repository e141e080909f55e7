use crate::constants::output;
use crate::preset::Preset;
use crate::theme::ThemeSet;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_sizes")]
    pub sizes: Vec<u32>,
    #[serde(default)]
    pub themes: ThemeSet,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_sizes() -> Vec<u32> {
    output::DEFAULT_SIZES.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            output_dir: default_output_dir(),
            sizes: default_sizes(),
            themes: ThemeSet::default(),
        }
    }
}

impl Config {
    /// Read and validate a YAML config file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        config.validate()?;

        info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Use `path` if given, else `ghost-icons.yaml` in the working directory
    /// when it exists, else the built-in defaults. Nothing is written.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        Self::load_or_default_in(path, Path::new("."))
    }

    /// Same as [`Config::load_or_default`], looking for the fallback file in `dir`
    pub fn load_or_default_in(path: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        let local = dir.join(output::DEFAULT_CONFIG_FILE);
        if local.exists() {
            return Self::load(&local);
        }

        debug!("No config file, using defaults");
        Ok(Config::default())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.sizes.is_empty() {
            bail!("sizes must list at least one icon size");
        }

        let mut seen_sizes = HashSet::new();
        for &size in &self.sizes {
            if size == 0 {
                bail!("icon size must be greater than 0");
            }
            if !seen_sizes.insert(size) {
                bail!("icon size {} is listed more than once", size);
            }
            if !Preset::is_documented(size) {
                warn!(size, "No dedicated preset for this size, using the default layout");
            }
        }

        if self.themes.is_empty() {
            bail!("themes must list at least one theme");
        }

        let mut seen_names = HashSet::new();
        for theme in self.themes.iter() {
            if theme.name.is_empty() {
                bail!("theme name cannot be empty");
            }
            // Theme names end up in file names
            if theme.name.contains(['/', '\\']) {
                bail!("theme name '{}' cannot contain path separators", theme.name);
            }
            if !seen_names.insert(theme.name.as_str()) {
                bail!("theme '{}' is defined more than once", theme.name);
            }
        }

        Ok(())
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize config")
    }

    /// Write the default config to `path`, refusing to replace an existing file
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("{} already exists, not overwriting", path.display());
        }

        Config::default().save(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(path, self.to_yaml()?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        Ok(())
    }
}
