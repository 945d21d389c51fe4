use anyhow::{Context, Result};
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The netcoresearch configuration file structure (netcoresearch.toml)
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NetcoresearchConfig {
    /// hostfxr location
    pub hostfxr: HostfxrConfig,

    /// Logging configuration
    pub log: LogConfig,

    /// Console output configuration
    pub output: OutputConfig,

    /// Directory containing the config file
    #[serde(skip)]
    base_dir: PathBuf,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HostfxrConfig {
    /// Library path, relative to the config file's directory
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Level filter used when neither -v nor RUST_LOG is given
    pub level: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: Option<bool>,
}

impl NetcoresearchConfig {
    pub const FILE_NAME: &'static str = "netcoresearch.toml";

    /// Load configuration from netcoresearch.toml, searching upward from the given directory
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let config_path = current.join(Self::FILE_NAME);

            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)
                    .with_context(|| format!("Failed to read {}", config_path.display()))?;
                let mut config: NetcoresearchConfig = toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path.display()))?;
                config.base_dir = current;
                return Ok(Some(config));
            }

            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load configuration by searching upward from the current working directory
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Configured hostfxr path, resolved against the config file's directory
    pub fn hostfxr_path(&self) -> Option<PathBuf> {
        self.hostfxr.path.as_ref().map(|path| self.base_dir.join(path))
    }

    pub fn log_level(&self) -> Result<Option<LevelFilter>> {
        self.log
            .level
            .as_deref()
            .map(|level| {
                level
                    .parse::<LevelFilter>()
                    .with_context(|| format!("Invalid log level \"{}\"", level))
            })
            .transpose()
    }
}
