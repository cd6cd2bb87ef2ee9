use std::{
    io,
    path::{Path, PathBuf},
};

use crate::{AdapterConfig, Error, Result, Settings, resolve_settings};

/// Default file name looked up by the CLI.
pub const CONFIG_FILE: &str = "firekit.toml";

/// Represents a firekit.toml file with both raw content and parsed settings.
#[derive(Debug, Clone)]
pub struct FirekitToml {
    path: PathBuf,
    content: String,
    settings: Settings,
}

impl FirekitToml {
    /// Open and parse a firekit.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        Self::from_content(path, content)
    }

    /// Open a firekit.toml, falling back to defaults when the file does not exist.
    ///
    /// The adapter is usable without any configuration; only a file that
    /// exists but cannot be read or parsed is an error.
    pub fn open_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_content(path, content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self {
                path,
                content: String::new(),
                settings: Settings::default(),
            }),
            Err(e) => Err(Box::new(Error::Io { path, source: e })),
        }
    }

    /// Parse settings from a string, reporting errors against `filename`.
    pub fn parse_str(content: &str, filename: &str) -> Result<Settings> {
        toml::from_str(content).map_err(|e| Error::parse(e, content, filename))
    }

    fn from_content(path: PathBuf, content: String) -> Result<Self> {
        let filename = path.display().to_string();
        let settings = Self::parse_str(&content, &filename)?;
        Ok(Self {
            path,
            content,
            settings,
        })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the raw content (empty when defaults were used).
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Whether the settings came from an actual file.
    pub fn is_default(&self) -> bool {
        self.content.is_empty() && !self.path.exists()
    }

    /// Get the parsed settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Mutable access, for command-line overrides.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Validate and resolve into an adapter configuration.
    pub fn resolve(&self) -> Result<AdapterConfig> {
        resolve_settings(&self.settings)
    }
}
