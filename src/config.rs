//! Configuration for fskv
//!
//! Centralized configuration with sensible defaults. A `Config` is built once
//! per store, either through `Config::builder()` or by merging caller
//! overrides (`StoreOptions`) onto `Config::default()`, and is never mutated
//! afterwards.

use std::path::PathBuf;

use serde::Deserialize;

/// Name of the subfolder created under the platform data directory
pub const DEFAULT_SUBFOLDER: &str = "persistStore";

/// Prefix used for diagnostics when no name is configured
pub const DEFAULT_NAME: &str = "FileStore";

/// How values are encoded in entry files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// Value text is written as UTF-8 bytes
    #[default]
    Utf8,

    /// Value text is Base64; the decoded bytes are written to the file
    Base64,
}

impl std::str::FromStr for Encoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "base64" => Ok(Encoding::Base64),
            other => Err(format!("unknown encoding: {}", other)),
        }
    }
}

/// Main configuration for a store instance
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory holding one file per entry
    ///   {storage_path}/
    ///     ├── user%3A1
    ///     └── b%2Fc
    pub storage_path: PathBuf,

    /// Encoding of entry file contents
    pub encoding: Encoding,

    // -------------------------------------------------------------------------
    // Diagnostics Configuration
    // -------------------------------------------------------------------------
    /// Emit per-operation diagnostics
    pub debug: bool,

    /// Production builds never emit diagnostics, even with `debug` set
    pub production: bool,

    /// Prefix for diagnostic messages
    pub name: String,
}

/// Caller-supplied overrides, merged onto the defaults
///
/// Any field left as `None` keeps its default.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StoreOptions {
    pub storage_path: Option<PathBuf>,
    pub encoding: Option<Encoding>,
    pub debug: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_path: default_storage_path(),
            encoding: Encoding::Utf8,
            debug: false,
            production: !cfg!(debug_assertions),
            name: DEFAULT_NAME.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Merge overrides onto the defaults
    pub fn from_options(options: StoreOptions) -> Self {
        let mut builder = Self::builder();
        if let Some(path) = options.storage_path {
            builder = builder.storage_path(path);
        }
        if let Some(encoding) = options.encoding {
            builder = builder.encoding(encoding);
        }
        if let Some(debug) = options.debug {
            builder = builder.debug(debug);
        }
        builder.build()
    }

    /// Whether diagnostics should be emitted at all
    pub fn diagnostics_enabled(&self) -> bool {
        self.debug && !self.production
    }
}

/// Platform data directory + fixed subfolder, or `./persistStore`
fn default_storage_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_SUBFOLDER)
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the root directory
    pub fn storage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.storage_path = path.into();
        self
    }

    /// Set the value encoding
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.config.encoding = encoding;
        self
    }

    /// Enable or disable diagnostics
    pub fn debug(mut self, debug: bool) -> Self {
        self.config.debug = debug;
        self
    }

    /// Mark the environment as production (suppresses diagnostics)
    pub fn production(mut self, production: bool) -> Self {
        self.config.production = production;
        self
    }

    /// Set the diagnostic prefix
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.name = name.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
