// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{fmt::{Display, Formatter, Result},
          fs,
          path::{Path, PathBuf}};

use dirs::config_dir;
use miette::{Context, IntoDiagnostic};

use crate::{CommonError, CommonErrorType, CommonResult, RulerConfig};

/// Where settings are loaded from and saved to. [`ConfigStore::load`] never fails: a
/// store that can't produce a config hands back the defaults.
pub trait ConfigStore {
    fn load(&mut self) -> RulerConfig;

    /// # Errors
    ///
    /// The config could not be serialized or written.
    fn save(&mut self, config: &RulerConfig) -> CommonResult<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPaths {
    TopLevelFolderName,
    ConfigFile,
}

impl Display for ConfigPaths {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let path = match self {
            ConfigPaths::TopLevelFolderName => "ruler-overlay",
            ConfigPaths::ConfigFile => "config.json",
        };
        write!(f, "{path}")
    }
}

/// This is where the config folder is, eg: `~/.config/ruler-overlay` on Linux.
#[must_use]
pub fn try_get_config_folder_path() -> Option<PathBuf> {
    let home_config_folder_path = config_dir()?;
    Some(home_config_folder_path.join(ConfigPaths::TopLevelFolderName.to_string()))
}

/// # Errors
///
/// The platform config folder is unknown or could not be created.
pub fn try_create_config_folder() -> CommonResult<PathBuf> {
    let Some(config_folder_path) = try_get_config_folder_path() else {
        // % is Display, ? is Debug.
        tracing::error!(message = "Could not access config folder.", error = "None");
        return CommonError::new_error_result_with_only_type(
            CommonErrorType::ConfigFolderPathCouldNotBeAccessed,
        );
    };

    match fs::create_dir_all(&config_folder_path) {
        Ok(()) => Ok(config_folder_path),
        Err(error) => {
            // % is Display, ? is Debug.
            tracing::error!(
                message = "Could not create config folder.",
                config_folder = ?config_folder_path,
                error = ?error
            );
            CommonError::new_error_result_with_only_type(
                CommonErrorType::ConfigFolderCouldNotBeCreated,
            )
        }
    }
}

pub mod config_error {
    #[derive(thiserror::Error, Debug, miette::Diagnostic)]
    pub enum ConfigErrorCouldNot {
        #[error("Could not read config file: '{path}'")]
        ReadFile { path: String },

        #[error("Could not parse config file: '{path}'")]
        #[diagnostic(help("Delete the file to start over with the defaults"))]
        ParseFile { path: String },

        #[error("Could not serialize config")]
        Serialize,

        #[error("Could not write config file: '{path}'")]
        WriteFile { path: String },
    }
}
use config_error::ConfigErrorCouldNot;

/// Pretty printed JSON file on disk, by default `<config_dir>/ruler-overlay/config.json`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileConfigStore {
    path: PathBuf,
}

impl JsonFileConfigStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self { Self { path: path.into() } }

    /// Store in the platform config folder, which is created if needed.
    ///
    /// # Errors
    ///
    /// See [`try_create_config_folder`].
    pub fn try_new_default() -> CommonResult<Self> {
        let folder = try_create_config_folder()?;
        Ok(Self::new(folder.join(ConfigPaths::ConfigFile.to_string())))
    }

    #[must_use]
    pub fn path(&self) -> &Path { &self.path }

    fn path_string(&self) -> String { self.path.to_string_lossy().to_string() }

    /// Read and parse the file, merging in defaults. `Ok(None)` when there's no file.
    ///
    /// # Errors
    ///
    /// The file exists but can't be read or isn't valid JSON.
    #[tracing::instrument(skip(self), fields(path = ?self.path))]
    pub fn try_load(&self) -> miette::Result<Option<RulerConfig>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::ReadFile {
                path: self.path_string(),
            })?;

        let config: RulerConfig = serde_json::from_str(&json)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::ParseFile {
                path: self.path_string(),
            })?;

        Ok(Some(config.merge_with_defaults()))
    }
}

impl ConfigStore for JsonFileConfigStore {
    /// Missing file: the defaults are written out (so users can find and edit them) and
    /// returned. Broken file: the defaults are returned and the file is left alone.
    fn load(&mut self) -> RulerConfig {
        match self.try_load() {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = RulerConfig::default();
                if let Err(report) = self.save(&config) {
                    // % is Display, ? is Debug.
                    tracing::warn!(
                        message = "Could not write default config.",
                        error = ?report
                    );
                }
                config
            }
            Err(report) => {
                // % is Display, ? is Debug.
                tracing::warn!(
                    message = "Could not load config, using defaults.",
                    error = ?report
                );
                RulerConfig::default()
            }
        }
    }

    #[tracing::instrument(skip(self, config), fields(path = ?self.path))]
    fn save(&mut self, config: &RulerConfig) -> CommonResult<()> {
        let json = serde_json::to_string_pretty(config)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::Serialize)?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .into_diagnostic()
                .wrap_err(ConfigErrorCouldNot::WriteFile {
                    path: self.path_string(),
                })?;
        }

        fs::write(&self.path, json)
            .into_diagnostic()
            .wrap_err(ConfigErrorCouldNot::WriteFile {
                path: self.path_string(),
            })?;

        // % is Display, ? is Debug.
        tracing::debug!(message = "Saved config.", path = ?self.path);
        Ok(())
    }
}

/// Keeps the config in memory. Handy for tests and for running without a config folder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InMemoryConfigStore {
    pub config: Option<RulerConfig>,
    pub save_count: usize,
    /// When set, every save fails.
    pub fail_saves: bool,
}

impl InMemoryConfigStore {
    #[must_use]
    pub fn with_config(config: RulerConfig) -> Self {
        Self {
            config: Some(config),
            ..Default::default()
        }
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn load(&mut self) -> RulerConfig {
        self.config
            .clone()
            .map(RulerConfig::merge_with_defaults)
            .unwrap_or_default()
    }

    fn save(&mut self, config: &RulerConfig) -> CommonResult<()> {
        if self.fail_saves {
            return CommonError::new_error_result(
                CommonErrorType::IOError,
                "In memory store is set to fail saves",
            );
        }
        self.config = Some(config.clone());
        self.save_count += 1;
        Ok(())
    }
}
