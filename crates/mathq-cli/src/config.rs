//! Tool settings.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  It is
//! not the folder configuration (`folder_contexts.json`); it only says where
//! things live and which names the onboarding text mentions.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `MATHQ_` prefix, `__` between sections
//!    (`MATHQ_LAYOUT__IMAGES_ROOT=Scans`)
//! 2. Settings file: `--settings <FILE>` (must exist) or
//!    `./mathq-setup.toml` (optional)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};

use mathq_core::domain::Layout;

/// Settings file picked up from the working directory when present.
pub const DEFAULT_SETTINGS_FILE: &str = "mathq-setup.toml";

const ENV_PREFIX: &str = "MATHQ";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Where scaffolded resources live.
    pub layout: LayoutConfig,
    /// Names printed in the next-steps block.
    pub onboarding: OnboardingConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub config_file: PathBuf,
    pub images_root: PathBuf,
    pub output_dir: PathBuf,
    pub ignore_file: PathBuf,
    pub workflow_dir: PathBuf,
    pub workflow_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingConfig {
    /// Repository secret holding comma-separated API keys.
    pub secret_name: String,
    /// Display name of the CI workflow to trigger.
    pub workflow_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let layout = Layout::default();
        Self {
            layout: LayoutConfig {
                config_file: layout.config_file,
                images_root: layout.images_root,
                output_dir: layout.output_dir,
                ignore_file: layout.ignore_file,
                workflow_dir: layout.workflow_dir,
                workflow_file: layout.workflow_file,
            },
            onboarding: OnboardingConfig {
                secret_name: "GEMINI_API_KEYS".into(),
                workflow_name: "Process Math Questions".into(),
            },
            output: OutputConfig { no_color: false },
        }
    }
}

impl AppConfig {
    /// Load settings from defaults, the settings file, and the environment.
    ///
    /// `settings_file` is the path passed via `--settings`; when given it must
    /// exist.  Otherwise `./mathq-setup.toml` is used if present.
    pub fn load(settings_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_from(settings_file, Path::new(DEFAULT_SETTINGS_FILE), None)
    }

    /// [`Self::load`] with an explicit default file and, for tests, a fixed
    /// environment instead of the process one.
    fn load_from(
        settings_file: Option<&Path>,
        default_file: &Path,
        env: Option<Map<String, String>>,
    ) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default settings")?;

        let file = match settings_file {
            Some(path) => File::from(path).required(true),
            None => File::from(default_file).required(false),
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .source(env);

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(environment)
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Invalid settings")
    }

    /// The core layout these settings describe.
    pub fn layout(&self) -> Layout {
        Layout {
            config_file: self.layout.config_file.clone(),
            images_root: self.layout.images_root.clone(),
            output_dir: self.layout.output_dir.clone(),
            ignore_file: self.layout.ignore_file.clone(),
            workflow_dir: self.layout.workflow_dir.clone(),
            workflow_file: self.layout.workflow_file.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn load_isolated(
        settings: Option<&Path>,
        env: &[(&str, &str)],
    ) -> anyhow::Result<AppConfig> {
        let tmp = TempDir::new().unwrap();
        let env = env
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        AppConfig::load_from(settings, &tmp.path().join(DEFAULT_SETTINGS_FILE), Some(env))
    }

    #[test]
    fn defaults_match_core_layout() {
        assert_eq!(AppConfig::default().layout(), Layout::default());
    }

    #[test]
    fn default_secret_name() {
        assert_eq!(
            AppConfig::default().onboarding.secret_name,
            "GEMINI_API_KEYS"
        );
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = load_isolated(None, &[]).unwrap();
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn environment_overrides_nested_keys() {
        let cfg = load_isolated(
            None,
            &[
                ("MATHQ_LAYOUT__IMAGES_ROOT", "Scans"),
                ("MATHQ_OUTPUT__NO_COLOR", "true"),
            ],
        )
        .unwrap();
        assert_eq!(cfg.layout.images_root, PathBuf::from("Scans"));
        assert!(cfg.output.no_color);
        assert_eq!(cfg.layout.output_dir, PathBuf::from("output_data"));
    }

    #[test]
    fn settings_file_overrides_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("custom.toml");
        std::fs::write(
            &path,
            "[layout]\noutput_dir = \"results\"\n\n[onboarding]\nworkflow_name = \"Nightly\"\n",
        )
        .unwrap();

        let cfg = load_isolated(Some(&path), &[]).unwrap();
        assert_eq!(cfg.layout.output_dir, PathBuf::from("results"));
        assert_eq!(cfg.onboarding.workflow_name, "Nightly");
        assert_eq!(cfg.layout.images_root, PathBuf::from("Images"));
    }

    #[test]
    fn missing_explicit_settings_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        assert!(load_isolated(Some(&tmp.path().join("nope.toml")), &[]).is_err());
    }
}
