//! User settings, layered from built-in defaults, an optional settings file,
//! and `CUBETWIST_` environment variables.

use std::path::Path;

use cubetwist_core::CubeKind;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");
const ENV_PREFIX: &str = "CUBETWIST";

/// Format for command output.
#[derive(
    Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub(crate) enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct Settings {
    pub default_kind: CubeKind,
    pub scramble_length: usize,
    pub log_level: String,
    pub output_format: OutputFormat,
}

impl Settings {
    /// Loads settings, layering the file at `path` (if any) and then the
    /// environment over the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Same as [`Settings::load()`], but reads environment variables from
    /// `env` instead of the process environment if it is given.
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut config = config::Config::builder().add_source(config::File::from_str(
            DEFAULT_SETTINGS_STR,
            SETTINGS_FILE_FORMAT,
        ));

        if let Some(path) = path {
            log::debug!("Loading settings from {}", path.display());
            config = config.add_source(config::File::from(path).required(true));
        }

        config = config.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(env),
        );

        let settings: Self = config
            .build()
            .and_then(|c| c.try_deserialize())
            .context("error loading settings")?;
        settings.log_filter()?;
        Ok(settings)
    }

    /// Returns the log level filter named by `log_level`.
    pub fn log_filter(&self) -> Result<log::LevelFilter> {
        self.log_level
            .parse()
            .with_context(|| format!("invalid log level {:?}", self.log_level))
    }

    /// Returns the settings as YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).context("error serializing settings")
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;

    use super::*;

    fn env(pairs: &[(&str, &str)]) -> config::Map<String, String> {
        pairs
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    }

    #[test]
    fn test_default_settings() {
        let settings = Settings::load_with_env(None, Some(env(&[]))).unwrap();
        assert_eq!(
            settings,
            Settings {
                default_kind: CubeKind::Rubik,
                scramble_length: 25,
                log_level: "warn".to_owned(),
                output_format: OutputFormat::Text,
            },
        );
        assert_eq!(settings.log_filter().unwrap(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_env_overrides_defaults() {
        let vars = env(&[
            ("CUBETWIST_DEFAULT_KIND", "revenge"),
            ("CUBETWIST_SCRAMBLE_LENGTH", "40"),
            ("CUBETWIST_OUTPUT_FORMAT", "json"),
        ]);
        let settings = Settings::load_with_env(None, Some(vars)).unwrap();
        assert_eq!(settings.default_kind, CubeKind::Revenge);
        assert_eq!(settings.scramble_length, 40);
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert_eq!(settings.log_level, "warn");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("cubetwist-settings-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path: PathBuf = dir.join("settings.yaml");
        std::fs::write(&path, "default_kind: Pocket\nlog_level: debug\n").unwrap();

        let settings = Settings::load_with_env(Some(&path), Some(env(&[]))).unwrap();
        assert_eq!(settings.default_kind, CubeKind::Pocket);
        assert_eq!(settings.log_filter().unwrap(), log::LevelFilter::Debug);
        assert_eq!(settings.scramble_length, 25);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_invalid_settings() {
        let err =
            Settings::load_with_env(None, Some(env(&[("CUBETWIST_DEFAULT_KIND", "Megaminx")])))
                .expect_err("unknown cube kind");
        assert_eq!(err.to_string(), "error loading settings");
        let err = Settings::load_with_env(None, Some(env(&[("CUBETWIST_LOG_LEVEL", "loud")])))
            .expect_err("unknown log level");
        assert_eq!(err.to_string(), "invalid log level \"loud\"");
        let err = Settings::load_with_env(Some(Path::new("/nonexistent/cubetwist.yaml")), None)
            .expect_err("missing settings file");
        assert_eq!(err.to_string(), "error loading settings");
    }

    #[test]
    fn test_yaml_round_trip() {
        let settings = Settings::load_with_env(None, Some(env(&[]))).unwrap();
        let yaml = settings.to_yaml().unwrap();
        assert_eq!(serde_norway::from_str::<Settings>(&yaml).unwrap(), settings);
    }
}
