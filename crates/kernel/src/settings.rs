use std::path::PathBuf;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "LIBRIS_ENV";
const CONFIG_DIR_ENV: &str = "LIBRIS_CONFIG_DIR";
const ENV_PREFIX: &str = "LIBRIS";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl Environment {
    /// Parse the value of `LIBRIS_ENV` (or `--env`).
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "local" => Ok(Environment::Local),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Explicit overrides that win over the `LIBRIS_ENV` / `LIBRIS_CONFIG_DIR` variables.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub config_dir: Option<PathBuf>,
    pub environment: Option<String>,
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub library: LibrarySettings,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    pub fn load() -> anyhow::Result<Self> {
        Self::load_with(LoadOptions::default())
    }

    /// Same as [`Settings::load`], with CLI-supplied overrides for the config
    /// directory and environment name.
    pub fn load_with(options: LoadOptions) -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = match options.environment {
            Some(environment) => environment,
            None => std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string()),
        };
        let parsed_environment = Environment::parse(&environment)?;

        let config_dir = match options.config_dir {
            Some(dir) => dir,
            None => match std::env::var(CONFIG_DIR_ENV) {
                Ok(dir) => PathBuf::from(dir),
                // Default to the `config` directory next to the working directory.
                Err(_) => std::env::current_dir()
                    .map(|cwd| cwd.join("config"))
                    .with_context(|| "unable to resolve current directory")?,
            },
        };

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        tracing::debug!(
            base = %base_path.display(),
            overlay = %environment_path.display(),
            "loading settings"
        );

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings = Self::from_config(cfg)?;

        // The environment name selects the overlay file, so it always wins
        // over whatever the files themselves declare.
        settings.environment = parsed_environment;

        Ok(settings)
    }

    /// Deserialize settings from an already assembled configuration.
    pub fn from_config(cfg: config::Config) -> anyhow::Result<Self> {
        cfg.try_deserialize()
            .with_context(|| "failed to deserialize configuration")
    }
}

/// Initial inventory and membership loaded into the library at startup.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LibrarySettings {
    #[serde(default)]
    pub members: Vec<MemberSeed>,
    #[serde(default)]
    pub books: Vec<BookSeed>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct MemberSeed {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BookSeed {
    pub id: i64,
    pub title: String,
    pub author: String,
    /// Raw status text; validated when the book is constructed.
    #[serde(default = "BookSeed::default_status")]
    pub status: String,
}

impl BookSeed {
    fn default_status() -> String {
        "available".to_string()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default = "TelemetrySettings::default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
}

impl TelemetrySettings {
    fn default_log_level() -> String {
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_level: Self::default_log_level(),
            log_format: LogFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> Settings {
        let cfg = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap();
        Settings::from_config(cfg).unwrap()
    }

    #[test]
    fn default_environment_is_local() {
        let settings = Settings::default();
        assert_eq!(settings.environment, Environment::Local);
    }

    #[test]
    fn default_telemetry_is_quiet_pretty() {
        let settings = Settings::default();
        assert_eq!(settings.telemetry.log_level, "warn");
        assert_eq!(settings.telemetry.log_format, LogFormat::Pretty);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let err = Environment::parse("qa").unwrap_err();
        assert!(err.to_string().contains("unsupported environment 'qa'"));
    }

    #[test]
    fn library_seeds_are_read_from_toml() {
        let settings = from_toml(
            r#"
            [[library.members]]
            id = 1
            name = "Alice"

            [[library.books]]
            id = 7
            title = "Dune"
            author = "Herbert"

            [[library.books]]
            id = 8
            title = "Emma"
            author = "Austen"
            status = "borrowed"
            "#,
        );

        assert_eq!(
            settings.library.members,
            vec![MemberSeed {
                id: 1,
                name: "Alice".to_string()
            }]
        );
        assert_eq!(settings.library.books.len(), 2);
        assert_eq!(settings.library.books[0].status, "available");
        assert_eq!(settings.library.books[1].status, "borrowed");
    }

    #[test]
    fn telemetry_section_overrides_defaults() {
        let settings = from_toml(
            r#"
            [telemetry]
            log_level = "debug"
            log_format = "json"
            "#,
        );
        assert_eq!(settings.telemetry.log_level, "debug");
        assert_eq!(settings.telemetry.log_format, LogFormat::Json);
        assert!(settings.library.members.is_empty());
    }

    #[test]
    fn load_with_missing_config_dir_falls_back_to_defaults() {
        let options = LoadOptions {
            config_dir: Some(PathBuf::from("/nonexistent/libris-config")),
            environment: Some("staging".to_string()),
        };
        let settings = Settings::load_with(options).unwrap();
        assert_eq!(settings.environment, Environment::Staging);
    }
}
