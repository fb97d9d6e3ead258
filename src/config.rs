use std::path::Path;

use config::ConfigError;
use log::LevelFilter;
use serde::Deserialize;

use crate::settings::GameSettings;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub application: ApplicationSettings,
    pub game: GameSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApplicationSettings {
    pub log_level: String,
}

impl ApplicationSettings {
    pub fn log_level(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or_else(|_| {
            log::warn!(
                "Unknown log level, defaulting to info. LogLevel: '{}'.",
                self.log_level
            );
            LevelFilter::Info
        })
    }
}

impl Config {
    /// Reads `config/` from the working directory for the environment named
    /// by the `ENVIRONMENT` variable.
    pub fn get() -> Result<Config, ConfigError> {
        let base_path = std::env::current_dir().map_err(|error| {
            ConfigError::Message(format!(
                "Failed to determine the current directory. Error: '{error}'."
            ))
        })?;

        let environment: Environment = std::env::var("ENVIRONMENT")
            .map_err(|_| ConfigError::Message("ENVIRONMENT variable is not set.".to_string()))?
            .try_into()
            .map_err(ConfigError::Message)?;

        Config::load(&base_path.join("config"), environment)
    }

    pub fn load(
        configuration_directory: &Path,
        environment: Environment,
    ) -> Result<Config, ConfigError> {
        let environment_filename = format!("{}.yaml", environment.as_str());

        let config = config::Config::builder()
            .add_source(config::File::from(
                configuration_directory.join("base.yaml"),
            ))
            .add_source(config::File::from(
                configuration_directory.join(environment_filename),
            ))
            .add_source(config::Environment::with_prefix("SCRAMBLE").separator("__"))
            .build()?;

        let config = config.try_deserialize::<Config>()?;
        config
            .game
            .validate()
            .map_err(|error| ConfigError::Message(error.to_string()))?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Prod,
}

const DEV: &str = "dev";
const PROD: &str = "prod";

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => DEV,
            Environment::Prod => PROD,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        match string.to_lowercase().as_str() {
            DEV => Ok(Self::Dev),
            PROD => Ok(Self::Prod),
            other => Err(format!(
                "{other} is not a supported environment. Use either `{DEV}` or `{PROD}`.",
            )),
        }
    }
}
