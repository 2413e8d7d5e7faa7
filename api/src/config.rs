//! Configuration loading and logger setup for the API binary
//!
//! Dotenv files (`.env.<environment>`, then `.env`) only fill variables the
//! process does not already have. Configuration sources, later ones winning:
//! 1. the preset for the active environment (`AppConfig::for_environment`)
//! 2. an optional `config.<environment>.toml` in the working directory
//! 3. `FLINT__`-prefixed variables, e.g. `FLINT__SERVER__PORT=9000`

use config::{Config, ConfigError, Environment as EnvSource, File, FileFormat};
use env_logger::{Env, WriteStyle};
use flint_shared::config::{AppConfig, Environment, LoggingConfig};

/// Prefix of configuration environment variables
pub const ENV_PREFIX: &str = "FLINT";

/// Read `.env.<environment>` and `.env` when present
pub fn load_env_files(environment: Environment) -> Result<(), dotenvy::Error> {
    for file in [environment.env_file(), String::from(".env")] {
        match dotenvy::from_filename(&file) {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(err) => return Err(err),
        }
    }
    Ok(())
}

pub fn load_for(environment: Environment) -> Result<AppConfig, ConfigError> {
    let preset = AppConfig::for_environment(environment);

    Config::builder()
        .add_source(Config::try_from(&preset)?)
        .add_source(File::new(&environment.config_file(), FileFormat::Toml).required(false))
        .add_source(
            EnvSource::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?
        .try_deserialize()
}

/// Install the global logger; `RUST_LOG` overrides the configured level
pub fn init_logging(logging: &LoggingConfig) {
    let env = Env::default().default_filter_or(logging.level.as_str());
    let mut builder = env_logger::Builder::from_env(env);
    builder.format_module_path(logging.module_path);
    builder.write_style(if logging.colored {
        WriteStyle::Auto
    } else {
        WriteStyle::Never
    });
    if !logging.timestamp {
        builder.format_timestamp(None);
    }
    // A logger may already be installed (tests); keep it
    let _ = builder.try_init();
}
