use crate::config::GeneratorConfig;
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::Path;

/// Default location of the generator config file.
pub const DEFAULT_CONFIG_PATH: &str = "config/Generator.toml";

/// Environment prefix, e.g. `ROYALTY_COUNT=200` or
/// `ROYALTY_DISTRIBUTION__PRICE_MAX=24.99`.
pub const ENV_PREFIX: &str = "ROYALTY_";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads generator configuration by merging defaults, TOML, and environment variables.
    ///
    /// A missing TOML file is not an error; defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or the merged values fail validation.
    pub fn load() -> Result<GeneratorConfig> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Loads generator configuration from a specific TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be parsed or the merged values fail validation.
    pub fn load_from(path: &Path) -> Result<GeneratorConfig> {
        let config: GeneratorConfig = Self::figment(path)
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Provider chain: defaults, then the TOML file, then the environment.
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(GeneratorConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }
}
