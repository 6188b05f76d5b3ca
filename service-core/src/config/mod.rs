use crate::error::AppError;
use config::{Config as Cfg, Environment, File};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load settings from `<dir>/base.yaml`, overridden by `<PREFIX>_SECTION__KEY`
/// environment variables. A `.env` file is honoured when present.
pub fn load_layered<T: DeserializeOwned>(config_dir: &Path, env_prefix: &str) -> Result<T, AppError> {
    dotenvy::dotenv().ok();

    let settings = Cfg::builder()
        .add_source(File::from(config_dir.join("base.yaml")).required(true))
        .add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    Ok(settings.try_deserialize::<T>()?)
}
