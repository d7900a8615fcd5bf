use std::path::PathBuf;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Couldn't load configuration from {path}: {source}")]
    Load {
        path: PathBuf,
        source: confy::ConfyError
    },
    #[error("Expected configuration value '{0}' not set.")]
    Missing(&'static str)
}

pub struct Config<T>
    where T: Serialize
{
    pub cfg: T,
    pub path: PathBuf
}

impl<T> Config<T>
    where T: Serialize + Default + DeserializeOwned
{
    /// Loads the file at `path`, creating it with default values when it doesn't exist yet.
    pub fn load(path: PathBuf) -> Result<Self, ConfigError> {
        let cfg = confy::load_path(&path).map_err(|source| ConfigError::Load {
            path: path.clone(),
            source
        })?;

        Ok(Self {
            cfg,
            path
        })
    }
}
