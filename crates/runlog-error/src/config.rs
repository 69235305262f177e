use super::*;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read configuration at {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: Arc<std::io::Error>,
    },

    #[error("Invalid configuration: {0}")]
    Parse(String),
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Read {
            path: path.into(),
            source: Arc::new(source),
        }
    }
}
