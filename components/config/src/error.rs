use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigurationError {
    #[error("Required configuration `{0}` is empty")]
    MissingField(&'static str),

    #[error("Port `{0}` is invalid")]
    InvalidPort(u16),

    #[error("An IO error raised")]
    Io(#[from] std::io::Error),

    #[error("Malformed YAML configuration")]
    Yaml(#[from] serde_yaml::Error),
}
