use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("click timeout must be greater than zero")]
    ZeroClickTimeout,
    #[error("episode prefixes must not be empty")]
    EmptyEpisodePrefix,
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("media session worker has shut down")]
    Disconnected,
}
