#[derive(Debug, thiserror::Error)]
pub enum ConnwatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown connection state code: {0}")]
    UnknownState(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ConnwatchError>;
