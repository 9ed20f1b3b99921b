use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to open acknowledgment sink '{path}': {source}")]
    SinkOpen {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read input after line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to echo line {line} to acknowledgment sink: {source}")]
    Echo {
        line: u64,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to flush acknowledgment sink: {0}")]
    Flush(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
