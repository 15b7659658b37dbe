use thiserror::Error;

/// Top-level error type shared by every voltix crate.
#[derive(Debug, Error)]
pub enum VoltixError {
    #[error("battery source unavailable: {0}")]
    Source(String),

    #[error("malformed attribute '{attribute}': {value:?}")]
    Malformed { attribute: &'static str, value: String },

    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl VoltixError {
    pub fn unavailable<S: Into<String>>(msg: S) -> Self {
        Self::Source(msg.into())
    }
}

pub type Result<T, E = VoltixError> = std::result::Result<T, E>;
