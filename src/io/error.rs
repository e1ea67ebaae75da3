use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O operation failed: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("malformed fixture JSON: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },

    #[error("invalid fixture record #{index}: {details}")]
    Fixture { index: usize, details: String },
}

impl Error {
    pub fn fixture(index: usize, details: impl Into<String>) -> Self {
        Self::Fixture {
            index,
            details: details.into(),
        }
    }
}
