use thiserror::Error;

/// A flush did not reach the metrics database.
///
/// Failures cover the whole batch; the database does not report which
/// record it objected to.
#[derive(Error, Debug)]
pub enum PublishError {
    #[error("Failed to reach metrics database: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Metrics database rejected write: HTTP {status} - {message}")]
    Rejected { status: u16, message: String },

    #[error("Failed to write records: {0}")]
    Io(#[from] std::io::Error),
}
