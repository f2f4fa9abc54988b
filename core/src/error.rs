use thiserror::Error;

#[derive(Error, Debug)]
pub enum ToolError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Arrival time {seconds}s is outside the allowed range")]
    ArrivalOutOfRange { seconds: f64 },

    #[error("Monster '{name}' is not in the catalog")]
    UnknownMonster { name: String },

    #[error("Buff '{token}' is not a known buff")]
    UnknownBuff { token: String },

    #[error("Malformed spawn file line {line}: {reason}")]
    MalformedLine { line: usize, reason: String },

    #[error("Invalid session snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type ToolResult<T> = Result<T, ToolError>;
