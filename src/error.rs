use std::io;
use std::process::ExitCode;

use thiserror::Error;

/// Failures a benchmark process can end with.
///
/// Only `Usage` and `InvalidSize` are part of the designed contract; the
/// remaining variants cover the record failing to reach stdout.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("expected 3 arguments <alg> <n> <seed>, got {supplied}")]
    Usage { supplied: usize },

    #[error("input size must be positive, got {n}")]
    InvalidSize { n: i64 },

    #[error("cannot allocate an input of {n} elements")]
    Allocation { n: i64 },

    #[error("failed to write record: {0}")]
    Output(#[from] io::Error),

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl BenchError {
    pub const USAGE_EXIT: u8 = 2;
    pub const INVALID_SIZE_EXIT: u8 = 3;

    /// Process exit status for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            BenchError::Usage { .. } => Self::USAGE_EXIT,
            BenchError::InvalidSize { .. } => Self::INVALID_SIZE_EXIT,
            BenchError::Allocation { .. }
            | BenchError::Output(_)
            | BenchError::Serialize(_) => 1,
        }
    }
}

impl From<&BenchError> for ExitCode {
    fn from(err: &BenchError) -> Self {
        ExitCode::from(err.exit_code())
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
