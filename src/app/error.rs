use thiserror::Error;

use crate::support::electromagnetic::DomainError;

use super::parameters::InputError;

/// Errors surfaced by the `solenoid` binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// The parameter record could not be read or validated.
    #[error(transparent)]
    Input(#[from] InputError),

    /// A calculation stage rejected its inputs.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The report could not be encoded.
    #[error("failed to encode report: {0}")]
    Output(#[source] serde_json::Error),
}

impl AppError {
    /// Process exit status for this error.
    ///
    /// Usage errors from argument parsing also exit with status 2.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Output(_) => 1,
            Self::Input(_) => 2,
            Self::Domain(_) => 3,
        }
    }
}
