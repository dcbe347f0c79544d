/// Convenience result type used across FractalFlow.
pub type FractalResult<T> = Result<T, FractalError>;

/// Top-level error taxonomy used by library APIs.
///
/// The creative flow itself never fails on collaborator problems: those are translated
/// to fallback values at the collaborator boundary. These variants cover caller misuse,
/// IO and the internal failures that the boundary swallows.
#[derive(thiserror::Error, Debug)]
pub enum FractalError {
    /// Invalid caller-provided data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A studio step was invoked out of order.
    #[error("workflow error: {0}")]
    Workflow(String),

    /// An external collaborator call failed (network, status, payload).
    #[error("collaborator error: {0}")]
    Collaborator(String),

    /// A bounded poll ran out of attempts.
    #[error("timed out after {attempts} poll attempts")]
    Timeout {
        /// Attempts made before giving up.
        attempts: u32,
    },

    /// The operation was cancelled through its cancellation token.
    #[error("operation cancelled")]
    Cancelled,

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FractalError {
    /// Build a [`FractalError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FractalError::Workflow`] value.
    pub fn workflow(msg: impl Into<String>) -> Self {
        Self::Workflow(msg.into())
    }

    /// Build a [`FractalError::Collaborator`] value.
    pub fn collaborator(msg: impl Into<String>) -> Self {
        Self::Collaborator(msg.into())
    }

    /// Build a [`FractalError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for FractalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

impl From<reqwest::Error> for FractalError {
    fn from(err: reqwest::Error) -> Self {
        Self::Collaborator(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
