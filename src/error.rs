use thiserror::Error;

/// Errors raised by the release and doc-upload tasks.
///
/// Every variant is fatal: the current task stops at the failing step
/// and nothing already done is rolled back.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("environment error: {0}")]
    Environment(String),

    #[error("subprocess failure: {0}")]
    Subprocess(String),
}

impl TaskError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        TaskError::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        TaskError::Validation(msg.into())
    }

    pub fn environment(msg: impl Into<String>) -> Self {
        TaskError::Environment(msg.into())
    }

    pub fn subprocess(msg: impl Into<String>) -> Self {
        TaskError::Subprocess(msg.into())
    }
}
