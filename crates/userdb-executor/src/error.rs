use thiserror::Error;
use userdb_store::StoreError;

#[derive(Error, Debug)]
pub enum ExecError {
    #[error("-{0} flag has to be specified")]
    MissingArgument(String),
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Operation {0} not allowed!")]
    UnsupportedOperation(String),
}

impl ExecError {
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }

    pub fn unsupported_operation(name: impl Into<String>) -> Self {
        Self::UnsupportedOperation(name.into())
    }
}

impl From<StoreError> for ExecError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Io(e) => ExecError::Io(e),
            StoreError::Parse(e) => ExecError::Parse(e),
        }
    }
}

pub type ExecResult<T> = Result<T, ExecError>;
