use thiserror::Error;

use opina_core::usecases::Error as ParameterError;

pub use opina_core::repositories;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub enum BError {
    #[error(transparent)]
    Parameter(ParameterError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<repositories::Error> for AppError {
    fn from(err: repositories::Error) -> Self {
        Self::Business(BError::Repo(err))
    }
}

impl From<ParameterError> for AppError {
    fn from(err: ParameterError) -> Self {
        Self::Business(err.into())
    }
}

impl From<ParameterError> for BError {
    fn from(err: ParameterError) -> Self {
        match err {
            ParameterError::Repo(err) => Self::Repo(err),
            err => Self::Parameter(err),
        }
    }
}

impl From<String> for BError {
    fn from(s: String) -> Self {
        Self::Internal(s)
    }
}
