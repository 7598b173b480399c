use anyhow::anyhow;
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
    serde::json::Error as JsonError,
};
use thiserror::Error;

use super::json_error_response;
use crate::web::STORE_DOWN_MESSAGE;
use opina_application::error::{AppError, BError};
pub use opina_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error("{0}")]
    OtherWithStatus(#[source] anyhow::Error, Status),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<JsonError<'_>> for Error {
    fn from(err: JsonError) -> Self {
        match err {
            JsonError::Io(err) => Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity),
            JsonError::Parse(_str, err) => {
                Self::OtherWithStatus(anyhow!(err), Status::UnprocessableEntity)
            }
        }
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        Self::App(err.into())
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            Error::App(err) => {
                if let AppError::Business(err) = &err {
                    match err {
                        BError::Parameter(ref err) => {
                            return match err {
                                ParameterError::Invalid(_) => {
                                    json_error_response(req, err, Status::BadRequest)
                                }
                                ParameterError::SubmissionInFlight => {
                                    json_error_response(req, err, Status::TooManyRequests)
                                }
                                ParameterError::Repo(err) => store_error_response(req, err),
                            };
                        }
                        BError::Repo(err) => {
                            return store_error_response(req, err);
                        }
                        BError::Internal(_) => {}
                    }
                }
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
            Error::OtherWithStatus(err, status) => json_error_response(req, &err, status),
            Error::Other(err) => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}

/// All store failures look the same to clients. The distinction between
/// a rejection and an outage only matters for the server log.
fn store_error_response<'r, 'o: 'r>(
    req: &'r rocket::Request<'_>,
    err: &RepoError,
) -> response::Result<'o> {
    match err {
        RepoError::Unavailable(source) => warn!("Comment store unavailable: {source}"),
        RepoError::Rejected(source) => warn!("Comment store rejected a request: {source}"),
        RepoError::Other(source) => warn!("Comment store failure: {source}"),
    }
    json_error_response(req, &STORE_DOWN_MESSAGE, Status::ServiceUnavailable)
}
