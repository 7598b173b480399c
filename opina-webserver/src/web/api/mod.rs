use std::{fmt::Display, result};

use rocket::{
    self, get, post,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::{Error as JsonError, Json},
    Route, State,
};

use opina_boundary::Error as JsonErrorResponse;

use super::guards::*;
use crate::web::{OriginLookup, Store, Version};
use opina_application::prelude::*;
use opina_core::usecases;

mod comments;
mod error;
mod util;

pub use self::error::Error as ApiError;


type Result<T> = result::Result<Json<T>, ApiError>;
type JsonResult<'a, T> = result::Result<Json<T>, JsonError<'a>>;

pub fn routes() -> Vec<Route> {
    routes![
        comments::get_comments,
        comments::post_comment,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
