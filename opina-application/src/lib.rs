//! # opina-application
//!
//! Orchestration of the submission and listing workflows on top of the
//! use cases in `opina-core`.

#[macro_use]
extern crate log;

mod guard;
mod refresh_comments;
mod submit_comment;

pub mod error;

pub mod prelude {
    pub use super::{guard::*, refresh_comments::*, submit_comment::*};
}

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use opina_core::{entities::*, repositories::*, usecases};

#[cfg(test)]
mod tests;
