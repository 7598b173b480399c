//! # opina-core
//!
//! Business rules of the comment board: input validation and sanitization,
//! the comment store abstraction, and the use cases built on top of them.

pub mod gateways;
pub mod repositories;
pub mod usecases;
pub mod util;

pub mod entities {
    pub use opina_entities::{comment::*, id::*, time::*};
}
