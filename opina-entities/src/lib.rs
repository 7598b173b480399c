#![deny(missing_debug_implementations)]

//! # opina-entities
//!
//! Reusable, agnostic domain entities for the Opina comment board.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod comment;
pub mod id;
pub mod time;
