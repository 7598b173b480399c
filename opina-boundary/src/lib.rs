//! # opina-boundary
//!
//! JSON representations exchanged between the web API and its clients.

use serde::{Deserialize, Serialize};

mod conv;

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub body: String,
    /// Unix seconds, assigned by the store.
    pub created_at: i64,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewComment {
    pub author: String,
    pub body: String,
}

/// Body of all JSON error responses.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Error {
    pub http_status: u16,
    pub message: String,
}
