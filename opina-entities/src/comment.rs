use crate::{id::*, time::*};

/// An immutable comment record.
///
/// `author` and `body` are stored display-escaped and within their length
/// bounds; `created_at` is assigned exactly once, by the store, at write
/// time. The submitter fields are audit metadata and never rendered.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id                : Id,
    pub author            : String,
    pub body              : String,
    pub created_at        : Timestamp,
    pub submitter_address : Option<String>,
    pub client_descriptor : Option<String>,
}
