// Low-level access to the external comment store.
// The store is a remote document database; all calls are network
// round-trips and no retry is performed here. Callers decide.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::*;

#[derive(Debug, Error)]
pub enum Error {
    /// Transient failure (network, timeout, server error).
    #[error("The comment store is unreachable")]
    Unavailable(#[source] anyhow::Error),
    /// Permanent failure (permission denial, schema rejection).
    #[error("The comment store rejected the request")]
    Rejected(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Payload of a single comment record to be persisted.
///
/// `author` and `body` must already be validated and sanitized; the store
/// does not re-validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCommentRecord {
    pub author: String,
    pub body: String,
    pub submitter_address: Option<String>,
    pub client_descriptor: Option<String>,
}

#[async_trait]
pub trait CommentRepository {
    /// Persists one new immutable comment record.
    ///
    /// The store assigns both the `id` and the `created_at` timestamp of
    /// the returned `Comment`.
    async fn create_comment(&self, record: NewCommentRecord) -> Result<Comment>;

    /// Full snapshot of all records visible at call time,
    /// most recent first. An empty store yields an empty vector.
    async fn all_comments(&self) -> Result<Vec<Comment>>;
}
