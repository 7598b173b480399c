use super::prelude::*;
use crate::util::{sanitize::sanitize, validate};

/// Raw form input plus the best-effort submitter metadata.
#[derive(Debug, Clone)]
pub struct NewComment {
    pub author: String,
    pub body: String,
    pub submitter_address: Option<String>,
    pub client_descriptor: Option<String>,
}

/// Validates the raw input, sanitizes both fields and persists the record.
///
/// Invalid input never reaches the store.
pub async fn create_new_comment<R>(repo: &R, new_comment: NewComment) -> Result<Comment>
where
    R: CommentRepository + Sync + ?Sized,
{
    let NewComment {
        author,
        body,
        submitter_address,
        client_descriptor,
    } = new_comment;
    let invalidities = validate::validate_new_comment(&author, &body);
    if !invalidities.is_empty() {
        return Err(Error::Invalid(invalidities));
    }
    let record = NewCommentRecord {
        author: sanitize(&author),
        body: sanitize(&body),
        submitter_address,
        client_descriptor,
    };
    log::debug!("Creating new comment by {}", record.author);
    let comment = repo.create_comment(record).await?;
    Ok(comment)
}
