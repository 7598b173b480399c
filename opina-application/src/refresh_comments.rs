use super::*;
use crate::Result;

/// Reloads the full listing, most recent first.
///
/// Independent of any preceding submission: a failed refresh does not
/// roll anything back, and concurrent refreshes are idempotent.
pub async fn refresh_comments<R>(repo: &R) -> Result<Vec<Comment>>
where
    R: CommentRepository + Sync + ?Sized,
{
    Ok(usecases::list_comments(repo).await?)
}
