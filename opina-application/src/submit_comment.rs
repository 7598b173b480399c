use super::*;
use crate::{guard::SubmissionGuard, Result};

/// The submission workflow: guard, validate, sanitize, persist.
///
/// The guard is released on every path back to the idle state. A rejected
/// or failed submission leaves no record behind; the caller keeps the
/// entered values so the user can retry.
pub async fn submit_comment<R>(
    repo: &R,
    guard: &SubmissionGuard,
    new_comment: usecases::NewComment,
) -> Result<Comment>
where
    R: CommentRepository + Sync + ?Sized,
{
    if !guard.try_acquire() {
        return Err(usecases::Error::SubmissionInFlight.into());
    }
    let res = usecases::create_new_comment(repo, new_comment).await;
    guard.release();
    match &res {
        Ok(comment) => debug!("Stored new comment {}", comment.id),
        Err(err) => warn!("Comment submission failed: {err}"),
    }
    res.map_err(Into::into)
}
