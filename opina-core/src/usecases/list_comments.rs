use super::prelude::*;

/// Loads the full snapshot of comments, most recent first.
///
/// The order is re-established locally: equal creation timestamps are
/// broken by the store-assigned id (descending), so the result does not
/// depend on incidental store behavior.
pub async fn list_comments<R>(repo: &R) -> Result<Vec<Comment>>
where
    R: CommentRepository + Sync + ?Sized,
{
    let mut comments = repo.all_comments().await?;
    comments.sort_unstable_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.id.cmp(&a.id))
    });
    Ok(comments)
}

#[cfg(test)]
mod tests {
    use super::{
        super::tests::{comment, Failure, MockDb},
        *,
    };

    #[tokio::test]
    async fn empty_store_yields_empty_list() {
        let db = MockDb::default();
        assert!(list_comments(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn newest_first() {
        let db = MockDb::default();
        {
            let mut comments = db.comments.lock().unwrap();
            comments.push(comment("a", 1));
            comments.push(comment("c", 3));
            comments.push(comment("b", 2));
        }
        let ids: Vec<_> = list_comments(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ids, vec!["c", "b", "a"]);
    }

    #[tokio::test]
    async fn ties_broken_by_id() {
        let db = MockDb::default();
        {
            let mut comments = db.comments.lock().unwrap();
            comments.push(comment("a", 7));
            comments.push(comment("b", 7));
        }
        let ids: Vec<_> = list_comments(&db)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id.to_string())
            .collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn propagate_store_failure() {
        let db = MockDb::default();
        *db.fail_with.lock().unwrap() = Some(Failure::Rejected);
        let err = list_comments(&db).await.unwrap_err();
        assert!(matches!(err, Error::Repo(RepoError::Rejected(_))));
    }
}
