use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::Notify;

use super::{
    error::{AppError, BError},
    prelude::*,
    *,
};
use opina_core::usecases::Error as ParameterError;

/// A store whose `create_comment` blocks until the test releases it.
#[derive(Debug, Default)]
struct BlockingRepo {
    started: Notify,
    proceed: Notify,
    create_calls: Mutex<u32>,
}

#[async_trait]
impl CommentRepository for BlockingRepo {
    async fn create_comment(
        &self,
        record: NewCommentRecord,
    ) -> std::result::Result<Comment, opina_core::repositories::Error> {
        *self.create_calls.lock().unwrap() += 1;
        self.started.notify_one();
        self.proceed.notified().await;
        Ok(Comment {
            id: Id::new(),
            author: record.author,
            body: record.body,
            created_at: Timestamp::from_secs(1_756_000_000),
            submitter_address: record.submitter_address,
            client_descriptor: record.client_descriptor,
        })
    }

    async fn all_comments(&self) -> std::result::Result<Vec<Comment>, opina_core::repositories::Error> {
        Err(opina_core::repositories::Error::Unavailable(anyhow!(
            "not used"
        )))
    }
}

fn valid_comment() -> usecases::NewComment {
    usecases::NewComment {
        author: "Ana".into(),
        body: "Hola mundo".into(),
        submitter_address: None,
        client_descriptor: None,
    }
}

#[tokio::test]
async fn second_submission_while_first_in_flight_is_rejected() {
    let repo = Arc::new(BlockingRepo::default());
    let guard = Arc::new(SubmissionGuard::new(Duration::from_secs(60)));

    let first = {
        let repo = Arc::clone(&repo);
        let guard = Arc::clone(&guard);
        tokio::spawn(async move { submit_comment(&*repo, &guard, valid_comment()).await })
    };
    repo.started.notified().await;

    let err = submit_comment(&*repo, &guard, valid_comment())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::SubmissionInFlight))
    ));

    repo.proceed.notify_one();
    first.await.unwrap().unwrap();
    assert_eq!(*repo.create_calls.lock().unwrap(), 1);
}

#[tokio::test]
async fn guard_is_released_after_completion() {
    let repo = Arc::new(BlockingRepo::default());
    let guard = Arc::new(SubmissionGuard::new(Duration::from_secs(60)));

    for _ in 0..2 {
        let task = {
            let repo = Arc::clone(&repo);
            let guard = Arc::clone(&guard);
            tokio::spawn(async move { submit_comment(&*repo, &guard, valid_comment()).await })
        };
        repo.started.notified().await;
        repo.proceed.notify_one();
        task.await.unwrap().unwrap();
    }
    assert_eq!(*repo.create_calls.lock().unwrap(), 2);
}

#[tokio::test]
async fn guard_is_released_after_rejected_input() {
    let repo = Arc::new(BlockingRepo::default());
    let guard = SubmissionGuard::new(Duration::from_secs(60));

    let invalid = usecases::NewComment {
        author: String::new(),
        body: "Hola".into(),
        submitter_address: None,
        client_descriptor: None,
    };
    let err = submit_comment(&*repo, &guard, invalid).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Business(BError::Parameter(ParameterError::Invalid(_)))
    ));
    // The store was never called and the form is idle again.
    assert_eq!(*repo.create_calls.lock().unwrap(), 0);
    assert!(guard.try_acquire());
}
