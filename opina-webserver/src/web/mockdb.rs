use std::sync::Mutex;

use anyhow::anyhow;
use async_trait::async_trait;

use opina_core::{entities::*, repositories::*};

/// In-memory stand-in for the remote comment store.
#[derive(Debug, Default)]
pub struct MockDb {
    pub comments: Mutex<Vec<Comment>>,
    pub fail_with: Mutex<Option<Failure>>,
}

#[derive(Debug, Clone, Copy)]
pub enum Failure {
    Unavailable,
    Rejected,
}

impl MockDb {
    fn fail(&self) -> Option<Error> {
        self.fail_with.lock().unwrap().map(|failure| match failure {
            Failure::Unavailable => Error::Unavailable(anyhow!("connect timeout")),
            Failure::Rejected => Error::Rejected(anyhow!("permission denied")),
        })
    }
}

#[async_trait]
impl CommentRepository for MockDb {
    async fn create_comment(&self, record: NewCommentRecord) -> Result<Comment, Error> {
        if let Some(err) = self.fail() {
            return Err(err);
        }
        let mut comments = self.comments.lock().unwrap();
        let comment = Comment {
            id: Id::new(),
            author: record.author,
            body: record.body,
            // Strictly increasing, like the store-assigned creation time.
            created_at: Timestamp::from_secs(1_756_000_000 + comments.len() as i64),
            submitter_address: record.submitter_address,
            client_descriptor: record.client_descriptor,
        };
        comments.push(comment.clone());
        Ok(comment)
    }

    async fn all_comments(&self) -> Result<Vec<Comment>, Error> {
        if let Some(err) = self.fail() {
            return Err(err);
        }
        Ok(self.comments.lock().unwrap().clone())
    }
}

pub fn comment(id: &str, created_at_secs: i64) -> Comment {
    Comment {
        id: id.into(),
        author: format!("Autor {id}"),
        body: format!("Comentario {id}"),
        created_at: Timestamp::from_secs(created_at_secs),
        submitter_address: None,
        client_descriptor: None,
    }
}
