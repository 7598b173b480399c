use opina_entities::comment;

use super::*;

impl From<comment::Comment> for Comment {
    fn from(from: comment::Comment) -> Self {
        let comment::Comment {
            id,
            author,
            body,
            created_at,
            submitter_address: _,
            client_descriptor: _,
        } = from;
        Self {
            id: id.into(),
            author,
            body,
            created_at: created_at.as_secs(),
        }
    }
}
