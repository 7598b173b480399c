//! # opina-db-firestore
//!
//! `CommentRepository` implementation backed by the Firestore REST API.
//!
//! Comments live as documents of a single collection. The store assigns
//! both the document id and the creation time; records are never updated
//! or deleted by this crate.

use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;

use opina_core::{
    entities::*,
    repositories::{CommentRepository, Error, NewCommentRecord},
};

mod models;

use models::{Document, ListDocumentsResponse};

const FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const LIST_PAGE_SIZE: u32 = 300;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone)]
pub struct FirestoreDb {
    client: reqwest::Client,
    collection_url: String,
    api_key: Option<String>,
}

impl FirestoreDb {
    pub fn new(
        project_id: &str,
        collection: &str,
        api_key: Option<String>,
    ) -> anyhow::Result<Self> {
        if project_id.is_empty() {
            return Err(anyhow!("empty Firestore project id"));
        }
        if collection.is_empty() {
            return Err(anyhow!("empty Firestore collection"));
        }
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        let collection_url = format!(
            "{FIRESTORE_BASE_URL}/projects/{project_id}/databases/(default)/documents/{collection}"
        );
        Ok(Self {
            client,
            collection_url,
            api_key,
        })
    }

    fn request(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => request.query(&[("key", key.as_str())]),
            None => request,
        }
    }
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() || err.is_connect() {
        Error::Unavailable(err.into())
    } else {
        Error::Other(err.into())
    }
}

fn status_error(status: reqwest::StatusCode, body: String) -> Error {
    let source = anyhow!("{status}: {body}");
    if status.is_client_error() {
        Error::Rejected(source)
    } else {
        Error::Unavailable(source)
    }
}

async fn expect_success(response: reqwest::Response) -> Result<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(status_error(status, body))
}

#[async_trait]
impl CommentRepository for FirestoreDb {
    async fn create_comment(&self, record: NewCommentRecord) -> Result<Comment> {
        let document = Document::from(record);
        let response = self
            .request(self.client.post(&self.collection_url))
            .json(&document)
            .send()
            .await
            .map_err(transport_error)?;
        let created: Document = expect_success(response)
            .await?
            .json()
            .await
            .map_err(|err| Error::Other(err.into()))?;
        Ok(Comment::try_from(created)?)
    }

    async fn all_comments(&self) -> Result<Vec<Comment>> {
        let mut comments = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut request = self.request(self.client.get(&self.collection_url)).query(&[
                ("pageSize", LIST_PAGE_SIZE.to_string()),
                ("orderBy", "createTime desc".to_string()),
            ]);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }
            let response = request.send().await.map_err(transport_error)?;
            let page: ListDocumentsResponse = expect_success(response)
                .await?
                .json()
                .await
                .map_err(|err| Error::Other(err.into()))?;
            for document in page.documents {
                match Comment::try_from(document) {
                    Ok(comment) => comments.push(comment),
                    // A malformed foreign document must not take the
                    // whole listing down.
                    Err(err) => log::warn!("Skipping unusable comment document: {err}"),
                }
            }
            page_token = page.next_page_token;
            if page_token.is_none() {
                return Ok(comments);
            }
        }
    }
}
