// Wire representation of comment documents in the Firestore REST API.
// The field names match the collection schema of the original deployment.

use anyhow::anyhow;
use serde::{Deserialize, Serialize};
use time::{format_description::well_known::Rfc3339, OffsetDateTime};

use opina_core::{entities::*, repositories::NewCommentRecord};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    /// Full resource name, assigned by the store on creation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub fields: CommentFields,
    /// Server-assigned creation time (RFC 3339).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct CommentFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nombre: Option<StringValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comentario: Option<StringValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<StringValue>,
    #[serde(rename = "userAgent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<StringValue>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringValue {
    pub string_value: String,
}

impl From<String> for StringValue {
    fn from(from: String) -> Self {
        Self { string_value: from }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    pub next_page_token: Option<String>,
}

impl From<NewCommentRecord> for Document {
    fn from(from: NewCommentRecord) -> Self {
        let NewCommentRecord {
            author,
            body,
            submitter_address,
            client_descriptor,
        } = from;
        Self {
            name: None,
            fields: CommentFields {
                nombre: Some(author.into()),
                comentario: Some(body.into()),
                ip: submitter_address.map(Into::into),
                user_agent: client_descriptor.map(Into::into),
            },
            create_time: None,
        }
    }
}

impl TryFrom<Document> for Comment {
    type Error = anyhow::Error;

    fn try_from(from: Document) -> Result<Self, Self::Error> {
        let Document {
            name,
            fields,
            create_time,
        } = from;
        let name = name.ok_or_else(|| anyhow!("document without a resource name"))?;
        let id: Id = name
            .rsplit('/')
            .next()
            .unwrap_or(name.as_str())
            .into();
        let create_time =
            create_time.ok_or_else(|| anyhow!("document {id} without a creation time"))?;
        let created_at: Timestamp = OffsetDateTime::parse(&create_time, &Rfc3339)
            .map_err(|err| anyhow!("unparsable creation time of document {id}: {err}"))?
            .into();
        let string_value = |v: Option<StringValue>| v.map(|v| v.string_value);
        Ok(Self {
            id,
            // Tolerate documents written by other clients.
            author: string_value(fields.nombre).unwrap_or_default(),
            body: string_value(fields.comentario).unwrap_or_default(),
            created_at,
            submitter_address: string_value(fields.ip),
            client_descriptor: string_value(fields.user_agent),
        })
    }
}
