//! Wire types exchanged with callers and the datastore.

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Object type tag for book records in the datastore.
pub const OBJTYPE_BOOK: &str = "book";

/// Inbound body for `POST /api/v1/book/`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateBookRequest {
    /// Book author.
    #[serde(rename = "Author")]
    pub author: String,

    /// Book title.
    #[serde(rename = "BookTitle")]
    pub book_title: String,
}

impl CreateBookRequest {
    /// Parse a create request from a raw body, distinguishing a missing
    /// field from a body that is not a JSON object at all.
    pub fn from_body(body: &str) -> Result<Self, ServiceError> {
        let value: serde_json::Value =
            serde_json::from_str(body).map_err(|_| ServiceError::MalformedBody)?;

        let object = value.as_object().ok_or(ServiceError::MalformedBody)?;

        let author = object
            .get("Author")
            .and_then(|v| v.as_str())
            .ok_or(ServiceError::MissingField("Author"))?;
        let book_title = object
            .get("BookTitle")
            .and_then(|v| v.as_str())
            .ok_or(ServiceError::MissingField("BookTitle"))?;

        Ok(Self {
            author: author.to_string(),
            book_title: book_title.to_string(),
        })
    }
}

/// Outbound body for the datastore `write` endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct BookWritePayload {
    /// Always [`OBJTYPE_BOOK`].
    pub objtype: &'static str,

    /// Book author.
    #[serde(rename = "Author")]
    pub author: String,

    /// Book title.
    #[serde(rename = "BookTitle")]
    pub book_title: String,
}

impl From<CreateBookRequest> for BookWritePayload {
    fn from(request: CreateBookRequest) -> Self {
        Self {
            objtype: OBJTYPE_BOOK,
            author: request.author,
            book_title: request.book_title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_valid_body() {
        let request =
            CreateBookRequest::from_body(r#"{"Author": "Ursula K. Le Guin", "BookTitle": "The Dispossessed"}"#)
                .unwrap();

        assert_eq!(request.author, "Ursula K. Le Guin");
        assert_eq!(request.book_title, "The Dispossessed");
    }

    #[test]
    fn missing_author_is_a_missing_field() {
        let err = CreateBookRequest::from_body(r#"{"BookTitle": "The Dispossessed"}"#).unwrap_err();
        assert!(matches!(err, ServiceError::MissingField("Author")));
    }

    #[test]
    fn missing_title_is_a_missing_field() {
        let err = CreateBookRequest::from_body(r#"{"Author": "Ursula K. Le Guin"}"#).unwrap_err();
        assert!(matches!(err, ServiceError::MissingField("BookTitle")));
    }

    #[test]
    fn non_json_body_is_malformed() {
        let err = CreateBookRequest::from_body("not json").unwrap_err();
        assert!(matches!(err, ServiceError::MalformedBody));
    }

    #[test]
    fn non_object_body_is_malformed() {
        let err = CreateBookRequest::from_body("[1, 2, 3]").unwrap_err();
        assert!(matches!(err, ServiceError::MalformedBody));
    }

    #[test]
    fn write_payload_keeps_wire_field_names() {
        let payload = BookWritePayload::from(CreateBookRequest {
            author: "a".to_string(),
            book_title: "t".to_string(),
        });

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"objtype": "book", "Author": "a", "BookTitle": "t"})
        );
    }
}
