//! Mail service trait and message types.
//!
//! The trait is the seam between the sync engine and the mailbox REST
//! API; tests substitute an in-memory fake.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::MailError;

/// System label id for the inbox.
pub const INBOX: &str = "INBOX";
/// System label id for unread messages.
pub const UNREAD: &str = "UNREAD";

/// One header of a mail message.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageHeader {
    pub name: String,
    pub value: String,
}

/// Body of a single message part. `data` is the transport's URL-safe
/// base64 encoding of the raw bytes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PartBody {
    #[serde(default)]
    pub data: Option<String>,
}

/// One MIME part of a message payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePart {
    #[serde(default)]
    pub body: PartBody,
}

/// Payload of a full message: headers plus MIME parts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessagePayload {
    #[serde(default)]
    pub headers: Vec<MessageHeader>,
    #[serde(default)]
    pub parts: Vec<MessagePart>,
}

/// A full mail message as returned by the mail service.
#[derive(Debug, Clone, Deserialize)]
pub struct MailMessage {
    pub id: String,
    #[serde(default)]
    pub snippet: String,
    #[serde(default)]
    pub payload: MessagePayload,
}

impl MailMessage {
    /// Locate the subject header. The header name match is case-sensitive;
    /// interpretation of the value is up to the caller.
    pub fn subject(&self) -> Option<&str> {
        self.payload
            .headers
            .iter()
            .find(|h| h.name == "Subject")
            .map(|h| h.value.as_str())
    }
}

/// A mailbox label (system or user-defined).
#[derive(Debug, Clone, Deserialize)]
pub struct MailLabel {
    pub id: String,
    pub name: String,
}

/// Mailbox collaborator. All calls are plain request/response; failures
/// surface as [`MailError`] and are not retried by the engine.
#[async_trait]
pub trait MailService: Send + Sync {
    /// Ids of messages carrying all of the given labels, in mailbox order.
    async fn list_unread(&self, label_filters: &[&str]) -> Result<Vec<String>, MailError>;

    /// Fetch a message with full headers and payload.
    async fn get_message(&self, id: &str) -> Result<MailMessage, MailError>;

    /// Add and remove labels on a message. Removing an absent label is
    /// not an error, so read-marking is idempotent.
    async fn modify_labels(
        &self,
        id: &str,
        add: &[&str],
        remove: &[&str],
    ) -> Result<(), MailError>;

    /// Enumerate all labels in the mailbox.
    async fn list_labels(&self) -> Result<Vec<MailLabel>, MailError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_with_headers(headers: Vec<(&str, &str)>) -> MailMessage {
        MailMessage {
            id: "m1".into(),
            snippet: String::new(),
            payload: MessagePayload {
                headers: headers
                    .into_iter()
                    .map(|(name, value)| MessageHeader {
                        name: name.into(),
                        value: value.into(),
                    })
                    .collect(),
                parts: vec![],
            },
        }
    }

    #[test]
    fn subject_header_found_by_exact_name() {
        let msg = message_with_headers(vec![("From", "a@b.c"), ("Subject", "do m 2 x")]);
        assert_eq!(msg.subject(), Some("do m 2 x"));
    }

    #[test]
    fn subject_header_name_match_is_case_sensitive() {
        let msg = message_with_headers(vec![("subject", "do m 2 x")]);
        assert_eq!(msg.subject(), None);
    }

    #[test]
    fn missing_subject_header_is_none() {
        let msg = message_with_headers(vec![("From", "a@b.c")]);
        assert_eq!(msg.subject(), None);
    }

    #[test]
    fn message_deserializes_without_payload() {
        let msg: MailMessage =
            serde_json::from_str(r#"{"id":"abc","snippet":"hi"}"#).unwrap();
        assert_eq!(msg.id, "abc");
        assert!(msg.payload.headers.is_empty());
        assert!(msg.payload.parts.is_empty());
    }
}
