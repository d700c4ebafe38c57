//! Mail collector: turns unread marker-tagged messages into normalized
//! task records.

use base64::Engine as _;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use mail_parser::decoders::html::html_to_text;
use tracing::{debug, warn};

use crate::config::SyncConfig;
use crate::error::MailError;
use crate::services::mail::{MailService, MessagePayload, INBOX, UNREAD};
use crate::subject::{self, TaskModifiers};

/// Message bodies arrive in the transport's URL-safe base64 variant,
/// with or without padding depending on the producer.
const BODY_BASE64: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// One qualifying email, normalized for publishing. Not persisted; lives
/// only for the duration of a pass.
#[derive(Debug, Clone)]
pub struct NormalizedTask {
    /// Mailbox-unique, run-stable message id.
    pub source_message_id: String,
    /// Raw subject line.
    pub subject: String,
    /// Provider-generated snippet of the message.
    pub snippet: String,
    /// Readable body text, if one could be extracted.
    pub body: Option<String>,
    /// Modifiers parsed from the subject.
    pub modifiers: TaskModifiers,
}

impl NormalizedTask {
    /// Card title: extracted body, else the snippet, else the raw subject.
    pub fn title(&self) -> &str {
        if let Some(body) = &self.body {
            return body;
        }
        if !self.snippet.is_empty() {
            return &self.snippet;
        }
        &self.subject
    }
}

/// Collect unread inbox messages whose subject starts with the marker.
///
/// Messages without a subject header are skipped with a warning; subjects
/// not starting with the marker are skipped silently. A message whose
/// body cannot be extracted is still emitted, with `body` unset. Mailbox
/// iteration order is preserved.
pub async fn collect(
    mail: &dyn MailService,
    config: &SyncConfig,
) -> Result<Vec<NormalizedTask>, MailError> {
    let ids = mail.list_unread(&[INBOX, UNREAD]).await?;
    debug!(count = ids.len(), "fetched unread inbox messages");

    let marker = config.marker.trim().to_lowercase();
    let mut tasks = Vec::new();

    for id in ids {
        let message = mail.get_message(&id).await?;

        let Some(subject) = message.subject() else {
            warn!(id = %message.id, "message has no subject header, skipping");
            continue;
        };

        if !subject.to_lowercase().starts_with(&marker) {
            continue;
        }

        let modifiers = subject::parse(subject, config);
        let body = extract_body(&message.payload);
        if body.is_none() {
            debug!(id = %message.id, "no readable body, title will fall back");
        }

        tasks.push(NormalizedTask {
            source_message_id: message.id.clone(),
            subject: subject.to_string(),
            snippet: message.snippet.clone(),
            body,
            modifiers,
        });
    }

    debug!(count = tasks.len(), "collected task messages");
    Ok(tasks)
}

/// Extract readable text from the first body part: base64url decode,
/// strip the HTML down to visible text, collapse whitespace. Any failure
/// yields `None`; the task is still usable without a body.
fn extract_body(payload: &MessagePayload) -> Option<String> {
    let data = payload.parts.first()?.body.data.as_deref()?;
    let bytes = BODY_BASE64.decode(data).ok()?;
    let html = String::from_utf8(bytes).ok()?;

    let text = html_to_text(&html);
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    (!collapsed.is_empty()).then_some(collapsed)
}
