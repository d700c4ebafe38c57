//! Gmail REST client implementing [`MailService`].
//!
//! Thin transport layer over the v1 messages/labels endpoints. Token
//! acquisition and refresh happen outside this tool; the client takes a
//! ready bearer token.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::MailError;
use crate::services::mail::{MailLabel, MailMessage, MailService};

const DEFAULT_BASE_URL: &str = "https://gmail.googleapis.com/gmail/v1";

/// Gmail API client for a single mailbox (`users/me`).
pub struct GmailClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct MessageRef {
    id: String,
}

#[derive(Debug, Deserialize)]
struct ListMessagesResponse {
    #[serde(default)]
    messages: Vec<MessageRef>,
}

#[derive(Debug, Deserialize)]
struct ListLabelsResponse {
    #[serde(default)]
    labels: Vec<MailLabel>,
}

impl GmailClient {
    pub fn new(token: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}/users/me/{path}", self.base_url)
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, MailError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(MailError::Api {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str, query: &[(&str, &str)]) -> Result<T, MailError> {
        let resp = self
            .client
            .get(self.url(path))
            .query(query)
            .bearer_auth(self.token.expose_secret())
            .send()
            .await
            .map_err(|e| MailError::Http(e.to_string()))?;
        Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|e| MailError::Http(e.to_string()))
    }
}

#[async_trait]
impl MailService for GmailClient {
    async fn list_unread(&self, label_filters: &[&str]) -> Result<Vec<String>, MailError> {
        let query: Vec<(&str, &str)> =
            label_filters.iter().map(|l| ("labelIds", *l)).collect();
        let resp: ListMessagesResponse = self.get_json("messages", &query).await?;
        Ok(resp.messages.into_iter().map(|m| m.id).collect())
    }

    async fn get_message(&self, id: &str) -> Result<MailMessage, MailError> {
        self.get_json(&format!("messages/{id}"), &[]).await
    }

    async fn modify_labels(
        &self,
        id: &str,
        add: &[&str],
        remove: &[&str],
    ) -> Result<(), MailError> {
        let body = serde_json::json!({
            "addLabelIds": add,
            "removeLabelIds": remove,
        });
        let resp = self
            .client
            .post(self.url(&format!("messages/{id}/modify")))
            .bearer_auth(self.token.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| MailError::Http(e.to_string()))?;
        Self::check(resp).await?;
        Ok(())
    }

    async fn list_labels(&self) -> Result<Vec<MailLabel>, MailError> {
        let resp: ListLabelsResponse = self.get_json("labels", &[]).await?;
        Ok(resp.labels)
    }
}
