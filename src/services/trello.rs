//! Trello REST client implementing [`BoardService`].

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::error::BoardError;
use crate::services::board::{BoardLabel, BoardList, BoardService, Card, CardPosition};

const DEFAULT_BASE_URL: &str = "https://api.trello.com/1";

/// Trello API client bound to a single board.
pub struct TrelloClient {
    client: reqwest::Client,
    key: SecretString,
    token: SecretString,
    board_id: String,
    base_url: String,
}

impl TrelloClient {
    pub fn new(key: SecretString, token: SecretString, board_id: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            key,
            token,
            board_id,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint (local test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn auth(&self) -> [(&'static str, &str); 2] {
        [
            ("key", self.key.expose_secret()),
            ("token", self.token.expose_secret()),
        ]
    }

    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, BoardError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(BoardError::Api {
            status: status.as_u16(),
            body,
        })
    }

    async fn get_json<T: for<'de> Deserialize<'de>>(&self, path: &str) -> Result<T, BoardError> {
        let resp = self
            .client
            .get(format!("{}/{path}", self.base_url))
            .query(&self.auth())
            .send()
            .await
            .map_err(|e| BoardError::Http(e.to_string()))?;
        Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|e| BoardError::Http(e.to_string()))
    }
}

#[async_trait]
impl BoardService for TrelloClient {
    async fn lists(&self) -> Result<Vec<BoardList>, BoardError> {
        self.get_json(&format!("boards/{}/lists", self.board_id)).await
    }

    async fn labels(&self) -> Result<Vec<BoardLabel>, BoardError> {
        self.get_json(&format!("boards/{}/labels", self.board_id)).await
    }

    async fn add_card(
        &self,
        list_id: &str,
        title: &str,
        position: CardPosition,
        label_ids: &[&str],
    ) -> Result<Card, BoardError> {
        let labels = label_ids.join(",");
        let resp = self
            .client
            .post(format!("{}/cards", self.base_url))
            .query(&self.auth())
            .query(&[
                ("idList", list_id),
                ("name", title),
                ("pos", position.as_str()),
                ("idLabels", &labels),
            ])
            .send()
            .await
            .map_err(|e| BoardError::Http(e.to_string()))?;
        Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|e| BoardError::Http(e.to_string()))
    }

    async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>, BoardError> {
        self.get_json(&format!("lists/{list_id}/cards")).await
    }

    async fn delete_card(&self, card_id: &str) -> Result<(), BoardError> {
        let resp = self
            .client
            .delete(format!("{}/cards/{card_id}", self.base_url))
            .query(&self.auth())
            .send()
            .await
            .map_err(|e| BoardError::Http(e.to_string()))?;

        // A card deleted by a previous interrupted sweep is fine.
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        Self::check(resp).await?;
        Ok(())
    }
}
