//! Board service trait and board entity types.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::BoardError;

/// A list (column) on the board.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardList {
    pub id: String,
    pub name: String,
}

/// A label defined on the board.
#[derive(Debug, Clone, Deserialize)]
pub struct BoardLabel {
    pub id: String,
    pub name: String,
}

/// A card on the board.
#[derive(Debug, Clone, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
}

/// Insertion position for a new card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPosition {
    Top,
    Bottom,
}

impl CardPosition {
    pub fn as_str(self) -> &'static str {
        match self {
            CardPosition::Top => "top",
            CardPosition::Bottom => "bottom",
        }
    }
}

/// Kanban board collaborator, bound to a single board.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// All lists on the board.
    async fn lists(&self) -> Result<Vec<BoardList>, BoardError>;

    /// All labels defined on the board.
    async fn labels(&self) -> Result<Vec<BoardLabel>, BoardError>;

    /// Create a card on a list. Returns the new card's identity.
    async fn add_card(
        &self,
        list_id: &str,
        title: &str,
        position: CardPosition,
        label_ids: &[&str],
    ) -> Result<Card, BoardError>;

    /// All cards currently on a list.
    async fn list_cards(&self, list_id: &str) -> Result<Vec<Card>, BoardError>;

    /// Delete a card. Deleting a card that is already gone is not an
    /// error, so the completion sweep can be safely re-run.
    async fn delete_card(&self, card_id: &str) -> Result<(), BoardError>;
}
