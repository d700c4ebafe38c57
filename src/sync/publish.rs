//! Board publisher: creates one card per normalized task.

use tracing::info;

use crate::error::BoardError;
use crate::placement;
use crate::services::board::{BoardService, Card, CardPosition};
use crate::sync::collect::NormalizedTask;
use crate::sync::context::BoardContext;

/// Publish a task to the board.
///
/// Resolves the placement, then creates a card at the top of the
/// destination list (most-recent-first) with exactly one label. Returns
/// the new card's identity; the mail-side move of the source message is
/// the runner's responsibility.
pub async fn publish(
    board: &dyn BoardService,
    ctx: &BoardContext,
    task: &NormalizedTask,
) -> Result<Card, BoardError> {
    let placement = placement::resolve(task.modifiers);

    let card = board
        .add_card(
            ctx.list_id(placement.list),
            task.title(),
            CardPosition::Top,
            &[ctx.label_id(placement.label)],
        )
        .await?;

    info!(
        card_id = %card.id,
        message_id = %task.source_message_id,
        list = ?placement.list,
        label = ?placement.label,
        "published card"
    );
    Ok(card)
}
