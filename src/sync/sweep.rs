//! Completion sweep: reconciles finished cards back into the mailbox.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::ledger::Ledger;
use crate::placement::TaskList;
use crate::services::board::BoardService;
use crate::services::mail::{MailService, UNREAD};
use crate::sync::context::BoardContext;

/// What a sweep did.
#[derive(Debug, Default, Clone, Copy)]
pub struct SweepOutcome {
    /// Cards fully reconciled: row removed, card deleted, message read.
    pub reconciled: usize,
    /// Done cards with no ledger row, left untouched.
    pub orphaned: usize,
}

/// Sweep the done list.
///
/// An empty done list is a no-op with zero ledger I/O. Otherwise, for
/// each done card with a ledger row: the row is dropped from the working
/// copy, the card is deleted (already-gone tolerated), and the source
/// message is marked read (idempotent). The ledger is persisted once at
/// the end, so an interruption mid-sweep at worst reprocesses a card on
/// the next run.
///
/// A done card without a ledger row was created outside this tool; it is
/// reported and skipped without failing the rest of the sweep.
pub async fn sweep(
    board: &dyn BoardService,
    mail: &dyn MailService,
    ctx: &BoardContext,
    ledger_path: &Path,
) -> Result<SweepOutcome> {
    let done_cards = board.list_cards(ctx.list_id(TaskList::Done)).await?;
    if done_cards.is_empty() {
        debug!("done list is empty, nothing to reconcile");
        return Ok(SweepOutcome::default());
    }

    let mut ledger = Ledger::load(ledger_path)?;
    let mut outcome = SweepOutcome::default();

    for card in &done_cards {
        let Some(message_id) = ledger.lookup_by_card(&card.id).map(str::to_string) else {
            warn!(card_id = %card.id, "done card has no ledger row, skipping");
            outcome.orphaned += 1;
            continue;
        };

        ledger.remove(&card.id);
        board.delete_card(&card.id).await?;
        mail.modify_labels(&message_id, &[], &[UNREAD]).await?;

        info!(card_id = %card.id, message_id = %message_id, "reconciled finished card");
        outcome.reconciled += 1;
    }

    ledger.persist()?;
    Ok(outcome)
}
