//! Pass orchestration: collect, publish, append, sweep.

use std::path::Path;

use tracing::{debug, info};

use crate::config::SyncConfig;
use crate::error::{MailError, Result};
use crate::ledger::{Ledger, LedgerRow};
use crate::services::board::BoardService;
use crate::services::mail::{MailService, INBOX};
use crate::sync::collect::collect;
use crate::sync::context::BoardContext;
use crate::sync::publish::publish;
use crate::sync::sweep::sweep;

/// Counters for one full pass.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassSummary {
    /// Qualifying messages collected from the mailbox.
    pub collected: usize,
    /// Cards created on the board.
    pub published: usize,
    /// Finished cards reconciled back into the mailbox.
    pub reconciled: usize,
}

/// Run one full synchronization pass.
///
/// All service calls are issued strictly sequentially; for each task the
/// card is created before the source message is moved, so the two side
/// effects are always causally ordered. New ledger rows are persisted in
/// one atomic write after publishing, before the sweep.
pub async fn run_pass(
    mail: &dyn MailService,
    board: &dyn BoardService,
    config: &SyncConfig,
    ledger_path: &Path,
) -> Result<PassSummary> {
    let ctx = BoardContext::build(board, config).await?;

    let tasks = collect(mail, config).await?;
    let mut summary = PassSummary {
        collected: tasks.len(),
        ..PassSummary::default()
    };

    if !tasks.is_empty() {
        let todo_label_id = find_todo_label(mail, config).await?;

        let mut new_rows = Vec::with_capacity(tasks.len());
        for task in &tasks {
            let card = publish(board, &ctx, task).await?;
            mail.modify_labels(&task.source_message_id, &[&todo_label_id], &[INBOX])
                .await?;
            debug!(message_id = %task.source_message_id, "moved message out of inbox");
            new_rows.push(LedgerRow {
                card_id: card.id,
                message_id: task.source_message_id.clone(),
            });
        }
        summary.published = new_rows.len();

        let mut ledger = Ledger::load(ledger_path)?;
        for row in new_rows {
            ledger.append(row)?;
        }
        ledger.persist()?;
    }

    let outcome = sweep(board, mail, &ctx, ledger_path).await?;
    summary.reconciled = outcome.reconciled;

    info!(
        collected = summary.collected,
        published = summary.published,
        reconciled = summary.reconciled,
        "sync pass finished"
    );
    Ok(summary)
}

/// Id of the mailbox label processed messages are moved into. A missing
/// label is a configuration error, not something to guess around.
async fn find_todo_label(mail: &dyn MailService, config: &SyncConfig) -> Result<String> {
    let wanted = config.todo_label.to_lowercase();
    let labels = mail.list_labels().await?;
    labels
        .into_iter()
        .find(|l| l.name.to_lowercase() == wanted)
        .map(|l| l.id)
        .ok_or_else(|| MailError::LabelNotFound(config.todo_label.clone()).into())
}
