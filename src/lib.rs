//! mailboard: turns marker-tagged unread emails into kanban cards and
//! reconciles finished cards back into the mailbox.

pub mod config;
pub mod error;
pub mod ledger;
pub mod placement;
pub mod services;
pub mod subject;
pub mod sync;
