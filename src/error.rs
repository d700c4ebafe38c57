//! Error types for mailboard.

/// Top-level error type for a sync pass.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Mail service error: {0}")]
    Mail(#[from] MailError),

    #[error("Board service error: {0}")]
    Board(#[from] BoardError),

    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Mail service (mailbox collaborator) errors.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Mail API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Mailbox label not found: {0}")]
    LabelNotFound(String),
}

/// Board service (kanban collaborator) errors.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Board API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Expected list not found on board: {0}")]
    MissingList(String),

    #[error("Expected label not found on board: {0}")]
    MissingLabel(String),
}

/// Reconciliation ledger errors. Any of these aborts the pass: card/message
/// correlation cannot proceed without a readable, writable ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed ledger row at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("Card {card_id} already has a ledger row (for message {existing})")]
    DuplicateCard { card_id: String, existing: String },
}

/// Result type alias for the sync engine.
pub type Result<T> = std::result::Result<T, Error>;
