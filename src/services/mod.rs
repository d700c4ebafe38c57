//! External service collaborators: mailbox and kanban board.

pub mod board;
pub mod gmail;
pub mod mail;
pub mod trello;

pub use board::{BoardLabel, BoardList, BoardService, Card, CardPosition};
pub use gmail::GmailClient;
pub use mail::{MailLabel, MailMessage, MailService, INBOX, UNREAD};
pub use trello::TrelloClient;
