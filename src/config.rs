//! Configuration types: subject vocabulary, board naming, and credentials.

use secrecy::SecretString;

use crate::error::ConfigError;
use crate::placement::{TaskLabel, TaskList};

/// Vocabulary and naming configuration for one sync pass.
///
/// Every set here is closed and matched case-insensitively. The defaults
/// mirror the conventional setup: subjects like `"Do m 2 buy milk"` become
/// a mandatory, urgent-labelled card.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Word an email subject must start with to be treated as a task.
    pub marker: String,
    /// Second-word synonyms that mark a task as mandatory.
    pub mandatory_synonyms: Vec<String>,
    /// Third-word synonyms selecting high priority (urgent label).
    pub high_synonyms: Vec<String>,
    /// Third-word synonyms selecting medium priority (important label).
    pub medium_synonyms: Vec<String>,
    /// Third-word synonyms selecting the optional tier (optional label).
    pub optional_synonyms: Vec<String>,
    /// Third-word synonyms that explicitly select the default tier.
    pub watch_synonyms: Vec<String>,
    /// Mailbox label that processed messages are moved into.
    pub todo_label: String,
    /// Board label names, one per priority tier.
    pub label_optional: String,
    pub label_normal: String,
    pub label_important: String,
    pub label_urgent: String,
    /// Board list names. The done list is only ever a sweep target.
    pub list_optional: String,
    pub list_required: String,
    pub list_done: String,
}

impl Default for SyncConfig {
    fn default() -> Self {
        let strings = |items: &[&str]| items.iter().map(|s| (*s).to_string()).collect();
        Self {
            marker: "do".to_string(),
            mandatory_synonyms: strings(&["mandatory", "m", "-m", "mdtry", "mdtory"]),
            high_synonyms: strings(&["2", "high", "priority", "important", "urgent"]),
            medium_synonyms: strings(&["1", "med", "medium"]),
            optional_synonyms: strings(&["-1", "watch", "idc"]),
            watch_synonyms: strings(&["0", "low"]),
            todo_label: "todo".to_string(),
            label_optional: "optional".to_string(),
            label_normal: "not important".to_string(),
            label_important: "important".to_string(),
            label_urgent: "urgent".to_string(),
            list_optional: "personal/optional".to_string(),
            list_required: "required".to_string(),
            list_done: "done".to_string(),
        }
    }
}

impl SyncConfig {
    /// Configured board name for a list.
    pub fn list_name(&self, list: TaskList) -> &str {
        match list {
            TaskList::Optional => &self.list_optional,
            TaskList::Required => &self.list_required,
            TaskList::Done => &self.list_done,
        }
    }

    /// Configured board name for a label.
    pub fn label_name(&self, label: TaskLabel) -> &str {
        match label {
            TaskLabel::Optional => &self.label_optional,
            TaskLabel::NotImportant => &self.label_normal,
            TaskLabel::Important => &self.label_important,
            TaskLabel::Urgent => &self.label_urgent,
        }
    }
}

/// API credentials and board identity, read from the environment.
#[derive(Clone)]
pub struct Credentials {
    /// OAuth bearer token for the mail API.
    pub mail_token: SecretString,
    /// Board API key.
    pub board_key: SecretString,
    /// Board API token.
    pub board_token: SecretString,
    /// Identity of the single board this tool manages.
    pub board_id: String,
}

impl Credentials {
    /// Load credentials from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let require = |key: &str| {
            std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
        };
        Ok(Self {
            mail_token: SecretString::from(require("GMAIL_ACCESS_TOKEN")?),
            board_key: SecretString::from(require("TRELLO_API_KEY")?),
            board_token: SecretString::from(require("TRELLO_API_TOKEN")?),
            board_id: require("TRELLO_BOARD_ID")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_vocabulary_is_lowercase() {
        let config = SyncConfig::default();
        for word in config
            .mandatory_synonyms
            .iter()
            .chain(&config.high_synonyms)
            .chain(&config.medium_synonyms)
            .chain(&config.optional_synonyms)
            .chain(&config.watch_synonyms)
        {
            assert_eq!(word, &word.to_lowercase());
        }
    }

    #[test]
    fn list_names_cover_all_lists() {
        let config = SyncConfig::default();
        assert_eq!(config.list_name(TaskList::Required), "required");
        assert_eq!(config.list_name(TaskList::Optional), "personal/optional");
        assert_eq!(config.list_name(TaskList::Done), "done");
    }

    #[test]
    fn label_names_cover_all_labels() {
        let config = SyncConfig::default();
        assert_eq!(config.label_name(TaskLabel::Urgent), "urgent");
        assert_eq!(config.label_name(TaskLabel::Important), "important");
        assert_eq!(config.label_name(TaskLabel::NotImportant), "not important");
        assert_eq!(config.label_name(TaskLabel::Optional), "optional");
    }
}
