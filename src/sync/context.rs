//! Per-run board context: resolved list and label handles.
//!
//! Built once at the start of a pass from the board's own enumeration,
//! replacing repeated by-name scans with O(1) lookups. A configured list
//! or label name that is absent on the board is a fatal configuration
//! error, surfaced here as the single clear failure point.

use tracing::debug;

use crate::config::SyncConfig;
use crate::error::BoardError;
use crate::placement::{TaskLabel, TaskList};
use crate::services::board::{BoardLabel, BoardList, BoardService};

/// Resolved board handles for one sync pass.
#[derive(Debug, Clone)]
pub struct BoardContext {
    optional_list: String,
    required_list: String,
    done_list: String,
    optional_label: String,
    normal_label: String,
    important_label: String,
    urgent_label: String,
}

fn find_list(lists: &[BoardList], name: &str) -> Result<String, BoardError> {
    let wanted = name.to_lowercase();
    lists
        .iter()
        .find(|l| l.name.to_lowercase() == wanted)
        .map(|l| l.id.clone())
        .ok_or_else(|| BoardError::MissingList(name.to_string()))
}

fn find_label(labels: &[BoardLabel], name: &str) -> Result<String, BoardError> {
    let wanted = name.to_lowercase();
    labels
        .iter()
        .find(|l| l.name.to_lowercase() == wanted)
        .map(|l| l.id.clone())
        .ok_or_else(|| BoardError::MissingLabel(name.to_string()))
}

impl BoardContext {
    /// Enumerate the board once and resolve every configured list and
    /// label name (case-insensitively) to its id.
    pub async fn build(
        board: &dyn BoardService,
        config: &SyncConfig,
    ) -> Result<Self, BoardError> {
        let lists = board.lists().await?;
        let labels = board.labels().await?;

        let ctx = Self {
            optional_list: find_list(&lists, config.list_name(TaskList::Optional))?,
            required_list: find_list(&lists, config.list_name(TaskList::Required))?,
            done_list: find_list(&lists, config.list_name(TaskList::Done))?,
            optional_label: find_label(&labels, config.label_name(TaskLabel::Optional))?,
            normal_label: find_label(&labels, config.label_name(TaskLabel::NotImportant))?,
            important_label: find_label(&labels, config.label_name(TaskLabel::Important))?,
            urgent_label: find_label(&labels, config.label_name(TaskLabel::Urgent))?,
        };
        debug!("resolved board lists and labels");
        Ok(ctx)
    }

    pub fn list_id(&self, list: TaskList) -> &str {
        match list {
            TaskList::Optional => &self.optional_list,
            TaskList::Required => &self.required_list,
            TaskList::Done => &self.done_list,
        }
    }

    pub fn label_id(&self, label: TaskLabel) -> &str {
        match label {
            TaskLabel::Optional => &self.optional_label,
            TaskLabel::NotImportant => &self.normal_label,
            TaskLabel::Important => &self.important_label,
            TaskLabel::Urgent => &self.urgent_label,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::services::board::{Card, CardPosition};

    struct StaticBoard {
        lists: Vec<BoardList>,
        labels: Vec<BoardLabel>,
    }

    #[async_trait]
    impl BoardService for StaticBoard {
        async fn lists(&self) -> Result<Vec<BoardList>, BoardError> {
            Ok(self.lists.clone())
        }

        async fn labels(&self) -> Result<Vec<BoardLabel>, BoardError> {
            Ok(self.labels.clone())
        }

        async fn add_card(
            &self,
            _list_id: &str,
            _title: &str,
            _position: CardPosition,
            _label_ids: &[&str],
        ) -> Result<Card, BoardError> {
            unreachable!("context building never creates cards")
        }

        async fn list_cards(&self, _list_id: &str) -> Result<Vec<Card>, BoardError> {
            unreachable!("context building never reads cards")
        }

        async fn delete_card(&self, _card_id: &str) -> Result<(), BoardError> {
            unreachable!("context building never deletes cards")
        }
    }

    fn full_board() -> StaticBoard {
        let list = |id: &str, name: &str| BoardList {
            id: id.to_string(),
            name: name.to_string(),
        };
        let label = |id: &str, name: &str| BoardLabel {
            id: id.to_string(),
            name: name.to_string(),
        };
        StaticBoard {
            lists: vec![
                list("l1", "Personal/Optional"),
                list("l2", "Required"),
                list("l3", "Done"),
            ],
            labels: vec![
                label("b1", "Optional"),
                label("b2", "Not Important"),
                label("b3", "Important"),
                label("b4", "Urgent"),
            ],
        }
    }

    #[tokio::test]
    async fn resolves_names_case_insensitively() {
        let ctx = BoardContext::build(&full_board(), &SyncConfig::default())
            .await
            .unwrap();

        assert_eq!(ctx.list_id(TaskList::Required), "l2");
        assert_eq!(ctx.list_id(TaskList::Done), "l3");
        assert_eq!(ctx.label_id(TaskLabel::Urgent), "b4");
        assert_eq!(ctx.label_id(TaskLabel::NotImportant), "b2");
    }

    #[tokio::test]
    async fn missing_list_is_a_configuration_error() {
        let mut board = full_board();
        board.lists.retain(|l| l.name != "Done");

        let err = BoardContext::build(&board, &SyncConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::MissingList(name) if name == "done"));
    }

    #[tokio::test]
    async fn missing_label_is_a_configuration_error() {
        let mut board = full_board();
        board.labels.retain(|l| l.name != "Urgent");

        let err = BoardContext::build(&board, &SyncConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, BoardError::MissingLabel(name) if name == "urgent"));
    }
}
