//! Placement resolver: maps task modifiers to a board destination.

use crate::subject::{Priority, TaskModifiers};

/// Board lists the engine knows about. `Done` is only ever a sweep target,
/// never a resolver output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskList {
    Optional,
    Required,
    Done,
}

/// Board labels, one per priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskLabel {
    Optional,
    NotImportant,
    Important,
    Urgent,
}

/// Destination of a new card: a list plus exactly one label. Derived
/// deterministically from the modifiers, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub list: TaskList,
    pub label: TaskLabel,
}

/// Resolve modifiers into a board placement.
///
/// The label mapping is total over [`Priority`]; adding a tier will not
/// compile until this match is extended.
pub fn resolve(modifiers: TaskModifiers) -> Placement {
    let list = if modifiers.required {
        TaskList::Required
    } else {
        TaskList::Optional
    };

    let label = match modifiers.priority {
        Priority::Urgent => TaskLabel::Urgent,
        Priority::Important => TaskLabel::Important,
        Priority::Optional => TaskLabel::Optional,
        Priority::Normal => TaskLabel::NotImportant,
    };

    Placement { list, label }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn modifiers(required: bool, priority: Priority) -> TaskModifiers {
        TaskModifiers { required, priority }
    }

    #[test]
    fn required_urgent_goes_to_required_list() {
        let placement = resolve(modifiers(true, Priority::Urgent));
        assert_eq!(placement.list, TaskList::Required);
        assert_eq!(placement.label, TaskLabel::Urgent);
    }

    #[test]
    fn default_modifiers_go_to_optional_list() {
        let placement = resolve(TaskModifiers::default());
        assert_eq!(placement.list, TaskList::Optional);
        assert_eq!(placement.label, TaskLabel::NotImportant);
    }

    #[test]
    fn optional_priority_gets_optional_label() {
        let placement = resolve(modifiers(false, Priority::Optional));
        assert_eq!(placement.list, TaskList::Optional);
        assert_eq!(placement.label, TaskLabel::Optional);
    }

    #[test]
    fn important_priority_gets_important_label() {
        let placement = resolve(modifiers(true, Priority::Important));
        assert_eq!(placement.list, TaskList::Required);
        assert_eq!(placement.label, TaskLabel::Important);
    }

    #[test]
    fn list_depends_only_on_required_flag() {
        for priority in [
            Priority::Urgent,
            Priority::Important,
            Priority::Optional,
            Priority::Normal,
        ] {
            assert_eq!(resolve(modifiers(true, priority)).list, TaskList::Required);
            assert_eq!(resolve(modifiers(false, priority)).list, TaskList::Optional);
        }
    }
}
