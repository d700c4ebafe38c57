//! Subject parser: extracts structured task modifiers from free-text
//! email subjects.
//!
//! Pure string parsing, no I/O. Malformed input always degrades to the
//! default modifiers, never to an error.

use tracing::{debug, warn};

use crate::config::SyncConfig;

/// Priority tier of a task. Closed set: every subject maps to exactly one
/// tier, with [`Priority::Normal`] as the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    /// High priority ("2", "urgent", ...).
    Urgent,
    /// Medium priority ("1", "med", ...).
    Important,
    /// Explicitly deprioritized ("-1", "watch", ...).
    Optional,
    /// Default tier, also selected by the "0"/"low" synonyms.
    #[default]
    Normal,
}

/// Modifiers extracted from a subject line.
///
/// Built once per subject, then handed unchanged to the placement
/// resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskModifiers {
    /// Whether the task goes on the required list.
    pub required: bool,
    /// Priority tier, deciding the card label.
    pub priority: Priority,
}

/// Parse a subject line into task modifiers.
///
/// The subject is lowercased and trimmed, then tokenized on whitespace:
/// token 0 must be the marker word, token 1 may mark the task mandatory,
/// token 2 may pick a priority tier. Missing or unrecognized tokens leave
/// the corresponding field at its default.
///
/// A subject that does not start with the marker logs a warning and
/// returns the defaults; callers must accept that result.
pub fn parse(subject: &str, config: &SyncConfig) -> TaskModifiers {
    let mut modifiers = TaskModifiers::default();
    let cleaned = subject.trim().to_lowercase();

    if !cleaned.starts_with(&config.marker.trim().to_lowercase()) {
        warn!(subject, "subject not in task format, using default modifiers");
        return modifiers;
    }

    let mut tokens = cleaned.split_whitespace().skip(1);

    if let Some(word) = tokens.next() {
        modifiers.required = matches_any(word, &config.mandatory_synonyms);
    }

    if let Some(word) = tokens.next() {
        // High and medium are checked before the optional fall-through.
        modifiers.priority = if matches_any(word, &config.high_synonyms) {
            Priority::Urgent
        } else if matches_any(word, &config.medium_synonyms) {
            Priority::Important
        } else if matches_any(word, &config.optional_synonyms) {
            Priority::Optional
        } else {
            Priority::Normal
        };
    }

    debug!(subject, ?modifiers, "parsed subject");
    modifiers
}

fn matches_any(word: &str, synonyms: &[String]) -> bool {
    synonyms.iter().any(|s| s.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_default(subject: &str) -> TaskModifiers {
        parse(subject, &SyncConfig::default())
    }

    #[test]
    fn non_marker_subject_returns_defaults() {
        for subject in ["Meeting tomorrow", "Re: invoice", "", "   ", "don't"] {
            let modifiers = parse_default(subject);
            assert!(!modifiers.required, "subject: {subject:?}");
            assert_eq!(modifiers.priority, Priority::Normal);
        }
    }

    #[test]
    fn marker_alone_returns_defaults() {
        assert_eq!(parse_default("do"), TaskModifiers::default());
        assert_eq!(parse_default("  DO  "), TaskModifiers::default());
    }

    #[test]
    fn mandatory_synonyms_set_required() {
        for word in ["mandatory", "m", "-m", "mdtry", "mdtory", "M", "MDTRY"] {
            let modifiers = parse_default(&format!("do {word} buy milk"));
            assert!(modifiers.required, "word: {word}");
        }
    }

    #[test]
    fn unknown_second_token_leaves_required_false() {
        assert!(!parse_default("do please buy milk").required);
    }

    #[test]
    fn mandatory_plus_high_priority() {
        for mandatory in ["mandatory", "m", "mdtry"] {
            for high in ["2", "high", "priority", "important", "urgent"] {
                let modifiers = parse_default(&format!("do {mandatory} {high} buy milk"));
                assert!(modifiers.required);
                assert_eq!(modifiers.priority, Priority::Urgent);
            }
        }
    }

    #[test]
    fn priority_tiers_from_third_token() {
        assert_eq!(parse_default("do m 2 x").priority, Priority::Urgent);
        assert_eq!(parse_default("do m med x").priority, Priority::Important);
        assert_eq!(parse_default("do m watch x").priority, Priority::Optional);
        assert_eq!(parse_default("do m -1 x").priority, Priority::Optional);
        assert_eq!(parse_default("do m low x").priority, Priority::Normal);
        assert_eq!(parse_default("do m 0 x").priority, Priority::Normal);
        assert_eq!(parse_default("do m whatever x").priority, Priority::Normal);
    }

    #[test]
    fn missing_third_token_keeps_default_priority() {
        let modifiers = parse_default("do m");
        assert!(modifiers.required);
        assert_eq!(modifiers.priority, Priority::Normal);
    }

    #[test]
    fn parsing_is_case_insensitive() {
        let modifiers = parse_default("Do M URGENT buy milk");
        assert!(modifiers.required);
        assert_eq!(modifiers.priority, Priority::Urgent);
    }

    #[test]
    fn extra_whitespace_is_tolerated() {
        let modifiers = parse_default("  do   m    2   buy milk ");
        assert!(modifiers.required);
        assert_eq!(modifiers.priority, Priority::Urgent);
    }
}
