//! Search phases and the help text shown for each.

use crate::endpoint::Counts;

/// Current interaction status of the widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Fewer than the minimum number of characters entered (also the initial phase)
    TooShort,
    /// A search is pending or in flight
    Searching,
    /// The last search matched something
    Resolved(Counts),
    /// The last search for `query` matched nothing
    Empty { query: String },
    /// The last search request failed
    Failed,
}

impl Phase {
    /// Help text displayed under the search input.
    pub fn help_text(&self, min_chars: usize) -> String {
        match self {
            Phase::TooShort => format!("Enter {} or more characters...", min_chars),
            Phase::Searching => "Searching...".to_string(),
            Phase::Resolved(counts) => format!(
                "Showing {}, {}, and {}",
                pluralise("app", counts.apps),
                pluralise("model", counts.models),
                pluralise("object", counts.objects)
            ),
            Phase::Empty { query } => format!("No results for \"{}\"", query),
            Phase::Failed => "An unexpected error occurred".to_string(),
        }
    }
}

/// Formats `"{count} {word}"`, appending an `s` unless the count is one.
pub fn pluralise(word: &str, count: u64) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralise() {
        assert_eq!(pluralise("app", 0), "0 apps");
        assert_eq!(pluralise("app", 1), "1 app");
        assert_eq!(pluralise("app", 2), "2 apps");
        assert_eq!(pluralise("object", 11), "11 objects");
    }

    #[test]
    fn test_resolved_help_text() {
        let phase = Phase::Resolved(Counts::new(1, 0, 5));
        assert_eq!(phase.help_text(2), "Showing 1 app, 0 models, and 5 objects");

        let phase = Phase::Resolved(Counts::new(2, 2, 3));
        assert_eq!(phase.help_text(2), "Showing 2 apps, 2 models, and 3 objects");
    }

    #[test]
    fn test_other_help_texts() {
        assert_eq!(Phase::TooShort.help_text(2), "Enter 2 or more characters...");
        assert_eq!(Phase::TooShort.help_text(3), "Enter 3 or more characters...");
        assert_eq!(Phase::Searching.help_text(2), "Searching...");
        assert_eq!(Phase::Failed.help_text(2), "An unexpected error occurred");
        assert_eq!(
            Phase::Empty {
                query: "zero matches".to_string()
            }
            .help_text(2),
            "No results for \"zero matches\""
        );
    }

    #[test]
    fn test_help_text_never_empty() {
        let phases = [
            Phase::TooShort,
            Phase::Searching,
            Phase::Resolved(Counts::new(0, 0, 1)),
            Phase::Empty {
                query: String::new(),
            },
            Phase::Failed,
        ];
        for phase in phases {
            assert!(!phase.help_text(2).is_empty());
        }
    }
}
