//! Line-by-line entry building shared by the education, experience and
//! project extractors.
//!
//! Each extractor is a small state machine: an ordered table of rules is
//! tried against every content line and the first rule whose predicate holds
//! applies its action. Actions that open a new entry hand back the entry they
//! closed, and the driver flushes once more at end of input.

use tracing::trace;

/// One row of a classification table.
pub struct Rule<A, E> {
    pub name: &'static str,
    pub matches: fn(&A, &str) -> bool,
    /// Returns an entry when applying the rule closes the previous one.
    pub apply: fn(&mut A, &str) -> Option<E>,
}

pub trait EntryAccumulator: Default + 'static {
    type Entry: 'static;

    /// Evaluated top to bottom; the first match wins.
    const RULES: &'static [Rule<Self, Self::Entry>];

    /// Returns the in-progress entry if it is identified, and starts over.
    fn flush(&mut self) -> Option<Self::Entry>;
}

/// Trimmed, non-empty lines of a section.
pub fn content_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Runs `A`'s rule table over every content line of `text`.
pub fn extract_entries<A: EntryAccumulator>(text: &str) -> Vec<A::Entry> {
    let mut acc = A::default();
    let mut entries = Vec::new();

    for line in content_lines(text) {
        let Some(rule) = A::RULES.iter().find(|rule| (rule.matches)(&acc, line)) else {
            continue;
        };
        trace!(rule = rule.name, line, "line classified");
        entries.extend((rule.apply)(&mut acc, line));
    }

    entries.extend(acc.flush());
    entries
}

/// Action for rules whose only job is to swallow the line.
pub fn discard<A, E>(_acc: &mut A, _line: &str) -> Option<E> {
    None
}

/// Predicate for catch-all rules at the bottom of a table.
pub fn always<A>(_acc: &A, _line: &str) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects words into entries; `---` closes the current entry.
    #[derive(Default)]
    struct WordBlocks {
        words: Vec<String>,
    }

    fn is_separator(_acc: &WordBlocks, line: &str) -> bool {
        line == "---"
    }

    fn close(acc: &mut WordBlocks, _line: &str) -> Option<Vec<String>> {
        acc.flush()
    }

    fn is_comment(_acc: &WordBlocks, line: &str) -> bool {
        line.starts_with('#')
    }

    fn push_word(acc: &mut WordBlocks, line: &str) -> Option<Vec<String>> {
        acc.words.push(line.to_string());
        None
    }

    impl EntryAccumulator for WordBlocks {
        type Entry = Vec<String>;

        const RULES: &'static [Rule<Self, Self::Entry>] = &[
            Rule {
                name: "separator",
                matches: is_separator,
                apply: close,
            },
            Rule {
                name: "comment",
                matches: is_comment,
                apply: discard,
            },
            Rule {
                name: "word",
                matches: always,
                apply: push_word,
            },
        ];

        fn flush(&mut self) -> Option<Self::Entry> {
            let words = std::mem::take(&mut self.words);
            (!words.is_empty()).then_some(words)
        }
    }

    #[test]
    fn test_content_lines_trims_and_skips_blanks() {
        let lines: Vec<_> = content_lines("  a  \n\n \t\n b\r\n").collect();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_first_matching_rule_wins_and_final_flush_runs() {
        let entries = extract_entries::<WordBlocks>("a\n# note\nb\n---\nc\n");
        assert_eq!(
            entries,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["c".to_string()]
            ]
        );
    }

    #[test]
    fn test_unidentified_entries_are_dropped() {
        let entries = extract_entries::<WordBlocks>("---\n---\n# only comments\n");
        assert!(entries.is_empty());
    }
}
