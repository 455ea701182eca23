//! Structure recovery for generated cover letters.
//!
//! The generator is asked for a fixed layout but small models drift: labels
//! leak through, blank lines vanish, the sign-off goes missing. Parsing peels
//! markers off both ends of the text, groups what is left into paragraphs, and
//! falls back to packing sentences when the body came back as one block.
//!
//! A line holding nothing but a `Paragraph N:` label contributes nothing to
//! its block, so the joined paragraph never gains a doubled space.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::models::cover_letter::{CoverLetterDocument, MAX_BODY_PARAGRAPHS};

/// `Paragraph 2:` style labels echoed back from the prompt.
static PARAGRAPH_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Paragraph\s*\d+:\s*").expect("paragraph label pattern is valid"));

/// Fallback paragraphs are closed once they grow past this many characters.
const PACKED_PARAGRAPH_CHARS: usize = 120;

/// Paragraphs this short or shorter are treated as noise.
const MIN_PARAGRAPH_CHARS: usize = 40;

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    line.to_lowercase().starts_with(prefix)
}

/// Parses raw generated text into a [`CoverLetterDocument`]. Never fails;
/// markers that cannot be found keep their defaults.
pub fn parse_generated_letter(text: &str) -> CoverLetterDocument {
    let lines: Vec<&str> = text.split('\n').map(str::trim_end).collect();
    let mut doc = CoverLetterDocument::default();

    let first = lines.iter().position(|line| !is_blank(line));
    let last = lines.iter().rposition(|line| !is_blank(line));
    let mut rest: &[&str] = match (first, last) {
        (Some(first), Some(last)) => &lines[first..=last],
        _ => &[],
    };

    if let Some((head, tail)) = rest.split_first() {
        if starts_with_ignore_case(head, "dear") {
            doc.greeting = head.trim().to_string();
            rest = tail;
        }
    }

    if let Some((head, tail)) = rest.split_first() {
        if is_blank(head) {
            rest = tail;
        }
    }

    if let Some((last, init)) = rest.split_last() {
        if !is_blank(last) && !starts_with_ignore_case(last, "sincerely") {
            doc.candidate_name = last.trim().to_string();
            rest = init;
        }
    }

    if let Some((last, init)) = rest.split_last() {
        if starts_with_ignore_case(last, "sincerely") {
            doc.sign_off = last.trim().to_string();
            rest = init;
        }
    }

    while let Some((last, init)) = rest.split_last() {
        if !is_blank(last) {
            break;
        }
        rest = init;
    }

    if let Some((last, init)) = rest.split_last() {
        if last.to_lowercase().contains("look forward") {
            doc.closing = last.trim().to_string();
            rest = init;
        }
    }

    doc.body = extract_paragraphs(rest);
    doc
}

/// Blank-line separated blocks, each joined into one paragraph.
fn extract_paragraphs(lines: &[&str]) -> Vec<String> {
    let mut paragraphs: Vec<String> = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in lines {
        if is_blank(line) {
            if !block.is_empty() {
                paragraphs.push(block.join(" "));
                block.clear();
            }
            continue;
        }
        let cleaned = match PARAGRAPH_LABEL.find(line) {
            Some(label) => &line[label.end()..],
            None => line,
        }
        .trim();
        if !cleaned.is_empty() {
            block.push(cleaned);
        }
    }
    if !block.is_empty() {
        paragraphs.push(block.join(" "));
    }

    if paragraphs.len() <= 1 {
        debug!(blocks = paragraphs.len(), "letter body is one block, packing sentences");
        paragraphs = pack_sentences(&paragraphs.join(" "));
    }

    paragraphs
        .into_iter()
        .filter(|paragraph| paragraph.chars().count() > MIN_PARAGRAPH_CHARS)
        .take(MAX_BODY_PARAGRAPHS)
        .collect()
}

/// Splits after `.`, `!` or `?` followed by whitespace.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();

    while let Some((index, ch)) = chars.next() {
        if ch.is_whitespace() && matches!(prev, Some('.' | '!' | '?')) {
            sentences.push(&text[start..index]);
            let mut end = index + ch.len_utf8();
            while let Some(&(next_index, next)) = chars.peek() {
                if !next.is_whitespace() {
                    break;
                }
                end = next_index + next.len_utf8();
                chars.next();
            }
            start = end;
            prev = None;
            continue;
        }
        prev = Some(ch);
    }
    sentences.push(&text[start..]);
    sentences
}

/// Greedily groups sentences, closing a paragraph once it exceeds
/// [`PACKED_PARAGRAPH_CHARS`].
fn pack_sentences(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut buffer: Vec<&str> = Vec::new();

    for sentence in split_sentences(text) {
        buffer.push(sentence);
        let joined = buffer.join(" ");
        if joined.chars().count() > PACKED_PARAGRAPH_CHARS {
            paragraphs.push(joined);
            buffer.clear();
        }
    }
    if !buffer.is_empty() {
        paragraphs.push(buffer.join(" "));
    }
    paragraphs
}

#[cfg(test)]
mod tests {
    use super::*;

    const P1: &str = "I am writing to apply for the Backend Engineer role at Acme.";
    const P2: &str = "My work with Python and Docker maps directly onto your stack.";
    const P3: &str = "I built a résumé parser with FastAPI that extracts structured data.";
    const P4: &str = "Acme's focus on reliable infrastructure is what draws me to the team.";

    fn full_letter() -> String {
        format!(
            "Dear Hiring Manager at Acme,\n\n{P1}\n\n{P2}\n\n{P3}\n\n{P4}\n\n\
I look forward to discussing this opportunity further.\n\nSincerely,\nJane Doe\n"
        )
    }

    #[test]
    fn test_well_formed_letter_recovers_every_field() {
        let doc = parse_generated_letter(&full_letter());
        assert_eq!(doc.greeting, "Dear Hiring Manager at Acme,");
        assert_eq!(doc.body, vec![P1, P2, P3, P4]);
        assert_eq!(
            doc.closing,
            "I look forward to discussing this opportunity further."
        );
        assert_eq!(doc.sign_off, "Sincerely,");
        assert_eq!(doc.candidate_name, "Jane Doe");
    }

    #[test]
    fn test_missing_markers_fall_back_to_defaults() {
        let text = format!("{P1}\n\n{P2}");
        let doc = parse_generated_letter(&text);
        assert_eq!(doc.greeting, "Dear Hiring Manager,");
        assert_eq!(doc.sign_off, "Sincerely");
        assert_eq!(
            doc.closing,
            "I look forward to discussing this opportunity further."
        );
        // The last non-blank line is taken as the name when no sign-off follows it.
        assert_eq!(doc.candidate_name, P2);
        assert_eq!(doc.body, vec![P1]);
    }

    #[test]
    fn test_empty_text_yields_default_document() {
        assert_eq!(parse_generated_letter(""), CoverLetterDocument::default());
        assert_eq!(
            parse_generated_letter("\n   \n\t\n"),
            CoverLetterDocument::default()
        );
    }

    #[test]
    fn test_paragraph_labels_are_stripped() {
        let text = format!(
            "Dear Team,\n\nParagraph 1: {P1}\n\nParagraph 2:{P2}\n\nParagraph 3:\n{P3}\n\nSincerely,"
        );
        let doc = parse_generated_letter(&text);
        assert_eq!(doc.body, vec![P1, P2, P3]);
        assert_eq!(doc.candidate_name, "");
        assert_eq!(doc.sign_off, "Sincerely,");
    }

    #[test]
    fn test_block_lines_are_joined_with_spaces() {
        let text = "Dear Team,\n\nI am applying for the platform role\nbecause I enjoy building internal tools.\n\n\
I have shipped three services in Rust and\nmaintained them in production for two years.\n\nSincerely,\nJo";
        let doc = parse_generated_letter(text);
        assert_eq!(
            doc.body,
            vec![
                "I am applying for the platform role because I enjoy building internal tools.",
                "I have shipped three services in Rust and maintained them in production for two years.",
            ]
        );
    }

    #[test]
    fn test_run_on_body_is_packed_into_paragraphs() {
        let sentence = "I have spent three years building backend services in Python and Rust.";
        let run_on = vec![sentence; 8].join(" ");
        assert!(run_on.chars().count() > 480);

        let text = format!("Dear Hiring Manager,\n{run_on}\nSincerely,\nJane Doe");
        let doc = parse_generated_letter(&text);

        assert!(doc.body.len() > 1);
        assert!(doc.body.len() <= MAX_BODY_PARAGRAPHS);
        for paragraph in &doc.body[..doc.body.len() - 1] {
            assert!(paragraph.chars().count() > PACKED_PARAGRAPH_CHARS);
        }
    }

    #[test]
    fn test_short_fragments_are_dropped() {
        let text = format!("Dear Team,\n\nThanks!\n\n{P1}\n\nOK\n\n{P2}\n\nSincerely,\nJo");
        let doc = parse_generated_letter(&text);
        assert_eq!(doc.body, vec![P1, P2]);
    }

    #[test]
    fn test_body_is_capped_at_four_paragraphs() {
        let text = format!("Dear Team,\n\n{P1}\n\n{P2}\n\n{P3}\n\n{P4}\n\n{P1}\n\nSincerely,\nJo");
        let doc = parse_generated_letter(&text);
        assert_eq!(doc.body, vec![P1, P2, P3, P4]);
    }

    #[test]
    fn test_split_sentences_keeps_punctuation() {
        assert_eq!(
            split_sentences("One. Two!  Three? Four"),
            vec!["One.", "Two!", "Three?", "Four"]
        );
        assert_eq!(split_sentences("v1.2 shipped"), vec!["v1.2 shipped"]);
    }

    #[test]
    fn test_pack_sentences_keeps_short_tail() {
        let long = "a".repeat(130);
        let packed = pack_sentences(&format!("{long}. Short tail."));
        assert_eq!(packed, vec![format!("{long}."), "Short tail.".to_string()]);
    }
}
