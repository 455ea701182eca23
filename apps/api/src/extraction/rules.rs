//! Per-domain line predicates shared by the entry accumulators.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::dates::{has_date_range, is_single_date};
use crate::extraction::vocabulary::starts_with_tech;

static INSTITUTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)university|institute|college|school").expect("institution pattern is valid")
});

static DEGREE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)bachelor|b\.tech|btech|master|m\.tech|mtech|phd|secondary|senior secondary|high school",
    )
    .expect("degree pattern is valid")
});

static ROLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)intern|engineer|developer|analyst|software|backend|frontend|full[- ]?stack")
        .expect("role pattern is valid")
});

const SCORE_MARKERS: &[&str] = &["cgpa", "percentage", "%"];

/// Longest line, in words, that can still be an organization name.
pub const MAX_ORGANIZATION_WORDS: usize = 4;

/// Longest line, in words, that can still be a project title.
pub const MAX_TITLE_WORDS: usize = 10;

pub fn is_institution(line: &str) -> bool {
    INSTITUTION.is_match(line)
}

pub fn is_degree(line: &str) -> bool {
    DEGREE.is_match(line)
}

pub fn is_role(line: &str) -> bool {
    ROLE.is_match(line)
}

/// CGPA / percentage lines carry no entry identity.
pub fn is_score_line(line: &str) -> bool {
    let lower = line.to_lowercase();
    SCORE_MARKERS.iter().any(|marker| lower.contains(marker))
}

pub fn word_count(line: &str) -> usize {
    line.split_whitespace().count()
}

/// Short, non-sentence, non-date, non-tech lines can open a project.
pub fn is_title_candidate(line: &str) -> bool {
    word_count(line) <= MAX_TITLE_WORDS
        && !starts_with_tech(line)
        && !has_date_range(line)
        && !is_single_date(line)
        && !line.ends_with('.')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_institution_keywords() {
        assert!(is_institution("Indian Institute of Technology, Delhi"));
        assert!(is_institution("Delhi Public SCHOOL"));
        assert!(is_institution("Stanford University"));
        assert!(!is_institution("B.Tech Computer Science"));
    }

    #[test]
    fn test_degree_keywords() {
        assert!(is_degree("B.Tech Computer Science"));
        assert!(is_degree("BTech in ECE"));
        assert!(is_degree("Master of Science"));
        assert!(is_degree("Senior Secondary (XII)"));
        assert!(is_degree("PhD, Machine Learning"));
        assert!(!is_degree("Computer Science"));
    }

    #[test]
    fn test_role_keywords() {
        assert!(is_role("Software Engineer"));
        assert!(is_role("Full-Stack Developer"));
        assert!(is_role("full stack"));
        assert!(is_role("Fullstack"));
        assert!(is_role("Research Intern"));
        assert!(!is_role("Google"));
    }

    #[test]
    fn test_score_lines() {
        assert!(is_score_line("CGPA: 8.9/10"));
        assert!(is_score_line("Percentage: 92"));
        assert!(is_score_line("94%"));
        assert!(!is_score_line("Graduated with honors"));
    }

    #[test]
    fn test_title_candidate_accepts_short_names() {
        assert!(is_title_candidate("Resume Parser"));
        assert!(is_title_candidate("Chat App | Github"));
    }

    #[test]
    fn test_title_candidate_rejections() {
        assert!(!is_title_candidate("Tech: Python, Docker"));
        assert!(!is_title_candidate("technologies used: React"));
        assert!(!is_title_candidate("Jan 2023 - Mar 2023"));
        assert!(!is_title_candidate("2023"));
        assert!(!is_title_candidate("Built a parser."));
        assert!(!is_title_candidate(
            "one two three four five six seven eight nine ten eleven"
        ));
    }
}
