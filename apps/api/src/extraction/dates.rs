//! Date and date-range recognition for résumé lines.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Month names as they appear on résumés. `Sept` sits beside `Sep` on purpose.
const MONTH: &str = "(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec|\
January|February|March|April|June|July|August|September|October|November|December)";

/// `<month?> <yyyy>` then `-`, `to`, en/em dash or a wide gap, then `<month?> <yyyy|present>`.
static DATE_RANGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)({MONTH}?\s*\d{{4}})\s*(?:[-–—]|to|\s{{2,}})\s*({MONTH}?\s*(?:\d{{4}}|present))"
    ))
    .expect("date range pattern is valid")
});

static SINGLE_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)^{MONTH}?\s*\d{{4}}$")).expect("single date pattern is valid")
});

/// A start/end pair lifted out of a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

/// Finds the first date range anywhere in `line`.
pub fn find_date_range(line: &str) -> Option<DateRange> {
    let caps = DATE_RANGE.captures(line)?;
    Some(DateRange {
        start: caps.get(1)?.as_str().trim().to_string(),
        end: caps.get(2)?.as_str().trim().to_string(),
    })
}

pub fn has_date_range(line: &str) -> bool {
    DATE_RANGE.is_match(line)
}

/// True when the whole line is one date, e.g. `2023` or `Mar 2023`.
pub fn is_single_date(line: &str) -> bool {
    SINGLE_DATE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(line: &str) -> Option<String> {
        find_date_range(line).map(|r| r.to_string())
    }

    #[test]
    fn test_year_range_with_hyphen() {
        assert_eq!(range("2018 - 2022").as_deref(), Some("2018 - 2022"));
        assert_eq!(range("2018-2022").as_deref(), Some("2018 - 2022"));
    }

    #[test]
    fn test_month_year_range() {
        assert_eq!(
            range("Jan 2023 - Mar 2023").as_deref(),
            Some("Jan 2023 - Mar 2023")
        );
    }

    #[test]
    fn test_full_month_names_and_sept() {
        assert_eq!(
            range("September 2021 to June 2022").as_deref(),
            Some("September 2021 - June 2022")
        );
        assert_eq!(
            range("Sept 2020 – Present").as_deref(),
            Some("Sept 2020 - Present")
        );
    }

    #[test]
    fn test_em_dash_and_wide_gap_separators() {
        assert_eq!(range("2019—2021").as_deref(), Some("2019 - 2021"));
        assert_eq!(range("May 2019    Aug 2019").as_deref(), Some("May 2019 - Aug 2019"));
    }

    #[test]
    fn test_present_is_case_insensitive() {
        assert_eq!(range("jun 2021 - present").as_deref(), Some("jun 2021 - present"));
        assert_eq!(range("2021 - PRESENT").as_deref(), Some("2021 - PRESENT"));
    }

    #[test]
    fn test_range_found_inside_longer_line() {
        assert_eq!(
            range("Software Intern, Acme (Jun 2022 - Aug 2022)").as_deref(),
            Some("Jun 2022 - Aug 2022")
        );
    }

    #[test]
    fn test_no_range_in_plain_text() {
        assert!(range("Built a REST API in Rust").is_none());
        assert!(range("2023").is_none());
        assert!(!has_date_range("Mar 2023"));
    }

    #[test]
    fn test_single_date_whole_line_only() {
        assert!(is_single_date("2023"));
        assert!(is_single_date("Mar 2023"));
        assert!(is_single_date("december 2020"));
        assert!(!is_single_date("Shipped in 2023"));
        assert!(!is_single_date("2023 - 2024"));
        assert!(!is_single_date("202"));
    }
}
