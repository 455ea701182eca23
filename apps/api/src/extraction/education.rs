use crate::extraction::accumulator::{always, discard, extract_entries, EntryAccumulator, Rule};
use crate::extraction::dates::{find_date_range, has_date_range};
use crate::extraction::rules::{is_degree, is_institution, is_score_line};
use crate::models::resume::EducationEntry;

/// Builds [`EducationEntry`] values from the EDUCATION section.
///
/// A new institution line closes the entry in progress once that entry has an
/// institution or a degree; a lone duration carries over to the next school.
#[derive(Debug, Default)]
pub struct EducationAccumulator {
    current: EducationEntry,
}

impl EducationAccumulator {
    fn set_duration(&mut self, line: &str) -> Option<EducationEntry> {
        self.current.duration = find_date_range(line).map(|range| range.to_string());
        None
    }

    fn open_institution(&mut self, line: &str) -> Option<EducationEntry> {
        let closed = if self.current.is_identified() {
            self.flush()
        } else {
            None
        };
        self.current.institution = Some(line.to_string());
        closed
    }

    fn set_degree(&mut self, line: &str) -> Option<EducationEntry> {
        self.current.degree = Some(line.to_string());
        None
    }
}

fn date_range_line(_acc: &EducationAccumulator, line: &str) -> bool {
    has_date_range(line)
}

fn institution_line(_acc: &EducationAccumulator, line: &str) -> bool {
    is_institution(line)
}

fn degree_line(_acc: &EducationAccumulator, line: &str) -> bool {
    is_degree(line)
}

fn score_line(_acc: &EducationAccumulator, line: &str) -> bool {
    is_score_line(line)
}

impl EntryAccumulator for EducationAccumulator {
    type Entry = EducationEntry;

    const RULES: &'static [Rule<Self, Self::Entry>] = &[
        Rule {
            name: "duration",
            matches: date_range_line,
            apply: EducationAccumulator::set_duration,
        },
        Rule {
            name: "institution",
            matches: institution_line,
            apply: EducationAccumulator::open_institution,
        },
        Rule {
            name: "degree",
            matches: degree_line,
            apply: EducationAccumulator::set_degree,
        },
        Rule {
            name: "score",
            matches: score_line,
            apply: discard,
        },
        Rule {
            name: "other",
            matches: always,
            apply: discard,
        },
    ];

    fn flush(&mut self) -> Option<EducationEntry> {
        let entry = std::mem::take(&mut self.current);
        entry.is_identified().then_some(entry)
    }
}

pub fn extract_education(text: &str) -> Vec<EducationEntry> {
    extract_entries::<EducationAccumulator>(text)
}
