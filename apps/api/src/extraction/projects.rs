//! Project entries from the PROJECTS section.
//!
//! Segmentation hinges on the title boundary: a short, non-date, non-sentence
//! line opens a new project only when nothing is open yet or the open project
//! already has description text. A second title-like line straight after a
//! title is treated as ordinary content of the open project.

use tracing::debug;

use crate::extraction::accumulator::{always, discard, extract_entries, EntryAccumulator, Rule};
use crate::extraction::dates::{find_date_range, has_date_range, is_single_date};
use crate::extraction::rules::is_title_candidate;
use crate::extraction::vocabulary::{extract_tech_stack, starts_with_tech};
use crate::models::resume::ProjectEntry;

/// Link label commonly glued to project titles.
const LINK_LABEL: &str = "Github";

#[derive(Debug, Default)]
pub struct ProjectAccumulator {
    current: Option<ProjectEntry>,
}

impl ProjectAccumulator {
    fn open_project(&mut self, line: &str) -> Option<ProjectEntry> {
        let closed = self.flush();
        let title = line.replace(LINK_LABEL, "").trim().to_string();
        debug!(title = %title, "project opened");
        self.current = Some(ProjectEntry {
            title: Some(title),
            ..Default::default()
        });
        closed
    }

    fn set_duration(&mut self, line: &str) -> Option<ProjectEntry> {
        if let Some(entry) = self.current.as_mut() {
            entry.duration = find_date_range(line).map(|range| range.to_string());
        }
        None
    }

    fn set_date(&mut self, line: &str) -> Option<ProjectEntry> {
        if let Some(entry) = self.current.as_mut() {
            entry.date = Some(line.trim().to_string());
        }
        None
    }

    fn set_tech_stack(&mut self, line: &str) -> Option<ProjectEntry> {
        if let Some(entry) = self.current.as_mut() {
            entry.tech_stack = extract_tech_stack(line);
        }
        None
    }

    fn append_description(&mut self, line: &str) -> Option<ProjectEntry> {
        if let Some(entry) = self.current.as_mut() {
            entry.description.push_str(line);
            entry.description.push(' ');
        }
        None
    }
}

fn title_boundary(acc: &ProjectAccumulator, line: &str) -> bool {
    is_title_candidate(line)
        && acc
            .current
            .as_ref()
            .map_or(true, |entry| !entry.description.is_empty())
}

fn nothing_open(acc: &ProjectAccumulator, _line: &str) -> bool {
    acc.current.is_none()
}

fn date_range_line(_acc: &ProjectAccumulator, line: &str) -> bool {
    has_date_range(line)
}

fn single_date_line(_acc: &ProjectAccumulator, line: &str) -> bool {
    is_single_date(line)
}

fn tech_line(_acc: &ProjectAccumulator, line: &str) -> bool {
    starts_with_tech(line)
}

impl EntryAccumulator for ProjectAccumulator {
    type Entry = ProjectEntry;

    const RULES: &'static [Rule<Self, Self::Entry>] = &[
        Rule {
            name: "title",
            matches: title_boundary,
            apply: ProjectAccumulator::open_project,
        },
        Rule {
            name: "orphan",
            matches: nothing_open,
            apply: discard,
        },
        Rule {
            name: "duration",
            matches: date_range_line,
            apply: ProjectAccumulator::set_duration,
        },
        Rule {
            name: "date",
            matches: single_date_line,
            apply: ProjectAccumulator::set_date,
        },
        Rule {
            name: "tech_stack",
            matches: tech_line,
            apply: ProjectAccumulator::set_tech_stack,
        },
        Rule {
            name: "description",
            matches: always,
            apply: ProjectAccumulator::append_description,
        },
    ];

    fn flush(&mut self) -> Option<ProjectEntry> {
        let mut entry = self.current.take()?;
        if entry.title.as_deref().map_or(true, str::is_empty) {
            return None;
        }
        entry.description = entry.description.trim().to_string();
        Some(entry)
    }
}

pub fn extract_projects(text: &str) -> Vec<ProjectEntry> {
    extract_entries::<ProjectAccumulator>(text)
}
