use crate::extraction::accumulator::{always, extract_entries, EntryAccumulator, Rule};
use crate::extraction::dates::{find_date_range, has_date_range};
use crate::extraction::rules::{is_role, word_count, MAX_ORGANIZATION_WORDS};
use crate::models::resume::ExperienceEntry;

/// Builds [`ExperienceEntry`] values from the EXPERIENCE section.
#[derive(Debug, Default)]
pub struct ExperienceAccumulator {
    current: ExperienceEntry,
}

impl ExperienceAccumulator {
    fn set_duration(&mut self, line: &str) -> Option<ExperienceEntry> {
        self.current.duration = find_date_range(line).map(|range| range.to_string());
        None
    }

    fn set_role(&mut self, line: &str) -> Option<ExperienceEntry> {
        self.current.role = Some(line.to_string());
        None
    }

    fn set_organization(&mut self, line: &str) -> Option<ExperienceEntry> {
        self.current.organization = Some(line.to_string());
        None
    }

    fn append_description(&mut self, line: &str) -> Option<ExperienceEntry> {
        self.current.description.push_str(line);
        self.current.description.push(' ');
        None
    }
}

fn date_range_line(_acc: &ExperienceAccumulator, line: &str) -> bool {
    has_date_range(line)
}

fn role_line(_acc: &ExperienceAccumulator, line: &str) -> bool {
    is_role(line)
}

/// A short line seen before anything else identifies the entry.
fn organization_line(acc: &ExperienceAccumulator, line: &str) -> bool {
    acc.current.organization.is_none()
        && acc.current.role.is_none()
        && word_count(line) <= MAX_ORGANIZATION_WORDS
}

impl EntryAccumulator for ExperienceAccumulator {
    type Entry = ExperienceEntry;

    const RULES: &'static [Rule<Self, Self::Entry>] = &[
        Rule {
            name: "duration",
            matches: date_range_line,
            apply: ExperienceAccumulator::set_duration,
        },
        Rule {
            name: "role",
            matches: role_line,
            apply: ExperienceAccumulator::set_role,
        },
        Rule {
            name: "organization",
            matches: organization_line,
            apply: ExperienceAccumulator::set_organization,
        },
        Rule {
            name: "description",
            matches: always,
            apply: ExperienceAccumulator::append_description,
        },
    ];

    fn flush(&mut self) -> Option<ExperienceEntry> {
        let mut entry = std::mem::take(&mut self.current);
        if !entry.is_identified() {
            return None;
        }
        entry.description = entry.description.trim().to_string();
        Some(entry)
    }
}

pub fn extract_experience(text: &str) -> Vec<ExperienceEntry> {
    extract_entries::<ExperienceAccumulator>(text)
}
