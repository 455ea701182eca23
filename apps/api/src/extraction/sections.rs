use std::collections::BTreeMap;

use crate::models::resume::{RawSection, SectionName};

/// Section presence plus the raw text of every section whose header line was found.
#[derive(Debug, Clone, Default)]
pub struct SegmentedResume {
    pub present: BTreeMap<SectionName, bool>,
    pub sections: Vec<RawSection>,
}

impl SegmentedResume {
    pub fn text_of(&self, name: SectionName) -> &str {
        self.sections
            .iter()
            .find(|section| section.name == name)
            .map_or("", |section| section.text.as_str())
    }

    pub fn raw_map(&self) -> BTreeMap<SectionName, String> {
        self.sections
            .iter()
            .map(|section| (section.name, section.text.clone()))
            .collect()
    }
}

/// Whether each header token appears anywhere in the text, case-insensitively.
pub fn detect_sections(text: &str) -> BTreeMap<SectionName, bool> {
    let upper = text.to_uppercase();
    SectionName::ALL
        .iter()
        .map(|&name| (name, upper.contains(name.header())))
        .collect()
}

/// Slices the résumé at its header lines.
///
/// A header line must equal the token exactly once trimmed and upper-cased.
/// When a header repeats, its last occurrence decides where the section starts.
pub fn extract_raw_sections(text: &str) -> Vec<RawSection> {
    let lines: Vec<&str> = text.lines().collect();

    let mut starts: BTreeMap<SectionName, usize> = BTreeMap::new();
    for (index, line) in lines.iter().enumerate() {
        let normalized = line.trim().to_uppercase();
        if let Some(&name) = SectionName::ALL
            .iter()
            .find(|name| name.header() == normalized)
        {
            starts.insert(name, index);
        }
    }

    let mut ordered: Vec<(SectionName, usize)> = starts.into_iter().collect();
    ordered.sort_by_key(|&(_, index)| index);

    ordered
        .iter()
        .enumerate()
        .map(|(position, &(name, start))| {
            let end = ordered
                .get(position + 1)
                .map_or(lines.len(), |&(_, next)| next);
            RawSection {
                name,
                text: lines[start + 1..end].join("\n").trim().to_string(),
            }
        })
        .collect()
}

pub fn segment(text: &str) -> SegmentedResume {
    SegmentedResume {
        present: detect_sections(text),
        sections: extract_raw_sections(text),
    }
}
