use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// The fixed set of résumé sections the segmenter knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    Skills,
    Education,
    Projects,
    Experience,
    Achievements,
    Positions,
}

impl SectionName {
    pub const ALL: [SectionName; 6] = [
        SectionName::Skills,
        SectionName::Education,
        SectionName::Projects,
        SectionName::Experience,
        SectionName::Achievements,
        SectionName::Positions,
    ];

    /// Upper-case header line that opens this section.
    pub fn header(self) -> &'static str {
        match self {
            SectionName::Skills => "SKILLS",
            SectionName::Education => "EDUCATION",
            SectionName::Projects => "PROJECTS",
            SectionName::Experience => "EXPERIENCE",
            SectionName::Achievements => "ACHIEVEMENTS",
            SectionName::Positions => "POSITIONS OF RESPONSIBILITY",
        }
    }
}

/// A named slice of résumé text between two header lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub name: SectionName,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub duration: Option<String>,
}

impl EducationEntry {
    pub fn is_identified(&self) -> bool {
        self.institution.is_some() || self.degree.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default, alias = "company")]
    pub organization: Option<String>,
    #[serde(default, alias = "title")]
    pub role: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl ExperienceEntry {
    pub fn is_identified(&self) -> bool {
        self.organization.is_some() || self.role.is_some()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    /// Single point in time (`"2023"`, `"Mar 2023"`).
    #[serde(default)]
    pub date: Option<String>,
    /// Authoritative range when present, rendered `"{start} - {end}"`.
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, alias = "technologies")]
    pub tech_stack: BTreeSet<String>,
    #[serde(default)]
    pub description: String,
}

/// Everything extracted from one résumé.
///
/// Also accepted back from clients when a cover letter is requested, so every
/// field defaults when missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeAnalysis {
    #[serde(alias = "sections")]
    pub sections_present: BTreeMap<SectionName, bool>,
    pub raw_sections: BTreeMap<SectionName, String>,
    /// Sorted and deduplicated when extracted; a client-supplied list keeps its order.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub projects: Vec<ProjectEntry>,
}

impl ResumeAnalysis {
    /// True when nothing at all was supplied, e.g. a client sent `{}`.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
