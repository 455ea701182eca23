//! Résumé analysis: segmentation followed by the per-section extractors.

use tracing::debug;

use crate::extraction::education::extract_education;
use crate::extraction::experience::extract_experience;
use crate::extraction::projects::extract_projects;
use crate::extraction::sections::segment;
use crate::extraction::vocabulary::extract_skills;
use crate::models::resume::{ResumeAnalysis, SectionName};

/// Extracts everything the letter generator needs from raw résumé text.
/// Never fails; absent sections leave their fields empty.
pub fn analyze_resume(text: &str) -> ResumeAnalysis {
    let segmented = segment(text);

    let analysis = ResumeAnalysis {
        skills: extract_skills(segmented.text_of(SectionName::Skills))
            .into_iter()
            .collect(),
        education: extract_education(segmented.text_of(SectionName::Education)),
        experience: extract_experience(segmented.text_of(SectionName::Experience)),
        projects: extract_projects(segmented.text_of(SectionName::Projects)),
        raw_sections: segmented.raw_map(),
        sections_present: segmented.present,
    };

    debug!(
        sections = analysis.raw_sections.len(),
        skills = analysis.skills.len(),
        education = analysis.education.len(),
        experience = analysis.experience.len(),
        projects = analysis.projects.len(),
        "resume analyzed"
    );

    analysis
}
