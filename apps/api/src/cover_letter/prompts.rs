// Prompt for cover letter generation. The layout requested here is the one
// `parser::parse_generated_letter` knows how to take apart again.

use crate::models::cover_letter::JobInfo;
use crate::models::resume::{ExperienceEntry, ProjectEntry, ResumeAnalysis};

const MAX_PROMPT_SKILLS: usize = 8;
const MAX_PROMPT_PROJECTS: usize = 2;
const MAX_PROMPT_EXPERIENCE: usize = 2;
const MAX_REQUIREMENT_LINES: usize = 3;

/// Cover letter prompt. Replace every `{placeholder}` before sending.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a genuine cover letter for a real applicant. It must not read like a template.

HARD RULES:
- No placeholders or labels such as "Paragraph 1" or "[Paragraph]"
- Use only the candidate facts below; never invent skills, employers, degrees or years of experience
- Plain, natural English; no stock phrases repeated across paragraphs

JOB
Company: {company}
Role: {job_title}
Tone: {tone}

CANDIDATE FACTS (the only source of truth)
Skills: {skills}

Experience:
{experience}

Projects:
{projects}

KEY REQUIREMENTS FROM THE POSTING
{requirements}

Write exactly four paragraphs, separated by blank lines:
1. State the role and the company you are applying to.
2. Connect two or three of the listed skills to the role.
3. Describe one or two of the projects, naming the tools used and what was built.
4. Say why {company} in particular, using only the job information.

Output nothing but the letter, in this shape:

Dear Hiring Manager at {company},

<first paragraph>

<second paragraph>

<third paragraph>

<fourth paragraph>

I look forward to discussing this opportunity further.

Sincerely,
{candidate_name}"#;

/// Fills the template with the slice of the analysis the generator is allowed to see.
pub fn build_prompt(analysis: &ResumeAnalysis, job: &JobInfo, candidate_name: &str) -> String {
    let skills = analysis
        .skills
        .iter()
        .take(MAX_PROMPT_SKILLS)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    let experience = format_experience(&analysis.experience);
    let projects = format_projects(&analysis.projects);
    let requirements = key_requirements(&job.job_description);

    fill_template(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("company", job.company_name.trim()),
            ("job_title", job.job_title.trim()),
            ("tone", job.tone.trim()),
            ("skills", skills.as_str()),
            ("experience", experience.as_str()),
            ("projects", projects.as_str()),
            ("requirements", requirements.as_str()),
            ("candidate_name", candidate_name.trim()),
        ],
    )
}

/// Replaces `{key}` placeholders in one pass over the template, so braces
/// inside substituted values are copied through untouched. Unknown keys stay
/// as written.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut filled = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        filled.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|&(_, value)| (value, close))
        });
        match value {
            Some((value, close)) => {
                filled.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                filled.push('{');
                rest = after;
            }
        }
    }
    filled.push_str(rest);
    filled
}

fn format_projects(projects: &[ProjectEntry]) -> String {
    if projects.is_empty() {
        return "None".to_string();
    }
    projects
        .iter()
        .take(MAX_PROMPT_PROJECTS)
        .map(|project| {
            let tech = project
                .tech_stack
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            format!(
                "- {}: Built using {}. {}",
                project.title.as_deref().unwrap_or_default(),
                tech,
                project.description
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Only entries with both a role and an organization are worth citing.
fn format_experience(experience: &[ExperienceEntry]) -> String {
    if experience.is_empty() {
        return "None".to_string();
    }
    experience
        .iter()
        .take(MAX_PROMPT_EXPERIENCE)
        .filter_map(|entry| match (&entry.role, &entry.organization) {
            (Some(role), Some(org)) if !role.is_empty() && !org.is_empty() => {
                Some(format!("- {role} at {org}"))
            }
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// First few non-blank lines of the posting.
fn key_requirements(job_description: &str) -> String {
    job_description
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(MAX_REQUIREMENT_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}
