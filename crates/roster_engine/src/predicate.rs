//! Criterion tests against units, jobs, and skills.
//!
//! Skill text is matched with [`TextPattern::matches_text`] (quoted terms are
//! substrings); job names with [`TextPattern::matches_name`] (quoted terms
//! must equal the whole name).

use roster_catalog::{Job, Skill, Unit};
use roster_query::Criterion;

/// Tests a criterion at unit level.
///
/// Skill and job criteria hold when the unit has at least one matching skill
/// or job. Skill criteria consider board skills, master abilities, and the
/// limit burst.
#[must_use]
pub fn unit_matches(unit: &Unit, criterion: &Criterion) -> bool {
    match criterion {
        Criterion::Rarity(rarity) => unit.rarity() == *rarity,
        Criterion::Element(element) => unit.has_element(*element),
        Criterion::SkillName(_) | Criterion::SkillDescription(_) => {
            all_skills(unit).any(|skill| skill_matches(skill, criterion))
        }
        Criterion::Job(_) => unit.jobs().iter().any(|job| job_matches(job, criterion)),
    }
}

/// Tests a skill criterion against one skill.
///
/// Returns false for any other criterion.
#[must_use]
pub fn skill_matches(skill: &Skill, criterion: &Criterion) -> bool {
    match criterion {
        Criterion::SkillName(pattern) => pattern.matches_text(&skill.name),
        Criterion::SkillDescription(pattern) => pattern.matches_text(&skill.description),
        _ => false,
    }
}

/// Tests a job criterion against one job.
///
/// Returns false for any other criterion.
#[must_use]
pub fn job_matches(job: &Job, criterion: &Criterion) -> bool {
    match criterion {
        Criterion::Job(pattern) => pattern.matches_name(job.name()),
        _ => false,
    }
}

/// Every skill a unit has: board skills, then master abilities, then the
/// limit burst.
pub fn all_skills(unit: &Unit) -> impl Iterator<Item = &Skill> {
    unit.board_skills()
        .map(|entry| entry.skill())
        .chain(unit.master_abilities())
        .chain(unit.limit_burst())
}
