//! Catalog entities: units, their jobs, and the skills those jobs teach.

use roster_foundation::{Element, Rarity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::id::{JobId, UnitId};

/// A skill's text. Skills are values; the same skill may appear on several
/// jobs or units as independent copies.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Skill {
    /// Display name (e.g., "Killer Blade")
    pub name: String,
    /// Effect text (e.g., "Deals Dmg (L) to target & bestows Man Eater.")
    pub description: String,
}

impl Skill {
    /// Creates a skill.
    #[must_use]
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A skill entry on a job's board, with the job level that unlocks it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobSkill {
    skill: Skill,
    level: u32,
    job: JobId,
}

impl JobSkill {
    pub(crate) fn new(skill: Skill, level: u32, job: JobId) -> Self {
        Self { skill, level, job }
    }

    /// The skill taught.
    #[must_use]
    pub fn skill(&self) -> &Skill {
        &self.skill
    }

    /// Job level at which the skill is learned (always positive).
    #[must_use]
    pub const fn level(&self) -> u32 {
        self.level
    }

    /// Back-reference to the owning job.
    #[must_use]
    pub const fn job(&self) -> JobId {
        self.job
    }
}

/// A job usable by exactly one unit.
///
/// Job names are not unique across the catalog: "Paladin" on one unit and
/// "Paladin" on another are separate jobs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Job {
    id: JobId,
    name: String,
    skills: Vec<JobSkill>,
}

impl Job {
    pub(crate) fn new(id: JobId, name: String, skills: Vec<JobSkill>) -> Self {
        Self { id, name, skills }
    }

    /// This job's id.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Back-reference to the owning unit.
    #[must_use]
    pub const fn unit(&self) -> UnitId {
        self.id.unit
    }

    /// Display name (e.g., "Lord").
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Skills in board declaration order.
    #[must_use]
    pub fn skills(&self) -> &[JobSkill] {
        &self.skills
    }
}

/// A playable unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Unit {
    pub(crate) id: UnitId,
    pub(crate) name: String,
    pub(crate) rarity: Rarity,
    pub(crate) elements: Vec<Element>,
    pub(crate) jobs: Vec<Job>,
    pub(crate) master_abilities: Vec<Skill>,
    pub(crate) limit_burst: Option<Skill>,
}

impl Unit {
    /// This unit's id within its snapshot.
    #[must_use]
    pub const fn id(&self) -> UnitId {
        self.id
    }

    /// Canonical name, unique within the catalog ignoring case.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rarity tier.
    #[must_use]
    pub const fn rarity(&self) -> Rarity {
        self.rarity
    }

    /// Elements in declaration order, without duplicates.
    #[must_use]
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Returns true if the unit's element set contains `element`.
    #[must_use]
    pub fn has_element(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }

    /// Jobs in declaration order.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Looks up one of this unit's jobs.
    #[must_use]
    pub fn job(&self, index: usize) -> Option<&Job> {
        self.jobs.get(index)
    }

    /// Master abilities, which are not learned through any job.
    #[must_use]
    pub fn master_abilities(&self) -> &[Skill] {
        &self.master_abilities
    }

    /// The limit burst skill, if the unit has one.
    #[must_use]
    pub fn limit_burst(&self) -> Option<&Skill> {
        self.limit_burst.as_ref()
    }

    /// Iterates every board skill of every job, in job order then board order.
    pub fn board_skills(&self) -> impl Iterator<Item = &JobSkill> {
        self.jobs.iter().flat_map(Job::skills)
    }
}
