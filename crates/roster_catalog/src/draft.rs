//! Plain descriptions of units that a [`Catalog`](crate::Catalog) is built from.
//!
//! Drafts carry no ids or back-references; those are assigned when a draft
//! is inserted into a catalog. Drafts are also the on-disk snapshot format.

use roster_foundation::{Element, Rarity};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::Skill;

/// A skill on a job's board together with its unlock level.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SkillDraft {
    /// Skill name.
    pub name: String,
    /// Skill description.
    pub description: String,
    /// Job level that unlocks the skill.
    pub level: u32,
}

/// A job and its board.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JobDraft {
    /// Job name.
    pub name: String,
    /// Board skills in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub skills: Vec<SkillDraft>,
}

impl JobDraft {
    /// Creates a job with no skills.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            skills: Vec::new(),
        }
    }

    /// Adds a board skill learned at `level`.
    #[must_use]
    pub fn with_skill(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        level: u32,
    ) -> Self {
        self.skills.push(SkillDraft {
            name: name.into(),
            description: description.into(),
            level,
        });
        self
    }
}

/// A unit and everything it owns.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UnitDraft {
    /// Canonical unit name.
    pub name: String,
    /// Rarity tier.
    pub rarity: Rarity,
    /// Elements in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub elements: Vec<Element>,
    /// Jobs in declaration order.
    #[cfg_attr(feature = "serde", serde(default))]
    pub jobs: Vec<JobDraft>,
    /// Master abilities.
    #[cfg_attr(feature = "serde", serde(default))]
    pub master_abilities: Vec<Skill>,
    /// Limit burst skill.
    #[cfg_attr(feature = "serde", serde(default))]
    pub limit_burst: Option<Skill>,
}

impl UnitDraft {
    /// Creates a unit with no elements, jobs, or extra skills.
    #[must_use]
    pub fn new(name: impl Into<String>, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            rarity,
            elements: Vec::new(),
            jobs: Vec::new(),
            master_abilities: Vec::new(),
            limit_burst: None,
        }
    }

    /// Adds an element.
    #[must_use]
    pub fn with_element(mut self, element: Element) -> Self {
        self.elements.push(element);
        self
    }

    /// Appends a job.
    #[must_use]
    pub fn with_job(mut self, job: JobDraft) -> Self {
        self.jobs.push(job);
        self
    }

    /// Appends a master ability.
    #[must_use]
    pub fn with_master_ability(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.master_abilities.push(Skill::new(name, description));
        self
    }

    /// Sets the limit burst.
    #[must_use]
    pub fn with_limit_burst(
        mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        self.limit_burst = Some(Skill::new(name, description));
        self
    }
}
