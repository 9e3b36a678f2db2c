//! Immutable catalog snapshot.
//!
//! A [`Catalog`] is never mutated in place. Inserting a unit returns a new
//! catalog that shares structure with the old one, so a snapshot handed to a
//! running query stays valid however the catalog is extended afterwards.

use im::{OrdMap, Vector};
use roster_foundation::{Error, ErrorKind, Result};
use tracing::trace;

use crate::draft::{JobDraft, SkillDraft, UnitDraft};
use crate::id::{JobId, UnitId};
use crate::model::{Job, JobSkill, Skill, Unit};

/// Immutable snapshot of all units, jobs, and skills.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    /// Units in insertion order; a unit's position is its [`UnitId`].
    units: Vector<Unit>,
    /// Lowercased unit name -> id, enforcing case-insensitive uniqueness.
    names: OrdMap<String, UnitId>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from drafts, in order.
    ///
    /// # Errors
    ///
    /// Returns an error if two drafts share a name (ignoring case) or a board
    /// skill has a learn level of zero.
    pub fn from_drafts<I>(drafts: I) -> Result<Self>
    where
        I: IntoIterator<Item = UnitDraft>,
    {
        drafts
            .into_iter()
            .try_fold(Self::new(), |catalog, draft| catalog.with_unit(draft))
    }

    /// Returns a new catalog with `draft` appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the unit name is already taken (ignoring case) or
    /// a board skill has a learn level of zero.
    pub fn with_unit(&self, draft: UnitDraft) -> Result<Self> {
        let key = draft.name.to_lowercase();
        if self.names.contains_key(&key) {
            return Err(Error::duplicate_unit(draft.name));
        }

        let id = UnitId::new(self.units.len());
        let jobs = draft
            .jobs
            .into_iter()
            .enumerate()
            .map(|(index, job)| Self::build_job(JobId::new(id, index), job))
            .collect::<Result<Vec<_>>>()?;

        let mut elements = Vec::with_capacity(draft.elements.len());
        for element in draft.elements {
            if !elements.contains(&element) {
                elements.push(element);
            }
        }

        trace!(unit = %draft.name, jobs = jobs.len(), "inserting unit");

        let unit = Unit {
            id,
            name: draft.name,
            rarity: draft.rarity,
            elements,
            jobs,
            master_abilities: draft.master_abilities,
            limit_burst: draft.limit_burst,
        };

        let mut next = self.clone();
        next.units.push_back(unit);
        next.names.insert(key, id);
        Ok(next)
    }

    fn build_job(id: JobId, draft: JobDraft) -> Result<Job> {
        let skills = draft
            .skills
            .into_iter()
            .map(|s| {
                if s.level == 0 {
                    return Err(Error::new(ErrorKind::InvalidLevel {
                        skill: s.name,
                        level: s.level,
                    }));
                }
                Ok(JobSkill::new(Skill::new(s.name, s.description), s.level, id))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Job::new(id, draft.name, skills))
    }

    /// Number of units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns true if the catalog has no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Looks up a unit by id.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.index())
    }

    /// Looks up a job by id.
    #[must_use]
    pub fn job(&self, id: JobId) -> Option<&Job> {
        self.unit(id.unit).and_then(|u| u.job(id.index))
    }

    /// Looks up a unit by exact name, ignoring case.
    #[must_use]
    pub fn find_unit(&self, name: &str) -> Option<&Unit> {
        self.names
            .get(&name.to_lowercase())
            .and_then(|&id| self.unit(id))
    }

    /// Iterates units in insertion order.
    pub fn units(&self) -> impl Iterator<Item = &Unit> {
        self.units.iter()
    }

    /// Canonical names of all units, in insertion order.
    #[must_use]
    pub fn unit_names(&self) -> Vec<&str> {
        self.units.iter().map(Unit::name).collect()
    }

    /// Distinct job names across the catalog, sorted.
    #[must_use]
    pub fn job_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .units
            .iter()
            .flat_map(Unit::jobs)
            .map(Job::name)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Converts the snapshot back into drafts, e.g. for saving.
    #[must_use]
    pub fn to_drafts(&self) -> Vec<UnitDraft> {
        self.units
            .iter()
            .map(|unit| UnitDraft {
                name: unit.name.clone(),
                rarity: unit.rarity,
                elements: unit.elements.clone(),
                jobs: unit
                    .jobs
                    .iter()
                    .map(|job| JobDraft {
                        name: job.name().to_string(),
                        skills: job
                            .skills()
                            .iter()
                            .map(|entry| SkillDraft {
                                name: entry.skill().name.clone(),
                                description: entry.skill().description.clone(),
                                level: entry.level(),
                            })
                            .collect(),
                    })
                    .collect(),
                master_abilities: unit.master_abilities.clone(),
                limit_burst: unit.limit_burst.clone(),
            })
            .collect()
    }
}
