//! Query evaluation.
//!
//! Evaluation runs in two stages:
//!
//! 1. **Unit stage**: every clause, positive or negated, narrows the set of
//!    units. Skill and job criteria ask whether the unit has at least one
//!    matching skill or job.
//! 2. **Record stage**: for skill and job shaped queries, each surviving unit
//!    is expanded into the jobs or skills matching the first clause.
//!    Refinements never look at individual records, so a `job` line on a
//!    skill search keeps every matching skill of a unit that has the job.
//!
//! Records come out in catalog order; sorting is the formatter's job.

use roster_catalog::{Catalog, JobId, Skill, Unit, UnitId};
use roster_query::{Clause, Criterion, Query, ResultShape};
use tracing::debug;

use crate::predicate::{job_matches, skill_matches, unit_matches};

// =============================================================================
// Result Types
// =============================================================================

/// Where a matched skill comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SkillOrigin {
    /// A job board entry.
    Board {
        /// Position of the job in the unit's job list.
        job: usize,
        /// Position of the entry on that job's board.
        entry: usize,
    },
    /// A master ability, by position.
    MasterAbility(usize),
    /// The unit's limit burst.
    LimitBurst,
}

/// A matched skill of a unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SkillHit {
    /// The owning unit.
    pub unit: UnitId,
    /// Where on the unit the skill lives.
    pub origin: SkillOrigin,
}

impl SkillHit {
    /// The owning job for board skills.
    #[must_use]
    pub fn job(&self) -> Option<JobId> {
        match self.origin {
            SkillOrigin::Board { job, .. } => Some(JobId::new(self.unit, job)),
            SkillOrigin::MasterAbility(_) | SkillOrigin::LimitBurst => None,
        }
    }
}

/// One result record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Record {
    /// A whole unit.
    Unit(UnitId),
    /// One job of a unit.
    Job(JobId),
    /// One skill of a unit.
    Skill(SkillHit),
}

impl Record {
    /// The unit the record belongs to.
    #[must_use]
    pub fn unit(&self) -> UnitId {
        match self {
            Self::Unit(unit) => *unit,
            Self::Job(job) => job.unit,
            Self::Skill(hit) => hit.unit,
        }
    }
}

/// The typed result of evaluating a query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSet {
    /// The shape fixed by the query's first clause.
    pub shape: ResultShape,
    /// Matching records, in catalog order.
    pub records: Vec<Record>,
}

impl ResultSet {
    /// Returns true if nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Distinct units contributing records, in first-seen order.
    #[must_use]
    pub fn units(&self) -> Vec<UnitId> {
        let mut seen = Vec::new();
        for record in &self.records {
            let unit = record.unit();
            if !seen.contains(&unit) {
                seen.push(unit);
            }
        }
        seen
    }
}

// =============================================================================
// Executor
// =============================================================================

/// Evaluates queries against a catalog snapshot.
pub struct QueryExecutor;

impl QueryExecutor {
    /// Evaluates `query`, returning every matching record.
    ///
    /// An empty result is a success.
    #[must_use]
    pub fn evaluate(catalog: &Catalog, query: &Query) -> ResultSet {
        let units: Vec<&Unit> = catalog
            .units()
            .filter(|unit| Self::unit_passes(unit, &query.clauses))
            .collect();
        debug!(
            shape = %query.shape,
            clauses = query.clauses.len(),
            units = units.len(),
            "unit stage complete"
        );

        let primary = query.clauses.first().map(|clause| &clause.criterion);

        let mut records = Vec::new();
        for unit in units {
            match query.shape {
                ResultShape::Unit => records.push(Record::Unit(unit.id())),
                ResultShape::Job => Self::expand_jobs(unit, primary, &mut records),
                ResultShape::Skill => Self::expand_skills(unit, primary, &mut records),
            }
        }

        debug!(records = records.len(), "record stage complete");
        ResultSet {
            shape: query.shape,
            records,
        }
    }

    /// Counts matching records.
    #[must_use]
    pub fn count(catalog: &Catalog, query: &Query) -> usize {
        Self::evaluate(catalog, query).len()
    }

    /// Names of units that survive the unit stage, in catalog order.
    #[must_use]
    pub fn matching_units<'a>(catalog: &'a Catalog, query: &Query) -> Vec<&'a str> {
        catalog
            .units()
            .filter(|unit| Self::unit_passes(unit, &query.clauses))
            .map(Unit::name)
            .collect()
    }

    fn unit_passes(unit: &Unit, clauses: &[Clause]) -> bool {
        clauses
            .iter()
            .all(|clause| unit_matches(unit, &clause.criterion) != clause.negated)
    }

    fn expand_jobs(unit: &Unit, primary: Option<&Criterion>, records: &mut Vec<Record>) {
        let Some(criterion) = primary else { return };
        records.extend(
            unit.jobs()
                .iter()
                .filter(|job| job_matches(job, criterion))
                .map(|job| Record::Job(job.id())),
        );
    }

    fn expand_skills(unit: &Unit, primary: Option<&Criterion>, records: &mut Vec<Record>) {
        let Some(criterion) = primary else { return };
        let keep = |skill: &Skill| skill_matches(skill, criterion);
        let hit = |origin| {
            Record::Skill(SkillHit {
                unit: unit.id(),
                origin,
            })
        };

        for (job_index, job) in unit.jobs().iter().enumerate() {
            for (entry, job_skill) in job.skills().iter().enumerate() {
                if keep(job_skill.skill()) {
                    records.push(hit(SkillOrigin::Board {
                        job: job_index,
                        entry,
                    }));
                }
            }
        }
        for (index, skill) in unit.master_abilities().iter().enumerate() {
            if keep(skill) {
                records.push(hit(SkillOrigin::MasterAbility(index)));
            }
        }
        if let Some(skill) = unit.limit_burst() {
            if keep(skill) {
                records.push(hit(SkillOrigin::LimitBurst));
            }
        }
    }
}
