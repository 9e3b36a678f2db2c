//! Index-based identifiers for catalog entries.
//!
//! Back-references (skill to job, job to unit) are stored as these plain
//! indices rather than as pointers, so a snapshot has no ownership cycles.

use std::fmt;

/// Position of a unit within its catalog snapshot.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct UnitId(usize);

impl UnitId {
    /// Creates a unit id from a raw index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unit({})", self.0)
    }
}

/// A job, addressed by its owning unit and its position in that unit's job list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct JobId {
    /// The owning unit.
    pub unit: UnitId,
    /// Position within the unit's ordered job list.
    pub index: usize,
}

impl JobId {
    /// Creates a job id.
    #[must_use]
    pub const fn new(unit: UnitId, index: usize) -> Self {
        Self { unit, index }
    }
}

impl fmt::Debug for JobId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JobId({}.{})", self.unit.0, self.index)
    }
}
