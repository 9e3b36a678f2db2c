//! Query AST: criteria, clauses, and the shape of the result.

use std::fmt;

use roster_foundation::{Element, Rarity, TextPattern};

use crate::resonance::ResonanceTarget;

/// The level of catalog entity a criterion talks about.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CriterionKind {
    /// Tests a property of the unit itself.
    Unit,
    /// Tests the unit's skills.
    Skill,
    /// Tests the unit's jobs.
    Job,
}

/// The kind of record a search produces, fixed by its first clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResultShape {
    /// One record per unit.
    Unit,
    /// One record per matching skill entry.
    Skill,
    /// One record per matching job.
    Job,
}

impl From<CriterionKind> for ResultShape {
    fn from(kind: CriterionKind) -> Self {
        match kind {
            CriterionKind::Unit => Self::Unit,
            CriterionKind::Skill => Self::Skill,
            CriterionKind::Job => Self::Job,
        }
    }
}

impl fmt::Display for ResultShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unit => "unit",
            Self::Skill => "skill",
            Self::Job => "job",
        })
    }
}

/// A single typed test.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Criterion {
    /// `rarity <code>`
    Rarity(Rarity),
    /// `element <name>`; set containment.
    Element(Element),
    /// `skill-name <text>`
    SkillName(TextPattern),
    /// `skill-desc <text>`
    SkillDescription(TextPattern),
    /// `job <text>`
    Job(TextPattern),
}

impl Criterion {
    /// Returns what level of entity this criterion tests.
    #[must_use]
    pub const fn kind(&self) -> CriterionKind {
        match self {
            Self::Rarity(_) | Self::Element(_) => CriterionKind::Unit,
            Self::SkillName(_) | Self::SkillDescription(_) => CriterionKind::Skill,
            Self::Job(_) => CriterionKind::Job,
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rarity(r) => write!(f, "rarity {r}"),
            Self::Element(e) => write!(f, "element {e}"),
            Self::SkillName(p) => write!(f, "skill-name {p}"),
            Self::SkillDescription(p) => write!(f, "skill-desc {p}"),
            Self::Job(p) => write!(f, "job {p}"),
        }
    }
}

/// One refinement line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clause {
    /// True when the line started with `not`.
    pub negated: bool,
    /// The test itself.
    pub criterion: Criterion,
    /// 1-based input line the clause came from.
    pub line: usize,
}

impl Clause {
    /// Creates a positive clause.
    #[must_use]
    pub fn new(criterion: Criterion, line: usize) -> Self {
        Self {
            negated: false,
            criterion,
            line,
        }
    }

    /// Creates a negated clause.
    #[must_use]
    pub fn negated(criterion: Criterion, line: usize) -> Self {
        Self {
            negated: true,
            criterion,
            line,
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("not ")?;
        }
        write!(f, "{}", self.criterion)
    }
}

/// A parsed unit search.
///
/// `clauses` is empty for `all` with no refinements. The first clause, when
/// present, is never negated and is the one that fixed `shape`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    /// Result shape fixed by line 1.
    pub shape: ResultShape,
    /// Every clause in input order.
    pub clauses: Vec<Clause>,
}

impl Query {
    /// A query selecting the whole catalog as a unit listing.
    #[must_use]
    pub fn all() -> Self {
        Self {
            shape: ResultShape::Unit,
            clauses: Vec::new(),
        }
    }

    /// A query whose first clause is `criterion`.
    #[must_use]
    pub fn starting_with(criterion: Criterion) -> Self {
        let shape = criterion.kind().into();
        Self {
            shape,
            clauses: vec![Clause::new(criterion, 1)],
        }
    }

    /// Appends a refinement clause.
    #[must_use]
    pub fn refine(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }
}

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `!unit-search`.
    Search(Query),
    /// `!skills-by-name` / `!skills-by-desc`: a skill search reported with
    /// skill wording.
    SkillSearch(Query),
    /// `!res unit/esper`.
    Resonance(ResonanceTarget),
}
