//! Result rendering.
//!
//! Records are sorted by their unit's canonical name in code-point order.
//! The sort is stable, so records of one unit keep catalog order: jobs in
//! declaration order, board skills before master abilities before the limit
//! burst.

use roster_catalog::{Catalog, Unit};
use roster_query::ResultShape;

use crate::config::EngineConfig;
use crate::pipeline::{Record, ResultSet, SkillHit, SkillOrigin};

/// Heading line of a non-empty listing.
pub const RESULTS_HEADER: &str = "Results:";

/// Text shown for an empty listing.
pub const NO_RESULTS: &str = "No units matched the search.";

/// Heading line of a `!skills-by-*` listing.
pub const SKILLS_HEADER: &str = "Matching Skills:";

/// Text shown for an empty `!skills-by-*` listing.
pub const NO_SKILLS: &str = "No skills matched the search.";

/// Trailer appended when a listing is cut short.
pub const TRUNCATED: &str = "Results truncated because there were too many.";

/// Renders `(MR rarity, Earth element)` for a unit.
#[must_use]
pub fn rarity_and_element(unit: &Unit) -> String {
    let elements = unit.elements();
    if elements.is_empty() {
        return format!("({} rarity, no element)", unit.rarity());
    }
    let names: Vec<&str> = elements.iter().map(|e| e.name()).collect();
    let plural = if elements.len() > 1 { "s" } else { "" };
    format!("({} rarity, {} element{plural})", unit.rarity(), names.join("/"))
}

/// Sorts and renders result sets against one catalog snapshot.
pub struct ResultFormatter<'a> {
    catalog: &'a Catalog,
    max_results: usize,
    header: &'static str,
    empty: &'static str,
}

impl<'a> ResultFormatter<'a> {
    /// Creates a formatter with the default listing cap.
    #[must_use]
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_config(catalog, &EngineConfig::default())
    }

    /// Creates a formatter using `config`'s listing cap.
    #[must_use]
    pub fn with_config(catalog: &'a Catalog, config: &EngineConfig) -> Self {
        Self {
            catalog,
            max_results: config.max_results,
            header: RESULTS_HEADER,
            empty: NO_RESULTS,
        }
    }

    /// Replaces the heading and the empty-listing text.
    #[must_use]
    pub fn with_wording(mut self, header: &'static str, empty: &'static str) -> Self {
        self.header = header;
        self.empty = empty;
        self
    }

    /// Sorts records by owning unit name, keeping catalog order within a unit.
    pub fn sort(&self, records: &mut [Record]) {
        records.sort_by(|a, b| self.unit_name(a).cmp(self.unit_name(b)));
    }

    /// Renders a full listing.
    #[must_use]
    pub fn format(&self, results: &ResultSet) -> String {
        if results.is_empty() {
            return self.empty.to_string();
        }

        let mut records = results.records.clone();
        self.sort(&mut records);
        let truncated = records.len() > self.max_results;
        records.truncate(self.max_results);

        let mut out = String::from(self.header);
        for record in &records {
            if let Some(line) = self.render(results.shape, record) {
                out.push('\n');
                out.push_str(&line);
            }
        }
        if truncated {
            out.push('\n');
            out.push_str(TRUNCATED);
        }
        out
    }

    /// Renders one record, or `None` if it does not belong to this catalog.
    #[must_use]
    pub fn render(&self, shape: ResultShape, record: &Record) -> Option<String> {
        let unit = self.catalog.unit(record.unit())?;
        match (shape, record) {
            (ResultShape::Skill, Record::Skill(hit)) => Self::render_skill(unit, hit),
            (ResultShape::Job, Record::Job(id)) => {
                let job = unit.job(id.index)?;
                Some(format!(
                    "Job \"{}\" learned by {} {}",
                    job.name(),
                    unit.name(),
                    rarity_and_element(unit)
                ))
            }
            _ => Some(format!("{} {}", unit.name(), rarity_and_element(unit))),
        }
    }

    fn render_skill(unit: &Unit, hit: &SkillHit) -> Option<String> {
        let paren = rarity_and_element(unit);
        let line = match hit.origin {
            SkillOrigin::Board { job, entry } => {
                let job = unit.job(job)?;
                let entry = job.skills().get(entry)?;
                format!(
                    "Skill \"{}\" learned by {} {paren} with job {} at job level {}: {}",
                    entry.skill().name,
                    unit.name(),
                    job.name(),
                    entry.level(),
                    entry.skill().description
                )
            }
            SkillOrigin::MasterAbility(index) => {
                let skill = unit.master_abilities().get(index)?;
                format!("Master ability for {} {paren}: {}", unit.name(), skill.description)
            }
            SkillOrigin::LimitBurst => {
                let skill = unit.limit_burst()?;
                format!(
                    "Limit burst ({}) for {} {paren}: {}",
                    skill.name,
                    unit.name(),
                    skill.description
                )
            }
        };
        Some(line)
    }

    fn unit_name(&self, record: &Record) -> &'a str {
        self.catalog
            .unit(record.unit())
            .map_or("", Unit::name)
    }
}
