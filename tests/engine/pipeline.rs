//! Integration tests for query evaluation.

use proptest::prelude::*;
use roster_catalog::Catalog;
use roster_catalog::sample::sample_catalog;
use roster_engine::{QueryExecutor, Record, ResultSet, SkillHit, SkillOrigin};
use roster_foundation::{Element, Rarity, TextPattern};
use roster_query::{Clause, Criterion, Query, QueryParser, ResultShape};

fn run(catalog: &Catalog, input: &str) -> ResultSet {
    let query = QueryParser::new().parse_search(input).unwrap();
    QueryExecutor::evaluate(catalog, &query)
}

fn unit_names(catalog: &Catalog, results: &ResultSet) -> Vec<String> {
    results
        .units()
        .into_iter()
        .map(|id| catalog.unit(id).unwrap().name().to_string())
        .collect()
}

/// Names of the jobs behind each record, for job and board-skill records.
fn job_names(catalog: &Catalog, results: &ResultSet) -> Vec<String> {
    results
        .records
        .iter()
        .filter_map(|record| match record {
            Record::Job(id) => Some(*id),
            Record::Skill(hit) => hit.job(),
            Record::Unit(_) => None,
        })
        .map(|id| catalog.job(id).unwrap().name().to_string())
        .collect()
}

// =============================================================================
// Unit Stage
// =============================================================================

#[test]
fn rarity_and_element_intersect() {
    let catalog = sample_catalog();
    let results = run(&catalog, "!unit-search rarity UR\nelement earth");
    assert_eq!(unit_names(&catalog, &results), vec!["Gilgamesh"]);
}

#[test]
fn negations_exclude_units() {
    let catalog = sample_catalog();
    let results = run(&catalog, "!unit-search all\nnot element earth\nnot job lord");
    assert_eq!(
        unit_names(&catalog, &results),
        vec![
            "Engelbert",
            "Lasswell",
            "Little Leela",
            "Little Leela (Halloween)",
            "Vinera",
            "'Summer' Macherie",
        ]
    );
}

#[test]
fn multi_element_unit_matches_either() {
    let catalog = sample_catalog();
    let fire = run(&catalog, "!unit-search element fire");
    let dark = run(&catalog, "!unit-search element dark");
    assert!(unit_names(&catalog, &fire).contains(&"Vinera".to_string()));
    assert!(unit_names(&catalog, &dark).contains(&"Vinera".to_string()));
}

#[test]
fn skill_criterion_on_unit_search_consults_every_skill() {
    let catalog = sample_catalog();
    // Limit burst text only.
    let results = run(&catalog, "!unit-search all\nskill-desc \"Barrier\"");
    assert_eq!(unit_names(&catalog, &results), vec!["Engelbert"]);
    assert_eq!(results.shape, ResultShape::Unit);
}

#[test]
fn empty_result_is_success() {
    let catalog = sample_catalog();
    let results = run(&catalog, "!unit-search rarity N\nelement earth");
    assert!(results.is_empty());
    assert_eq!(QueryExecutor::count(&catalog, &Query::all()), catalog.len());
}

// =============================================================================
// Record Stage
// =============================================================================

#[test]
fn same_skill_on_two_jobs_gives_two_records() {
    let catalog = sample_catalog();
    let results = run(&catalog, "!unit-search skill-name Cover");
    assert_eq!(results.shape, ResultShape::Skill);
    assert_eq!(results.len(), 2);
    assert_eq!(job_names(&catalog, &results), vec!["Paladin", "Knight"]);
}

#[test]
fn job_refinement_keeps_every_matching_skill_of_the_unit() {
    let catalog = sample_catalog();
    let mont = catalog.find_unit("Mont Leonis").unwrap().id();
    let results = run(&catalog, "!unit-search skill-name Cover\njob knight");
    assert_eq!(
        results.records,
        vec![
            Record::Skill(SkillHit {
                unit: mont,
                origin: SkillOrigin::Board { job: 1, entry: 0 },
            }),
            Record::Skill(SkillHit {
                unit: mont,
                origin: SkillOrigin::Board { job: 2, entry: 0 },
            }),
        ]
    );
}

#[test]
fn job_refinement_keeps_master_abilities() {
    let catalog = sample_catalog();
    let unrefined = run(&catalog, "!unit-search skill-desc \"DEF +15\"");
    let refined = run(&catalog, "!unit-search skill-desc \"DEF +15\"\njob paladin");
    assert_eq!(refined, unrefined);
    assert_eq!(refined.len(), 2);
    assert!(refined.records.iter().all(|r| matches!(
        r,
        Record::Skill(hit) if matches!(hit.origin, SkillOrigin::MasterAbility(_))
    )));

    let excluded = run(&catalog, "!unit-search skill-desc \"DEF +15\"\njob lord");
    assert_eq!(unit_names(&catalog, &excluded), vec!["Mont Leonis"]);
}

#[test]
fn fuzzy_job_name_matches_every_word() {
    let catalog = sample_catalog();
    let results = run(&catalog, "!unit-search job knight");
    assert_eq!(results.shape, ResultShape::Job);
    assert_eq!(job_names(&catalog, &results), vec!["Knight", "Knight", "Dark Knight"]);
}

#[test]
fn quoted_job_name_is_whole_name() {
    let catalog = sample_catalog();
    let results = run(&catalog, "!unit-search job \"knight\"");
    assert_eq!(job_names(&catalog, &results), vec!["Knight", "Knight"]);
}

#[test]
fn skill_refinement_on_job_search_narrows_units_only() {
    let catalog = sample_catalog();
    let results = run(&catalog, "!unit-search job paladin\nskill-name Killer Blade");
    assert_eq!(unit_names(&catalog, &results), vec!["Mont Leonis"]);
    assert_eq!(job_names(&catalog, &results), vec!["Paladin"]);

    let results = run(&catalog, "!unit-search job paladin\nnot skill-name Killer Blade");
    assert_eq!(unit_names(&catalog, &results), vec!["Engelbert"]);
    assert_eq!(job_names(&catalog, &results), vec!["Paladin"]);

    let results = run(&catalog, "!unit-search job paladin\nskill-desc \"Man eat\"");
    assert_eq!(unit_names(&catalog, &results), vec!["Mont Leonis"]);
}

#[test]
fn negated_unit_clause_on_skill_search() {
    let catalog = sample_catalog();
    let results = run(&catalog, "!unit-search skill-name fire\nnot rarity R");
    assert_eq!(unit_names(&catalog, &results), vec!["Little Leela (Halloween)"]);
}

#[test]
fn matching_units_reports_unit_stage() {
    let catalog = sample_catalog();
    let query = QueryParser::new()
        .parse_search("!unit-search skill-desc \"DEF +15\"\njob paladin")
        .unwrap();
    assert_eq!(
        QueryExecutor::matching_units(&catalog, &query),
        vec!["Mont Leonis", "Engelbert"]
    );
}

#[test]
fn evaluation_is_deterministic() {
    let catalog = sample_catalog();
    let input = "!unit-search all\nnot element earth\nskill-desc dmg";
    assert_eq!(run(&catalog, input), run(&catalog, input));
}

// =============================================================================
// Properties
// =============================================================================

fn refinement_pool() -> Vec<Clause> {
    vec![
        Clause::new(Criterion::Rarity(Rarity::UltraRare), 2),
        Clause::negated(Criterion::Element(Element::Earth), 3),
        Clause::new(Criterion::SkillDescription(TextPattern::fuzzy("dmg")), 4),
        Clause::negated(Criterion::Job(TextPattern::fuzzy("ninja")), 5),
        Clause::new(Criterion::Job(TextPattern::fuzzy("samurai")), 6),
        Clause::negated(Criterion::SkillName(TextPattern::exact("Cover")), 7),
    ]
}

fn head() -> impl Strategy<Value = Query> {
    prop_oneof![
        Just(Query::all()),
        Just(Query::starting_with(Criterion::SkillName(TextPattern::fuzzy("e")))),
        Just(Query::starting_with(Criterion::Job(TextPattern::fuzzy("a")))),
    ]
}

proptest! {
    #[test]
    fn refinement_order_does_not_matter(
        head in head(),
        picked in proptest::sample::subsequence(refinement_pool(), 0..=6),
        seed in any::<u64>(),
    ) {
        let catalog = sample_catalog();

        let mut shuffled = picked.clone();
        let len = shuffled.len();
        if len > 1 {
            // Deterministic rotation plus reversal derived from the seed.
            #[allow(clippy::cast_possible_truncation)]
            shuffled.rotate_left((seed as usize) % len);
            if seed % 2 == 0 {
                shuffled.reverse();
            }
        }

        let forward = picked.into_iter().fold(head.clone(), Query::refine);
        let permuted = shuffled.into_iter().fold(head, Query::refine);

        prop_assert_eq!(
            QueryExecutor::evaluate(&catalog, &forward),
            QueryExecutor::evaluate(&catalog, &permuted)
        );
    }

    #[test]
    fn every_surviving_unit_yields_a_record(
        head in head(),
        picked in proptest::sample::subsequence(refinement_pool(), 0..=6),
    ) {
        let catalog = sample_catalog();
        let query = picked.into_iter().fold(head, Query::refine);
        let results = QueryExecutor::evaluate(&catalog, &query);
        prop_assert_eq!(
            unit_names(&catalog, &results),
            QueryExecutor::matching_units(&catalog, &query)
        );
    }
}
