//! Session tests: snapshots, reloads, and the full command path.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use roster_catalog::serialize::save_to_file;
use roster_catalog::{Catalog, JobDraft, UnitDraft};
use roster_engine::{EngineConfig, QueryService};
use roster_foundation::{Element, ErrorKind, Rarity};
use roster_runtime::Session;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("roster-it-{}-{name}", std::process::id()))
}

fn small_catalog(name: &str) -> Catalog {
    Catalog::from_drafts(vec![
        UnitDraft::new(name, Rarity::UltraRare)
            .with_element(Element::Wind)
            .with_job(JobDraft::new("Ranger").with_skill("Aim", "Raises ACC.", 3)),
    ])
    .unwrap()
}

#[test]
fn searches_through_session() {
    let session = Session::new();
    assert_eq!(
        session.respond("!unit-search rarity UR\nelement Earth"),
        "Results:\nGilgamesh (UR rarity, Earth element)"
    );
    assert_eq!(
        session.respond("!unit-search skill-name \"Killer Blade\"\nnot rarity UR"),
        "Results:\n\
         Skill \"Killer Blade\" learned by Mont Leonis (MR rarity, Earth element) with job Lord \
         at job level 7: Deals Dmg (L) to target & bestows Man Eater."
    );
}

#[test]
fn execute_reports_structured_errors() {
    let session = Session::new();
    let err = session.execute("!unit-search element plasma").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::ParseError { line: 1, .. }));
}

#[test]
fn custom_service_is_used() {
    let service = QueryService::new(EngineConfig::default().with_max_results(1)).with_espers(["Odin"]);
    let session = Session::new().with_service(service);
    let text = session.respond("!unit-search all");
    assert!(text.ends_with("Results truncated because there were too many."));
    assert_eq!(session.respond("!res lass/od"), "Resonance lookup for Lasswell/Odin");
}

#[test]
fn held_snapshot_is_unaffected_by_reload() {
    let path = temp_path("reload.json");
    save_to_file(&small_catalog("Fina"), &path).unwrap();

    let mut session = Session::new();
    let before = session.catalog();
    session.load_file(&path).unwrap();

    assert!(before.find_unit("Lasswell").is_some());
    assert!(session.catalog().find_unit("Lasswell").is_none());
    assert_eq!(
        session.respond("!unit-search job ranger"),
        "Results:\nJob \"Ranger\" learned by Fina (UR rarity, Wind element)"
    );

    save_to_file(&small_catalog("Rain"), &path).unwrap();
    session.reload().unwrap();
    assert!(session.catalog().find_unit("Rain").is_some());

    fs::remove_file(&path).ok();
}

#[test]
fn corrupt_file_keeps_current_catalog() {
    let path = temp_path("corrupt.json");
    fs::write(&path, "{ not json").unwrap();

    let mut session = Session::new();
    let err = session.load_file(&path).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::SerializationError(_)));
    assert!(session.catalog().find_unit("Gilgamesh").is_some());
    assert!(session.source().is_none());

    fs::remove_file(&path).ok();
}

#[test]
fn concurrent_queries_share_a_snapshot() {
    let catalog = Session::new().catalog();
    let service = Arc::new(QueryService::default());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            let service = Arc::clone(&service);
            thread::spawn(move || service.respond(&catalog, "!unit-search element fire"))
        })
        .collect();
    for handle in handles {
        assert_eq!(
            handle.join().unwrap(),
            "Results:\nLittle Leela (R rarity, Fire element)\nVinera (SR rarity, Fire/Dark elements)"
        );
    }
}
