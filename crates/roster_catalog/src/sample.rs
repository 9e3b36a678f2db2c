//! A small built-in catalog.
//!
//! Used by the CLI when no snapshot file is given, and by tests as a fixture
//! that covers the interesting shapes: multi-element units, units sharing a
//! job name, a unit with the same skill on two jobs, and a name that starts
//! with punctuation.

use roster_foundation::{Element, Rarity};

use crate::catalog::Catalog;
use crate::draft::{JobDraft, UnitDraft};

/// Draft list behind [`sample_catalog`].
#[must_use]
pub fn sample_drafts() -> Vec<UnitDraft> {
    vec![
        UnitDraft::new("Mont Leonis", Rarity::MegaRare)
            .with_element(Element::Earth)
            .with_job(
                JobDraft::new("Lord")
                    .with_skill("Brave Strike", "Deals Dmg (M) to target.", 2)
                    .with_skill(
                        "Killer Blade",
                        "Deals Dmg (L) to target & bestows Man Eater.",
                        7,
                    ),
            )
            .with_job(
                JobDraft::new("Paladin")
                    .with_skill("Cover", "Takes damage in place of an adjacent ally.", 4)
                    .with_skill(
                        "Sentinel",
                        "Significantly raises own DEF/SPR for 1 turn & significantly lowers \
                         Evasion Rate for 1 turn.",
                        5,
                    ),
            )
            .with_job(
                JobDraft::new("Knight")
                    .with_skill("Cover", "Takes damage in place of an adjacent ally.", 2),
            )
            .with_master_ability("Master Ability", "DEF +15, Jump +1")
            .with_limit_burst("Destiny's Cross", "Deals Dmg (XL) to target & lowers DEF."),
        UnitDraft::new("Engelbert", Rarity::UltraRare)
            .with_element(Element::Light)
            .with_job(
                JobDraft::new("Paladin").with_skill(
                    "Sentinel",
                    "Significantly raises own DEF/SPR for 1 turn & significantly lowers \
                     Evasion Rate for 1 turn.",
                    3,
                ),
            )
            .with_job(JobDraft::new("Monk").with_skill("Chakra", "Restores own HP.", 4))
            .with_job(JobDraft::new("Knight"))
            .with_master_ability("Master Ability", "DEF +15")
            .with_limit_burst("Unyielding Fortitude", "Bestows Barrier on self."),
        UnitDraft::new("Gilgamesh", Rarity::UltraRare)
            .with_element(Element::Earth)
            .with_job(
                JobDraft::new("Lord").with_skill(
                    "Killer Blade",
                    "Deals Dmg (L) to target & bestows Man Eater.",
                    9,
                ),
            )
            .with_job(JobDraft::new("Samurai").with_skill("Iai Strike", "Deals Dmg (M).", 3)),
        UnitDraft::new("Lasswell", Rarity::UltraRare)
            .with_element(Element::Ice)
            .with_job(
                JobDraft::new("Samurai").with_skill(
                    "Blizzard Edge",
                    "Deals Dmg (M) to target & lowers Ice Res.",
                    6,
                ),
            )
            .with_job(JobDraft::new("Ninja").with_skill("Throw", "Deals Dmg (S) from range.", 2)),
        UnitDraft::new("Little Leela", Rarity::Rare)
            .with_element(Element::Fire)
            .with_job(JobDraft::new("Black Mage").with_skill("Fire", "Deals Dmg (M).", 3))
            .with_job(JobDraft::new("White Mage").with_skill("Cure", "Restores HP.", 2)),
        UnitDraft::new("Little Leela (Halloween)", Rarity::SuperRare)
            .with_element(Element::Dark)
            .with_job(JobDraft::new("Black Mage").with_skill("Fire", "Deals Dmg (M).", 2))
            .with_job(JobDraft::new("Monk")),
        UnitDraft::new("Vinera", Rarity::SuperRare)
            .with_element(Element::Fire)
            .with_element(Element::Dark)
            .with_job(JobDraft::new("Dark Knight").with_skill("Darkness", "Drains HP.", 4)),
        UnitDraft::new("'Summer' Macherie", Rarity::Normal)
            .with_element(Element::Water)
            .with_job(JobDraft::new("Dancer").with_skill("Charm Step", "Charms target.", 4)),
    ]
}

/// Builds the built-in catalog.
///
/// # Panics
///
/// Never in practice: the drafts are fixed and satisfy every invariant,
/// which the tests below check.
#[must_use]
pub fn sample_catalog() -> Catalog {
    Catalog::from_drafts(sample_drafts()).expect("built-in sample catalog is valid")
}
