//! Immutable unit, job, and skill catalog snapshots for Roster.
//!
//! This crate provides:
//! - [`Catalog`] - Immutable snapshot of units with structural sharing
//! - [`UnitDraft`] / [`JobDraft`] - Plain descriptions a catalog is built from
//! - [`CatalogStore`] - Atomic publish point for the current snapshot
//! - [`CatalogProvider`] - The load interface implemented by ingestion code

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod draft;
pub mod id;
pub mod model;
pub mod provider;
pub mod sample;
#[cfg(feature = "serde")]
pub mod serialize;
pub mod store;

pub use catalog::Catalog;
pub use draft::{JobDraft, SkillDraft, UnitDraft};
pub use id::{JobId, UnitId};
pub use model::{Job, JobSkill, Skill, Unit};
pub use provider::{CatalogProvider, FileProvider, StaticProvider};
pub use store::CatalogStore;
