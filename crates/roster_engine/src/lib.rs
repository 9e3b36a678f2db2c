//! Filter pipeline, result formatting, and query service for Roster.
//!
//! This crate provides:
//! - [`QueryExecutor`] - Evaluates a parsed query against a catalog snapshot
//! - [`ResultFormatter`] - Sorts and renders result records as text
//! - [`QueryService`] - Parse, evaluate, and format in one call
//! - [`EngineConfig`] - Output limits and command prefix

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod format;
pub mod pipeline;
pub mod predicate;
pub mod service;

pub use config::EngineConfig;
pub use format::{ResultFormatter, rarity_and_element};
pub use pipeline::{QueryExecutor, Record, ResultSet, SkillHit, SkillOrigin};
pub use service::QueryService;
