//! Roster - unit, job, and skill catalog search
//!
//! This crate re-exports all layers of the Roster system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: roster_runtime    - REPL, CLI, snapshot loading
//! Layer 3: roster_engine     - Filter pipeline, formatting, query service
//! Layer 2: roster_query      - Command parser, name resolver
//! Layer 1: roster_catalog    - Immutable catalog snapshots, publish point
//! Layer 0: roster_foundation - Core types (Rarity, Element, TextPattern, Error)
//! ```

pub use roster_catalog as catalog;
pub use roster_engine as engine;
pub use roster_foundation as foundation;
pub use roster_query as query;
pub use roster_runtime as runtime;
