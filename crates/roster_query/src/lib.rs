//! Command parsing and name resolution for Roster search queries.
//!
//! This crate turns command text like
//!
//! ```text
//! !unit-search skill-desc Evasion Rate
//!   not element earth
//!   rarity ur
//! ```
//!
//! into a typed [`Query`], and resolves short user-typed names to one
//! canonical candidate.
//!
//! # Architecture
//!
//! ```text
//! raw command text
//!          │
//!          ▼
//! ┌─────────────────┐
//! │   TOKENIZER     │  → numbered, non-blank lines; head word + argument
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ VOCABULARY      │  → CommandWord::UnitSearch, Keyword::SkillDescription, ...
//! │ LOOKUP          │
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CLAUSE          │  → Query { shape: Skill, clauses: [..] }
//! │ PARSER          │
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`] - Split command text into numbered lines and words
//! - [`vocabulary`] - Command tokens and criterion keywords with synonyms
//! - [`clause`] - Clause, criterion, and result shape types
//! - [`parser`] - Line grammar
//! - [`resolver`] - Prefix / all-words name resolution
//! - [`resonance`] - `unit/esper` lookup targets

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod parser;
pub mod resolver;
pub mod resonance;
pub mod tokenizer;
pub mod vocabulary;

pub use clause::{Clause, Command, Criterion, CriterionKind, Query, ResultShape};
pub use parser::QueryParser;
pub use resolver::{NameResolver, Resolution};
pub use resonance::{ResolvedResonance, ResonanceTarget};
pub use vocabulary::{CommandWord, Keyword, Vocabulary};
