//! Core enums, text matching, and error types for Roster.
//!
//! This crate provides:
//! - [`Rarity`] and [`Element`] - The closed vocabularies units are tagged with
//! - [`TextPattern`] and [`MatchMode`] - Free-text search terms, quoted or fuzzy
//! - [`Error`] - Rich error types shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod element;
pub mod error;
pub mod rarity;
pub mod text;

pub use element::Element;
pub use error::{Error, ErrorContext, ErrorKind, MAX_LISTED_CANDIDATES, Result};
pub use rarity::Rarity;
pub use text::{MatchMode, TextPattern, fuzzy_matches, normalize_name};
