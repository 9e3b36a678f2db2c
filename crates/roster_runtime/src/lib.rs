//! REPL and CLI for Roster.
//!
//! This crate provides:
//! - [`Repl`] - Interactive read-eval-print loop over search commands
//! - [`Session`] - The published catalog snapshot plus the query service
//! - [`LineEditor`] - Line editing abstraction, backed by rustyline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod editor;
pub mod highlight;
pub mod repl;
pub mod session;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;
pub use session::Session;
