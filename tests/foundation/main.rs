//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: Rarity, Element, TextPattern, and Error.

mod errors;
mod text;
