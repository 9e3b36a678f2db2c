//! Unit rarity tiers.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rarity tier of a unit, from highest to lowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rarity {
    /// `UR`
    #[cfg_attr(feature = "serde", serde(rename = "UR"))]
    UltraRare,
    /// `MR`
    #[cfg_attr(feature = "serde", serde(rename = "MR"))]
    MegaRare,
    /// `SR`
    #[cfg_attr(feature = "serde", serde(rename = "SR"))]
    SuperRare,
    /// `R`
    #[cfg_attr(feature = "serde", serde(rename = "R"))]
    Rare,
    /// `N`
    #[cfg_attr(feature = "serde", serde(rename = "N"))]
    Normal,
}

impl Rarity {
    /// All rarities, highest first.
    pub const ALL: [Rarity; 5] = [
        Self::UltraRare,
        Self::MegaRare,
        Self::SuperRare,
        Self::Rare,
        Self::Normal,
    ];

    /// Returns the short code used in commands and output.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::UltraRare => "UR",
            Self::MegaRare => "MR",
            Self::SuperRare => "SR",
            Self::Rare => "R",
            Self::Normal => "N",
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Rarity {
    type Err = String;

    /// Parses a rarity code, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown rarity `{s}` (expected one of UR, MR, SR, R, N)"))
    }
}
