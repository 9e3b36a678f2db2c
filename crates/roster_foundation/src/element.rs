//! Unit elements.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Element affinity of a unit. A unit may hold several.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Element {
    /// Earth
    Earth,
    /// Wind
    Wind,
    /// Fire
    Fire,
    /// Water
    Water,
    /// Ice
    Ice,
    /// Lightning
    Lightning,
    /// Dark
    Dark,
    /// Light
    Light,
    /// The explicit "no element" affinity.
    None,
}

impl Element {
    /// All elements in declaration order.
    pub const ALL: [Element; 9] = [
        Self::Earth,
        Self::Wind,
        Self::Fire,
        Self::Water,
        Self::Ice,
        Self::Lightning,
        Self::Dark,
        Self::Light,
        Self::None,
    ];

    /// Returns the display name, e.g. `Earth`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Earth => "Earth",
            Self::Wind => "Wind",
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Ice => "Ice",
            Self::Lightning => "Lightning",
            Self::Dark => "Dark",
            Self::Light => "Light",
            Self::None => "None",
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Element {
    type Err = String;

    /// Parses an element name, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown element `{s}` (expected one of earth, wind, fire, water, ice, \
                     lightning, dark, light, none)"
                )
            })
    }
}
