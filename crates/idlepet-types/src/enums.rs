//! Enumeration types for the Idlepet simulation.
//!
//! Both sets are closed: the four needs a pet has, and the four care
//! actions the player can take to restore them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Needs
// ---------------------------------------------------------------------------

/// One of the pet's four independent needs.
///
/// Every need is a scalar in `[0, 1]` that decays over time and is
/// restored by care actions or by purchased regeneration upgrades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Need {
    /// Restored by feeding.
    Hunger,
    /// Restored by playing.
    Happiness,
    /// Restored by napping.
    Energy,
    /// Restored by cleaning.
    Cleanliness,
}

impl Need {
    /// All needs in canonical order.
    pub const ALL: [Self; 4] = [Self::Hunger, Self::Happiness, Self::Energy, Self::Cleanliness];

    /// Human-readable label, used in toast messages.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hunger => "Hunger",
            Self::Happiness => "Happiness",
            Self::Energy => "Energy",
            Self::Cleanliness => "Cleanliness",
        }
    }
}

impl fmt::Display for Need {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Care actions
// ---------------------------------------------------------------------------

/// A discrete care action the player performs on the pet.
///
/// Each action gives one instantaneous boost to exactly one need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum CareAction {
    /// Boosts [`Need::Hunger`].
    Feed,
    /// Boosts [`Need::Happiness`].
    Play,
    /// Boosts [`Need::Energy`].
    Nap,
    /// Boosts [`Need::Cleanliness`].
    Clean,
}

impl CareAction {
    /// All care actions in display order.
    pub const ALL: [Self; 4] = [Self::Feed, Self::Play, Self::Nap, Self::Clean];

    /// The need this action restores.
    pub const fn target(self) -> Need {
        match self {
            Self::Feed => Need::Hunger,
            Self::Play => Need::Happiness,
            Self::Nap => Need::Energy,
            Self::Clean => Need::Cleanliness,
        }
    }

    /// The lowercase name used by the presentation layer.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Nap => "nap",
            Self::Clean => "clean",
        }
    }
}

impl fmt::Display for CareAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known [`CareAction`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown care action: {0}")]
pub struct ParseCareActionError(pub String);

impl FromStr for CareAction {
    type Err = ParseCareActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "feed" => Ok(Self::Feed),
            "play" => Ok(Self::Play),
            "nap" => Ok(Self::Nap),
            "clean" => Ok(Self::Clean),
            other => Err(ParseCareActionError(other.to_owned())),
        }
    }
}
