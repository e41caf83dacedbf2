use derivative::Derivative;
use enum_iterator::{Sequence, all};
use serde::{Deserialize, Serialize};

/// A zone of a scoreboard panel whose visibility is toggled as a unit
#[derive(
    Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Sequence, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    FullName,
    StartNumber,
    TeamName,
    Attempt,
    Weight,
    AthleteTimer,
    BreakTimer,
    Decision,
    /// Group name and lift count, only present on the multi-rank layout
    Group,
}

impl core::fmt::Display for Region {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::FullName => write!(f, "Full Name"),
            Self::StartNumber => write!(f, "Start Number"),
            Self::TeamName => write!(f, "Team Name"),
            Self::Attempt => write!(f, "Attempt"),
            Self::Weight => write!(f, "Weight"),
            Self::AthleteTimer => write!(f, "Athlete Timer"),
            Self::BreakTimer => write!(f, "Break Timer"),
            Self::Decision => write!(f, "Decision"),
            Self::Group => write!(f, "Group"),
        }
    }
}

#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Visible,
    #[derivative(Default)]
    Hidden,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Self::Visible
    }
}

/// The two panel layouts. They share the transition logic and differ only in
/// which regions and result columns they carry.
#[derive(Derivative, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    #[derivative(Default)]
    CurrentAthlete,
    MultiRank,
}

impl Layout {
    pub fn has_region(self, region: Region) -> bool {
        match region {
            Region::Group => self == Self::MultiRank,
            _ => true,
        }
    }

    /// Regions carried by this layout, in display order
    pub fn regions(self) -> impl Iterator<Item = Region> {
        all::<Region>().filter(move |r| self.has_region(*r))
    }
}

impl core::fmt::Display for Layout {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Self::CurrentAthlete => write!(f, "Current Athlete"),
            Self::MultiRank => write!(f, "Multi Rank"),
        }
    }
}

/// Width class of the team column, picked by the engine for both layouts
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TeamWidth {
    Wide,
    Narrow,
}

impl TeamWidth {
    pub fn new(wide_team_names: bool) -> Self {
        if wide_team_names {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}
