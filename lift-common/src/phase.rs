use derivative::Derivative;
use enum_iterator::Sequence;
use serde::{Deserialize, Serialize};

/// A moment in the lift-attempt cycle, as broadcast by the competition engine
#[derive(Derivative, PartialOrd, Ord, Hash, Sequence, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[derivative(Default)]
    Ready,
    Start,
    Reset,
    /// Referee decision pending or shown
    Down,
    Break,
    GroupDone,
    RefereeDecision,
}

impl core::fmt::Display for Phase {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match *self {
            Phase::Ready => write!(f, "Ready"),
            Phase::Start => write!(f, "Start"),
            Phase::Reset => write!(f, "Reset"),
            Phase::Down => write!(f, "Down"),
            Phase::Break => write!(f, "Break"),
            Phase::GroupDone => write!(f, "Group Done"),
            Phase::RefereeDecision => write!(f, "Referee Decision"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use enum_iterator::all;

    #[test]
    fn test_phase_wire_names() {
        assert_eq!(
            serde_json::to_string(&Phase::GroupDone).unwrap(),
            "\"group_done\""
        );
        assert_eq!(
            serde_json::from_str::<Phase>("\"referee_decision\"").unwrap(),
            Phase::RefereeDecision
        );
        assert_eq!(all::<Phase>().count(), 7);
    }
}
