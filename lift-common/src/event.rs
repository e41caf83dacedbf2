use crate::{
    labels::Translations, phase::Phase, region::Layout, scoreboard::ScoreboardViewModel,
};
use serde::{Deserialize, Serialize};

/// One message from the competition engine
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// `panel: None` addresses every panel
    Transition {
        phase: Phase,
        #[serde(default)]
        panel: Option<Layout>,
    },
    Update {
        view: Box<ScoreboardViewModel>,
    },
    Inactive {
        hidden: bool,
    },
    /// One light per referee, `None` until that referee has decided
    Decisions {
        lights: [Option<bool>; 3],
    },
    Translations {
        labels: Translations,
    },
}

impl EngineEvent {
    /// Parses one line of the event feed. Blank lines yield `Ok(None)`.
    pub fn from_line(line: &str) -> Result<Option<Self>, serde_json::Error> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(line).map(Some)
    }

    pub fn addresses(&self, layout: Layout) -> bool {
        match self {
            Self::Transition {
                panel: Some(panel), ..
            } => *panel == layout,
            _ => true,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::labels::Label;

    #[test]
    fn test_parse_transition() {
        let event = EngineEvent::from_line(r#"{"type":"transition","phase":"break"}"#)
            .unwrap()
            .unwrap();
        assert_eq!(
            event,
            EngineEvent::Transition {
                phase: Phase::Break,
                panel: None
            }
        );
        assert!(event.addresses(Layout::CurrentAthlete));
        assert!(event.addresses(Layout::MultiRank));

        let event = EngineEvent::from_line(
            r#"{"type":"transition","phase":"referee_decision","panel":"multi_rank"}"#,
        )
        .unwrap()
        .unwrap();
        assert!(!event.addresses(Layout::CurrentAthlete));
        assert!(event.addresses(Layout::MultiRank));
    }

    #[test]
    fn test_parse_other_events() {
        let event = EngineEvent::from_line(r#"{"type":"update","view":{"weight":120}}"#)
            .unwrap()
            .unwrap();
        match event {
            EngineEvent::Update { view } => assert_eq!(view.weight, Some(120)),
            other => panic!("unexpected event {other:?}"),
        }

        assert_eq!(
            EngineEvent::from_line(r#"{"type":"decisions","lights":[true,false,null]}"#)
                .unwrap()
                .unwrap(),
            EngineEvent::Decisions {
                lights: [Some(true), Some(false), None]
            }
        );

        match EngineEvent::from_line(r#"{"type":"translations","labels":{"Jr":"Junior"}}"#)
            .unwrap()
            .unwrap()
        {
            EngineEvent::Translations { labels } => assert_eq!(labels.get(Label::Junior), "Junior"),
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn test_blank_and_corrupt_lines() {
        assert_eq!(EngineEvent::from_line("   ").unwrap(), None);
        assert!(EngineEvent::from_line(r#"{"type":"transition","phase":"lunch"}"#).is_err());
        assert!(EngineEvent::from_line("not json").is_err());
    }
}
