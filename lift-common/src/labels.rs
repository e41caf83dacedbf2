use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Display text that comes from the engine's translation table
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum Label {
    WaitingNextGroup,
    KgSymbol,
    Snatch,
    CleanAndJerk,
    Total,
    Rank,
    Start,
    Name,
    Category,
    Birth,
    Team,
    Youth,
    Junior,
    Senior,
    Leaders,
}

impl Label {
    /// Key in the engine's translation table
    pub fn key(self) -> &'static str {
        match self {
            Self::WaitingNextGroup => "WaitingNextGroup",
            Self::KgSymbol => "KgSymbol",
            Self::Snatch => "Snatch",
            Self::CleanAndJerk => "Clean_and_Jerk",
            Self::Total => "Total",
            Self::Rank => "Rank",
            Self::Start => "Start",
            Self::Name => "Name",
            Self::Category => "Category",
            Self::Birth => "Birth",
            Self::Team => "Team",
            Self::Youth => "Yth",
            Self::Junior => "Jr",
            Self::Senior => "Sr",
            Self::Leaders => "Leaders",
        }
    }
}

/// Key to text table. Unknown keys come back unmodified.
#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations(HashMap<String, String>);

impl Translations {
    pub fn new(table: HashMap<String, String>) -> Self {
        Self(table)
    }

    pub fn get(&self, label: Label) -> &str {
        let key = label.key();
        self.0.get(key).map(String::as_str).unwrap_or(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_lookup_falls_back_to_key() {
        let t = Translations::new(HashMap::from([
            ("Rank".to_string(), "Rang".to_string()),
            ("Clean_and_Jerk".to_string(), "Épaulé-jeté".to_string()),
        ]));
        assert_eq!(t.get(Label::Rank), "Rang");
        assert_eq!(t.get(Label::CleanAndJerk), "Épaulé-jeté");
        assert_eq!(t.get(Label::WaitingNextGroup), "WaitingNextGroup");
        assert_eq!(Translations::default().get(Label::Youth), "Yth");
    }

    #[test]
    fn test_deser_flat_table() {
        let t: Translations = serde_json::from_str(r#"{"Total": "Totale"}"#).unwrap();
        assert_eq!(t.len(), 1);
        assert_eq!(t.get(Label::Total), "Totale");
    }
}
