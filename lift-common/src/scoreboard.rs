use crate::{
    labels::Label,
    region::{Layout, Region},
};
use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// Everything the engine tells a scoreboard about the session. Panels only
/// read it; any field the engine leaves out renders as empty.
#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreboardViewModel {
    pub competition_name: String,
    pub full_name: String,
    pub team_name: String,
    pub start_number: Option<u32>,
    /// Already formatted by the engine, e.g. "C&J #2"
    pub attempt: String,
    pub weight: Option<u32>,
    pub group_name: String,
    pub lifts_done: String,
    pub category_name: String,
    pub wide_team_names: bool,
    /// Seconds allotted to the current athlete
    pub time_allowed: Option<u32>,
    /// Seconds left in the current break
    pub break_remaining: Option<u32>,
    pub athletes: Vec<ResultRow>,
    pub leaders: Vec<ResultRow>,
}

impl ScoreboardViewModel {
    /// Text shown inside `region`, for the regions whose content comes from the
    /// view model. Timers and decision lights belong to their own components.
    pub fn region_text(&self, region: Region) -> Option<String> {
        match region {
            Region::FullName => Some(self.full_name.clone()),
            Region::StartNumber => Some(display_opt(self.start_number)),
            Region::TeamName => Some(self.team_name.clone()),
            Region::Attempt => Some(self.attempt.clone()),
            Region::Weight => Some(display_opt(self.weight)),
            Region::Group => Some(if self.lifts_done.is_empty() {
                self.group_name.clone()
            } else {
                format!("{} \u{2013} {}", self.group_name, self.lifts_done)
            }),
            Region::AthleteTimer | Region::BreakTimer | Region::Decision => None,
        }
    }

    pub fn results(&self, layout: Layout) -> Vec<RenderedRow> {
        render_rows(&self.athletes, layout)
    }

    pub fn leader_rows(&self, layout: Layout) -> Vec<RenderedRow> {
        render_rows(&self.leaders, layout)
    }
}

fn render_rows(rows: &[ResultRow], layout: Layout) -> Vec<RenderedRow> {
    let columns = result_columns(layout);
    rows.iter().map(|row| row.render(&columns)).collect()
}

fn display_opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// One row of a results sequence
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultRow {
    /// Blank divider between blocks of athletes
    Spacer,
    Athlete(AthleteResult),
}

impl ResultRow {
    /// `None` for spacers, which have no cells at all
    pub fn cell(&self, column: Column) -> Option<Cell> {
        match self {
            Self::Spacer => None,
            Self::Athlete(athlete) => Some(athlete.cell(column)),
        }
    }

    pub fn render(&self, columns: &[Column]) -> RenderedRow {
        match self {
            Self::Spacer => RenderedRow::Divider,
            Self::Athlete(athlete) => {
                RenderedRow::Cells(columns.iter().map(|c| athlete.cell(*c)).collect())
            }
        }
    }
}

#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AthleteResult {
    pub start_number: Option<u32>,
    pub full_name: String,
    pub team_name: String,
    pub category: String,
    pub year_of_birth: Option<u16>,
    pub snatch_attempts: Vec<AttemptCell>,
    pub clean_jerk_attempts: Vec<AttemptCell>,
    pub total: Option<u32>,
    pub snatch_rank: AgeGroupRanks,
    pub clean_jerk_rank: AgeGroupRanks,
    pub total_rank: AgeGroupRanks,
    /// Marks the athlete on the platform and the one after them
    pub highlight: Option<RowHighlight>,
}

impl AthleteResult {
    pub fn cell(&self, column: Column) -> Cell {
        match column {
            Column::StartNumber => {
                Cell::text(display_opt(self.start_number)).highlighted(self.highlight)
            }
            Column::Name => Cell::text(self.full_name.clone()).highlighted(self.highlight),
            Column::Category => Cell::text(self.category.clone()),
            Column::Birth => Cell::text(display_opt(self.year_of_birth)),
            Column::Team => Cell::text(self.team_name.clone()),
            Column::LiftName(lift) => Cell::label(lift.label()),
            Column::Attempt(lift, n) => self
                .attempts(lift)
                .get(usize::from(n))
                .map(Cell::attempt)
                .unwrap_or_default(),
            Column::Rank(lift, group) => Cell::text(display_opt(self.ranks(lift).get(group))),
            Column::Total => Cell::text(display_opt(self.total)),
        }
    }

    fn attempts(&self, lift: Lift) -> &[AttemptCell] {
        match lift {
            Lift::Snatch => self.snatch_attempts.as_slice(),
            Lift::CleanAndJerk => self.clean_jerk_attempts.as_slice(),
            Lift::Total => &[],
        }
    }

    fn ranks(&self, lift: Lift) -> &AgeGroupRanks {
        match lift {
            Lift::Snatch => &self.snatch_rank,
            Lift::CleanAndJerk => &self.clean_jerk_rank,
            Lift::Total => &self.total_rank,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowHighlight {
    Current,
    Next,
}

#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AttemptCell {
    pub value: String,
    pub status: LiftStatus,
    /// The attempt being lifted or announced next
    pub current: bool,
}

#[derive(Derivative, Serialize, Deserialize)]
#[derivative(Debug, Default, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "snake_case")]
pub enum LiftStatus {
    Good,
    Bad,
    #[derivative(Default)]
    Pending,
}

/// Ranks arrive already computed; a missing rank renders as blank
#[derive(Debug, PartialEq, Eq, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeGroupRanks {
    pub overall: Option<u16>,
    pub youth: Option<u16>,
    pub junior: Option<u16>,
    pub senior: Option<u16>,
}

impl AgeGroupRanks {
    pub fn get(&self, group: AgeGroup) -> Option<u16> {
        match group {
            AgeGroup::Overall => self.overall,
            AgeGroup::Youth => self.youth,
            AgeGroup::Junior => self.junior,
            AgeGroup::Senior => self.senior,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lift {
    Snatch,
    CleanAndJerk,
    Total,
}

impl Lift {
    pub fn label(self) -> Label {
        match self {
            Self::Snatch => Label::Snatch,
            Self::CleanAndJerk => Label::CleanAndJerk,
            Self::Total => Label::Total,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AgeGroup {
    Overall,
    Youth,
    Junior,
    Senior,
}

impl AgeGroup {
    pub fn label(self) -> Label {
        match self {
            Self::Overall => Label::Rank,
            Self::Youth => Label::Youth,
            Self::Junior => Label::Junior,
            Self::Senior => Label::Senior,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Column {
    StartNumber,
    Name,
    Category,
    Birth,
    Team,
    /// Row-level heading such as "Snatch", used by the current athlete table
    LiftName(Lift),
    /// Zero-based attempt index
    Attempt(Lift, u8),
    Rank(Lift, AgeGroup),
    Total,
}

impl Column {
    /// Header text, `None` for columns that carry their own heading in-row
    pub fn heading(self) -> Option<CellContent> {
        let label = match self {
            Self::StartNumber => Label::Start,
            Self::Name => Label::Name,
            Self::Category => Label::Category,
            Self::Birth => Label::Birth,
            Self::Team => Label::Team,
            Self::LiftName(_) => return None,
            Self::Attempt(_, n) => return Some(CellContent::Text((n + 1).to_string())),
            Self::Rank(_, group) => group.label(),
            Self::Total => Label::Total,
        };
        Some(CellContent::Label(label))
    }
}

/// Column set of the results tables for `layout`
pub fn result_columns(layout: Layout) -> Vec<Column> {
    match layout {
        Layout::CurrentAthlete => {
            let mut columns = vec![Column::Category];
            for lift in [Lift::Snatch, Lift::CleanAndJerk] {
                columns.push(Column::LiftName(lift));
                columns.extend((0..3).map(|n| Column::Attempt(lift, n)));
                columns.push(Column::Rank(lift, AgeGroup::Overall));
            }
            columns.extend([
                Column::LiftName(Lift::Total),
                Column::Total,
                Column::Rank(Lift::Total, AgeGroup::Overall),
            ]);
            columns
        }
        Layout::MultiRank => {
            let by_age = [AgeGroup::Youth, AgeGroup::Junior, AgeGroup::Senior];
            let mut columns = vec![
                Column::StartNumber,
                Column::Name,
                Column::Category,
                Column::Birth,
                Column::Team,
            ];
            for lift in [Lift::Snatch, Lift::CleanAndJerk] {
                columns.extend((0..3).map(|n| Column::Attempt(lift, n)));
                columns.extend(by_age.iter().map(|g| Column::Rank(lift, *g)));
            }
            columns.push(Column::Total);
            columns.extend(by_age.iter().map(|g| Column::Rank(Lift::Total, *g)));
            columns
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum CellContent {
    Text(String),
    /// Translated by the renderer
    Label(Label),
}

impl Default for CellContent {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Cell {
    pub content: CellContent,
    /// Only attempt cells carry a classification
    pub status: Option<LiftStatus>,
    pub current: bool,
    /// Set on the start number and name cells of a highlighted row
    pub highlight: Option<RowHighlight>,
}

impl Cell {
    fn text(text: String) -> Self {
        Self {
            content: CellContent::Text(text),
            ..Default::default()
        }
    }

    fn label(label: Label) -> Self {
        Self {
            content: CellContent::Label(label),
            ..Default::default()
        }
    }

    fn attempt(attempt: &AttemptCell) -> Self {
        Self {
            content: CellContent::Text(attempt.value.clone()),
            status: Some(attempt.status),
            current: attempt.current,
            highlight: None,
        }
    }

    fn highlighted(self, highlight: Option<RowHighlight>) -> Self {
        Self { highlight, ..self }
    }
}

#[derive(Debug, PartialEq, Eq, Clone)]
pub enum RenderedRow {
    Divider,
    Cells(Vec<Cell>),
}
