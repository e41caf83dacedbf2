use super::{PADDING, PageRenderer, attempt_bar::BAR_HEIGHT};
use crate::scoreboard::{Panel, Scoreboard};
use lift_common::region::{Layout, TeamWidth};
use macroquad::prelude::*;

impl PageRenderer {
    /// Attempt bar with the current athlete's own results underneath
    pub fn current_athlete(&self, area: Rect, panel: &Panel, scoreboard: &Scoreboard) {
        let team_width = TeamWidth::new(scoreboard.view.wide_team_names);
        self.attempt_bar(area, panel, scoreboard, team_width);

        if panel.results_visible() {
            let top = area.y + BAR_HEIGHT + PADDING;
            let rows = scoreboard.view.results(Layout::CurrentAthlete);
            self.results_table(
                Rect::new(area.x, top, area.w, area.y + area.h - top),
                Layout::CurrentAthlete,
                &rows,
                scoreboard,
                team_width,
                false,
            );
        }
    }
}
