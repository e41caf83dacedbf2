use super::{FONT_SIZE, Justify, PADDING, PageRenderer, attempt_bar::BAR_HEIGHT, fit_text};
use crate::scoreboard::{Panel, Scoreboard};
use lift_common::{
    labels::Label,
    region::{Layout, Region, TeamWidth},
};
use macroquad::prelude::*;

const GROUP_HEIGHT: f32 = 48f32;

impl PageRenderer {
    /// Attempt bar, group line, the full results table and the leaders table
    pub fn multi_ranks(&self, area: Rect, panel: &Panel, scoreboard: &Scoreboard) {
        let view = &scoreboard.view;
        let team_width = TeamWidth::new(view.wide_team_names);
        self.attempt_bar(area, panel, scoreboard, team_width);

        let mut y = area.y + BAR_HEIGHT;
        if panel.is_visible(Region::Group) {
            let text = view.region_text(Region::Group).unwrap_or_default();
            let (x_off, text) = fit_text(
                area.w - 2f32 * PADDING,
                &text,
                FONT_SIZE,
                None,
                Justify::Left,
            );
            draw_text_ex(
                &text,
                area.x + PADDING + x_off,
                y + GROUP_HEIGHT * 0.75,
                TextParams {
                    font_size: FONT_SIZE,
                    color: self.palette.dim_text,
                    ..Default::default()
                },
            );
        }
        y += GROUP_HEIGHT;

        if !panel.results_visible() {
            return;
        }

        let bottom = area.y + area.h;
        if !view.athletes.is_empty() {
            y = self.results_table(
                Rect::new(area.x, y, area.w, bottom - y),
                Layout::MultiRank,
                &view.results(Layout::MultiRank),
                scoreboard,
                team_width,
                true,
            );
        }

        if !view.leaders.is_empty() && y + GROUP_HEIGHT < bottom {
            y += PADDING;
            let title = format!(
                "{} {}",
                scoreboard.translations.get(Label::Leaders),
                view.category_name
            );
            let (x_off, title) = fit_text(
                area.w - 2f32 * PADDING,
                title.trim(),
                FONT_SIZE,
                None,
                Justify::Left,
            );
            draw_text_ex(
                &title,
                area.x + PADDING + x_off,
                y + GROUP_HEIGHT * 0.75,
                TextParams {
                    font_size: FONT_SIZE,
                    color: self.palette.text,
                    ..Default::default()
                },
            );
            y += GROUP_HEIGHT;
            self.results_table(
                Rect::new(area.x, y, area.w, bottom - y),
                Layout::MultiRank,
                &view.leader_rows(Layout::MultiRank),
                scoreboard,
                team_width,
                false,
            );
        }
    }
}
