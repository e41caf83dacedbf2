use super::{FONT_SIZE, Justify, PADDING, PageRenderer, fit_text};
use crate::clock::secs_to_string;
use crate::scoreboard::{Panel, Scoreboard};
use lift_common::{
    labels::Label,
    region::{Region, TeamWidth},
};
use macroquad::prelude::*;

pub const BAR_HEIGHT: f32 = 110f32;

/// Share of the bar's width for each slot. Both timers share one slot; the
/// table never shows them together.
fn slots(team_width: TeamWidth) -> [(&'static [Region], f32); 7] {
    let (name, team) = match team_width {
        TeamWidth::Narrow => (0.30, 0.16),
        TeamWidth::Wide => (0.24, 0.22),
    };
    [
        (&[Region::StartNumber], 0.06),
        (&[Region::FullName], name),
        (&[Region::TeamName], team),
        (&[Region::Attempt], 0.12),
        (&[Region::Weight], 0.10),
        (&[Region::AthleteTimer, Region::BreakTimer], 0.10),
        (&[Region::Decision], 0.14),
    ]
}

impl PageRenderer {
    /// Draws the visible regions of the attempt bar into the top of `area`
    pub(super) fn attempt_bar(
        &self,
        area: Rect,
        panel: &Panel,
        scoreboard: &Scoreboard,
        team_width: TeamWidth,
    ) {
        draw_rectangle(area.x, area.y, area.w, BAR_HEIGHT, self.palette.panel);

        let baseline = area.y + BAR_HEIGHT / 2f32 + f32::from(FONT_SIZE) / 3f32;
        let mut x = area.x + PADDING;
        let usable = area.w - 2f32 * PADDING;
        for (regions, share) in slots(team_width) {
            let width = usable * share;
            for region in regions.iter().filter(|r| panel.is_visible(**r)) {
                match region {
                    Region::Decision => self.decision_lights(x, area.y, width, scoreboard),
                    _ => {
                        let (text, color) = self.region_content(*region, panel, scoreboard);
                        let justify = match region {
                            Region::FullName | Region::TeamName => Justify::Left,
                            _ => Justify::Center,
                        };
                        let (x_off, text) =
                            fit_text(width - PADDING, &text, FONT_SIZE, None, justify);
                        draw_text_ex(
                            &text,
                            x + x_off,
                            baseline,
                            TextParams {
                                font_size: FONT_SIZE,
                                color,
                                ..Default::default()
                            },
                        );
                    }
                }
            }
            x += width;
        }
    }

    fn region_content(
        &self,
        region: Region,
        panel: &Panel,
        scoreboard: &Scoreboard,
    ) -> (String, Color) {
        match region {
            Region::AthleteTimer => {
                let remaining = panel.countdown().remaining_secs();
                let color = if panel.countdown().is_running() && remaining <= 30 {
                    self.palette.timer_warning
                } else {
                    self.palette.text
                };
                (secs_to_string(remaining), color)
            }
            Region::BreakTimer => (
                scoreboard
                    .view
                    .break_remaining
                    .map(secs_to_string)
                    .unwrap_or_default(),
                self.palette.dim_text,
            ),
            Region::Weight => {
                let weight = scoreboard.view.region_text(region).unwrap_or_default();
                let text = if weight.is_empty() {
                    weight
                } else {
                    format!("{weight} {}", scoreboard.translations.get(Label::KgSymbol))
                };
                (text, self.palette.text)
            }
            _ => (
                scoreboard.view.region_text(region).unwrap_or_default(),
                self.palette.text,
            ),
        }
    }

    /// Three referee lights; the values belong to the decision feed
    fn decision_lights(&self, x: f32, y: f32, width: f32, scoreboard: &Scoreboard) {
        let radius = (width / 8f32).min(BAR_HEIGHT / 4f32);
        let spacing = width / 3f32;
        for (i, light) in scoreboard.decisions.iter().enumerate() {
            let cx = x + spacing * (i as f32 + 0.5);
            let cy = y + BAR_HEIGHT / 2f32;
            match light {
                Some(true) => draw_circle(cx, cy, radius, self.palette.good),
                Some(false) => draw_circle(cx, cy, radius, self.palette.bad),
                None => draw_circle_lines(cx, cy, radius, 2f32, self.palette.light_off),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_slots_cover_every_bar_region_once() {
        for team_width in [TeamWidth::Narrow, TeamWidth::Wide] {
            let slots = slots(team_width);
            let total: f32 = slots.iter().map(|(_, share)| share).sum();
            assert!(total <= 1.0, "{team_width:?} overflows: {total}");

            let mut regions: Vec<Region> = slots
                .iter()
                .flat_map(|(regions, _)| regions.iter().copied())
                .collect();
            regions.sort();
            regions.dedup();
            assert_eq!(regions.len(), 8);
            assert!(!regions.contains(&Region::Group));
        }
    }
}
