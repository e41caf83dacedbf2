use crate::scoreboard::{Panel, Scoreboard};
use lift_common::{config::Theme, region::Layout};
use log::info;
use macroquad::prelude::*;

mod attempt_bar;
mod current_athlete;
mod multi_ranks;
mod results_table;

pub const FONT_SIZE: u16 = 36;
pub const SMALL_FONT_SIZE: u16 = 24;
pub const TITLE_FONT_SIZE: u16 = 72;
pub const PADDING: f32 = 12f32;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Justify {
    Left,
    Center,
}

/// Fits `text` into a field `field_width` wide.
///
/// Returns the offset from the left side of the field to render from, and the
/// text to render. Text that overflows is cut and ends with "..".
pub fn fit_text(
    field_width: f32,
    text: &str,
    font_size: u16,
    font: Option<&Font>,
    justify: Justify,
) -> (f32, String) {
    let width_of = |s: &str| measure_text(s, font, font_size, 1.0).width;

    let mut fitted = text.to_string();
    if width_of(&fitted) > field_width {
        while !fitted.is_empty() && width_of(&(fitted.clone() + "..")) > field_width {
            fitted.pop();
        }
        fitted.push_str("..");
    }

    let free = (field_width - width_of(&fitted)).max(0f32);
    let offset = match justify {
        Justify::Left => 0f32,
        Justify::Center => free / 2f32,
    };
    (offset, fitted)
}

/// Wrap the given `text` into lines that fit within the specified `width`.
///
/// Breaks at whitespace. A single word wider than `width` still gets its own
/// line, so pass each line through `fit_text` before drawing.
pub fn multilinify(text: &str, width: f32, font: Option<&Font>, font_size: u16) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_line = String::new();

    for word in text.split_whitespace() {
        let candidate = if current_line.is_empty() {
            word.to_string()
        } else {
            format!("{current_line} {word}")
        };

        if current_line.is_empty() || measure_text(&candidate, font, font_size, 1.0).width <= width
        {
            current_line = candidate;
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Colours for one theme. Chosen once per session.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub panel: Color,
    pub text: Color,
    pub dim_text: Color,
    pub good: Color,
    pub bad: Color,
    pub current: Color,
    pub next: Color,
    pub divider: Color,
    pub timer_warning: Color,
    pub light_off: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self {
                background: BLACK,
                panel: Color::from_rgba(24, 24, 28, 255),
                text: WHITE,
                dim_text: Color::from_rgba(170, 170, 170, 255),
                good: WHITE,
                bad: Color::from_rgba(230, 30, 30, 255),
                current: Color::from_rgba(200, 160, 0, 255),
                next: Color::from_rgba(60, 60, 110, 255),
                divider: Color::from_rgba(60, 60, 60, 255),
                timer_warning: Color::from_rgba(250, 200, 40, 255),
                light_off: Color::from_rgba(70, 70, 70, 255),
            },
            Theme::Light => Self {
                background: WHITE,
                panel: Color::from_rgba(235, 235, 240, 255),
                text: BLACK,
                dim_text: Color::from_rgba(90, 90, 90, 255),
                good: Color::from_rgba(20, 110, 30, 255),
                bad: Color::from_rgba(200, 20, 20, 255),
                current: Color::from_rgba(250, 210, 60, 255),
                next: Color::from_rgba(180, 200, 240, 255),
                divider: Color::from_rgba(190, 190, 190, 255),
                timer_warning: Color::from_rgba(200, 120, 0, 255),
                light_off: Color::from_rgba(200, 200, 200, 255),
            },
        }
    }
}

pub struct PageRenderer {
    pub palette: Palette,
    pub max_result_rows: usize,
}

impl PageRenderer {
    pub fn new(theme: Theme, max_result_rows: usize) -> Self {
        info!("Using {theme:?} theme");
        Self {
            palette: Palette::for_theme(theme),
            max_result_rows,
        }
    }

    /// Splits the screen evenly between the attached panels, top to bottom
    pub fn draw(&self, scoreboard: &Scoreboard) {
        clear_background(self.palette.background);

        let attached: Vec<&Panel> = scoreboard
            .panels
            .iter()
            .filter(|p| p.is_attached())
            .collect();
        if attached.is_empty() {
            return;
        }

        let height = screen_height() / attached.len() as f32;
        for (i, panel) in attached.into_iter().enumerate() {
            let area = Rect::new(0f32, height * i as f32, screen_width(), height);
            if panel.waiting_banner_visible() {
                self.waiting_banner(area, scoreboard);
                continue;
            }
            match panel.layout() {
                Layout::CurrentAthlete => self.current_athlete(area, panel, scoreboard),
                Layout::MultiRank => self.multi_ranks(area, panel, scoreboard),
            }
        }
    }

    /// Shown instead of the panel while the platform is inactive
    fn waiting_banner(&self, area: Rect, scoreboard: &Scoreboard) {
        let width = area.w - 2f32 * PADDING;
        let mut y = area.y + area.h / 3f32;
        for line in multilinify(
            &scoreboard.view.competition_name,
            width,
            None,
            TITLE_FONT_SIZE,
        ) {
            let (x_off, text) = fit_text(width, &line, TITLE_FONT_SIZE, None, Justify::Center);
            draw_text_ex(
                &text,
                area.x + PADDING + x_off,
                y,
                TextParams {
                    font_size: TITLE_FONT_SIZE,
                    color: self.palette.text,
                    ..Default::default()
                },
            );
            y += f32::from(TITLE_FONT_SIZE);
        }

        let waiting = scoreboard
            .translations
            .get(lift_common::labels::Label::WaitingNextGroup);
        let (x_off, text) = fit_text(width, waiting, FONT_SIZE, None, Justify::Center);
        draw_text_ex(
            &text,
            area.x + PADDING + x_off,
            y + PADDING,
            TextParams {
                font_size: FONT_SIZE,
                color: self.palette.dim_text,
                ..Default::default()
            },
        );
    }
}
