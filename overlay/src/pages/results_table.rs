use super::{Justify, PADDING, PageRenderer, SMALL_FONT_SIZE, fit_text};
use crate::scoreboard::Scoreboard;
use lift_common::{
    region::{Layout, TeamWidth},
    scoreboard::{
        Cell, CellContent, Column, LiftStatus, RenderedRow, RowHighlight, result_columns,
    },
};
use macroquad::prelude::*;

pub const ROW_HEIGHT: f32 = 34f32;
pub const DIVIDER_HEIGHT: f32 = 8f32;

/// Relative width of a column; scaled to the table width when drawn
fn column_weight(column: Column, team_width: TeamWidth) -> f32 {
    match column {
        Column::Name => 4.0,
        Column::Team => match team_width {
            TeamWidth::Wide => 4.0,
            TeamWidth::Narrow => 2.0,
        },
        Column::Category | Column::LiftName(_) => 1.6,
        Column::StartNumber | Column::Birth | Column::Attempt(..) | Column::Total => 1.0,
        Column::Rank(..) => 0.8,
    }
}

fn column_widths(columns: &[Column], team_width: TeamWidth, table_width: f32) -> Vec<f32> {
    let total: f32 = columns.iter().map(|c| column_weight(*c, team_width)).sum();
    columns
        .iter()
        .map(|c| table_width * column_weight(*c, team_width) / total)
        .collect()
}

impl PageRenderer {
    /// Draws `rows` from the top of `area` down, stopping at its bottom.
    /// Returns the y coordinate below the last row drawn.
    pub(super) fn results_table(
        &self,
        area: Rect,
        layout: Layout,
        rows: &[RenderedRow],
        scoreboard: &Scoreboard,
        team_width: TeamWidth,
        with_header: bool,
    ) -> f32 {
        let columns = result_columns(layout);
        let widths = column_widths(&columns, team_width, area.w - 2f32 * PADDING);
        let bottom = area.y + area.h;
        let mut y = area.y;

        if with_header && y + ROW_HEIGHT <= bottom {
            let header: Vec<Cell> = columns
                .iter()
                .map(|c| Cell {
                    content: c.heading().unwrap_or_default(),
                    ..Default::default()
                })
                .collect();
            self.table_row(area.x + PADDING, y, &widths, &header, scoreboard, true);
            y += ROW_HEIGHT;
        }

        for row in rows.iter().take(self.max_result_rows) {
            match row {
                RenderedRow::Divider => {
                    if y + DIVIDER_HEIGHT > bottom {
                        break;
                    }
                    draw_line(
                        area.x + PADDING,
                        y + DIVIDER_HEIGHT / 2f32,
                        area.x + area.w - PADDING,
                        y + DIVIDER_HEIGHT / 2f32,
                        1f32,
                        self.palette.divider,
                    );
                    y += DIVIDER_HEIGHT;
                }
                RenderedRow::Cells(cells) => {
                    if y + ROW_HEIGHT > bottom {
                        break;
                    }
                    self.table_row(area.x + PADDING, y, &widths, cells, scoreboard, false);
                    y += ROW_HEIGHT;
                }
            }
        }
        y
    }

    fn table_row(
        &self,
        left: f32,
        top: f32,
        widths: &[f32],
        cells: &[Cell],
        scoreboard: &Scoreboard,
        header: bool,
    ) {
        let baseline = top + ROW_HEIGHT * 0.7;
        let mut x = left;
        for (cell, width) in cells.iter().zip(widths) {
            if let Some(fill) = self.cell_fill(cell) {
                draw_rectangle(x, top + 2f32, *width - 2f32, ROW_HEIGHT - 4f32, fill);
            }

            let text = match &cell.content {
                CellContent::Text(text) => text.as_str(),
                CellContent::Label(label) => scoreboard.translations.get(*label),
            };
            let color = match cell.status {
                _ if header => self.palette.dim_text,
                Some(LiftStatus::Good) => self.palette.good,
                Some(LiftStatus::Bad) => self.palette.bad,
                Some(LiftStatus::Pending) | None => self.palette.text,
            };
            let (x_off, text) =
                fit_text(*width - 4f32, text, SMALL_FONT_SIZE, None, Justify::Center);
            draw_text_ex(
                &text,
                x + 2f32 + x_off,
                baseline,
                TextParams {
                    font_size: SMALL_FONT_SIZE,
                    color,
                    ..Default::default()
                },
            );
            x += *width;
        }
    }

    /// Background behind a cell: the attempt being lifted, or the start number
    /// and name of the current and next athletes
    fn cell_fill(&self, cell: &Cell) -> Option<Color> {
        if cell.current {
            return Some(self.palette.current);
        }
        match cell.highlight {
            Some(RowHighlight::Current) => Some(self.palette.current),
            Some(RowHighlight::Next) => Some(self.palette.next),
            None => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use lift_common::config::Theme;

    #[test]
    fn test_column_widths_fill_table() {
        for layout in [Layout::CurrentAthlete, Layout::MultiRank] {
            for team_width in [TeamWidth::Narrow, TeamWidth::Wide] {
                let columns = result_columns(layout);
                let widths = column_widths(&columns, team_width, 1000f32);
                assert_eq!(widths.len(), columns.len());
                let total: f32 = widths.iter().sum();
                assert!((total - 1000f32).abs() < 0.1);
            }
        }
    }

    #[test]
    fn test_cell_fill() {
        let renderer = PageRenderer::new(Theme::Dark, 20);
        let palette = renderer.palette;
        let cell = |current, highlight| Cell {
            current,
            highlight,
            ..Default::default()
        };

        assert_eq!(renderer.cell_fill(&cell(false, None)), None);
        assert_eq!(renderer.cell_fill(&cell(true, None)), Some(palette.current));
        assert_eq!(
            renderer.cell_fill(&cell(false, Some(RowHighlight::Current))),
            Some(palette.current)
        );
        assert_eq!(
            renderer.cell_fill(&cell(false, Some(RowHighlight::Next))),
            Some(palette.next)
        );
    }

    #[test]
    fn test_wide_teams_widen_team_column() {
        let columns = result_columns(Layout::MultiRank);
        let team = columns.iter().position(|c| *c == Column::Team).unwrap();
        let narrow = column_widths(&columns, TeamWidth::Narrow, 1000f32);
        let wide = column_widths(&columns, TeamWidth::Wide, 1000f32);
        assert!(wide[team] > narrow[team]);
    }
}
