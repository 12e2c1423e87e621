//! Timetable grid rendering for one festival day.
//!
//! Draws the time labels, one column per area and the current time line.
//! Event blocks are delegated to `block_rendering`.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::block_rendering::{render_event_block, BlockStyle};
use super::palette::TimetablePalette;
use super::{HEADER_HEIGHT, MIN_COLUMN_WIDTH, TIME_LABEL_WIDTH};
use crate::models::event::EventId;
use crate::models::slot::SlotTime;
use crate::services::timetable::{
    axis_position, live_events, ColumnProjection, ColumnState, GridCell, GridProjection,
};
use crate::ui_egui::theme::FestivalTheme;

/// Column geometry shared by all rows
struct GridGeometry {
    origin: Pos2,
    col_width: f32,
    slot_height: f32,
}

impl GridGeometry {
    fn body_top(&self) -> f32 {
        self.origin.y + HEADER_HEIGHT
    }

    fn column_left(&self, col: usize) -> f32 {
        self.origin.x + TIME_LABEL_WIDTH + col as f32 * self.col_width
    }

    fn row_rect(&self, col: usize, row: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(self.column_left(col), self.body_top() + row as f32 * self.slot_height),
            Vec2::new(self.col_width, self.slot_height),
        )
    }

    fn column_body(&self, col: usize, rows: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(self.column_left(col), self.body_top()),
            Vec2::new(self.col_width, rows as f32 * self.slot_height),
        )
    }
}

/// Render the grid for `projection`; returns the event clicked this frame.
///
/// `now` is the wall-clock time when the projected day is today.
pub fn render_timetable(
    ui: &mut egui::Ui,
    projection: &GridProjection,
    theme: &FestivalTheme,
    palette: &TimetablePalette,
    slot_height: f32,
    now: Option<SlotTime>,
) -> Option<EventId> {
    let rows = projection.rows();
    let columns = projection.columns.len().max(1);
    let col_width = ((ui.available_width() - TIME_LABEL_WIDTH) / columns as f32).max(MIN_COLUMN_WIDTH);
    let size = Vec2::new(
        TIME_LABEL_WIDTH + columns as f32 * col_width,
        HEADER_HEIGHT + rows.max(1) as f32 * slot_height,
    );

    let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
    let geometry = GridGeometry {
        origin: rect.min,
        col_width,
        slot_height,
    };

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.grid_bg);

    draw_time_labels(&painter, projection, &geometry, palette);

    let live: Vec<&EventId> = now
        .map(|time| live_events(projection, time).into_iter().map(|e| &e.id).collect())
        .unwrap_or_default();

    let mut clicked = None;
    for (col, column) in projection.columns.iter().enumerate() {
        draw_column_header(&painter, column, &geometry, col, palette);

        match &column.state {
            ColumnState::Events { events, cells } => {
                for (row, cell) in cells.iter().enumerate() {
                    let row_rect = geometry.row_rect(col, row);
                    if cell.is_shaded() {
                        painter.rect_filled(row_rect, 0.0, palette.shaded_bg);
                    }
                }

                // Blocks after backgrounds so spans cover the rows below them
                for (row, cell) in cells.iter().enumerate() {
                    let GridCell::Block { event, dimmed, .. } = *cell else {
                        continue;
                    };
                    let Some(event) = events.get(event) else {
                        continue;
                    };

                    let top = geometry.row_rect(col, row).min;
                    let block_rect = Rect::from_min_size(
                        top,
                        Vec2::new(col_width, cell.block_height(slot_height)),
                    );
                    let style = BlockStyle {
                        fill: palette.block_fill(theme.category_color(event.category), dimmed),
                        dimmed,
                        live: live.contains(&&event.id),
                    };

                    let response = render_event_block(ui, block_rect, event, &style, palette);
                    if response.clicked() {
                        clicked = Some(event.id.clone());
                    }
                }
            }
            ColumnState::NoData => {
                let body = geometry.column_body(col, rows.max(1));
                painter.text(
                    Pos2::new(body.center().x, body.top() + slot_height),
                    Align2::CENTER_CENTER,
                    "No events",
                    FontId::proportional(13.0),
                    palette.no_data_text,
                );
            }
            ColumnState::Invalid(err) => {
                let body = geometry.column_body(col, rows.max(1));
                painter.rect_filled(body, 0.0, palette.error_bg);
                let galley = painter.layout(
                    format!("Timetable data error\n{}", err),
                    FontId::proportional(12.0),
                    palette.error_text,
                    col_width - 12.0,
                );
                painter.galley(body.min + Vec2::new(6.0, 6.0), galley, palette.error_text);
            }
        }
    }

    draw_grid_lines(&painter, projection, &geometry, palette);

    if let Some(time) = now {
        draw_current_time_indicator(&painter, projection, &geometry, time, palette.now_line);
    }

    clicked
}

fn draw_time_labels(
    painter: &egui::Painter,
    projection: &GridProjection,
    geometry: &GridGeometry,
    palette: &TimetablePalette,
) {
    for (row, time) in projection.time_axis.iter().enumerate() {
        let y = geometry.body_top() + row as f32 * geometry.slot_height;
        let is_hour_start = time.minute() == 0;
        painter.text(
            Pos2::new(geometry.origin.x + TIME_LABEL_WIDTH - 6.0, y + 2.0),
            Align2::RIGHT_TOP,
            time.to_string(),
            FontId::proportional(if is_hour_start { 12.0 } else { 10.0 }),
            palette.time_text,
        );
    }
}

fn draw_column_header(
    painter: &egui::Painter,
    column: &ColumnProjection,
    geometry: &GridGeometry,
    col: usize,
    palette: &TimetablePalette,
) {
    let header = Rect::from_min_size(
        Pos2::new(geometry.column_left(col), geometry.origin.y),
        Vec2::new(geometry.col_width, HEADER_HEIGHT),
    );
    painter.rect_filled(header, 0.0, palette.header_bg);
    painter.text(
        header.center(),
        Align2::CENTER_CENTER,
        &column.area,
        FontId::proportional(14.0),
        palette.header_text,
    );
}

fn draw_grid_lines(
    painter: &egui::Painter,
    projection: &GridProjection,
    geometry: &GridGeometry,
    palette: &TimetablePalette,
) {
    let rows = projection.rows().max(1);
    let bottom = geometry.body_top() + rows as f32 * geometry.slot_height;
    let stroke = Stroke::new(1.0, palette.border);

    for col in 0..=projection.columns.len() {
        let x = geometry.column_left(col);
        painter.line_segment([Pos2::new(x, geometry.origin.y), Pos2::new(x, bottom)], stroke);
    }

    let right = geometry.column_left(projection.columns.len());
    painter.line_segment(
        [
            Pos2::new(geometry.origin.x, geometry.body_top()),
            Pos2::new(right, geometry.body_top()),
        ],
        stroke,
    );
}

/// Draw the current time line across every column.
fn draw_current_time_indicator(
    painter: &egui::Painter,
    projection: &GridProjection,
    geometry: &GridGeometry,
    time: SlotTime,
    line_color: Color32,
) {
    let Some(position) = axis_position(projection, time) else {
        return;
    };

    let y = geometry.body_top() + position * geometry.slot_height;
    let x_start = geometry.column_left(0);
    let x_end = geometry.column_left(projection.columns.len());

    painter.circle_filled(Pos2::new(x_start - 4.0, y), 3.0, line_color);
    painter.line_segment(
        [Pos2::new(x_start, y), Pos2::new(x_end, y)],
        Stroke::new(2.0, line_color),
    );
}
