//! Event block rendering for the timetable grid.
//!
//! One block covers the full span of a logical event. The rows below it are
//! placeholders and draw nothing of their own.

use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::{with_alpha, TimetablePalette};
use crate::models::event::{LogicalEvent, OverlayPlacement, OverlayShow};

pub struct BlockStyle {
    pub fill: Color32,
    /// Outside the active category filter
    pub dimmed: bool,
    /// Playing right now
    pub live: bool,
}

/// Render a merged event block and return its click response.
pub fn render_event_block(
    ui: &mut egui::Ui,
    rect: Rect,
    event: &LogicalEvent,
    style: &BlockStyle,
    palette: &TimetablePalette,
) -> egui::Response {
    let block = rect.shrink2(Vec2::new(3.0, 2.0));
    let id = ui.id().with(("event_block", &event.id));
    let response = ui
        .interact(block, id, Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand);

    let painter = ui.painter_at(block);
    let fill = if response.hovered() && !style.dimmed {
        style.fill.linear_multiply(0.85)
    } else {
        style.fill
    };
    painter.rect_filled(block, 4.0, fill);

    // Accent bar (left side)
    let bar = Rect::from_min_size(block.min, Vec2::new(4.0, block.height()));
    painter.rect_filled(bar, 2.0, fill.linear_multiply(0.7));

    if style.live {
        painter.rect_stroke(block, 4.0, Stroke::new(2.0, palette.live_border));
    }

    let text_color = if style.dimmed {
        with_alpha(palette.block_text, 150)
    } else {
        palette.block_text
    };
    let text_left = bar.right() + 6.0;
    let text_width = (block.right() - text_left - 4.0).max(10.0);

    painter.text(
        Pos2::new(text_left, block.top() + 3.0),
        Align2::LEFT_TOP,
        event.time_range_label(),
        FontId::proportional(10.0),
        text_color,
    );

    let title = painter.layout(
        event.title.clone(),
        FontId::proportional(13.0),
        text_color,
        text_width,
    );
    painter.galley(Pos2::new(text_left, block.top() + 17.0), title, text_color);

    if let Some(overlay) = &event.overlay {
        draw_overlay_badge(&painter, block, overlay, palette);
    }

    response.on_hover_text(&event.title)
}

/// Small label for an overlay show, at the top or over the lower half of the block
fn draw_overlay_badge(
    painter: &egui::Painter,
    block: Rect,
    overlay: &OverlayShow,
    palette: &TimetablePalette,
) {
    let label = format!("★ {}", overlay.title.as_deref().unwrap_or("Show"));
    let galley = painter.layout_no_wrap(label, FontId::proportional(11.0), palette.badge_text);

    let top = match overlay.placement() {
        OverlayPlacement::Top => block.top() + 2.0,
        OverlayPlacement::SecondHalf => block.center().y,
    };
    let size = galley.size() + Vec2::new(8.0, 4.0);
    let badge = Rect::from_min_size(Pos2::new(block.right() - size.x - 3.0, top), size);

    painter.rect_filled(badge, 3.0, palette.badge_bg);
    painter.galley(badge.min + Vec2::new(4.0, 2.0), galley, palette.badge_text);
}
