use super::FestivalApp;
use crate::models::event::EventId;
use crate::services::timetable::{aggregate_slides, assemble_detail, live_events};
use crate::ui_egui::event_modal::render_event_modal;
use crate::ui_egui::views::palette::TimetablePalette;
use crate::ui_egui::views::timetable_view::render_timetable;

impl FestivalApp {
    /// Render the grid; returns the event clicked this frame
    pub(super) fn render_main_panel(&mut self, ctx: &egui::Context) -> Option<EventId> {
        let now = self.current_live_time();

        egui::CentralPanel::default()
            .show(ctx, |ui| {
                let Some(projection) = &self.projection else {
                    ui.centered_and_justified(|ui| {
                        ui.label("No schedule available");
                    });
                    return None;
                };

                if projection.columns.is_empty() {
                    ui.centered_and_justified(|ui| {
                        ui.label("No areas scheduled for this day");
                    });
                    return None;
                }

                let palette = TimetablePalette::from_theme(&self.active_theme);
                egui::ScrollArea::both()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        render_timetable(
                            ui,
                            projection,
                            &self.active_theme,
                            &palette,
                            self.settings.slot_height,
                            now,
                        )
                    })
                    .inner
            })
            .inner
    }

    pub(super) fn render_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let Some(projection) = &self.projection else {
                    ui.label("No day selected");
                    return;
                };

                ui.label(format!("{} events", projection.event_count()));

                let Some(now) = self.current_live_time() else {
                    return;
                };
                let live = live_events(projection, now);
                if !live.is_empty() {
                    ui.separator();
                    let names: Vec<String> = live
                        .iter()
                        .map(|event| format!("{} ({})", event.title, event.id.area))
                        .collect();
                    ui.label(
                        egui::RichText::new(format!("Now: {}", names.join(", ")))
                            .color(self.active_theme.accent),
                    );
                }
            });
        });
    }

    pub(super) fn render_modal(&mut self, ctx: &egui::Context) {
        let Some(event_id) = self.modal.event().cloned() else {
            return;
        };

        let found = self
            .projection
            .as_ref()
            .and_then(|projection| projection.event_with_slots(&event_id));
        let Some((event, span)) = found else {
            log::debug!("Selected event {:?} is no longer projected", event_id);
            self.modal.close();
            return;
        };

        let slides = aggregate_slides(event, span, &self.settings.placeholder_image);
        let detail = assemble_detail(event, slides);

        ctx.input(|input| {
            if input.key_pressed(egui::Key::Escape) {
                self.modal.close();
            } else if input.key_pressed(egui::Key::ArrowRight) {
                self.modal.next(detail.slide_count());
            } else if input.key_pressed(egui::Key::ArrowLeft) {
                self.modal.previous(detail.slide_count());
            }
        });

        if self.modal.is_open() {
            render_event_modal(ctx, &mut self.modal, &detail, &self.active_theme);
        }
    }
}
