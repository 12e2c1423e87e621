mod lifecycle;
mod panels;
mod toolbar;

use crate::models::schedule::FestivalSchedule;
use crate::models::settings::Settings;
use crate::services::settings::SettingsService;
use crate::services::timetable::{GridProjection, ProjectionOptions};
use crate::ui_egui::event_modal::ModalState;
use crate::ui_egui::theme::FestivalTheme;

pub struct FestivalApp {
    settings_service: SettingsService,
    settings: Settings,
    schedule: FestivalSchedule,
    /// Identifier of the day on screen
    current_day: Option<String>,
    options: ProjectionOptions,
    /// Projection of `current_day`, rebuilt on day or filter change
    projection: Option<GridProjection>,
    modal: ModalState,
    /// Currently applied theme colors
    active_theme: FestivalTheme,
}

impl eframe::App for FestivalApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_update(ctx);
    }
}
