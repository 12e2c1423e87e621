use std::time::Duration;

use chrono::{Local, NaiveDate, NaiveDateTime, Timelike};

use super::FestivalApp;
use crate::models::schedule::FestivalSchedule;
use crate::models::settings::{Settings, BUNDLED_PLACEHOLDER_URI};
use crate::models::slot::{Category, SlotTime};
use crate::services::content::{load_schedule_or_fallback, BundledSchedule, FileSchedule};
use crate::services::settings::SettingsService;
use crate::services::timetable::{project_day, ProjectionOptions};
use crate::ui_egui::event_modal::ModalState;
use crate::ui_egui::theme::FestivalTheme;

const PLACEHOLDER_PNG: &[u8] = include_bytes!("../../../assets/placeholder-show.png");

/// Repaint interval that keeps the current time line moving
const CLOCK_REPAINT: Duration = Duration::from_secs(30);

impl FestivalApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        cc.egui_ctx.include_bytes(BUNDLED_PLACEHOLDER_URI, PLACEHOLDER_PNG);

        let settings_service = SettingsService::from_default_location();
        let settings = settings_service.get_or_default();
        log::info!(
            "Loaded settings from {}: locale={}, theme={}",
            settings_service.path().display(),
            settings.locale,
            settings.theme
        );

        let schedule = load_schedule(&settings);
        let current_day = initial_day(&schedule, settings.default_day.as_deref());

        let mut app = Self {
            settings_service,
            settings,
            schedule,
            current_day,
            options: ProjectionOptions::default(),
            projection: None,
            modal: ModalState::Closed,
            active_theme: FestivalTheme::light(),
        };

        app.apply_theme(&cc.egui_ctx);
        app.rebuild_projection();
        app
    }

    pub(super) fn handle_update(&mut self, ctx: &egui::Context) {
        self.render_toolbar(ctx);
        self.render_status_bar(ctx);

        if let Some(event) = self.render_main_panel(ctx) {
            self.modal.open(event);
        }
        self.render_modal(ctx);

        ctx.request_repaint_after(CLOCK_REPAINT);
    }

    pub(super) fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = FestivalTheme::from_name(&self.settings.theme);
        theme.apply_to_context(ctx);
        self.active_theme = theme;
    }

    pub(super) fn select_day(&mut self, day: String) {
        if self.current_day.as_deref() == Some(day.as_str()) {
            return;
        }
        self.current_day = Some(day);
        self.modal.close();
        self.rebuild_projection();
    }

    pub(super) fn set_category_filter(&mut self, filter: Option<Category>) {
        self.options.category_filter = filter;
        self.rebuild_projection();
    }

    pub(super) fn set_theme(&mut self, theme: &str, ctx: &egui::Context) {
        self.settings.theme = theme.to_string();
        self.apply_theme(ctx);
        self.save_settings();
    }

    fn save_settings(&self) {
        if let Err(e) = self.settings_service.update(&self.settings) {
            log::warn!("Failed to save settings: {:#}", e);
        }
    }

    fn rebuild_projection(&mut self) {
        self.projection = self
            .current_day
            .as_deref()
            .and_then(|id| self.schedule.day(id))
            .map(|day| project_day(day, &self.options));

        if let Some(projection) = &self.projection {
            log::debug!(
                "Projected day '{}': {} rows, {} columns, {} events",
                projection.day,
                projection.rows(),
                projection.columns.len(),
                projection.event_count()
            );
        }
    }

    /// Wall-clock time on the projected day's axis, when that day is running now
    pub(super) fn current_live_time(&self) -> Option<SlotTime> {
        let projection = self.projection.as_ref()?;
        let day = self.schedule.day(&projection.day)?;
        live_time(
            day.date,
            projection.time_axis.first().copied(),
            Local::now().naive_local(),
        )
    }
}

fn load_schedule(settings: &Settings) -> FestivalSchedule {
    let active_days = settings.active_days.as_deref();
    match &settings.schedule_path {
        Some(path) => load_schedule_or_fallback(&FileSchedule::new(path), active_days),
        None => load_schedule_or_fallback(&BundledSchedule, active_days),
    }
}

/// The configured default day when it exists, otherwise the first day
fn initial_day(schedule: &FestivalSchedule, default_day: Option<&str>) -> Option<String> {
    if let Some(id) = default_day {
        if schedule.day(id).is_some() {
            return Some(id.to_string());
        }
        log::warn!("Default day '{}' is not in the schedule", id);
    }
    schedule.days.first().map(|day| day.id.clone())
}

/// Map `now` onto a festival day dated `date` whose axis opens at `axis_start`.
///
/// Times before the opening on the following calendar date still belong to
/// the festival night.
fn live_time(date: Option<NaiveDate>, axis_start: Option<SlotTime>, now: NaiveDateTime) -> Option<SlotTime> {
    let date = date?;
    let start = axis_start?;
    let time = SlotTime::from_hm(now.hour() as u16, now.minute() as u16)?;
    let today = now.date();

    if today == date && time >= start {
        Some(time)
    } else if date.succ_opt() == Some(today) && time < start {
        Some(time)
    } else {
        None
    }
}
