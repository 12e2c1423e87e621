use egui::{Align, Layout};

use super::FestivalApp;
use crate::models::settings::SUPPORTED_THEMES;
use crate::models::slot::Category;
use crate::services::timetable::program_query;

const ALL_CATEGORIES: &str = "All categories";

impl FestivalApp {
    pub(super) fn render_toolbar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                self.render_day_tabs(ui);
                ui.separator();
                self.render_category_selector(ui);
                ui.separator();
                self.render_theme_selector(ui, ctx);

                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let enabled = self.current_day.is_some();
                    if ui
                        .add_enabled(enabled, egui::Button::new("Full program"))
                        .on_hover_text("Open the complete program in the browser")
                        .clicked()
                    {
                        self.open_full_program();
                    }
                });
            });
        });
    }

    fn render_day_tabs(&mut self, ui: &mut egui::Ui) {
        if self.schedule.is_empty() {
            ui.label("No festival days");
            return;
        }

        let mut selected = None;
        for day in &self.schedule.days {
            let is_current = self.current_day.as_deref() == Some(day.id.as_str());
            if ui
                .selectable_label(is_current, day.label(&self.settings.locale))
                .clicked()
            {
                selected = Some(day.id.clone());
            }
        }

        if let Some(day) = selected {
            self.select_day(day);
        }
    }

    fn render_category_selector(&mut self, ui: &mut egui::Ui) {
        let mut filter = self.options.category_filter;

        egui::ComboBox::from_id_source("category_filter")
            .selected_text(filter.map_or(ALL_CATEGORIES, Category::label))
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut filter, None, ALL_CATEGORIES);
                for category in Category::ALL {
                    ui.selectable_value(&mut filter, Some(category), category.label());
                }
            });

        if filter != self.options.category_filter {
            self.set_category_filter(filter);
        }
    }

    fn render_theme_selector(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut theme = self.settings.theme.clone();

        egui::ComboBox::from_id_source("theme")
            .selected_text(format!("Theme: {}", theme))
            .show_ui(ui, |ui| {
                for name in SUPPORTED_THEMES {
                    ui.selectable_value(&mut theme, name.to_string(), name);
                }
            });

        if theme != self.settings.theme {
            self.set_theme(&theme, ctx);
        }
    }

    fn open_full_program(&self) {
        let Some(day) = &self.current_day else {
            return;
        };

        let url = program_query(day, &self.settings.locale).to_url(&self.settings.program_url);
        log::info!("Opening full program at {}", url);
        if let Err(e) = webbrowser::open(&url) {
            log::warn!("Failed to open {}: {}", url, e);
        }
    }
}
