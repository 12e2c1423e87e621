//! Theme module for the festival viewer
//!
//! Defines the FestivalTheme structure, the per-category block colours and
//! the mapping from the persisted theme name to a concrete theme.

use egui::Color32;

use crate::models::slot::Category;

/// Colours used by the timetable and the detail window
#[derive(Debug, Clone, PartialEq)]
pub struct FestivalTheme {
    /// Whether this is a dark theme (affects base egui::Visuals)
    pub is_dark: bool,

    /// Application background color
    pub app_background: Color32,

    /// Timetable grid background color
    pub grid_background: Color32,

    /// Background of odd rows
    pub shaded_row: Color32,

    /// Grid line color
    pub grid_border: Color32,

    /// Primary text color (titles, area names)
    pub text_primary: Color32,

    /// Secondary text color (time labels, metadata)
    pub text_secondary: Color32,

    /// Highlight for live events and the current-time line
    pub accent: Color32,

    pub performance: Color32,
    pub dance_workshop: Color32,
    pub music_workshop: Color32,
    pub talk: Color32,
    /// Events without a category
    pub general: Color32,
}

impl FestivalTheme {
    /// Create the default Light theme
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_background: Color32::from_rgb(245, 245, 245),
            grid_background: Color32::from_rgb(255, 255, 255),
            shaded_row: Color32::from_rgb(247, 245, 250),
            grid_border: Color32::from_rgb(220, 220, 220),
            text_primary: Color32::from_rgb(40, 40, 40),
            text_secondary: Color32::from_rgb(100, 100, 100),
            accent: Color32::from_rgb(230, 70, 70),
            performance: Color32::from_rgb(200, 60, 90),
            dance_workshop: Color32::from_rgb(230, 130, 40),
            music_workshop: Color32::from_rgb(60, 140, 110),
            talk: Color32::from_rgb(70, 110, 190),
            general: Color32::from_rgb(120, 120, 140),
        }
    }

    /// Create the default Dark theme
    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_background: Color32::from_rgb(30, 30, 30),
            grid_background: Color32::from_rgb(40, 40, 40),
            shaded_row: Color32::from_rgb(46, 44, 50),
            grid_border: Color32::from_rgb(60, 60, 60),
            text_primary: Color32::from_rgb(240, 240, 240),
            text_secondary: Color32::from_rgb(170, 170, 170),
            accent: Color32::from_rgb(255, 100, 100),
            performance: Color32::from_rgb(170, 50, 80),
            dance_workshop: Color32::from_rgb(190, 105, 35),
            music_workshop: Color32::from_rgb(45, 115, 90),
            talk: Color32::from_rgb(60, 90, 160),
            general: Color32::from_rgb(95, 95, 115),
        }
    }

    /// Resolve a persisted theme name; `system` asks the OS via `dark-light`
    pub fn from_name(name: &str) -> Self {
        match name {
            "dark" => Self::dark(),
            "light" => Self::light(),
            "system" => match dark_light::detect() {
                dark_light::Mode::Dark => Self::dark(),
                dark_light::Mode::Light | dark_light::Mode::Default => Self::light(),
            },
            other => {
                log::warn!("Unknown theme '{}', using light", other);
                Self::light()
            }
        }
    }

    /// Block fill for an event of `category`
    pub fn category_color(&self, category: Option<Category>) -> Color32 {
        match category {
            Some(Category::MainPerformance) => self.performance,
            Some(Category::DanceWorkshop) => self.dance_workshop,
            Some(Category::MusicWorkshop) => self.music_workshop,
            Some(Category::Talk) => self.talk,
            None => self.general,
        }
    }

    /// Apply this theme to an egui context
    pub fn apply_to_context(&self, ctx: &egui::Context) {
        let mut visuals = if self.is_dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };

        visuals.window_fill = self.app_background;
        visuals.panel_fill = self.app_background;
        visuals.override_text_color = Some(self.text_primary);

        ctx.set_visuals(visuals);
    }
}
