use crate::ui_egui::theme::FestivalTheme;
use egui::Color32;

pub(crate) fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct TimetablePalette {
    pub grid_bg: Color32,
    pub shaded_bg: Color32,
    pub border: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
    pub time_text: Color32,
    pub block_text: Color32,
    pub no_data_text: Color32,
    pub error_bg: Color32,
    pub error_text: Color32,
    pub live_border: Color32,
    pub now_line: Color32,
    pub badge_bg: Color32,
    pub badge_text: Color32,
    /// Alpha applied to blocks outside the category filter
    pub dimmed_alpha: u8,
}

impl TimetablePalette {
    pub fn from_theme(theme: &FestivalTheme) -> Self {
        Self {
            grid_bg: theme.grid_background,
            shaded_bg: theme.shaded_row,
            border: theme.grid_border,
            header_bg: blend(theme.app_background, theme.grid_background, 0.5),
            header_text: theme.text_primary,
            time_text: theme.text_secondary,
            block_text: Color32::WHITE,
            no_data_text: theme.text_secondary,
            error_bg: if theme.is_dark {
                Color32::from_rgb(70, 35, 35)
            } else {
                Color32::from_rgb(253, 232, 232)
            },
            error_text: if theme.is_dark {
                Color32::from_rgb(255, 150, 150)
            } else {
                Color32::from_rgb(170, 30, 30)
            },
            live_border: theme.accent,
            now_line: theme.accent,
            badge_bg: with_alpha(Color32::BLACK, if theme.is_dark { 170 } else { 120 }),
            badge_text: Color32::WHITE,
            dimmed_alpha: if theme.is_dark { 70 } else { 90 },
        }
    }

    pub fn block_fill(&self, base: Color32, dimmed: bool) -> Color32 {
        if dimmed {
            with_alpha(base, self.dimmed_alpha)
        } else {
            base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_endpoints() {
        let a = Color32::from_rgb(0, 0, 0);
        let b = Color32::from_rgb(200, 100, 50);
        assert_eq!(blend(a, b, 0.0), a);
        assert_eq!(blend(a, b, 1.0), b);
        assert_eq!(blend(a, b, 0.5), Color32::from_rgb(100, 50, 25));
    }

    #[test]
    fn test_dimmed_blocks_are_translucent() {
        let palette = TimetablePalette::from_theme(&FestivalTheme::light());
        let base = Color32::from_rgb(200, 60, 90);
        assert_eq!(palette.block_fill(base, false), base);
        assert!(palette.block_fill(base, true).a() < 255);
    }
}
