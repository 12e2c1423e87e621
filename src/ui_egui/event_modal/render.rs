use egui::{Color32, RichText};

use super::state::ModalState;
use crate::models::slide::Slide;
use crate::models::slot::SetType;
use crate::services::timetable::{DetailBody, EventDetail, Instructor, TalkFormat};
use crate::ui_egui::theme::FestivalTheme;

const CAROUSEL_HEIGHT: f32 = 260.0;
const LABEL_WIDTH: f32 = 130.0;

/// Render the detail window for the open event.
///
/// Sections without data are left out. Closing the window resets `modal`.
pub fn render_event_modal(
    ctx: &egui::Context,
    modal: &mut ModalState,
    detail: &EventDetail,
    theme: &FestivalTheme,
) {
    let mut window_open = modal.is_open();

    egui::Window::new(RichText::new(&detail.title).strong())
        .id(egui::Id::new("event_detail_window"))
        .open(&mut window_open)
        .collapsible(false)
        .resizable(true)
        .default_width(520.0)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                render_header(ui, detail, theme);
                render_carousel(ui, modal, &detail.slides, theme);
                render_body(ui, &detail.body);
                render_free_text(ui, detail);
                render_overlay_section(ui, detail);
            });
        });

    if !window_open {
        modal.close();
    }
}

fn render_header(ui: &mut egui::Ui, detail: &EventDetail, theme: &FestivalTheme) {
    ui.horizontal_wrapped(|ui| {
        if let Some(category) = detail.category {
            ui.label(
                RichText::new(category.label())
                    .color(Color32::WHITE)
                    .background_color(theme.category_color(Some(category))),
            );
        }
        ui.label(RichText::new(&detail.area).color(theme.text_secondary));
        ui.label(RichText::new(&detail.time_range).color(theme.text_secondary));
    });
    ui.add_space(8.0);
}

fn render_carousel(ui: &mut egui::Ui, modal: &mut ModalState, slides: &[Slide], theme: &FestivalTheme) {
    if slides.is_empty() {
        return;
    }

    let index = modal.slide_index().unwrap_or(0).min(slides.len() - 1);
    let slide = &slides[index];

    ui.vertical_centered(|ui| {
        if let Some(image) = &slide.image {
            ui.add(
                egui::Image::new(image.as_str())
                    .max_height(CAROUSEL_HEIGHT)
                    .maintain_aspect_ratio(true)
                    .rounding(4.0),
            );
        }
        if let Some(caption) = &slide.caption {
            ui.label(RichText::new(caption).italics());
        }
    });

    for person in &slide.people {
        ui.label(RichText::new(&person.name).strong());
        if let Some(bio) = &person.bio {
            ui.label(RichText::new(bio).color(theme.text_secondary));
        }
    }

    if slides.len() > 1 {
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                modal.previous(slides.len());
            }
            ui.label(format!("{} / {}", index + 1, slides.len()));
            if ui.button("▶").clicked() {
                modal.next(slides.len());
            }
        });
    }

    ui.separator();
}

fn render_body(ui: &mut egui::Ui, body: &DetailBody) {
    match body {
        DetailBody::Performance { performers, djs, tag } => {
            let tag = match tag {
                SetType::Live => "Live",
                SetType::DjSet => "DJ set",
            };
            ui.label(RichText::new(tag).strong());
            render_names(ui, "Performers", performers);
            render_names(ui, "DJs", djs);
        }
        DetailBody::Workshop { instructors, style, level } => {
            for instructor in instructors {
                render_instructor(ui, instructor);
            }
            render_field(ui, "Style", style.as_deref());
            render_field(ui, "Level", level.as_deref());
        }
        DetailBody::Talk(TalkFormat::Presentation { presenter, host }) => {
            render_field(ui, "Presenter", presenter.as_deref());
            render_field(ui, "Host", host.as_deref());
        }
        DetailBody::Talk(TalkFormat::RecordInterview {
            moderator,
            guest,
            discussed_artist,
            discussed_record,
            comment,
        }) => {
            render_field(ui, "Moderator", moderator.as_deref());
            render_field(ui, "Guest", guest.as_deref());
            render_field(ui, "Artist", discussed_artist.as_deref());
            render_field(ui, "Record", discussed_record.as_deref());
            if let Some(comment) = comment {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("“{}”", comment)).italics());
            }
        }
        DetailBody::General { people } => render_names(ui, "With", people),
    }
}

fn render_instructor(ui: &mut egui::Ui, instructor: &Instructor) {
    ui.label(RichText::new(&instructor.name).strong());
    if let Some(bio) = &instructor.bio {
        ui.label(bio);
    }
    ui.add_space(4.0);
}

fn render_free_text(ui: &mut egui::Ui, detail: &EventDetail) {
    if let Some(text) = &detail.body_text {
        ui.add_space(6.0);
        ui.label(text);
    }
    if let Some(background) = &detail.background_text {
        ui.add_space(6.0);
        egui::CollapsingHeader::new("Background")
            .default_open(false)
            .show(ui, |ui| {
                ui.label(background);
            });
    }
}

fn render_overlay_section(ui: &mut egui::Ui, detail: &EventDetail) {
    let Some(overlay) = &detail.overlay else {
        return;
    };

    ui.separator();
    ui.heading(overlay.title.as_deref().unwrap_or("Dance show"));
    render_names(ui, "Dancers", &overlay.performers);
}

fn render_field(ui: &mut egui::Ui, label: &str, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    ui.horizontal(|ui| {
        ui.add_sized([LABEL_WIDTH, 18.0], egui::Label::new(RichText::new(label).strong()));
        ui.label(value);
    });
}

fn render_names(ui: &mut egui::Ui, label: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    render_field(ui, label, Some(names.join(", ").as_str()));
}
