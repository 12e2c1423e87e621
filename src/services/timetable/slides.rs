//! Slide aggregation for the event detail carousel.
//!
//! Rules are applied in a fixed priority order and the resulting order is
//! never re-sorted:
//!
//! 1. custom slides on the event's first slot, verbatim
//! 2. two distinct images, one image-only slide each
//! 3. one image and/or the description (talk descriptions excluded)
//! 4. when nothing was produced, supplementary slides from later slots
//! 5. a fallback slide for an overlay show whose performers are uncredited

use crate::models::event::LogicalEvent;
use crate::models::slide::{Slide, SlidePerson};
use crate::models::slot::{Category, TimeSlot};

/// Build the ordered slide list for `event`.
///
/// `span` must be the event's own slots (`area.slots[event.slot_range()]`).
pub fn aggregate_slides(event: &LogicalEvent, span: &[TimeSlot], placeholder_image: &str) -> Vec<Slide> {
    let mut slides = primary_slides(event, span);

    if slides.is_empty() {
        for slide in span.iter().skip(1).filter_map(TimeSlot::custom_slides).flatten() {
            if !slides.contains(slide) {
                slides.push(slide.clone());
            }
        }
    }

    if let Some(fallback) = overlay_fallback(event, &slides, placeholder_image) {
        slides.push(fallback);
    }

    slides
}

fn primary_slides(event: &LogicalEvent, span: &[TimeSlot]) -> Vec<Slide> {
    if let Some(custom) = span.first().and_then(TimeSlot::custom_slides) {
        return custom.to_vec();
    }

    if let [first, second, ..] = event.images.as_slice() {
        return vec![Slide::image_only(first), Slide::image_only(second)];
    }

    let caption = if event.category == Some(Category::Talk) {
        None
    } else {
        event.text.description.clone()
    };
    let image = event.images.first().cloned();

    if image.is_none() && caption.is_none() {
        return Vec::new();
    }

    vec![Slide {
        image,
        caption,
        people: Vec::new(),
    }]
}

fn overlay_fallback(event: &LogicalEvent, slides: &[Slide], placeholder_image: &str) -> Option<Slide> {
    let overlay = event.overlay.as_ref()?;
    if overlay.performers.is_empty() {
        return None;
    }

    let already_credited = slides
        .iter()
        .any(|slide| overlay.performers.iter().any(|name| slide.attributes(name)));
    if already_credited {
        return None;
    }

    Some(Slide {
        image: Some(
            overlay
                .image
                .clone()
                .unwrap_or_else(|| placeholder_image.to_string()),
        ),
        caption: overlay.title.clone(),
        people: overlay.performers.iter().map(SlidePerson::named).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::AreaColumn;
    use crate::services::timetable::span::resolve_events;
    use pretty_assertions::assert_eq;

    const PLACEHOLDER: &str = "/img/placeholder.png";

    fn slides_for(slots: Vec<TimeSlot>) -> Vec<Slide> {
        let area = AreaColumn::new("Main Stage", slots);
        let events = resolve_events("sat", &area).unwrap();
        let event = &events[0];
        aggregate_slides(event, &area.slots[event.slot_range()], PLACEHOLDER)
    }

    #[test]
    fn test_custom_slides_used_verbatim() {
        let custom = vec![
            Slide {
                caption: Some("Second".to_string()),
                ..Slide::default()
            },
            Slide::image_only("/img/first.jpg"),
        ];
        let slot = TimeSlot {
            image: Some("/img/ignored.jpg".to_string()),
            image_two: Some("/img/ignored2.jpg".to_string()),
            slides: Some(custom.clone()),
            ..TimeSlot::titled("18:00", "Band Y")
        };
        assert_eq!(slides_for(vec![slot]), custom);
    }

    #[test]
    fn test_two_images_yield_two_image_only_slides() {
        let slot = TimeSlot {
            image: Some("/img/a.jpg".to_string()),
            image_two: Some("/img/b.jpg".to_string()),
            description: Some("Great band".to_string()),
            ..TimeSlot::titled("18:00", "Band Y")
        };
        assert_eq!(
            slides_for(vec![slot]),
            vec![Slide::image_only("/img/a.jpg"), Slide::image_only("/img/b.jpg")]
        );
    }

    #[test]
    fn test_single_image_with_description() {
        let slot = TimeSlot {
            image: Some("/img/a.jpg".to_string()),
            description: Some("Great band".to_string()),
            ..TimeSlot::titled("18:00", "Band Y")
        };
        let slides = slides_for(vec![slot]);
        assert_eq!(slides.len(), 1);
        assert_eq!(slides[0].image.as_deref(), Some("/img/a.jpg"));
        assert_eq!(slides[0].caption.as_deref(), Some("Great band"));
    }

    #[test]
    fn test_talk_description_never_becomes_caption() {
        let slot = TimeSlot {
            category: Some(Category::Talk),
            image: Some("/img/speaker.jpg".to_string()),
            description: Some("History of son".to_string()),
            ..TimeSlot::titled("16:00", "Talk")
        };
        let slides = slides_for(vec![slot]);
        assert_eq!(slides.len(), 1);
        assert!(slides.iter().all(|s| s.caption.as_deref() != Some("History of son")));
    }

    #[test]
    fn test_talk_with_only_description_has_no_slides() {
        let slot = TimeSlot {
            category: Some(Category::Talk),
            description: Some("History of son".to_string()),
            ..TimeSlot::titled("16:00", "Talk")
        };
        assert!(slides_for(vec![slot]).is_empty());
    }

    #[test]
    fn test_supplementary_slides_from_later_slots() {
        let extra = Slide::image_only("/img/extra.jpg");
        let second = TimeSlot {
            slides: Some(vec![extra.clone()]),
            ..TimeSlot::titled("18:30", "Band Y")
        };
        let third = TimeSlot {
            slides: Some(vec![extra.clone()]),
            ..TimeSlot::titled("19:00", "Band Y")
        };
        let slides = slides_for(vec![TimeSlot::titled("18:00", "Band Y"), second, third]);
        assert_eq!(slides, vec![extra]);
    }

    #[test]
    fn test_overlay_fallback_uses_placeholder() {
        let second = TimeSlot {
            has_overlay_show: true,
            overlay_show_title: Some("Show Z".to_string()),
            overlay_dancers: vec!["Ana".to_string(), "Luis".to_string()],
            ..TimeSlot::titled("18:30", "Band Y")
        };
        let first = TimeSlot {
            image: Some("/img/band.jpg".to_string()),
            ..TimeSlot::titled("18:00", "Band Y")
        };
        let slides = slides_for(vec![first, second]);
        assert_eq!(slides.len(), 2);
        let fallback = &slides[1];
        assert_eq!(fallback.image.as_deref(), Some(PLACEHOLDER));
        assert_eq!(fallback.caption.as_deref(), Some("Show Z"));
        assert!(fallback.attributes("Ana") && fallback.attributes("Luis"));
    }

    #[test]
    fn test_no_overlay_fallback_when_already_credited() {
        let first = TimeSlot {
            has_overlay_show: true,
            overlay_show_title: Some("Show Z".to_string()),
            overlay_dancers: vec!["Ana".to_string()],
            slides: Some(vec![Slide {
                people: vec![SlidePerson::named("Ana")],
                ..Slide::default()
            }]),
            ..TimeSlot::titled("18:00", "Band Y")
        };
        assert_eq!(slides_for(vec![first]).len(), 1);
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let slot = TimeSlot {
            image: Some("/img/a.jpg".to_string()),
            description: Some("Great band".to_string()),
            ..TimeSlot::titled("18:00", "Band Y")
        };
        assert_eq!(slides_for(vec![slot.clone()]), slides_for(vec![slot]));
    }
}
