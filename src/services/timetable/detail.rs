//! Data assembly for the event detail window.
//!
//! Picks the fields to show from the event's category. Missing data simply
//! leaves the corresponding field empty; nothing is guessed.

use crate::models::event::{EventId, LogicalEvent, OverlayShow};
use crate::models::slide::Slide;
use crate::models::slot::{Category, SetType};

/// Workshop instructor with an optional biography
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instructor {
    pub name: String,
    pub bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TalkFormat {
    Presentation {
        presenter: Option<String>,
        host: Option<String>,
    },
    /// Interview about a record
    RecordInterview {
        moderator: Option<String>,
        guest: Option<String>,
        discussed_artist: Option<String>,
        discussed_record: Option<String>,
        comment: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailBody {
    Performance {
        performers: Vec<String>,
        djs: Vec<String>,
        tag: SetType,
    },
    Workshop {
        instructors: Vec<Instructor>,
        style: Option<String>,
        level: Option<String>,
    },
    Talk(TalkFormat),
    /// Uncategorised event: every credited name, no role labels
    General { people: Vec<String> },
}

/// Everything the detail window displays for one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetail {
    pub id: EventId,
    pub title: String,
    pub area: String,
    pub time_range: String,
    pub category: Option<Category>,
    pub body: DetailBody,
    /// Free text shown in the window body rather than on a slide
    pub body_text: Option<String>,
    pub background_text: Option<String>,
    pub slides: Vec<Slide>,
    pub overlay: Option<OverlayShow>,
}

impl EventDetail {
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}

/// Assemble the detail record for `event` and its already aggregated slides
pub fn assemble_detail(event: &LogicalEvent, slides: Vec<Slide>) -> EventDetail {
    let body = match event.category {
        Some(Category::MainPerformance) => performance_body(event),
        Some(Category::DanceWorkshop) | Some(Category::MusicWorkshop) => workshop_body(event),
        Some(Category::Talk) => DetailBody::Talk(talk_format(event)),
        None => DetailBody::General {
            people: event
                .people
                .all_names()
                .into_iter()
                .map(str::to_string)
                .collect(),
        },
    };

    EventDetail {
        id: event.id.clone(),
        title: event.title.clone(),
        area: event.id.area.clone(),
        time_range: event.time_range_label(),
        category: event.category,
        body,
        body_text: body_text(event, &slides),
        background_text: event.text.background_text.clone(),
        slides,
        overlay: event.overlay.clone(),
    }
}

fn performance_body(event: &LogicalEvent) -> DetailBody {
    let djs = event.people.djs.clone();
    let tag = match event.set_type {
        Some(tag) => tag,
        None if !djs.is_empty() => SetType::DjSet,
        None => SetType::Live,
    };

    DetailBody::Performance {
        performers: event.people.dancers.clone(),
        djs,
        tag,
    }
}

fn workshop_body(event: &LogicalEvent) -> DetailBody {
    let pairs = [
        (&event.people.instructor, &event.text.bio),
        (&event.people.instructor_two, &event.text.bio_two),
    ];

    let instructors = pairs
        .into_iter()
        .filter_map(|(name, bio)| {
            name.as_ref().map(|name| Instructor {
                name: name.clone(),
                bio: bio.clone(),
            })
        })
        .collect();

    DetailBody::Workshop {
        instructors,
        style: event.style.clone(),
        level: event.level.clone(),
    }
}

fn talk_format(event: &LogicalEvent) -> TalkFormat {
    let people = &event.people;
    let text = &event.text;
    let is_interview =
        people.moderator.is_some() || people.guest.is_some() || text.discussed_record.is_some();

    if is_interview {
        TalkFormat::RecordInterview {
            moderator: people.moderator.clone(),
            guest: people.guest.clone(),
            discussed_artist: text.discussed_artist.clone(),
            discussed_record: text.discussed_record.clone(),
            comment: text.comment.clone(),
        }
    } else {
        TalkFormat::Presentation {
            presenter: people.presenter.clone(),
            host: people.host.clone(),
        }
    }
}

/// Talks always show their description in the body. Other categories do so
/// only when no slide already carries it as a caption.
fn body_text(event: &LogicalEvent, slides: &[Slide]) -> Option<String> {
    let description = event.text.description.as_ref()?;
    let on_slide = slides
        .iter()
        .any(|slide| slide.caption.as_ref() == Some(description));

    if event.category == Some(Category::Talk) || !on_slide {
        Some(description.clone())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::AreaColumn;
    use crate::models::slot::TimeSlot;
    use crate::services::timetable::slides::aggregate_slides;
    use crate::services::timetable::span::resolve_events;

    fn detail_for(slot: TimeSlot) -> EventDetail {
        let area = AreaColumn::new("Room A", vec![slot]);
        let events = resolve_events("sun", &area).unwrap();
        let event = &events[0];
        let slides = aggregate_slides(event, &area.slots[event.slot_range()], "/img/placeholder.png");
        assemble_detail(event, slides)
    }

    #[test]
    fn test_workshop_with_two_instructors() {
        let detail = detail_for(TimeSlot {
            category: Some(Category::DanceWorkshop),
            instructor: Some("Ana".to_string()),
            bio: Some("Cali style".to_string()),
            instructor_two: Some("Luis".to_string()),
            style: Some("Salsa caleña".to_string()),
            ..TimeSlot::titled("12:00", "Footwork")
        });

        let DetailBody::Workshop { instructors, style, level } = detail.body else {
            panic!("expected workshop body");
        };
        assert_eq!(instructors.len(), 2);
        assert_eq!(instructors[0].bio.as_deref(), Some("Cali style"));
        assert!(instructors[1].bio.is_none());
        assert_eq!(style.as_deref(), Some("Salsa caleña"));
        assert!(level.is_none());
    }

    #[test]
    fn test_performance_tag_inferred_from_djs() {
        let detail = detail_for(TimeSlot {
            category: Some(Category::MainPerformance),
            djs: vec!["DJ X".to_string()],
            ..TimeSlot::titled("23:00", "Salsa Social")
        });
        assert!(matches!(detail.body, DetailBody::Performance { tag: SetType::DjSet, .. }));
    }

    #[test]
    fn test_performance_defaults_to_live() {
        let detail = detail_for(TimeSlot {
            category: Some(Category::MainPerformance),
            ..TimeSlot::titled("21:00", "Band Y")
        });
        assert!(matches!(detail.body, DetailBody::Performance { tag: SetType::Live, .. }));
    }

    #[test]
    fn test_record_interview_format() {
        let detail = detail_for(TimeSlot {
            category: Some(Category::Talk),
            moderator: Some("Marta".to_string()),
            guest: Some("Pedro".to_string()),
            discussed_artist: Some("Grupo Niche".to_string()),
            discussed_record: Some("Cielo de Tambores".to_string()),
            comment: Some("A classic".to_string()),
            description: Some("Listening session".to_string()),
            ..TimeSlot::titled("16:00", "Record Talk")
        });

        assert!(matches!(
            detail.body,
            DetailBody::Talk(TalkFormat::RecordInterview { ref guest, .. }) if guest.as_deref() == Some("Pedro")
        ));
        assert_eq!(detail.body_text.as_deref(), Some("Listening session"));
        assert!(detail.slides.is_empty());
    }

    #[test]
    fn test_presentation_format() {
        let detail = detail_for(TimeSlot {
            category: Some(Category::Talk),
            presenter: Some("Carla".to_string()),
            ..TimeSlot::titled("15:00", "History of Salsa")
        });
        assert_eq!(
            detail.body,
            DetailBody::Talk(TalkFormat::Presentation {
                presenter: Some("Carla".to_string()),
                host: None,
            })
        );
    }

    #[test]
    fn test_description_not_duplicated_when_on_slide() {
        let detail = detail_for(TimeSlot {
            category: Some(Category::MainPerformance),
            image: Some("/img/band.jpg".to_string()),
            description: Some("Great band".to_string()),
            ..TimeSlot::titled("21:00", "Band Y")
        });
        assert_eq!(detail.slide_count(), 1);
        assert!(detail.body_text.is_none());
    }

    #[test]
    fn test_missing_data_leaves_sections_empty() {
        let detail = detail_for(TimeSlot::titled("10:00", "Mystery"));
        assert_eq!(detail.body, DetailBody::General { people: Vec::new() });
        assert!(detail.body_text.is_none());
        assert!(detail.background_text.is_none());
        assert!(detail.overlay.is_none());
        assert_eq!(detail.time_range, "10:00 - 10:30");
    }
}
