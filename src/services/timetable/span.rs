//! Event span resolution.
//!
//! A logical event is a maximal run of adjacent slots with the same
//! non-empty title. Adjacency defines the run: two events with the same
//! title separated by anything else stay distinct.

use super::overlay::{attach_overlay, report_orphan_overlays};
use super::validation::validate_slots;
use super::TimetableError;
use crate::models::event::{EventId, EventPeople, EventText, LogicalEvent};
use crate::models::schedule::AreaColumn;
use crate::models::slot::{SlotTime, TimeSlot};

/// First slot index and length of one run of same-titled slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanRun {
    pub first_slot: usize,
    pub span_count: usize,
}

impl SpanRun {
    pub fn range(&self) -> std::ops::Range<usize> {
        self.first_slot..self.first_slot + self.span_count
    }

    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// `true` for every slot whose predecessor carries the same non-empty title
pub fn continuation_flags(slots: &[TimeSlot]) -> Vec<bool> {
    let mut flags = Vec::with_capacity(slots.len());
    let mut previous: Option<&str> = None;

    for slot in slots {
        let title = slot.title();
        flags.push(title.is_some() && title == previous);
        previous = title;
    }

    flags
}

/// Group slots into runs in a single forward pass
pub fn find_runs(slots: &[TimeSlot]) -> Vec<SpanRun> {
    let mut runs: Vec<SpanRun> = Vec::new();

    for (index, (slot, continues)) in slots.iter().zip(continuation_flags(slots)).enumerate() {
        if continues {
            if let Some(run) = runs.last_mut() {
                run.span_count += 1;
            }
        } else if slot.title().is_some() {
            runs.push(SpanRun {
                first_slot: index,
                span_count: 1,
            });
        }
    }

    runs
}

/// Resolve one area's slots into logical events.
///
/// Validation failures are returned as-is; the caller decides how to show
/// the broken column.
pub fn resolve_events(day: &str, area: &AreaColumn) -> Result<Vec<LogicalEvent>, TimetableError> {
    resolve_with_times(day, area).map(|(_, events)| events)
}

/// Like [`resolve_events`], also returning the parsed time of every slot
pub(crate) fn resolve_with_times(
    day: &str,
    area: &AreaColumn,
) -> Result<(Vec<SlotTime>, Vec<LogicalEvent>), TimetableError> {
    let times = validate_slots(&area.slots)?;
    let runs = find_runs(&area.slots);

    report_orphan_overlays(&area.name, &area.slots, &runs);

    let events = runs
        .iter()
        .map(|run| build_event(day, &area.name, &area.slots[run.range()], times[run.first_slot], *run))
        .collect();

    Ok((times, events))
}

fn build_event(day: &str, area: &str, span: &[TimeSlot], start: SlotTime, run: SpanRun) -> LogicalEvent {
    // Runs are only created from titled slots
    let title = span
        .first()
        .and_then(TimeSlot::title)
        .unwrap_or_default()
        .to_string();

    let mut merger = FieldMerger::new(&title);
    let mut people = EventPeople::default();
    let mut text = EventText::default();
    let mut category = None;
    let mut set_type = None;
    let mut style = None;
    let mut level = None;
    let mut images: Vec<String> = Vec::new();

    for slot in span {
        merger.text(&mut people.instructor, &slot.instructor, "instructor");
        merger.text(&mut people.instructor_two, &slot.instructor_two, "instructorTwo");
        merger.text(&mut people.presenter, &slot.presenter, "presenter");
        merger.text(&mut people.host, &slot.host, "host");
        merger.text(&mut people.moderator, &slot.moderator, "moderator");
        merger.text(&mut people.guest, &slot.guest, "guest");
        merger.list(&mut people.djs, &slot.djs, "djs");
        merger.list(&mut people.dancers, &slot.dancers, "dancers");

        merger.text(&mut text.description, &slot.description, "description");
        merger.text(&mut text.bio, &slot.bio, "bio");
        merger.text(&mut text.bio_two, &slot.bio_two, "bioTwo");
        merger.text(&mut text.comment, &slot.comment, "comment");
        merger.text(&mut text.discussed_artist, &slot.discussed_artist, "discussedArtist");
        merger.text(&mut text.discussed_record, &slot.discussed_record, "discussedRecord");
        merger.text(&mut text.background_text, &slot.background_text, "backgroundText");

        merger.text(&mut style, &slot.style, "style");
        merger.text(&mut level, &slot.level, "level");
        merger.value(&mut category, slot.category, "category");
        merger.value(&mut set_type, slot.set_type, "setType");

        for image in [&slot.image, &slot.image_two].into_iter().flatten() {
            let image = image.trim();
            if !image.is_empty() && !images.iter().any(|known| known == image) {
                images.push(image.to_string());
            }
        }
    }

    LogicalEvent {
        id: EventId {
            day: day.to_string(),
            area: area.to_string(),
            start,
        },
        overlay: attach_overlay(&title, span),
        title,
        category,
        start,
        end: start.after_slots(run.span_count),
        span_count: run.span_count,
        first_slot: run.first_slot,
        people,
        text,
        style,
        level,
        set_type,
        images,
    }
}

/// First non-empty value wins; later disagreeing values are only reported.
struct FieldMerger<'a> {
    title: &'a str,
}

impl<'a> FieldMerger<'a> {
    fn new(title: &'a str) -> Self {
        Self { title }
    }

    fn text(&mut self, target: &mut Option<String>, value: &Option<String>, field: &str) {
        let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) else {
            return;
        };

        match target {
            None => *target = Some(value.to_string()),
            Some(existing) if existing != value => self.conflict(field),
            Some(_) => {}
        }
    }

    fn list(&mut self, target: &mut Vec<String>, value: &[String], field: &str) {
        if value.is_empty() {
            return;
        }

        if target.is_empty() {
            *target = value.to_vec();
        } else if target.as_slice() != value {
            self.conflict(field);
        }
    }

    fn value<T: Copy + PartialEq>(&mut self, target: &mut Option<T>, value: Option<T>, field: &str) {
        let Some(value) = value else {
            return;
        };

        match target {
            None => *target = Some(value),
            Some(existing) if *existing != value => self.conflict(field),
            Some(_) => {}
        }
    }

    fn conflict(&self, field: &str) {
        log::debug!(
            "Event '{}' has differing '{}' values across its slots; keeping the first",
            self.title,
            field
        );
    }
}
