// Event module
// Logical events derived from runs of contiguous slots

use serde::{Deserialize, Serialize};

use crate::models::slot::{Category, SetType, SlotTime, SLOT_MINUTES};

/// Identity of a logical event: (day, area, start time)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId {
    pub day: String,
    pub area: String,
    pub start: SlotTime,
}

/// Role-tagged people of an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPeople {
    pub instructor: Option<String>,
    pub instructor_two: Option<String>,
    pub presenter: Option<String>,
    pub host: Option<String>,
    pub moderator: Option<String>,
    pub guest: Option<String>,
    pub djs: Vec<String>,
    pub dancers: Vec<String>,
}

impl EventPeople {
    /// Every name credited in any role, in role order
    pub fn all_names(&self) -> Vec<&str> {
        let singles = [
            &self.instructor,
            &self.instructor_two,
            &self.presenter,
            &self.host,
            &self.moderator,
            &self.guest,
        ];
        singles
            .into_iter()
            .filter_map(|p| p.as_deref())
            .chain(self.djs.iter().map(String::as_str))
            .chain(self.dancers.iter().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.all_names().is_empty()
    }
}

/// Free-text fields of an event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventText {
    pub description: Option<String>,
    pub bio: Option<String>,
    pub bio_two: Option<String>,
    pub comment: Option<String>,
    pub discussed_artist: Option<String>,
    pub discussed_record: Option<String>,
    pub background_text: Option<String>,
}

/// Where an overlay badge sits on the merged event block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OverlayPlacement {
    /// Anchored on the event's first slot
    Top,
    /// Anchored on a later slot; drawn over the lower half of the block
    SecondHalf,
}

/// A dance show sharing the time window of a main event.
///
/// Its performers are a separate attribution set and never mix with the
/// parent event's people.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayShow {
    pub title: Option<String>,
    pub performers: Vec<String>,
    pub image: Option<String>,
    /// Index of the anchor slot relative to the parent event's first slot
    pub anchor_slot_index: usize,
}

impl OverlayShow {
    pub fn placement(&self) -> OverlayPlacement {
        if self.anchor_slot_index == 0 {
            OverlayPlacement::Top
        } else {
            OverlayPlacement::SecondHalf
        }
    }
}

/// A maximal run of consecutive slots sharing one event title.
///
/// Computed fresh from the slot store on every projection; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogicalEvent {
    pub id: EventId,
    pub title: String,
    pub category: Option<Category>,
    pub start: SlotTime,
    pub end: SlotTime,
    pub span_count: usize,
    /// Index of the first constituent slot within the area's slot list
    pub first_slot: usize,
    pub people: EventPeople,
    pub text: EventText,
    pub style: Option<String>,
    pub level: Option<String>,
    pub set_type: Option<SetType>,
    /// Distinct images found across the span, in slot order
    pub images: Vec<String>,
    pub overlay: Option<OverlayShow>,
}

impl LogicalEvent {
    /// Half-open range of slot indices covered by this event
    pub fn slot_range(&self) -> std::ops::Range<usize> {
        self.first_slot..self.first_slot + self.span_count
    }

    pub fn duration_minutes(&self) -> u32 {
        self.span_count as u32 * u32::from(SLOT_MINUTES)
    }

    /// True when `time` falls inside the event, including spans past midnight
    pub fn contains_time(&self, time: SlotTime) -> bool {
        u32::from(time.minutes_since(self.start)) < self.duration_minutes()
    }

    /// `HH:MM - HH:MM` label
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}
