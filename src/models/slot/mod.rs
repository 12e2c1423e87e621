// Slot module
// Fixed-width timetable slots as they arrive from the content provider

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::models::slide::Slide;

/// Width of one timetable slot in minutes
pub const SLOT_MINUTES: u16 = 30;

const MINUTES_PER_DAY: u16 = 24 * 60;

/// Wall-clock time of a slot, stored as minutes since midnight.
///
/// Arithmetic wraps at midnight so that a festival night running past 23:59
/// keeps producing valid `HH:MM` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SlotTime(u16);

impl SlotTime {
    /// Create a time from hour and minute, `None` when out of range
    pub fn from_hm(hour: u16, minute: u16) -> Option<Self> {
        (hour < 24 && minute < 60).then(|| Self(hour * 60 + minute))
    }

    /// Minutes since midnight
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Add minutes, rolling over into the next day's `HH:MM` range
    pub fn add_minutes(self, minutes: u32) -> Self {
        let wrapped = (u32::from(self.0) + minutes) % u32::from(MINUTES_PER_DAY);
        Self(wrapped as u16)
    }

    /// Time at the end of `span` consecutive slots starting here
    pub fn after_slots(self, span: usize) -> Self {
        self.add_minutes(span as u32 * u32::from(SLOT_MINUTES))
    }

    /// Forward distance in minutes from `earlier` to `self`, crossing midnight if needed
    pub fn minutes_since(self, earlier: SlotTime) -> u16 {
        (self.0 + MINUTES_PER_DAY - earlier.0) % MINUTES_PER_DAY
    }
}

impl fmt::Display for SlotTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for SlotTime {
    type Err = String;

    /// Parse a strict `HH:MM` string (two digits each, 24-hour clock)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| format!("'{}' is not an HH:MM time", s))?;

        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(h) || !two_digits(m) {
            return Err(format!("'{}' is not an HH:MM time", s));
        }

        let hour: u16 = h.parse().map_err(|_| format!("'{}' has an invalid hour", s))?;
        let minute: u16 = m.parse().map_err(|_| format!("'{}' has an invalid minute", s))?;

        Self::from_hm(hour, minute).ok_or_else(|| format!("'{}' is out of range", s))
    }
}

impl TryFrom<String> for SlotTime {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SlotTime> for String {
    fn from(value: SlotTime) -> Self {
        value.to_string()
    }
}

/// Event category; drives which roles the detail view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    MainPerformance,
    DanceWorkshop,
    MusicWorkshop,
    Talk,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::MainPerformance,
        Category::DanceWorkshop,
        Category::MusicWorkshop,
        Category::Talk,
    ];

    pub fn is_workshop(self) -> bool {
        matches!(self, Category::DanceWorkshop | Category::MusicWorkshop)
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::MainPerformance => "Performances",
            Category::DanceWorkshop => "Dance workshops",
            Category::MusicWorkshop => "Music workshops",
            Category::Talk => "Talks",
        }
    }
}

/// Performance tag shown on stage events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SetType {
    Live,
    DjSet,
}

/// One 30-minute interval of one area on one day.
///
/// Every payload field is optional; an empty slot only carries `time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TimeSlot {
    /// `HH:MM`, validated by the resolver rather than at load time
    pub time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    // People
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructor_two: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presenter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub moderator: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub djs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dancers: Vec<String>,

    // Text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio_two: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussed_artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discussed_record: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_text: Option<String>,

    // Workshop / performance metadata
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_type: Option<SetType>,

    // Media
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_two: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slides: Option<Vec<Slide>>,

    // Dance-show overlay
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub has_overlay_show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_show_title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub overlay_dancers: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overlay_image: Option<String>,
}

impl TimeSlot {
    /// Create an empty slot at the given time
    pub fn empty(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            ..Self::default()
        }
    }

    /// Create a slot carrying only an event title
    pub fn titled(time: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            event_title: Some(title.into()),
            ..Self::default()
        }
    }

    /// Event title exactly as given; whitespace-only titles count as absent.
    ///
    /// Runs compare this value byte for byte, so `"Band"` and `"Band "` differ.
    pub fn title(&self) -> Option<&str> {
        self.event_title
            .as_deref()
            .filter(|t| !t.trim().is_empty())
    }

    /// Custom slide list, ignoring an explicitly empty list
    pub fn custom_slides(&self) -> Option<&[Slide]> {
        self.slides.as_deref().filter(|s| !s.is_empty())
    }
}
