// Schedule module
// Festival days and their parallel area columns

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::slot::TimeSlot;

/// A named parallel track (stage or workshop room) for one day
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaColumn {
    pub name: String,
    #[serde(default)]
    pub slots: Vec<TimeSlot>,
}

impl AreaColumn {
    pub fn new(name: impl Into<String>, slots: Vec<TimeSlot>) -> Self {
        Self {
            name: name.into(),
            slots,
        }
    }

    /// True when no slot carries an event
    pub fn has_no_events(&self) -> bool {
        self.slots.iter().all(|slot| slot.title().is_none())
    }
}

/// One festival day as supplied by configuration.
///
/// The day identifier is opaque; nothing in the crate assumes particular
/// weekday names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FestivalDay {
    pub id: String,
    /// Display label per locale code
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub areas: Vec<AreaColumn>,
}

impl FestivalDay {
    /// Label for `locale`, falling back to the day identifier
    pub fn label(&self, locale: &str) -> &str {
        self.labels
            .get(locale)
            .map(String::as_str)
            .unwrap_or(&self.id)
    }
}

/// Every active festival day, in display order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FestivalSchedule {
    pub days: Vec<FestivalDay>,
}

impl FestivalSchedule {
    /// Fallback used when the content provider is unavailable
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn day(&self, id: &str) -> Option<&FestivalDay> {
        self.days.iter().find(|day| day.id == id)
    }

    pub fn day_ids(&self) -> Vec<&str> {
        self.days.iter().map(|day| day.id.as_str()).collect()
    }

    /// Keep only the listed days, preserving schedule order.
    /// `None` keeps every day.
    pub fn restrict_to(mut self, active_days: Option<&[String]>) -> Self {
        if let Some(active) = active_days {
            self.days.retain(|day| active.iter().any(|id| *id == day.id));
        }
        self
    }
}
