//! Schedule content loading.
//!
//! The content document comes in two shapes, distinguished by an explicit
//! `format` field and converted into the slot model here, once. Nothing
//! downstream inspects which shape the data arrived in.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;

use crate::models::schedule::{AreaColumn, FestivalDay, FestivalSchedule};
use crate::models::slot::{SlotTime, TimeSlot, SLOT_MINUTES};

const BUNDLED_SCHEDULE: &str = include_str!("../../../assets/schedule.json");

/// Provider of already-localized schedule content
#[cfg_attr(test, mockall::automock)]
pub trait ScheduleSource {
    /// Human-readable origin, for logs
    fn describe(&self) -> String;
    fn load(&self) -> Result<FestivalSchedule>;
}

/// Schedule compiled into the binary
pub struct BundledSchedule;

impl ScheduleSource for BundledSchedule {
    fn describe(&self) -> String {
        "bundled schedule".to_string()
    }

    fn load(&self) -> Result<FestivalSchedule> {
        parse_document(BUNDLED_SCHEDULE).context("bundled schedule is invalid")
    }
}

/// Schedule read from a JSON file on disk
pub struct FileSchedule {
    path: PathBuf,
}

impl FileSchedule {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ScheduleSource for FileSchedule {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<FestivalSchedule> {
        let data = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read schedule from {}", self.path.display()))?;
        parse_document(&data)
            .with_context(|| format!("failed to parse schedule from {}", self.path.display()))
    }
}

/// Load the schedule, falling back to an empty one when the source fails.
///
/// Errors end here as a warning.
pub fn load_schedule_or_fallback(
    source: &dyn ScheduleSource,
    active_days: Option<&[String]>,
) -> FestivalSchedule {
    match source.load() {
        Ok(schedule) => {
            let schedule = schedule.restrict_to(active_days);
            log::info!(
                "Loaded {} festival day(s) from {}",
                schedule.days.len(),
                source.describe()
            );
            schedule
        }
        Err(err) => {
            log::warn!(
                "Failed to load schedule from {}: {:#}; showing an empty schedule",
                source.describe(),
                err
            );
            FestivalSchedule::empty()
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "format", rename_all = "kebab-case")]
enum ContentDocument {
    /// One entry per 30-minute slot
    Slots { days: Vec<FestivalDay> },
    /// One entry per event with a start time and a slot count
    Events { days: Vec<EventDayDocument> },
}

#[derive(Debug, Deserialize)]
struct EventDayDocument {
    id: String,
    #[serde(default)]
    labels: BTreeMap<String, String>,
    #[serde(default)]
    date: Option<NaiveDate>,
    start: SlotTime,
    end: SlotTime,
    #[serde(default)]
    areas: Vec<EventAreaDocument>,
}

#[derive(Debug, Deserialize)]
struct EventAreaDocument {
    name: String,
    #[serde(default)]
    events: Vec<EventEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EventEntry {
    start: SlotTime,
    slots: usize,
    /// Slot carrying the overlay show; the event's first slot when absent
    #[serde(default)]
    overlay_at: Option<SlotTime>,
    #[serde(flatten)]
    payload: TimeSlot,
}

/// Parse a content document of either format into the slot model
pub fn parse_document(json: &str) -> Result<FestivalSchedule> {
    let document: ContentDocument = serde_json::from_str(json).context("invalid content document")?;

    let days = match document {
        ContentDocument::Slots { days } => days,
        ContentDocument::Events { days } => days
            .into_iter()
            .map(expand_event_day)
            .collect::<Result<Vec<_>>>()?,
    };

    for day in &days {
        check_unique_areas(day)?;
    }

    Ok(FestivalSchedule { days })
}

/// Events are addressed by area name, so names must be unique within a day
fn check_unique_areas(day: &FestivalDay) -> Result<()> {
    let mut seen = HashSet::new();
    for area in &day.areas {
        if !seen.insert(area.name.as_str()) {
            bail!("day '{}': area '{}' appears more than once", day.id, area.name);
        }
    }
    Ok(())
}

fn expand_event_day(day: EventDayDocument) -> Result<FestivalDay> {
    let window = day.end.minutes_since(day.start);
    if window == 0 || window % SLOT_MINUTES != 0 {
        bail!(
            "day '{}': window {}-{} is not a whole number of slots",
            day.id,
            day.start,
            day.end
        );
    }
    let rows = usize::from(window / SLOT_MINUTES);

    let areas = day
        .areas
        .into_iter()
        .map(|area| expand_event_area(&day.id, day.start, rows, area))
        .collect::<Result<Vec<_>>>()?;

    Ok(FestivalDay {
        id: day.id,
        labels: day.labels,
        date: day.date,
        areas,
    })
}

fn expand_event_area(day: &str, day_start: SlotTime, rows: usize, area: EventAreaDocument) -> Result<AreaColumn> {
    let mut slots: Vec<TimeSlot> = (0..rows)
        .map(|row| TimeSlot::empty(day_start.after_slots(row).to_string()))
        .collect();

    for entry in area.events {
        let title = entry.payload.title().unwrap_or_default().to_string();
        if title.is_empty() {
            bail!("day '{}', area '{}': event at {} has no title", day, area.name, entry.start);
        }

        let offset = entry.start.minutes_since(day_start);
        if offset % SLOT_MINUTES != 0 {
            bail!("day '{}', area '{}': '{}' does not start on a slot boundary", day, area.name, title);
        }

        let first = usize::from(offset / SLOT_MINUTES);
        let Some(end) = first
            .checked_add(entry.slots)
            .filter(|end| entry.slots > 0 && *end <= rows)
        else {
            bail!("day '{}', area '{}': '{}' lies outside the day window", day, area.name, title);
        };

        let overlay_row = match (entry.payload.has_overlay_show, entry.overlay_at) {
            (true, anchor) => {
                let anchor = anchor.unwrap_or(entry.start);
                let row = usize::from(anchor.minutes_since(day_start) / SLOT_MINUTES);
                if !(first..end).contains(&row) || anchor.minutes_since(day_start) % SLOT_MINUTES != 0 {
                    bail!("day '{}', area '{}': overlay of '{}' is outside the event", day, area.name, title);
                }
                Some(row)
            }
            (false, Some(anchor)) => {
                bail!(
                    "day '{}', area '{}': '{}' sets overlayAt {} without hasOverlayShow",
                    day,
                    area.name,
                    title,
                    anchor
                );
            }
            (false, None) => None,
        };

        for row in first..end {
            if slots[row].title().is_some() {
                bail!(
                    "day '{}', area '{}': '{}' overlaps another event at {}",
                    day,
                    area.name,
                    title,
                    slots[row].time
                );
            }
            let mut slot = TimeSlot {
                time: slots[row].time.clone(),
                ..entry.payload.clone()
            };
            if overlay_row != Some(row) {
                slot.has_overlay_show = false;
                slot.overlay_show_title = None;
                slot.overlay_dancers.clear();
                slot.overlay_image = None;
            }
            slots[row] = slot;
        }
    }

    Ok(AreaColumn {
        name: area.name,
        slots,
    })
}
