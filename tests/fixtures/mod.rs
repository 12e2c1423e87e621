// Test fixtures - reusable timetable data
// Slot lists and festival days shared by the integration, property and bench targets

#![allow(dead_code)]

use festival_timetable::models::schedule::{AreaColumn, FestivalDay};
use festival_timetable::models::slot::{Category, SlotTime, TimeSlot};

/// Slot builders
pub mod slots {
    use super::*;

    /// Consecutive 30-minute slot times starting at `start`
    pub fn times(start: &str, count: usize) -> Vec<String> {
        let start: SlotTime = start.parse().unwrap();
        (0..count).map(|i| start.after_slots(i).to_string()).collect()
    }

    /// Slots from `start`, one per entry; `None` leaves a slot empty
    pub fn column(start: &str, titles: &[Option<&str>]) -> Vec<TimeSlot> {
        times(start, titles.len())
            .into_iter()
            .zip(titles)
            .map(|(time, title)| match title {
                Some(title) => TimeSlot::titled(time, *title),
                None => TimeSlot::empty(time),
            })
            .collect()
    }

    /// A run of `count` slots all carrying `title` and `category`
    pub fn event(start: &str, count: usize, title: &str, category: Category) -> Vec<TimeSlot> {
        times(start, count)
            .into_iter()
            .map(|time| TimeSlot {
                category: Some(category),
                ..TimeSlot::titled(time, title)
            })
            .collect()
    }
}

/// Festival day builders
pub mod days {
    use super::*;

    pub fn day(id: &str, areas: Vec<AreaColumn>) -> FestivalDay {
        FestivalDay {
            id: id.to_string(),
            areas,
            ..FestivalDay::default()
        }
    }

    /// Main stage 18:00-20:00 with "Band Y" over three slots and an overlay on the second
    pub fn band_night() -> FestivalDay {
        let mut stage = slots::event("18:00", 3, "Band Y", Category::MainPerformance);
        stage[1].has_overlay_show = true;
        stage[1].overlay_show_title = Some("Show Z".to_string());
        stage[1].overlay_dancers = vec!["Ana".to_string(), "Luis".to_string()];
        stage.push(TimeSlot::empty("19:30"));

        let talks = slots::column("18:00", &[None, None, None, None]);

        day(
            "sat",
            vec![AreaColumn::new("Main Stage", stage), AreaColumn::new("Talks", talks)],
        )
    }

    /// A day of `areas` columns, each with `rows` slots of alternating two-slot events
    pub fn busy_day(areas: usize, rows: usize) -> FestivalDay {
        let columns = (0..areas)
            .map(|area| {
                let titles: Vec<String> = (0..rows).map(|row| format!("Event {}-{}", area, row / 2)).collect();
                let titles: Vec<Option<&str>> = titles.iter().map(|t| Some(t.as_str())).collect();
                AreaColumn::new(format!("Area {}", area), slots::column("12:00", &titles))
            })
            .collect();
        day("busy", columns)
    }
}
