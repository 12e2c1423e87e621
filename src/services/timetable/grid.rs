//! Grid projection for one festival day.
//!
//! Each area becomes a column over a shared time axis. A logical event is
//! one block at its first row followed by invisible placeholders for the
//! rest of its span, so every row keeps the same height across columns.

use super::span::resolve_with_times;
use super::TimetableError;
use crate::models::event::{EventId, LogicalEvent};
use crate::models::schedule::FestivalDay;
use crate::models::slot::{Category, SlotTime, TimeSlot};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectionOptions {
    /// Blocks of other categories are marked dimmed; layout is unchanged
    pub category_filter: Option<Category>,
}

/// One row of one column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridCell {
    Empty {
        shaded: bool,
    },
    /// Visible block for the event at `event` (index into the column's events)
    Block {
        event: usize,
        span: usize,
        shaded: bool,
        dimmed: bool,
    },
    /// Covered by the block above; occupies space but draws nothing
    Placeholder {
        event: usize,
        shaded: bool,
    },
}

impl GridCell {
    pub fn is_shaded(&self) -> bool {
        match *self {
            GridCell::Empty { shaded }
            | GridCell::Block { shaded, .. }
            | GridCell::Placeholder { shaded, .. } => shaded,
        }
    }

    /// Height of what this cell draws; placeholders and empty rows still take one row
    pub fn block_height(&self, slot_height: f32) -> f32 {
        match *self {
            GridCell::Block { span, .. } => span as f32 * slot_height,
            _ => slot_height,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ColumnState {
    Events {
        events: Vec<LogicalEvent>,
        cells: Vec<GridCell>,
    },
    /// Valid column without any event
    NoData,
    /// Input validation failed; only this column is affected
    Invalid(TimetableError),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnProjection {
    pub area: String,
    pub state: ColumnState,
    /// Source slots, kept for slide aggregation on selection
    pub slots: Vec<TimeSlot>,
}

impl ColumnProjection {
    pub fn events(&self) -> &[LogicalEvent] {
        match &self.state {
            ColumnState::Events { events, .. } => events,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridProjection {
    pub day: String,
    pub time_axis: Vec<SlotTime>,
    pub columns: Vec<ColumnProjection>,
}

impl GridProjection {
    pub fn rows(&self) -> usize {
        self.time_axis.len()
    }

    /// True when no column has a single event
    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.events().is_empty())
    }

    pub fn event_count(&self) -> usize {
        self.columns.iter().map(|c| c.events().len()).sum()
    }

    /// Look up an event together with the slots of its span
    pub fn event_with_slots(&self, id: &EventId) -> Option<(&LogicalEvent, &[TimeSlot])> {
        let column = self.columns.iter().find(|c| c.area == id.area)?;
        let event = column.events().iter().find(|e| e.id == *id)?;
        let span = column.slots.get(event.slot_range())?;
        Some((event, span))
    }

    pub fn events(&self) -> impl Iterator<Item = &LogicalEvent> {
        self.columns.iter().flat_map(|c| c.events().iter())
    }
}

/// Project every area of `day` onto a shared time axis.
///
/// The axis comes from the first valid column that has slots. Columns whose
/// times differ from it are marked invalid instead of being stretched.
pub fn project_day(day: &FestivalDay, options: &ProjectionOptions) -> GridProjection {
    let resolved: Vec<Result<(Vec<SlotTime>, Vec<LogicalEvent>), TimetableError>> = day
        .areas
        .iter()
        .map(|area| resolve_with_times(&day.id, area))
        .collect();

    let time_axis = resolved
        .iter()
        .filter_map(|r| r.as_ref().ok())
        .map(|(times, _)| times)
        .find(|times| !times.is_empty())
        .cloned()
        .unwrap_or_default();

    let columns = day
        .areas
        .iter()
        .zip(resolved)
        .map(|(area, result)| {
            let state = match result {
                Err(err) => {
                    log::warn!("Day '{}', area '{}': {}", day.id, area.name, err);
                    ColumnState::Invalid(err)
                }
                Ok((times, _)) if !times.is_empty() && times != time_axis => {
                    let err = TimetableError::AxisMismatch {
                        area: area.name.clone(),
                    };
                    log::warn!("Day '{}': {}", day.id, err);
                    ColumnState::Invalid(err)
                }
                Ok((_, events)) if events.is_empty() => ColumnState::NoData,
                Ok((times, events)) => {
                    let cells = layout_cells(times.len(), &events, options);
                    ColumnState::Events { events, cells }
                }
            };

            ColumnProjection {
                area: area.name.clone(),
                state,
                slots: area.slots.clone(),
            }
        })
        .collect();

    GridProjection {
        day: day.id.clone(),
        time_axis,
        columns,
    }
}

fn layout_cells(rows: usize, events: &[LogicalEvent], options: &ProjectionOptions) -> Vec<GridCell> {
    let mut cells: Vec<GridCell> = (0..rows)
        .map(|row| GridCell::Empty { shaded: row % 2 == 1 })
        .collect();

    for (index, event) in events.iter().enumerate() {
        let dimmed = match options.category_filter {
            Some(filter) => event.category != Some(filter),
            None => false,
        };

        for row in event.slot_range() {
            let shaded = row % 2 == 1;
            cells[row] = if row == event.first_slot {
                GridCell::Block {
                    event: index,
                    span: event.span_count,
                    shaded,
                    dimmed,
                }
            } else {
                GridCell::Placeholder { event: index, shaded }
            };
        }
    }

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::AreaColumn;

    fn column(name: &str, slots: Vec<TimeSlot>) -> AreaColumn {
        AreaColumn::new(name, slots)
    }

    fn day(areas: Vec<AreaColumn>) -> FestivalDay {
        FestivalDay {
            id: "sat".to_string(),
            areas,
            ..FestivalDay::default()
        }
    }

    fn stage_slots() -> Vec<TimeSlot> {
        vec![
            TimeSlot::titled("18:00", "Band Y"),
            TimeSlot::titled("18:30", "Band Y"),
            TimeSlot::titled("19:00", "Band Y"),
            TimeSlot::titled("19:30", "DJ X"),
        ]
    }

    #[test]
    fn test_block_followed_by_placeholders() {
        let projection = project_day(&day(vec![column("Main Stage", stage_slots())]), &ProjectionOptions::default());
        let ColumnState::Events { cells, events } = &projection.columns[0].state else {
            panic!("expected events");
        };
        assert_eq!(events.len(), 2);
        assert_eq!(
            cells[0],
            GridCell::Block {
                event: 0,
                span: 3,
                shaded: false,
                dimmed: false
            }
        );
        assert_eq!(cells[1], GridCell::Placeholder { event: 0, shaded: true });
        assert_eq!(cells[2], GridCell::Placeholder { event: 0, shaded: false });
        assert!(matches!(cells[3], GridCell::Block { event: 1, span: 1, .. }));
        assert_eq!(cells[0].block_height(40.0), 120.0);
    }

    #[test]
    fn test_empty_area_is_no_data() {
        let empty = column(
            "Dance Workshops",
            vec![
                TimeSlot::empty("18:00"),
                TimeSlot::empty("18:30"),
                TimeSlot::empty("19:00"),
                TimeSlot::empty("19:30"),
            ],
        );
        let projection = project_day(&day(vec![column("Main Stage", stage_slots()), empty]), &ProjectionOptions::default());
        assert_eq!(projection.columns[1].state, ColumnState::NoData);
        assert_eq!(projection.event_count(), 2);
    }

    #[test]
    fn test_invalid_column_does_not_affect_siblings() {
        let broken = column("Talks", vec![TimeSlot::titled("18:00", "Talk"), TimeSlot::titled("18:15", "Talk")]);
        let projection = project_day(&day(vec![broken, column("Main Stage", stage_slots())]), &ProjectionOptions::default());
        assert!(matches!(
            projection.columns[0].state,
            ColumnState::Invalid(TimetableError::StepMismatch { .. })
        ));
        assert_eq!(projection.columns[1].events().len(), 2);
        assert_eq!(projection.rows(), 4);
    }

    #[test]
    fn test_axis_mismatch_marks_column_invalid() {
        let shifted = column(
            "Talks",
            vec![TimeSlot::titled("20:00", "Talk"), TimeSlot::empty("20:30")],
        );
        let projection = project_day(&day(vec![column("Main Stage", stage_slots()), shifted]), &ProjectionOptions::default());
        assert!(matches!(
            projection.columns[1].state,
            ColumnState::Invalid(TimetableError::AxisMismatch { .. })
        ));
    }

    #[test]
    fn test_category_filter_dims_without_removing() {
        let mut slots = stage_slots();
        slots[3].category = Some(Category::MainPerformance);
        let options = ProjectionOptions {
            category_filter: Some(Category::MainPerformance),
        };
        let projection = project_day(&day(vec![column("Main Stage", slots)]), &options);
        let ColumnState::Events { cells, .. } = &projection.columns[0].state else {
            panic!("expected events");
        };
        assert!(matches!(cells[0], GridCell::Block { dimmed: true, .. }));
        assert!(matches!(cells[3], GridCell::Block { dimmed: false, .. }));
    }

    #[test]
    fn test_event_with_slots_lookup() {
        let projection = project_day(&day(vec![column("Main Stage", stage_slots())]), &ProjectionOptions::default());
        let id = projection.columns[0].events()[0].id.clone();
        let (event, span) = projection.event_with_slots(&id).unwrap();
        assert_eq!(event.title, "Band Y");
        assert_eq!(span.len(), 3);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let schedule_day = day(vec![column("Main Stage", stage_slots())]);
        let options = ProjectionOptions::default();
        assert_eq!(project_day(&schedule_day, &options), project_day(&schedule_day, &options));
    }

    #[test]
    fn test_day_without_areas() {
        let projection = project_day(&day(Vec::new()), &ProjectionOptions::default());
        assert!(projection.is_empty());
        assert_eq!(projection.rows(), 0);
    }
}
