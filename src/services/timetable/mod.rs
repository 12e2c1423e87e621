//! Timetable derivation pipeline.
//!
//! Turns per-area slot lists into logical events, overlays, slides and a
//! grid projection. Every function here is pure over its input: recomputing
//! on each frame yields identical results.

pub mod detail;
pub mod grid;
pub mod now_playing;
pub mod overlay;
pub mod query;
pub mod slides;
pub mod span;
pub mod validation;

use thiserror::Error;

use crate::models::slot::SlotTime;

pub use detail::{assemble_detail, DetailBody, EventDetail, Instructor, TalkFormat};
pub use grid::{project_day, ColumnProjection, ColumnState, GridCell, GridProjection, ProjectionOptions};
pub use now_playing::{axis_position, live_events};
pub use overlay::attach_overlay;
pub use query::{program_query, ProgramQuery};
pub use slides::aggregate_slides;
pub use span::{continuation_flags, find_runs, resolve_events, SpanRun};
pub use validation::validate_slots;

/// Input validation failure for one area's slot list.
///
/// Fatal for that area's column only; sibling columns keep rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimetableError {
    #[error("slot {index}: malformed time '{value}' ({reason})")]
    MalformedTime {
        index: usize,
        value: String,
        reason: String,
    },

    #[error("slot {index}: {time} is not one slot after {previous}")]
    StepMismatch {
        index: usize,
        previous: SlotTime,
        time: SlotTime,
    },

    #[error("slot {index}: duplicate time {time}")]
    DuplicateTime { index: usize, time: SlotTime },

    #[error("area '{area}' does not share the day's time axis")]
    AxisMismatch { area: String },
}
