pub mod block_rendering;
pub mod palette;
pub mod timetable_view;

/// Width reserved for the time labels on the left
pub const TIME_LABEL_WIDTH: f32 = 56.0;
/// Height of the area name row
pub const HEADER_HEIGHT: f32 = 32.0;
pub const MIN_COLUMN_WIDTH: f32 = 170.0;
