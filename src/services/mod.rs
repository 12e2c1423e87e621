// Service module exports

pub mod content;
pub mod settings;
pub mod timetable;
