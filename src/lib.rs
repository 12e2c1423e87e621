// Festival Timetable Library
// Exports the slot model, the timetable pipeline and the egui viewer

pub mod models;
pub mod services;
pub mod ui_egui;
