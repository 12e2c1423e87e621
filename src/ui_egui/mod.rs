mod app;
mod event_modal;
pub mod theme;
mod views;

pub use app::FestivalApp;
