mod render;
mod state;

pub use render::render_event_modal;
pub use state::ModalState;
