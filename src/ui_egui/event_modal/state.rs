use crate::models::event::EventId;

/// Detail window state, owned by the app.
///
/// Closing drops the selected event and carousel position together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open { event: EventId, slide_index: usize },
}

impl ModalState {
    /// Open on `event` at the first slide
    pub fn open(&mut self, event: EventId) {
        *self = ModalState::Open {
            event,
            slide_index: 0,
        };
    }

    pub fn close(&mut self) {
        *self = ModalState::Closed;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ModalState::Open { .. })
    }

    pub fn event(&self) -> Option<&EventId> {
        match self {
            ModalState::Open { event, .. } => Some(event),
            ModalState::Closed => None,
        }
    }

    pub fn slide_index(&self) -> Option<usize> {
        match self {
            ModalState::Open { slide_index, .. } => Some(*slide_index),
            ModalState::Closed => None,
        }
    }

    /// Advance the carousel, wrapping from the last slide to the first
    pub fn next(&mut self, slide_count: usize) {
        if let ModalState::Open { slide_index, .. } = self {
            if slide_count > 0 {
                *slide_index = (*slide_index + 1) % slide_count;
            }
        }
    }

    /// Step back, wrapping from the first slide to the last
    pub fn previous(&mut self, slide_count: usize) {
        if let ModalState::Open { slide_index, .. } = self {
            if slide_count > 0 {
                *slide_index = (*slide_index + slide_count - 1) % slide_count;
            }
        }
    }
}
