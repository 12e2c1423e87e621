use super::grid::GridProjection;
use crate::models::event::LogicalEvent;
use crate::models::slot::{SlotTime, SLOT_MINUTES};

/// Events whose span contains `time`, in column order
pub fn live_events(projection: &GridProjection, time: SlotTime) -> Vec<&LogicalEvent> {
    projection
        .events()
        .filter(|event| event.contains_time(time))
        .collect()
}

/// Position of `time` on the projection's axis, in fractional rows.
///
/// `None` when the axis is empty or `time` lies outside it. Times after
/// midnight on a night that started the previous evening are handled.
pub fn axis_position(projection: &GridProjection, time: SlotTime) -> Option<f32> {
    let start = *projection.time_axis.first()?;
    let axis_minutes = projection.rows() as u32 * u32::from(SLOT_MINUTES);
    let offset = u32::from(time.minutes_since(start));

    (offset < axis_minutes).then(|| offset as f32 / f32::from(SLOT_MINUTES))
}
