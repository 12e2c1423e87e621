use std::collections::HashSet;

use super::TimetableError;
use crate::models::slot::{SlotTime, TimeSlot, SLOT_MINUTES};

/// Parse and check the time column of one area's slots.
///
/// Times must be strict `HH:MM`, unique, and each one exactly one slot after
/// its predecessor (crossing midnight is allowed). No repair is attempted.
pub fn validate_slots(slots: &[TimeSlot]) -> Result<Vec<SlotTime>, TimetableError> {
    let mut times = Vec::with_capacity(slots.len());
    let mut seen = HashSet::with_capacity(slots.len());

    for (index, slot) in slots.iter().enumerate() {
        let time: SlotTime = slot
            .time
            .parse()
            .map_err(|reason| TimetableError::MalformedTime {
                index,
                value: slot.time.clone(),
                reason,
            })?;

        if !seen.insert(time) {
            return Err(TimetableError::DuplicateTime { index, time });
        }

        if let Some(&previous) = times.last() {
            if time.minutes_since(previous) != SLOT_MINUTES {
                return Err(TimetableError::StepMismatch {
                    index,
                    previous,
                    time,
                });
            }
        }

        times.push(time);
    }

    Ok(times)
}
