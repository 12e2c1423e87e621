use super::span::SpanRun;
use crate::models::event::OverlayShow;
use crate::models::slot::TimeSlot;

/// Find the dance-show overlay inside one event's span.
///
/// The first slot marked `hasOverlayShow` wins; further marked slots are
/// reported and ignored. The overlay's performers are copied from the
/// overlay fields only and never from the event's own people.
pub fn attach_overlay(event_title: &str, span: &[TimeSlot]) -> Option<OverlayShow> {
    let mut marked = span
        .iter()
        .enumerate()
        .filter(|(_, slot)| slot.has_overlay_show);

    let (anchor_slot_index, anchor) = marked.next()?;

    for (index, extra) in marked {
        log::warn!(
            "Event '{}' has an extra overlay show at slot {} ({}); only the first is shown",
            event_title,
            index,
            extra.time
        );
    }

    Some(OverlayShow {
        title: non_blank(&anchor.overlay_show_title),
        performers: anchor
            .overlay_dancers
            .iter()
            .filter(|name| !name.trim().is_empty())
            .cloned()
            .collect(),
        image: non_blank(&anchor.overlay_image),
        anchor_slot_index,
    })
}

/// Log overlay markers that sit outside every event span; such overlays are dropped.
///
/// Returns the offending slot indices.
pub(crate) fn report_orphan_overlays(area: &str, slots: &[TimeSlot], runs: &[SpanRun]) -> Vec<usize> {
    let orphans: Vec<usize> = slots
        .iter()
        .enumerate()
        .filter(|(index, slot)| slot.has_overlay_show && !runs.iter().any(|run| run.contains(*index)))
        .map(|(index, _)| index)
        .collect();

    for &index in &orphans {
        log::warn!(
            "Area '{}': overlay show at {} has no parent event; dropping it",
            area,
            slots[index].time
        );
    }

    orphans
}

fn non_blank(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
