// Property-based tests for event span resolution
// Random slot columns checked against contiguity, span arithmetic and idempotence

use festival_timetable::models::schedule::AreaColumn;
use festival_timetable::models::slot::{SlotTime, TimeSlot, SLOT_MINUTES};
use festival_timetable::services::timetable::{continuation_flags, find_runs, resolve_events};
use proptest::prelude::*;

/// Titles differing only in whitespace or case must never join one run
const TITLE_POOL: [&str; 6] = ["Event 0", "Event 0 ", " Event 0", "event 0", "Event 1", " "];

/// A column of up to 48 slots whose titles come from a small pool, so runs form often
fn column_strategy() -> impl Strategy<Value = (u16, Vec<Option<u8>>)> {
    (
        0u16..48,
        prop::collection::vec(prop::option::weighted(0.8, 0u8..TITLE_POOL.len() as u8), 0..48),
    )
}

fn raw_title(title: Option<u8>) -> Option<&'static str> {
    title.map(|n| TITLE_POOL[usize::from(n)])
}

/// Non-blank raw title, the value runs are keyed on
fn run_key(title: Option<u8>) -> Option<&'static str> {
    raw_title(title).filter(|t| !t.trim().is_empty())
}

fn build_column(start_slot: u16, titles: &[Option<u8>]) -> AreaColumn {
    let start = SlotTime::from_hm(0, 0).unwrap().add_minutes(u32::from(start_slot * SLOT_MINUTES));
    let slots = titles
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let time = start.after_slots(i).to_string();
            match raw_title(*title) {
                Some(raw) => TimeSlot::titled(time, raw),
                None => TimeSlot::empty(time),
            }
        })
        .collect();
    AreaColumn::new("Main Stage", slots)
}

proptest! {
    /// A slot continues a run exactly when its predecessor has a byte-equal non-blank title
    #[test]
    fn prop_continuation_matches_previous_title((start, titles) in column_strategy()) {
        let column = build_column(start, &titles);
        let flags = continuation_flags(&column.slots);

        for (i, flag) in flags.iter().enumerate() {
            let expected = i > 0 && run_key(titles[i]).is_some() && run_key(titles[i]) == run_key(titles[i - 1]);
            prop_assert_eq!(*flag, expected);
        }
    }

    /// Runs cover every titled slot once, and adjacent runs never share a title
    #[test]
    fn prop_runs_partition_titled_slots((start, titles) in column_strategy()) {
        let column = build_column(start, &titles);
        let runs = find_runs(&column.slots);

        let covered: usize = runs.iter().map(|run| run.span_count).sum();
        prop_assert_eq!(covered, titles.iter().filter(|t| run_key(**t).is_some()).count());

        for run in &runs {
            let key = run_key(titles[run.first_slot]);
            prop_assert!(run.range().all(|i| run_key(titles[i]) == key));
        }

        for pair in runs.windows(2) {
            if pair[0].range().end == pair[1].first_slot {
                prop_assert_ne!(run_key(titles[pair[0].first_slot]), run_key(titles[pair[1].first_slot]));
            }
        }
    }

    /// End time is start plus 30 minutes per slot, wrapping at midnight
    #[test]
    fn prop_span_arithmetic((start, titles) in column_strategy()) {
        let column = build_column(start, &titles);
        let events = resolve_events("sat", &column).unwrap();

        for event in &events {
            prop_assert_eq!(event.end, event.start.add_minutes(event.span_count as u32 * u32::from(SLOT_MINUTES)));
            prop_assert_eq!(event.duration_minutes(), event.span_count as u32 * u32::from(SLOT_MINUTES));
        }
    }

    /// Resolving the same column twice yields identical events
    #[test]
    fn prop_resolution_is_idempotent((start, titles) in column_strategy()) {
        let column = build_column(start, &titles);
        prop_assert_eq!(resolve_events("sat", &column), resolve_events("sat", &column));
    }
}

#[test]
fn test_span_arithmetic_examples() {
    let column = build_column(26, &[Some(0), Some(0), Some(0)]);
    let events = resolve_events("sat", &column).unwrap();
    assert_eq!(events[0].start.to_string(), "13:00");
    assert_eq!(events[0].end.to_string(), "14:30");

    let column = build_column(47, &[Some(1), Some(1)]);
    let events = resolve_events("sat", &column).unwrap();
    assert_eq!(events[0].start.to_string(), "23:30");
    assert_eq!(events[0].end.to_string(), "00:30");
}
