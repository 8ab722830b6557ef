//! Tests for day-level coalescing and overlap.

use overlap_engine::{DaySchedule, TimeRange, Weekday};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn range(sh: u32, sm: u32, eh: u32, em: u32) -> TimeRange {
    TimeRange::from_hm(sh, sm, eh, em).unwrap()
}

fn monday(ranges: Vec<TimeRange>) -> DaySchedule {
    DaySchedule::new(Weekday::Monday, ranges)
}

// ── Coalescing ──────────────────────────────────────────────────────────────

#[test]
fn overlapping_ranges_merge_and_disjoint_ranges_stay() {
    let schedule = monday(vec![
        range(9, 0, 10, 0),
        range(9, 30, 11, 0),
        range(13, 0, 14, 0),
    ]);

    assert_eq!(schedule.ranges(), &[range(9, 0, 11, 0), range(13, 0, 14, 0)]);
    assert_eq!(schedule.length(), 180);
}

#[test]
fn unsorted_input_is_sorted() {
    let schedule = monday(vec![
        range(15, 0, 16, 0),
        range(8, 0, 9, 0),
        range(11, 0, 12, 0),
    ]);

    assert_eq!(
        schedule.ranges(),
        &[range(8, 0, 9, 0), range(11, 0, 12, 0), range(15, 0, 16, 0)]
    );
}

#[test]
fn merge_keeps_the_later_end() {
    // The second range starts inside the first but ends earlier.
    let schedule = monday(vec![range(9, 0, 12, 0), range(10, 0, 10, 30)]);
    assert_eq!(schedule.ranges(), &[range(9, 0, 12, 0)]);
}

#[test]
fn chain_of_overlaps_collapses_to_one_range() {
    let schedule = monday(vec![
        range(9, 0, 10, 0),
        range(10, 0, 11, 0),
        range(10, 30, 12, 0),
        range(11, 45, 13, 0),
    ]);
    assert_eq!(schedule.ranges(), &[range(9, 0, 13, 0)]);
}

#[test]
fn coalesce_is_idempotent() {
    let mut schedule = monday(vec![
        range(9, 0, 10, 0),
        range(9, 30, 11, 0),
        range(13, 0, 14, 0),
    ]);
    let once = schedule.clone();
    schedule.coalesce();
    assert_eq!(schedule, once);
}

#[test]
fn consecutive_ranges_are_strictly_gapped() {
    let schedule = monday(vec![
        range(9, 0, 10, 0),
        range(10, 0, 10, 15),
        range(10, 16, 11, 0),
    ]);
    for pair in schedule.ranges().windows(2) {
        assert!(pair[0].end() < pair[1].start());
    }
    assert_eq!(schedule.ranges(), &[range(9, 0, 10, 15), range(10, 16, 11, 0)]);
}

#[test]
fn add_time_slot_matches_construction() {
    let mut built = DaySchedule::empty(Weekday::Monday);
    built.add_time_slot(range(13, 0, 14, 0));
    built.add_time_slot(range(9, 30, 11, 0));
    built.add_time_slot(range(9, 0, 10, 0));

    let direct = monday(vec![
        range(9, 0, 10, 0),
        range(9, 30, 11, 0),
        range(13, 0, 14, 0),
    ]);
    assert_eq!(built, direct);
}

#[test]
fn empty_schedule_has_zero_length() {
    let schedule = DaySchedule::empty(Weekday::Thursday);
    assert!(schedule.is_empty());
    assert_eq!(schedule.length(), 0);
    assert_eq!(schedule.day(), Weekday::Thursday);
}

// ── Overlap ─────────────────────────────────────────────────────────────────

#[test]
fn overlap_of_two_single_ranges() {
    let a = monday(vec![range(9, 0, 12, 0)]);
    let b = monday(vec![range(11, 0, 13, 0)]);

    let overlap = a.find_overlap(&b);
    assert_eq!(overlap.ranges(), &[range(11, 0, 12, 0)]);
    assert_eq!(overlap.length(), 60);
}

#[test]
fn overlap_is_commutative() {
    let a = monday(vec![range(8, 0, 10, 0), range(12, 0, 15, 0), range(16, 0, 18, 0)]);
    let b = monday(vec![range(9, 0, 13, 0), range(14, 30, 17, 0)]);

    let ab = a.find_overlap(&b);
    let ba = b.find_overlap(&a);
    assert_eq!(ab.ranges(), ba.ranges());
    assert_eq!(
        ab.ranges(),
        &[
            range(9, 0, 10, 0),
            range(12, 0, 13, 0),
            range(14, 30, 15, 0),
            range(16, 0, 17, 0),
        ]
    );
}

#[test]
fn one_long_range_against_many_short_ones() {
    let a = monday(vec![range(8, 0, 18, 0)]);
    let b = monday(vec![range(9, 0, 9, 30), range(11, 0, 11, 45), range(17, 30, 19, 0)]);

    let overlap = a.find_overlap(&b);
    assert_eq!(
        overlap.ranges(),
        &[range(9, 0, 9, 30), range(11, 0, 11, 45), range(17, 30, 18, 0)]
    );
}

#[test]
fn touching_schedules_have_no_overlap() {
    let a = monday(vec![range(9, 0, 10, 0)]);
    let b = monday(vec![range(10, 0, 11, 0)]);

    let overlap = a.find_overlap(&b);
    assert!(overlap.is_empty());
    assert_eq!(overlap.length(), 0);
}

#[test]
fn overlap_with_empty_schedule_is_empty() {
    let a = monday(vec![range(9, 0, 17, 0)]);
    let overlap = a.find_overlap(&DaySchedule::empty(Weekday::Monday));
    assert!(overlap.is_empty());
}

#[test]
fn overlap_takes_the_receivers_day() {
    let a = DaySchedule::new(Weekday::Tuesday, vec![range(9, 0, 10, 0)]);
    let b = DaySchedule::new(Weekday::Friday, vec![range(9, 0, 10, 0)]);
    assert_eq!(a.find_overlap(&b).day(), Weekday::Tuesday);
}

#[test]
fn filter_min_duration_is_inclusive() {
    let schedule = monday(vec![range(9, 0, 9, 29), range(10, 0, 10, 30), range(12, 0, 14, 0)]);
    let filtered = schedule.filter_min_duration(30);
    assert_eq!(filtered.ranges(), &[range(10, 0, 10, 30), range(12, 0, 14, 0)]);
}
