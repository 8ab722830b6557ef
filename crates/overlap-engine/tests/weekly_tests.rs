//! Tests for week-level filtering and intersection.

use overlap_engine::{DaySchedule, Participant, TimeRange, Weekday, WeeklyAvailability};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn range(sh: u32, sm: u32, eh: u32, em: u32) -> TimeRange {
    TimeRange::from_hm(sh, sm, eh, em).unwrap()
}

fn week(ranges: &[(Weekday, TimeRange)]) -> WeeklyAvailability {
    WeeklyAvailability::from_ranges(ranges.iter().copied())
}

// ── Construction ────────────────────────────────────────────────────────────

#[test]
fn partial_input_fills_all_seven_days() {
    let availability = WeeklyAvailability::new([DaySchedule::new(
        Weekday::Tuesday,
        vec![range(9, 0, 11, 0)],
    )]);

    let days: Vec<Weekday> = availability.days().map(DaySchedule::day).collect();
    assert_eq!(days, Weekday::ALL.to_vec());
    assert_eq!(availability.available_days().collect::<Vec<_>>(), vec![Weekday::Tuesday]);
    assert_eq!(availability.total_length(), 120);
}

#[test]
fn total_length_sums_every_day() {
    let availability = week(&[
        (Weekday::Monday, range(9, 0, 10, 0)),
        (Weekday::Monday, range(13, 0, 13, 30)),
        (Weekday::Sunday, range(18, 0, 20, 0)),
    ]);
    assert_eq!(availability.total_length(), 60 + 30 + 120);
}

// ── Duration filter ─────────────────────────────────────────────────────────

#[test]
fn range_of_exactly_the_minimum_is_kept() {
    let availability = week(&[(Weekday::Monday, range(9, 0, 9, 45))]);
    let filtered = availability.filter_by_minimum_duration(45);
    assert_eq!(filtered.day(Weekday::Monday).ranges(), &[range(9, 0, 9, 45)]);
}

#[test]
fn range_one_minute_short_is_dropped() {
    let availability = week(&[(Weekday::Monday, range(9, 0, 9, 44))]);
    let filtered = availability.filter_by_minimum_duration(45);
    assert!(filtered.day(Weekday::Monday).is_empty());
    assert!(!filtered.is_available(Weekday::Monday));
    assert_eq!(filtered.total_length(), 0);
}

#[test]
fn filter_returns_new_value_and_leaves_original_alone() {
    let availability = week(&[
        (Weekday::Wednesday, range(9, 0, 9, 20)),
        (Weekday::Wednesday, range(14, 0, 16, 0)),
    ]);
    let filtered = availability.filter_by_minimum_duration(60);

    assert_eq!(filtered.day(Weekday::Wednesday).ranges(), &[range(14, 0, 16, 0)]);
    assert_eq!(availability.day(Weekday::Wednesday).ranges().len(), 2);
    assert_eq!(availability.total_length(), 140);
    assert_eq!(filtered.total_length(), 120);
}

// ── Intersection ────────────────────────────────────────────────────────────

#[test]
fn empty_day_on_one_side_gives_empty_day() {
    let a = week(&[(Weekday::Tuesday, range(9, 0, 12, 0))]);
    let b = week(&[
        (Weekday::Monday, range(9, 0, 12, 0)),
        (Weekday::Tuesday, range(10, 0, 11, 0)),
    ]);

    let overlap = a.intersect(&b);
    assert!(overlap.day(Weekday::Monday).is_empty());
    assert_eq!(overlap.day(Weekday::Monday).day(), Weekday::Monday);
    assert_eq!(overlap.day(Weekday::Tuesday).ranges(), &[range(10, 0, 11, 0)]);
    assert_eq!(overlap.total_length(), 60);
}

#[test]
fn intersect_is_computed_per_day() {
    let a = week(&[
        (Weekday::Monday, range(9, 0, 12, 0)),
        (Weekday::Friday, range(13, 0, 17, 0)),
    ]);
    let b = week(&[
        (Weekday::Monday, range(11, 0, 13, 0)),
        (Weekday::Friday, range(8, 0, 9, 0)),
    ]);

    let overlap = a.intersect(&b);
    assert_eq!(overlap.day(Weekday::Monday).ranges(), &[range(11, 0, 12, 0)]);
    assert!(overlap.day(Weekday::Friday).is_empty());
    assert_eq!(overlap, b.intersect(&a));
}

#[test]
fn participants_delegate_to_their_availability() {
    let ana = Participant::new(
        "Ana",
        "ana@example.edu",
        week(&[(Weekday::Thursday, range(9, 0, 12, 0))]),
    );
    let ben = Participant::new(
        "Ben",
        "ben@example.edu",
        week(&[(Weekday::Thursday, range(11, 30, 15, 0))]),
    );

    let overlap = ana.intersect_with(&ben);
    assert_eq!(overlap, ana.availability.intersect(&ben.availability));
    assert_eq!(overlap.day(Weekday::Thursday).ranges(), &[range(11, 30, 12, 0)]);
}

#[test]
fn with_availability_keeps_identity() {
    let ana = Participant::new(
        "Ana",
        "ana@example.edu",
        week(&[(Weekday::Monday, range(9, 0, 9, 15))]),
    );
    let trimmed = ana.with_availability(ana.availability.filter_by_minimum_duration(30));

    assert_eq!(trimmed.name, "Ana");
    assert_eq!(trimmed.contact, "ana@example.edu");
    assert_eq!(trimmed.availability.total_length(), 0);
    assert_eq!(ana.availability.total_length(), 15);
    assert_eq!(trimmed.to_string(), "Ana (ana@example.edu)");
}
