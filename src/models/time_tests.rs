use super::*;

#[test]
fn test_day_index_round_trip() {
    for day in Day::ALL {
        assert_eq!(Day::from_index(day.index()), Some(day));
    }
    assert_eq!(Day::from_index(DAY_COUNT), None);
}

#[test]
fn test_day_from_str() {
    assert_eq!("Mon".parse::<Day>(), Ok(Day::Mon));
    assert_eq!("Sat".parse::<Day>(), Ok(Day::Sat));
    assert!("Sun".parse::<Day>().is_err());
    assert!("monday".parse::<Day>().is_err());
    assert!("".parse::<Day>().is_err());
}

#[test]
fn test_day_display_matches_label() {
    assert_eq!(Day::Wed.to_string(), "Wed");
}

#[test]
fn test_slot_start_minutes_daytime() {
    // Slot 1 starts at 09:00, each daytime slot is 30 minutes.
    assert_eq!(slot_start_minutes(1), Some(9 * 60));
    assert_eq!(slot_start_minutes(2), Some(9 * 60 + 30));
    assert_eq!(slot_start_minutes(18), Some(9 * 60 + 17 * 30));
}

#[test]
fn test_slot_start_minutes_evening() {
    // Slot 19 starts at 18:00; evening slots advance every 55 minutes.
    assert_eq!(slot_start_minutes(19), Some(18 * 60));
    assert_eq!(slot_start_minutes(20), Some(18 * 60 + 55));
    assert_eq!(slot_start_minutes(24), Some(18 * 60 + 5 * 55));
}

#[test]
fn test_slot_start_minutes_out_of_range() {
    assert_eq!(slot_start_minutes(0), None);
    assert_eq!(slot_start_minutes(25), None);
}

#[test]
fn test_slot_duration() {
    assert_eq!(slot_duration_minutes(1), Some(30));
    assert_eq!(slot_duration_minutes(18), Some(30));
    assert_eq!(slot_duration_minutes(19), Some(50));
    assert_eq!(slot_duration_minutes(24), Some(50));
    assert_eq!(slot_duration_minutes(0), None);
}

#[test]
fn test_slot_label() {
    assert_eq!(slot_label(1).as_deref(), Some("09:00~09:30"));
    assert_eq!(slot_label(19).as_deref(), Some("18:00~18:50"));
    assert_eq!(slot_label(25), None);
}

#[test]
fn test_covering_slot_whole_values() {
    assert_eq!(covering_slot(1.0), Some(1));
    assert_eq!(covering_slot(24.0), Some(24));
}

#[test]
fn test_covering_slot_merged_half() {
    // A merged half-period belongs to the covering slot.
    assert_eq!(covering_slot(18.5), Some(19));
    assert_eq!(covering_slot(1.5), Some(2));
}

#[test]
fn test_covering_slot_out_of_range() {
    assert_eq!(covering_slot(0.0), None);
    assert_eq!(covering_slot(-3.0), None);
    assert_eq!(covering_slot(24.5), None);
    assert_eq!(covering_slot(f64::NAN), None);
}
