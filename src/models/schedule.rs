// ============================================================================
// Schedule-string codec
// ============================================================================
//
// Raw schedule-strings concatenate day/time/room records without explicit
// separators, e.g. "Mon1,2,3(R101)Wed10~12(Hall2)". A day label starts a
// record, the following numbers are slot values, and any trailing text up
// to the next day label is the room.

use crate::api::{Lecture, ScheduleEntry};
use crate::models::time::{covering_slot, Day};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// One decoded record of a raw schedule-string: a contiguous run of slots
/// on a single day, with the room it meets in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySegment {
    pub day: Day,
    pub range: Vec<u8>,
    pub room: String,
}

/// Decode a raw schedule-string into day segments.
///
/// Rules:
/// - a day label from the fixed alphabet starts a new record;
/// - slot values follow the label, separated by `,`, with `a~b` expanding
///   inclusively; a fractional value is the merged half-period marker and
///   rounds up to its covering slot;
/// - a run of consecutive slot values collapses into one contiguous
///   `range`; a gap starts a further segment on the same day;
/// - remaining text before the next day label is the room (surrounding
///   parentheses stripped);
/// - values outside `[1, 24]` are discarded.
///
/// Empty or unparseable input degrades to an empty vector; the codec never
/// fails a whole catalog pass over one malformed record.
pub fn parse_schedule(raw: &str) -> Vec<DaySegment> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut rest = raw;

    let Some(first) = find_day_token(rest) else {
        tracing::warn!(raw, "schedule string has no day token, dropping");
        return Vec::new();
    };
    rest = &rest[first..];

    while let Some((day, after_day)) = take_day_token(rest) {
        let (slots, after_slots) = take_slot_values(after_day);
        let record_end = find_day_token(after_slots).unwrap_or(after_slots.len());
        let room = trim_room(&after_slots[..record_end]);

        for range in contiguous_runs(&slots) {
            segments.push(DaySegment {
                day,
                range,
                room: room.clone(),
            });
        }

        rest = &after_slots[record_end..];
    }

    segments
}

/// Byte offset of the next day label in `text`, if any.
fn find_day_token(text: &str) -> Option<usize> {
    (0..=text.len())
        .filter(|&i| text.is_char_boundary(i))
        .find(|&i| Day::ALL.iter().any(|day| text[i..].starts_with(day.label())))
}

/// Split a leading day label off `text`.
fn take_day_token(text: &str) -> Option<(Day, &str)> {
    Day::ALL
        .iter()
        .find(|day| text.starts_with(day.label()))
        .map(|&day| (day, &text[day.label().len()..]))
}

/// Consume the leading slot-value run (digits, `.`, `,`, `~`) of `text`
/// and decode it into slot numbers.
fn take_slot_values(text: &str) -> (Vec<u8>, &str) {
    let end = text
        .find(|c: char| !c.is_ascii_digit() && c != '.' && c != ',' && c != '~')
        .unwrap_or(text.len());
    let (value_part, rest) = text.split_at(end);

    let mut slots = Vec::new();
    for token in value_part.split(',').filter(|t| !t.is_empty()) {
        match token.split_once('~') {
            Some((from, to)) => {
                let from = from.parse::<f64>().ok().and_then(covering_slot);
                let to = to.parse::<f64>().ok().and_then(covering_slot);
                if let (Some(from), Some(to)) = (from, to) {
                    slots.extend(from..=to);
                }
            }
            None => {
                if let Some(slot) = token.parse::<f64>().ok().and_then(covering_slot) {
                    slots.push(slot);
                }
            }
        }
    }
    (slots, rest)
}

/// Collapse a slot list into runs of consecutive values. Duplicates within
/// a run are dropped; a gap starts a new run.
fn contiguous_runs(slots: &[u8]) -> Vec<Vec<u8>> {
    let mut runs: Vec<Vec<u8>> = Vec::new();
    for &slot in slots {
        match runs.last_mut() {
            Some(run) => match run.last().copied() {
                Some(prev) if slot == prev => {}
                Some(prev) if slot == prev + 1 => run.push(slot),
                _ => runs.push(vec![slot]),
            },
            None => runs.push(vec![slot]),
        }
    }
    runs
}

fn trim_room(text: &str) -> String {
    let text = text.trim();
    let text = text.strip_prefix('(').unwrap_or(text);
    let text = text.strip_suffix(')').unwrap_or(text);
    text.trim().to_string()
}

/// Expand a lecture into schedule entries, one per decoded day segment.
pub fn expand_lecture(lecture: &Lecture) -> Vec<ScheduleEntry> {
    parse_schedule(&lecture.schedule)
        .into_iter()
        .map(|segment| ScheduleEntry {
            day: segment.day,
            range: segment.range,
            room: segment.room,
            lecture: lecture.clone(),
        })
        .collect()
}

/// Memoizing wrapper around [`parse_schedule`].
///
/// Filter passes decode the same raw schedule-strings over and over; the
/// cache parses each distinct string once and hands out shared results.
/// Write-once per key, so a plain read/write lock suffices.
#[derive(Default)]
pub struct ScheduleCache {
    parsed: RwLock<HashMap<String, Arc<Vec<DaySegment>>>>,
}

impl ScheduleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parsed segments for `raw`, computed at most once per distinct string.
    pub fn parse(&self, raw: &str) -> Arc<Vec<DaySegment>> {
        if let Some(hit) = self.parsed.read().get(raw) {
            return Arc::clone(hit);
        }
        let computed = Arc::new(parse_schedule(raw));
        let mut parsed = self.parsed.write();
        Arc::clone(parsed.entry(raw.to_string()).or_insert(computed))
    }

    /// Expand a lecture through the cache.
    pub fn expand(&self, lecture: &Lecture) -> Vec<ScheduleEntry> {
        self.parse(&lecture.schedule)
            .iter()
            .map(|segment| ScheduleEntry {
                day: segment.day,
                range: segment.range.clone(),
                room: segment.room.clone(),
                lecture: lecture.clone(),
            })
            .collect()
    }

    /// Number of distinct raw strings parsed so far.
    pub fn len(&self) -> usize {
        self.parsed.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.parsed.read().is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
