//! Compound predicate filtering over the lecture catalog.
//!
//! Filtering is a pure conjunction: every predicate is vacuously true when
//! its option is empty/unset, so the default option set returns the whole
//! catalog in order. Cheap string/number predicates run before the day and
//! time predicates, which need the decoded schedule and go through the
//! parse cache.

use crate::api::{Lecture, SearchOption};
use crate::models::schedule::ScheduleCache;
use crate::models::time::Day;

/// Filter the catalog down to lectures matching every set option.
///
/// Pure function of `(catalog, options)`: identical inputs yield an
/// identical, order-preserving result set.
pub fn filter_lectures(
    catalog: &[Lecture],
    options: &SearchOption,
    cache: &ScheduleCache,
) -> Vec<Lecture> {
    let query = options.query.to_lowercase();
    catalog
        .iter()
        .filter(|lecture| matches_query(lecture, &query))
        .filter(|lecture| options.grades.is_empty() || options.grades.contains(&lecture.grade))
        .filter(|lecture| {
            options.majors.is_empty() || options.majors.iter().any(|m| *m == lecture.major)
        })
        .filter(|lecture| matches_credits(lecture, options.credits))
        .filter(|lecture| matches_days(lecture, &options.days, cache))
        .filter(|lecture| matches_times(lecture, &options.times, cache))
        .cloned()
        .collect()
}

/// Case-insensitive substring match on title or id. `query` is already
/// lowercased by the caller.
fn matches_query(lecture: &Lecture, query: &str) -> bool {
    query.is_empty()
        || lecture.title.to_lowercase().contains(query)
        || lecture.id.to_lowercase().contains(query)
}

fn matches_credits(lecture: &Lecture, credits: Option<u8>) -> bool {
    match credits {
        None => true,
        Some(credits) => lecture.credits.starts_with(&credits.to_string()),
    }
}

fn matches_days(lecture: &Lecture, days: &[Day], cache: &ScheduleCache) -> bool {
    if days.is_empty() {
        return true;
    }
    cache
        .parse(&lecture.schedule)
        .iter()
        .any(|segment| days.contains(&segment.day))
}

fn matches_times(lecture: &Lecture, times: &[u8], cache: &ScheduleCache) -> bool {
    if times.is_empty() {
        return true;
    }
    cache
        .parse(&lecture.schedule)
        .iter()
        .any(|segment| segment.range.iter().any(|slot| times.contains(slot)))
}

/// Distinct majors across the catalog, in first-seen order. Feeds the
/// search surface's major picker.
pub fn distinct_majors(catalog: &[Lecture]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    catalog
        .iter()
        .filter(|lecture| seen.insert(lecture.major.clone()))
        .map(|lecture| lecture.major.clone())
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
