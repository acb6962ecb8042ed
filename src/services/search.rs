//! Search session: option lifecycle and incremental result reveal.
//!
//! One session backs the search surface. Opening it for a target resets
//! the options (seeding day/time from the triggering grid cell), option
//! changes collapse the reveal window back to the first page, and the
//! "near the end of the list" sentinel advances the window one page at a
//! time. Closing clears everything; the catalog itself is owned elsewhere
//! and survives open/close cycles.

use crate::api::{Day, Lecture, ScheduleEntry, SearchOption, SearchTarget};
use crate::models::schedule::ScheduleCache;
use crate::services::filter::filter_lectures;
use std::sync::Arc;

/// Number of results revealed per sentinel trigger.
pub const PAGE_SIZE: usize = 100;

/// Stateful search surface backing: current options plus reveal window.
pub struct SearchSession {
    options: SearchOption,
    target: Option<SearchTarget>,
    revealed_pages: usize,
    scroll_reset: bool,
    page_size: usize,
    cache: Arc<ScheduleCache>,
}

impl SearchSession {
    pub fn new(cache: Arc<ScheduleCache>) -> Self {
        Self {
            options: SearchOption::default(),
            target: None,
            revealed_pages: 0,
            scroll_reset: false,
            page_size: PAGE_SIZE,
            cache,
        }
    }

    /// Override the reveal page size (from configuration).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    /// Open the surface for a target.
    ///
    /// Query, grades, majors and credits reset to empty; days/times seed
    /// from the triggering cell when present, otherwise clear. The reveal
    /// window drops back to the first page.
    pub fn open(&mut self, target: SearchTarget) {
        tracing::debug!(table_id = %target.table_id, "search surface opened");
        self.options = SearchOption {
            days: target.day.map(|day| vec![day]).unwrap_or_default(),
            times: target.time.map(|time| vec![time]).unwrap_or_default(),
            ..Default::default()
        };
        self.target = Some(target);
        self.revealed_pages = 1;
        self.scroll_reset = true;
    }

    /// Close the surface: all options and the reveal window clear.
    pub fn close(&mut self) {
        tracing::debug!("search surface closed");
        self.options = SearchOption::default();
        self.target = None;
        self.revealed_pages = 0;
        self.scroll_reset = true;
    }

    pub fn is_open(&self) -> bool {
        self.target.is_some()
    }

    pub fn target(&self) -> Option<&SearchTarget> {
        self.target.as_ref()
    }

    pub fn options(&self) -> &SearchOption {
        &self.options
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.options.query = query.into();
        self.reset_reveal();
    }

    pub fn set_grades(&mut self, grades: Vec<u8>) {
        self.options.grades = grades;
        self.reset_reveal();
    }

    pub fn set_days(&mut self, days: Vec<Day>) {
        self.options.days = days;
        self.reset_reveal();
    }

    pub fn set_times(&mut self, times: Vec<u8>) {
        self.options.times = times;
        self.reset_reveal();
    }

    pub fn set_majors(&mut self, majors: Vec<String>) {
        self.options.majors = majors;
        self.reset_reveal();
    }

    pub fn set_credits(&mut self, credits: Option<u8>) {
        self.options.credits = credits;
        self.reset_reveal();
    }

    /// Any option change collapses the window to the first page and asks
    /// the list to scroll back to the top.
    fn reset_reveal(&mut self) {
        self.revealed_pages = 1;
        self.scroll_reset = true;
    }

    /// Full filtered result set for the current options.
    pub fn results(&self, catalog: &[Lecture]) -> Vec<Lecture> {
        filter_lectures(catalog, &self.options, &self.cache)
    }

    /// The currently revealed prefix of the result set.
    pub fn visible(&self, catalog: &[Lecture]) -> Vec<Lecture> {
        let mut results = self.results(catalog);
        results.truncate(self.revealed_pages * self.page_size);
        results
    }

    /// Sentinel signal: reveal one more page if matches remain.
    ///
    /// Returns whether the window actually advanced.
    pub fn reveal_more(&mut self, catalog: &[Lecture]) -> bool {
        let total = self.results(catalog).len();
        if self.revealed_pages * self.page_size >= total {
            return false;
        }
        self.revealed_pages += 1;
        true
    }

    pub fn revealed_pages(&self) -> usize {
        self.revealed_pages
    }

    /// Drain the scroll-to-top flag for the rendering boundary.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }

    /// Expand the selected lecture into schedule entries for the target
    /// table. The caller appends them to that table's store and closes
    /// the surface.
    pub fn select_lecture(&self, lecture: &Lecture) -> Vec<ScheduleEntry> {
        self.cache.expand(lecture)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
