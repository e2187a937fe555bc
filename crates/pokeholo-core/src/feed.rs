//! Incremental set feed for the collection list.
//!
//! There is no real paging: every load appends another full copy of the
//! catalog. Loads are non-reentrant. A request made while one is already
//! outstanding is ignored, which makes a burst of scroll events near the
//! bottom of the list trigger exactly one load.

use std::time::Duration;

use crate::catalog;
use crate::types::CardSet;

/// Artificial delay before a requested page "arrives"
pub const LOAD_DELAY: Duration = Duration::from_millis(800);

/// Distance from the bottom of the scroll area that triggers a load
pub const SCROLL_THRESHOLD_PX: f64 = 100.0;

/// Which side of the list an entry's cover stack sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySide {
    Left,
    Right,
}

impl EntrySide {
    /// Entries alternate sides, starting on the left
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            EntrySide::Left
        } else {
            EntrySide::Right
        }
    }
}

/// One row of the collection list
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    /// Position in the feed
    pub index: usize,
    pub set: &'static CardSet,
}

impl FeedEntry {
    /// Render key, unique across repeated copies of the same set
    pub fn key(&self) -> String {
        format!("{}-{}", self.set.id, self.index)
    }

    pub fn side(&self) -> EntrySide {
        EntrySide::for_index(self.index)
    }
}

/// Whether a scroll position is close enough to the bottom to load more
pub fn near_bottom(viewport_height: f64, scroll_top: f64, content_height: f64) -> bool {
    viewport_height + scroll_top >= content_height - SCROLL_THRESHOLD_PX
}

/// Feed state: loaded sets plus the in-flight guard
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SetFeed {
    sets: Vec<&'static CardSet>,
    pages: usize,
    loading: bool,
}

impl SetFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the load slot. Returns false if a load is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.loading {
            tracing::trace!("Load already in flight, ignoring request");
            return false;
        }
        self.loading = true;
        true
    }

    /// Append the next page and release the load slot
    pub fn finish_load(&mut self) {
        self.sets.extend(catalog::catalog().iter());
        self.pages += 1;
        self.loading = false;
        tracing::debug!(pages = self.pages, entries = self.sets.len(), "Feed page loaded");
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Number of pages loaded so far
    pub fn pages(&self) -> usize {
        self.pages
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn entries(&self) -> Vec<FeedEntry> {
        self.sets
            .iter()
            .enumerate()
            .map(|(index, set)| FeedEntry { index, set })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_feed_is_empty() {
        let feed = SetFeed::new();
        assert!(feed.is_empty());
        assert!(!feed.is_loading());
        assert_eq!(feed.pages(), 0);
    }

    #[test]
    fn test_overlapping_loads_are_ignored() {
        let mut feed = SetFeed::new();
        assert!(feed.begin_load());
        assert!(!feed.begin_load());
        assert!(!feed.begin_load());
        feed.finish_load();

        assert_eq!(feed.pages(), 1);
        assert_eq!(feed.len(), catalog::catalog().len());
        assert!(feed.begin_load());
    }

    #[test]
    fn test_each_load_appends_full_catalog() {
        let mut feed = SetFeed::new();
        for _ in 0..3 {
            assert!(feed.begin_load());
            feed.finish_load();
        }
        let per_page = catalog::catalog().len();
        assert_eq!(feed.len(), per_page * 3);

        let entries = feed.entries();
        assert_eq!(entries[0].set.id, "base-set");
        assert_eq!(entries[per_page].set.id, "base-set");
        assert_eq!(entries[per_page].key(), format!("base-set-{per_page}"));
    }

    #[test]
    fn test_sides_alternate() {
        assert_eq!(EntrySide::for_index(0), EntrySide::Left);
        assert_eq!(EntrySide::for_index(1), EntrySide::Right);
        assert_eq!(EntrySide::for_index(6), EntrySide::Left);
    }

    #[test]
    fn test_near_bottom_threshold() {
        // 800px viewport over 2000px of content
        assert!(!near_bottom(800.0, 0.0, 2000.0));
        assert!(!near_bottom(800.0, 1099.0, 2000.0));
        assert!(near_bottom(800.0, 1100.0, 2000.0));
        assert!(near_bottom(800.0, 1200.0, 2000.0));
        // Content shorter than the viewport is always near the bottom
        assert!(near_bottom(800.0, 0.0, 300.0));
    }
}
