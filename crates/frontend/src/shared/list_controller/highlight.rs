//! "Recently viewed" row highlight.
//!
//! The view action stores the row id in the resource's marker slot before
//! navigating to the detail page. When the list page mounts again it reads
//! the marker; once a loaded page contains that row it is highlighted for
//! `HIGHLIGHT_WINDOW_MS`, after which the highlight and the marker are
//! cleared. If the first loaded page does not contain the row, the marker
//! is cleared right away, so a stale marker never outlives one list load.

pub const HIGHLIGHT_WINDOW_MS: u32 = 900;

/// Side effect the caller must perform after feeding an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightEffect {
    None,
    /// Start the one-shot highlight timer
    StartTimer,
    /// Remove the durable marker now
    ClearMarker,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightTracker {
    last_viewed: Option<String>,
    highlighted: Option<String>,
    timer_running: bool,
}

impl HighlightTracker {
    /// State at list mount, from the marker slot
    pub fn on_mount(marker: Option<String>) -> Self {
        Self {
            last_viewed: marker.filter(|id| !id.is_empty()),
            highlighted: None,
            timer_running: false,
        }
    }

    /// A page of rows finished loading.
    ///
    /// Reloads while the timer is running keep the highlight only if the
    /// row is still on the page; they never restart the timer.
    pub fn on_rows_loaded<I, S>(&mut self, ids: I) -> HighlightEffect
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(target) = self.last_viewed.clone() else {
            return HighlightEffect::None;
        };
        let present = ids.into_iter().any(|id| id.as_ref() == target);

        if self.timer_running {
            self.highlighted = present.then_some(target);
            return HighlightEffect::None;
        }

        if present {
            self.highlighted = Some(target);
            self.timer_running = true;
            HighlightEffect::StartTimer
        } else {
            self.last_viewed = None;
            HighlightEffect::ClearMarker
        }
    }

    /// The highlight window elapsed. Returns `true` when the marker must be
    /// removed from storage.
    pub fn on_timer_elapsed(&mut self) -> bool {
        if !self.timer_running {
            return false;
        }
        self.timer_running = false;
        self.highlighted = None;
        self.last_viewed = None;
        true
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.highlighted.as_deref() == Some(id)
    }

    pub fn last_viewed(&self) -> Option<&str> {
        self.last_viewed.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::memory::MemoryStore;
    use crate::shared::storage::{clear_last_viewed, mark_last_viewed, read_last_viewed};
    use contracts::domain::common::Resource;

    #[test]
    fn no_marker_means_no_highlight() {
        let mut t = HighlightTracker::on_mount(None);
        assert_eq!(t.on_rows_loaded(["1", "2"]), HighlightEffect::None);
        assert_eq!(t.highlighted(), None);
    }

    #[test]
    fn highlight_fires_only_on_match() {
        let mut t = HighlightTracker::on_mount(Some("9".into()));
        assert_eq!(t.on_rows_loaded(["1", "2", "3"]), HighlightEffect::ClearMarker);
        assert_eq!(t.highlighted(), None);
        assert_eq!(t.last_viewed(), None);

        // later reloads never start a timer for this mount
        assert_eq!(t.on_rows_loaded(["9"]), HighlightEffect::None);
        assert_eq!(t.highlighted(), None);
        assert!(!t.on_timer_elapsed());
    }

    #[test]
    fn highlight_self_clears_and_removes_marker() {
        let store = MemoryStore::default();
        mark_last_viewed(&store, Resource::Students, "2");

        let mut t = HighlightTracker::on_mount(read_last_viewed(&store, Resource::Students));
        let rows = [1, 2, 3].map(|id| id.to_string());
        assert_eq!(t.on_rows_loaded(&rows), HighlightEffect::StartTimer);
        assert_eq!(t.highlighted(), Some("2"));
        assert!(t.is_highlighted("2"));

        if t.on_timer_elapsed() {
            clear_last_viewed(&store, Resource::Students);
        }
        assert_eq!(t.highlighted(), None);
        assert_eq!(t.last_viewed(), None);
        assert!(!store.contains("lastViewedStudent"));
    }

    #[test]
    fn reload_during_window_keeps_highlight_only_if_row_present() {
        let mut t = HighlightTracker::on_mount(Some("5".into()));
        assert_eq!(t.on_rows_loaded(["4", "5"]), HighlightEffect::StartTimer);

        assert_eq!(t.on_rows_loaded(["5", "6"]), HighlightEffect::None);
        assert_eq!(t.highlighted(), Some("5"));

        assert_eq!(t.on_rows_loaded(["6", "7"]), HighlightEffect::None);
        assert_eq!(t.highlighted(), None);

        assert!(t.on_timer_elapsed());
        assert_eq!(t.on_rows_loaded(["5"]), HighlightEffect::None);
        assert_eq!(t.highlighted(), None);
    }

    #[test]
    fn empty_marker_is_ignored() {
        let mut t = HighlightTracker::on_mount(Some(String::new()));
        assert_eq!(t.on_rows_loaded([""]), HighlightEffect::None);
    }
}
