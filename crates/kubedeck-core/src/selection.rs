/// Ordered, duplicate-free set of cluster ids marked for comparison.
///
/// The tracker mirrors an externally supplied baseline (the caller owns the
/// authoritative list and re-syncs us when it changes) and exposes toggle
/// semantics for the UI. Insertion order of still-selected ids is preserved
/// across toggles, and the exposed sequence never contains duplicates.
#[derive(Clone, Debug, Default)]
pub struct SelectionTracker {
    ids: Vec<String>,
}

impl SelectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tracked sequence with an external baseline, dropping any
    /// duplicates while keeping first-seen order.
    pub fn sync<I, S>(&mut self, baseline: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids.clear();
        for id in baseline {
            let id = id.into();
            if !self.ids.contains(&id) {
                self.ids.push(id);
            }
        }
    }

    /// Append `id` if absent; selecting an already-selected id is a no-op.
    pub fn select(&mut self, id: &str) {
        if !self.is_selected(id) {
            self.ids.push(id.to_string());
        }
    }

    /// Remove all occurrences of `id`; a no-op if absent.
    pub fn deselect(&mut self, id: &str) {
        self.ids.retain(|existing| existing != id);
    }

    /// Select or deselect depending on `checked`. This is the operation the
    /// UI invokes; `select`/`deselect` are its branches.
    pub fn toggle(&mut self, id: &str, checked: bool) {
        if checked {
            self.select(id);
        } else {
            self.deselect(id);
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// The current selection, in insertion order.
    pub fn selected(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_select_and_deselect() {
        let mut tracker = SelectionTracker::new();

        tracker.toggle("a", true);
        assert_eq!(tracker.selected(), ["a"]);

        // Idempotent re-select
        tracker.toggle("a", true);
        assert_eq!(tracker.selected(), ["a"]);

        tracker.toggle("a", false);
        assert!(tracker.selected().is_empty());

        // Deselecting something never selected is a no-op
        tracker.toggle("b", false);
        assert!(tracker.selected().is_empty());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut tracker = SelectionTracker::new();
        tracker.toggle("a", true);
        tracker.toggle("b", true);
        tracker.toggle("c", true);
        tracker.toggle("b", false);
        tracker.toggle("d", true);

        assert_eq!(tracker.selected(), ["a", "c", "d"]);
    }

    #[test]
    fn test_is_selected() {
        let mut tracker = SelectionTracker::new();
        assert!(!tracker.is_selected("a"));

        tracker.select("a");
        assert!(tracker.is_selected("a"));
        assert!(!tracker.is_selected("b"));

        tracker.deselect("a");
        assert!(!tracker.is_selected("a"));
    }

    #[test]
    fn test_sync_replaces_and_dedupes() {
        let mut tracker = SelectionTracker::new();
        tracker.select("old");

        tracker.sync(["a", "b", "a", "c", "b"]);
        assert_eq!(tracker.selected(), ["a", "b", "c"]);
        assert!(!tracker.is_selected("old"));
    }

    #[test]
    fn test_len_and_clear() {
        let mut tracker = SelectionTracker::new();
        assert!(tracker.is_empty());

        tracker.select("a");
        tracker.select("b");
        assert_eq!(tracker.len(), 2);

        tracker.clear();
        assert!(tracker.is_empty());
    }
}
