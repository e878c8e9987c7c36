use kubedeck_api::ApiError;
use kubedeck_core::{NodeScope, SelectionTracker};
use kubedeck_types::{Cluster, ViewMode};

/// Screen enumeration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    ClusterList,
    ClusterDetail,
    Compare,
}

/// Application state for the dashboard.
///
/// Clusters are a snapshot replaced wholesale by each fetch; the selection
/// set persists across fetches until explicitly changed.
pub struct AppState {
    /// Last fetched cluster inventory
    pub clusters: Vec<Cluster>,

    /// A fetch is in flight
    pub loading: bool,

    /// Error from the last failed fetch (if any)
    pub fetch_error: Option<ApiError>,

    /// Card or list rendering of the cluster list
    pub view_mode: ViewMode,

    /// Cursor position within the cluster list
    pub cursor: usize,

    /// Clusters marked for comparison
    pub selection: SelectionTracker,

    /// Node scope used when deriving summaries
    pub node_scope: NodeScope,

    /// Current screen
    pub current_screen: Screen,

    /// Screen stack for back navigation
    pub screen_stack: Vec<Screen>,

    /// Is the help overlay visible?
    pub help_visible: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            clusters: Vec::new(),
            loading: true,
            fetch_error: None,
            view_mode: ViewMode::default(),
            cursor: 0,
            selection: SelectionTracker::new(),
            node_scope: NodeScope::default(),
            current_screen: Screen::ClusterList,
            screen_stack: Vec::new(),
            help_visible: false,
        }
    }

    /// Replace the cluster snapshot with a fresh fetch result.
    ///
    /// The cursor is clamped to the new list; the selection set is left
    /// alone so a refresh does not drop an in-progress comparison.
    pub fn clusters_loaded(&mut self, clusters: Vec<Cluster>) {
        self.clusters = clusters;
        self.loading = false;
        self.fetch_error = None;
        if self.cursor >= self.clusters.len() {
            self.cursor = self.clusters.len().saturating_sub(1);
        }
    }

    pub fn fetch_failed(&mut self, error: ApiError) {
        self.loading = false;
        self.fetch_error = Some(error);
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.clusters.len() {
            self.cursor += 1;
        }
    }

    /// Cluster currently under the cursor
    pub fn current_cluster(&self) -> Option<&Cluster> {
        self.clusters.get(self.cursor)
    }

    pub fn toggle_view(&mut self) {
        self.view_mode = self.view_mode.toggle();
    }

    /// Flip the selection state of the cluster under the cursor
    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.current_cluster().map(|c| c.id.clone()) {
            let checked = !self.selection.is_selected(&id);
            self.selection.toggle(&id, checked);
        }
    }

    /// Selected clusters in selection order, skipping ids no longer present
    /// in the snapshot.
    pub fn selected_clusters(&self) -> Vec<&Cluster> {
        self.selection
            .selected()
            .iter()
            .filter_map(|id| self.clusters.iter().find(|c| &c.id == id))
            .collect()
    }

    pub fn push_screen(&mut self, screen: Screen) {
        self.screen_stack.push(self.current_screen);
        self.current_screen = screen;
    }

    /// Pop back to the previous screen. Returns false when already at the
    /// root of the stack.
    pub fn go_back(&mut self) -> bool {
        match self.screen_stack.pop() {
            Some(previous) => {
                self.current_screen = previous;
                true
            }
            None => false,
        }
    }

    /// Escape cascade: close the help overlay first, then clear a fetch
    /// error, then pop the screen stack.
    pub fn dismiss_or_back(&mut self) {
        if self.help_visible {
            self.help_visible = false;
        } else if self.fetch_error.is_some() {
            self.fetch_error = None;
        } else {
            self.go_back();
        }
    }

    pub fn open_detail(&mut self) {
        if self.current_cluster().is_some() {
            self.push_screen(Screen::ClusterDetail);
        }
    }

    pub fn open_compare(&mut self) {
        if !self.selection.is_empty() {
            self.push_screen(Screen::Compare);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_clusters(ids: &[&str]) -> AppState {
        let mut state = AppState::new();
        state.clusters_loaded(
            ids.iter()
                .map(|id| Cluster::new(*id, format!("Cluster {id}"), "v1.30.0"))
                .collect(),
        );
        state
    }

    #[test]
    fn test_cursor_clamps_to_list() {
        let mut state = state_with_clusters(&["a", "b"]);

        state.cursor_up();
        assert_eq!(state.cursor, 0);

        state.cursor_down();
        assert_eq!(state.cursor, 1);
        state.cursor_down();
        assert_eq!(state.cursor, 1);
    }

    #[test]
    fn test_reload_clamps_cursor_and_keeps_selection() {
        let mut state = state_with_clusters(&["a", "b", "c"]);
        state.cursor = 2;
        state.toggle_selected();
        assert!(state.selection.is_selected("c"));

        state.clusters_loaded(vec![Cluster::new("a", "Cluster a", "v1.30.0")]);
        assert_eq!(state.cursor, 0);
        // Selection survives the refresh even though "c" is gone...
        assert!(state.selection.is_selected("c"));
        // ...but it no longer resolves to a cluster.
        assert!(state.selected_clusters().is_empty());
    }

    #[test]
    fn test_toggle_selected_flips_membership() {
        let mut state = state_with_clusters(&["a", "b"]);

        state.toggle_selected();
        assert!(state.selection.is_selected("a"));
        state.toggle_selected();
        assert!(!state.selection.is_selected("a"));
    }

    #[test]
    fn test_screen_stack_navigation() {
        let mut state = state_with_clusters(&["a"]);

        state.open_detail();
        assert_eq!(state.current_screen, Screen::ClusterDetail);

        assert!(state.go_back());
        assert_eq!(state.current_screen, Screen::ClusterList);
        assert!(!state.go_back());
    }

    #[test]
    fn test_open_compare_requires_selection() {
        let mut state = state_with_clusters(&["a"]);

        state.open_compare();
        assert_eq!(state.current_screen, Screen::ClusterList);

        state.toggle_selected();
        state.open_compare();
        assert_eq!(state.current_screen, Screen::Compare);
    }

    #[test]
    fn test_dismiss_or_back_layers() {
        let mut state = state_with_clusters(&["a"]);
        state.open_detail();
        state.fetch_failed(ApiError::Transport {
            message: "connection refused".into(),
        });
        state.help_visible = true;

        state.dismiss_or_back();
        assert!(!state.help_visible);
        assert!(state.fetch_error.is_some());

        state.dismiss_or_back();
        assert!(state.fetch_error.is_none());
        assert_eq!(state.current_screen, Screen::ClusterDetail);

        state.dismiss_or_back();
        assert_eq!(state.current_screen, Screen::ClusterList);
    }

    #[test]
    fn test_selected_clusters_preserve_selection_order() {
        let mut state = state_with_clusters(&["a", "b", "c"]);
        state.cursor = 2;
        state.toggle_selected(); // c
        state.cursor = 0;
        state.toggle_selected(); // a

        let names: Vec<&str> = state.selected_clusters().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(names, ["c", "a"]);
    }
}
