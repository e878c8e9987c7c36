/// All possible actions in the application (command pattern)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    // Navigation
    GoBack,
    Quit,

    // Cursor movement in the cluster list
    CursorUp,
    CursorDown,

    // Views & selection
    ToggleView,
    ToggleSelect,
    ClearSelection,
    OpenDetail,
    OpenCompare,

    // UI toggles
    ToggleHelp,

    // Data
    Refresh,
}
