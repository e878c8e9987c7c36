//! TUI components for kubedeck
//!
//! This crate provides the terminal user interface for kubedeck, including
//! state management, keybindings, event handling, and UI components.

pub mod app;
pub mod config;
pub mod tui;
pub mod ui;

pub use app::{Action, AppState, Screen};
pub use config::{KeyBinding, KeyBindings, KeyContext};
pub use tui::{Event, EventHandler, Tui};
pub use ui::components::{cluster_list_hints, ClusterCard, HelpOverlay, SelectionBanner, StatusBar};
pub use ui::screens::{ClusterDetailScreen, ClusterListScreen, CompareScreen};
pub use ui::{Layout, Theme};
