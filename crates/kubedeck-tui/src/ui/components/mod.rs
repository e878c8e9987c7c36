mod cluster_card;
mod help_overlay;
mod selection_banner;
mod status_bar;

pub use cluster_card::ClusterCard;
pub use help_overlay::HelpOverlay;
pub use selection_banner::SelectionBanner;
pub use status_bar::{cluster_list_hints, StatusBar};
