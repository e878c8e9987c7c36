pub mod components;
pub mod screens;

mod layout;
mod theme;

pub use layout::Layout;
pub use theme::Theme;
