use ratatui::layout::{Constraint, Direction, Layout as RatatuiLayout, Rect};

/// Height of one cluster card, including its border
pub const CARD_HEIGHT: u16 = 7;

/// Number of card columns in the grid
pub const CARD_COLUMNS: u16 = 2;

/// Layout helper for consistent screen layouts
pub struct Layout;

impl Layout {
    /// Create the main layout with header, content, and status bar
    pub fn main(area: Rect) -> (Rect, Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(1),    // Content
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        (chunks[0], chunks[1], chunks[2])
    }

    /// Split a banner row off the top of the content area
    pub fn with_banner(area: Rect) -> (Rect, Rect) {
        let chunks = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(1)])
            .split(area);

        (chunks[0], chunks[1])
    }

    /// Card grid rects in row-major order. Returns as many card slots as
    /// fit the area; callers window their data to `rects.len()`.
    pub fn card_grid(area: Rect) -> Vec<Rect> {
        let rows = (area.height / CARD_HEIGHT).max(1);

        let row_rects = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints(vec![Constraint::Length(CARD_HEIGHT); rows as usize])
            .split(area);

        let mut cells = Vec::new();
        for row in row_rects.iter() {
            let cols = RatatuiLayout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![
                    Constraint::Ratio(1, CARD_COLUMNS as u32);
                    CARD_COLUMNS as usize
                ])
                .split(*row);
            cells.extend(cols.iter().copied());
        }
        cells
    }

    /// Equal-width columns for the compare screen
    pub fn compare_columns(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count as u32); count])
            .split(area)
            .to_vec()
    }

    /// Create a centered content area (for messages and empty states)
    pub fn centered(area: Rect, width_percent: u16) -> Rect {
        let horizontal = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - width_percent) / 2),
                Constraint::Percentage(width_percent),
                Constraint::Percentage((100 - width_percent) / 2),
            ])
            .split(area);

        let vertical = RatatuiLayout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(3),
                Constraint::Min(1),
            ])
            .split(horizontal[1]);

        vertical[1]
    }
}
