use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::ui::Theme;

/// Single-line banner summarizing the comparison selection
pub struct SelectionBanner {
    names: Vec<String>,
}

impl SelectionBanner {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl Widget for SelectionBanner {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.names.is_empty() {
            return;
        }

        let noun = if self.names.len() == 1 {
            "cluster"
        } else {
            "clusters"
        };
        let line = Line::from(vec![
            Span::styled(
                format!(" {} {} selected: ", self.names.len(), noun),
                Theme::text_highlight(),
            ),
            Span::styled(self.names.join(", "), Theme::text()),
            Span::styled("  (c to compare, x to clear)", Theme::text_dim()),
        ]);

        buf.set_line(area.x, area.y, &line, area.width);
    }
}
