use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use kubedeck_core::{derive_summary, healthy_deployments, NodeScope};
use kubedeck_types::Cluster;

use crate::ui::Theme;

/// One cluster rendered as a card: name, environment, aggregate counts and
/// a status line. The counts come from the authoritative summary when the
/// API provides one, otherwise from on-the-fly derivation.
pub struct ClusterCard<'a> {
    cluster: &'a Cluster,
    scope: NodeScope,
    is_selected: bool,
    is_focused: bool,
}

impl<'a> ClusterCard<'a> {
    pub fn new(cluster: &'a Cluster, scope: NodeScope) -> Self {
        Self {
            cluster,
            scope,
            is_selected: false,
            is_focused: false,
        }
    }

    /// Mark the card as part of the comparison selection
    pub fn selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    /// Mark the card as under the cursor
    pub fn focused(mut self, focused: bool) -> Self {
        self.is_focused = focused;
        self
    }
}

impl Widget for ClusterCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let summary = derive_summary(self.cluster, self.scope);
        let healthy = healthy_deployments(self.cluster);

        let border_style = if self.is_focused {
            Theme::border_focused()
        } else if self.is_selected {
            Theme::border_selected()
        } else {
            Theme::border()
        };

        let checkbox = if self.is_selected { "[x]" } else { "[ ]" };
        let title = Line::from(vec![
            Span::styled(format!(" {checkbox} "), Theme::text_highlight()),
            Span::styled(self.cluster.name.as_str(), Theme::title()),
            Span::raw(" "),
        ]);

        let mut meta = vec![Span::styled(self.cluster.version.as_str(), Theme::text_dim())];
        if let Some(env) = &self.cluster.environment {
            meta.push(Span::styled(" │ ", Theme::text_dim()));
            meta.push(Span::styled(env.as_str(), Theme::text()));
        }

        let healthy_style = if healthy as u32 == summary.total_deployments {
            Theme::metric()
        } else {
            Theme::text_highlight()
        };

        let phase = self.cluster.status.phase();
        let lines = vec![
            Line::from(meta),
            Line::from(vec![
                Span::styled("Pods: ", Theme::text_dim()),
                Span::styled(summary.total_pods.to_string(), Theme::metric()),
                Span::styled("   Nodes: ", Theme::text_dim()),
                Span::styled(summary.total_nodes.to_string(), Theme::metric()),
                Span::styled("   Namespaces: ", Theme::text_dim()),
                Span::styled(summary.total_namespaces.to_string(), Theme::metric()),
            ]),
            Line::from(vec![
                Span::styled("Deployments: ", Theme::text_dim()),
                Span::styled(summary.total_deployments.to_string(), Theme::metric()),
                Span::styled(format!(" ({healthy} healthy)"), healthy_style),
            ]),
            Line::from(vec![
                Span::styled("● ", ratatui::style::Style::default().fg(Theme::phase_color(phase))),
                Span::styled(phase.as_str(), Theme::text()),
            ]),
        ];

        let card = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        );

        card.render(area, buf);
    }
}
