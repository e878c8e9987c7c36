use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use kubedeck_core::{derive_summary, healthy_deployments};
use kubedeck_types::Cluster;

use crate::{
    app::AppState,
    ui::{components::StatusBar, Layout, Theme},
};

/// Maximum clusters shown side by side before columns get unreadable
const MAX_COLUMNS: usize = 4;

/// Side-by-side comparison of the selected clusters
pub struct CompareScreen;

impl CompareScreen {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let (header_area, content_area, status_area) = Layout::main(area);

        Self::render_header(frame, header_area, state);

        let clusters = state.selected_clusters();
        if clusters.is_empty() {
            let message = Paragraph::new(Span::styled(
                "No clusters selected for comparison",
                Theme::text_dim(),
            ))
            .centered();
            frame.render_widget(message, Layout::centered(content_area, 60));
        } else {
            let shown = clusters.len().min(MAX_COLUMNS);
            let columns = Layout::compare_columns(content_area, shown);
            for (cluster, column) in clusters.iter().take(shown).zip(columns.iter()) {
                Self::render_column(frame, *column, state, cluster);
            }
        }

        let right = if clusters.len() > MAX_COLUMNS {
            format!("{} selected, showing {}", clusters.len(), MAX_COLUMNS)
        } else {
            format!("{} selected", clusters.len())
        };
        let status = StatusBar::new()
            .hints(vec![("Esc", "Back"), ("x", "Clear selection"), ("q", "Quit")])
            .right(right);
        frame.render_widget(status, status_area);
    }

    fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
        let title = Line::from(vec![
            Span::styled("kubedeck", Theme::title()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled("Compare", Theme::text()),
            Span::styled(
                format!("  ({} clusters)", state.selection.len()),
                Theme::text_dim(),
            ),
        ]);

        let header = Paragraph::new(title).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        frame.render_widget(header, area);
    }

    fn render_column(frame: &mut Frame, area: Rect, state: &AppState, cluster: &Cluster) {
        let summary = derive_summary(cluster, state.node_scope);
        let healthy = healthy_deployments(cluster);
        let phase = cluster.status.phase();

        let mut lines = vec![
            Self::metric_line("Version", cluster.version.clone()),
            Self::metric_line(
                "Env",
                cluster.environment.clone().unwrap_or_else(|| "-".into()),
            ),
            Line::from(vec![
                Span::styled("      Status: ", Theme::text_dim()),
                Span::styled(
                    phase.as_str(),
                    ratatui::style::Style::default().fg(Theme::phase_color(phase)),
                ),
            ]),
            Line::from(""),
            Self::metric_line("Nodes", summary.total_nodes.to_string()),
            Self::metric_line("Ready", summary.ready_nodes.to_string()),
            Self::metric_line("Pods", summary.total_pods.to_string()),
            Self::metric_line("Running", summary.running_pods.to_string()),
            Self::metric_line("Pending", summary.pending_pods.to_string()),
            Self::metric_line("Failed", summary.failed_pods.to_string()),
            Self::metric_line("Namespaces", summary.total_namespaces.to_string()),
            Self::metric_line("Deployments", summary.total_deployments.to_string()),
            Self::metric_line("Healthy", healthy.to_string()),
            Self::metric_line("Services", summary.total_services.to_string()),
        ];

        if cluster.summary.is_some() {
            lines.push(Line::from(""));
            lines.push(Self::metric_line(
                "CPU",
                format!("{:.1}%", summary.cpu_utilization),
            ));
            lines.push(Self::metric_line(
                "Memory",
                format!("{:.1}%", summary.memory_utilization),
            ));
        }

        let column = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border_focused())
                .title(Span::styled(format!(" {} ", cluster.name), Theme::title())),
        );

        frame.render_widget(column, area);
    }

    fn metric_line(label: &str, value: String) -> Line<'_> {
        Line::from(vec![
            Span::styled(format!("{label:>12}: "), Theme::text_dim()),
            Span::styled(value, Theme::metric()),
        ])
    }
}
