use ratatui::{
    layout::{Constraint, Direction, Layout as RatatuiLayout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use kubedeck_core::{derive_summary, healthy_deployments, total_deployments};
use kubedeck_types::Cluster;

use crate::{
    app::AppState,
    ui::{components::StatusBar, Layout, Theme},
};

/// Detail view for the cluster under the cursor
pub struct ClusterDetailScreen;

impl ClusterDetailScreen {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let (header_area, content_area, status_area) = Layout::main(area);

        let Some(cluster) = state.current_cluster() else {
            let message =
                Paragraph::new(Span::styled("Cluster no longer present", Theme::text_dim()))
                    .centered();
            frame.render_widget(message, Layout::centered(content_area, 60));
            return;
        };

        Self::render_header(frame, header_area, cluster);

        let halves = RatatuiLayout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(content_area);

        Self::render_summary(frame, halves[0], state, cluster);
        Self::render_namespaces(frame, halves[1], cluster);

        let status = StatusBar::new()
            .hints(vec![("Esc", "Back"), ("?", "Help"), ("q", "Quit")])
            .right(cluster.id.clone());
        frame.render_widget(status, status_area);
    }

    fn render_header(frame: &mut Frame, area: Rect, cluster: &Cluster) {
        let phase = cluster.status.phase();
        let title = Line::from(vec![
            Span::styled("kubedeck", Theme::title()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled(cluster.name.as_str(), Theme::text()),
            Span::raw("  "),
            Span::styled(
                format!("● {}", phase.as_str()),
                ratatui::style::Style::default().fg(Theme::phase_color(phase)),
            ),
        ]);

        let header = Paragraph::new(title).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        frame.render_widget(header, area);
    }

    fn render_summary(frame: &mut Frame, area: Rect, state: &AppState, cluster: &Cluster) {
        let summary = derive_summary(cluster, state.node_scope);
        let healthy = healthy_deployments(cluster);
        let total = total_deployments(cluster).max(summary.total_deployments as usize);

        let mut lines = vec![
            Self::metric_line("Version", cluster.version.clone()),
            Self::metric_line(
                "Environment",
                cluster.environment.clone().unwrap_or_else(|| "-".into()),
            ),
            Line::from(""),
            Self::metric_line(
                "Nodes",
                format!("{} ({} ready)", summary.total_nodes, summary.ready_nodes),
            ),
            Self::metric_line(
                "Pods",
                format!(
                    "{} ({} running, {} pending, {} failed)",
                    summary.total_pods,
                    summary.running_pods,
                    summary.pending_pods,
                    summary.failed_pods
                ),
            ),
            Self::metric_line("Namespaces", summary.total_namespaces.to_string()),
            Self::metric_line("Deployments", format!("{total} ({healthy} healthy)")),
            Self::metric_line("Services", summary.total_services.to_string()),
        ];

        // Utilization comes only from an authoritative summary
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

        let block = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border())
                .title(Span::styled(" Summary ", Theme::title())),
        );

        frame.render_widget(block, area);
    }

    fn render_namespaces(frame: &mut Frame, area: Rect, cluster: &Cluster) {
        let items: Vec<ListItem> = cluster
            .namespaces
            .iter()
            .flatten()
            .map(|ns| {
                let deployments = ns.deployments.as_deref().unwrap_or(&[]).len();
                let services = ns.services.as_deref().unwrap_or(&[]).len();
                ListItem::new(Line::from(vec![
                    Span::styled(ns.name.clone(), Theme::text()),
                    Span::styled(
                        format!(
                            "  {} deployments · {} services · {} pods",
                            deployments, services, ns.pod_count
                        ),
                        Theme::text_dim(),
                    ),
                ]))
            })
            .collect();

        let list = if items.is_empty() {
            List::new([ListItem::new(Span::styled(
                "no namespace data",
                Theme::text_dim(),
            ))])
        } else {
            List::new(items)
        };

        frame.render_widget(
            list.block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Theme::border())
                    .title(Span::styled(" Namespaces ", Theme::title())),
            ),
            area,
        );
    }

    fn metric_line(label: &str, value: String) -> Line<'_> {
        Line::from(vec![
            Span::styled(format!("{label:>12}: "), Theme::text_dim()),
            Span::styled(value, Theme::metric()),
        ])
    }
}
