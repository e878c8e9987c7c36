use ratatui::{
    layout::{Constraint, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use kubedeck_api::ApiError;
use kubedeck_core::{derive_summary, healthy_deployments};
use kubedeck_types::ViewMode;

use crate::{
    app::AppState,
    ui::{
        components::{cluster_list_hints, ClusterCard, SelectionBanner, StatusBar},
        Layout, Theme,
    },
};

/// Cluster inventory screen with card and list renderings
pub struct ClusterListScreen;

impl ClusterListScreen {
    pub fn render(frame: &mut Frame, state: &AppState) {
        let area = frame.area();
        let (header_area, content_area, status_area) = Layout::main(area);

        Self::render_header(frame, header_area, state);

        // Selection banner claims the first content row when active
        let content_area = if state.selection.is_empty() {
            content_area
        } else {
            let (banner_area, rest) = Layout::with_banner(content_area);
            let names: Vec<&str> = state
                .selected_clusters()
                .iter()
                .map(|c| c.name.as_str())
                .collect();
            frame.render_widget(SelectionBanner::new(names), banner_area);
            rest
        };

        if let Some(error) = &state.fetch_error {
            Self::render_error(frame, content_area, error);
        } else if state.clusters.is_empty() {
            Self::render_empty(frame, content_area, state.loading);
        } else {
            match state.view_mode {
                ViewMode::Card => Self::render_cards(frame, content_area, state),
                ViewMode::List => Self::render_table(frame, content_area, state),
            }
        }

        Self::render_status_bar(frame, status_area, state);
    }

    fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
        let mut spans = vec![
            Span::styled("kubedeck", Theme::title()),
            Span::styled(" │ ", Theme::text_dim()),
            Span::styled("Clusters", Theme::text()),
        ];
        if state.loading {
            spans.push(Span::styled("  fetching…", Theme::text_dim()));
        }

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        frame.render_widget(header, area);
    }

    fn render_cards(frame: &mut Frame, area: Rect, state: &AppState) {
        let cells = Layout::card_grid(area);
        if cells.is_empty() {
            return;
        }

        // Window the list so the page containing the cursor is shown
        let per_page = cells.len();
        let start = (state.cursor / per_page) * per_page;

        for (offset, cell) in cells.iter().enumerate() {
            let index = start + offset;
            let Some(cluster) = state.clusters.get(index) else {
                break;
            };

            let card = ClusterCard::new(cluster, state.node_scope)
                .selected(state.selection.is_selected(&cluster.id))
                .focused(index == state.cursor);
            frame.render_widget(card, *cell);
        }
    }

    fn render_table(frame: &mut Frame, area: Rect, state: &AppState) {
        let header = Row::new(vec![
            Cell::from(""),
            Cell::from("Name"),
            Cell::from("Environment"),
            Cell::from("Pods"),
            Cell::from("Nodes"),
            Cell::from("NS"),
            Cell::from("Deployments"),
            Cell::from("Status"),
        ])
        .style(Theme::table_header());

        let rows: Vec<Row> = state
            .clusters
            .iter()
            .enumerate()
            .map(|(index, cluster)| {
                let summary = derive_summary(cluster, state.node_scope);
                let healthy = healthy_deployments(cluster);
                let is_selected = state.selection.is_selected(&cluster.id);
                let phase = cluster.status.phase();

                let row = Row::new(vec![
                    Cell::from(if is_selected { "✓" } else { "" }),
                    Cell::from(cluster.name.clone()),
                    Cell::from(cluster.environment.clone().unwrap_or_default()),
                    Cell::from(summary.total_pods.to_string()),
                    Cell::from(summary.total_nodes.to_string()),
                    Cell::from(summary.total_namespaces.to_string()),
                    Cell::from(format!(
                        "{} ({} healthy)",
                        summary.total_deployments, healthy
                    )),
                    Cell::from(Span::styled(
                        phase.as_str(),
                        ratatui::style::Style::default().fg(Theme::phase_color(phase)),
                    )),
                ]);

                if index == state.cursor {
                    row.style(Theme::row_current())
                } else if is_selected {
                    row.style(Theme::row_selected())
                } else {
                    row
                }
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(2),
                Constraint::Min(18),
                Constraint::Length(12),
                Constraint::Length(6),
                Constraint::Length(6),
                Constraint::Length(4),
                Constraint::Length(18),
                Constraint::Length(10),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Theme::border()),
        );

        frame.render_widget(table, area);
    }

    fn render_error(frame: &mut Frame, area: Rect, error: &ApiError) {
        let detail = match error {
            ApiError::Status {
                status,
                status_text,
            } => format!("Server error: HTTP {status} {status_text}"),
            ApiError::Transport { message } => format!("Network error: {message}"),
        };

        let message = Paragraph::new(vec![
            Line::from(Span::styled(detail, Theme::error())),
            Line::from(Span::styled("press r to retry", Theme::text_dim())),
        ])
        .centered();

        frame.render_widget(message, Layout::centered(area, 70));
    }

    fn render_empty(frame: &mut Frame, area: Rect, loading: bool) {
        let text = if loading {
            "Loading clusters…"
        } else {
            "No clusters available"
        };
        let message = Paragraph::new(Span::styled(text, Theme::text_dim())).centered();
        frame.render_widget(message, Layout::centered(area, 60));
    }

    fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
        let right = format!(
            "{} clusters · {} view",
            state.clusters.len(),
            state.view_mode.label()
        );

        let status = StatusBar::new().hints(cluster_list_hints()).right(right);
        frame.render_widget(status, area);
    }
}
