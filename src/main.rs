use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::Parser;
use tokio::sync::mpsc;

use kubedeck_api::{ApiClient, ApiError, Cluster};
use kubedeck_core::NodeScope;
use kubedeck_tui::{
    Action, AppState, ClusterDetailScreen, ClusterListScreen, CompareScreen, Event, EventHandler,
    HelpOverlay, KeyBindings, KeyContext, Screen, Tui,
};

/// Kubedeck - a terminal dashboard for Kubernetes cluster inventory
#[derive(Parser, Debug)]
#[command(name = "kubedeck")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the inventory API (overrides KUBEDECK_API_URL)
    #[arg(long, value_name = "URL")]
    api_url: Option<String>,

    /// Milliseconds between UI ticks
    #[arg(long, default_value = "250")]
    tick_ms: u64,

    /// Re-fetch the cluster list every N seconds
    #[arg(long, value_name = "SECONDS")]
    refresh: Option<u64>,

    /// Include control-plane nodes in derived totals
    #[arg(long)]
    all_nodes: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing for debugging; stderr so the TUI stays intact
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Run the application
    let result = run_app(args).await;

    // Handle any errors
    if let Err(e) = &result {
        eprintln!("Error: {:#}", e);
    }

    result
}

/// Internal actions for async operations
enum InternalAction {
    ClustersLoaded(Vec<Cluster>),
    FetchFailed(ApiError),
}

fn spawn_fetch(client: Arc<ApiClient>, tx: mpsc::UnboundedSender<InternalAction>) {
    tokio::spawn(async move {
        match client.clusters().await {
            Ok(clusters) => {
                let _ = tx.send(InternalAction::ClustersLoaded(clusters));
            }
            Err(error) => {
                let _ = tx.send(InternalAction::FetchFailed(error));
            }
        }
    });
}

async fn run_app(args: Args) -> Result<()> {
    // Create action channels
    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let (internal_tx, mut internal_rx) = mpsc::unbounded_channel::<InternalAction>();

    // Initialize state
    let mut state = AppState::new();
    if args.all_nodes {
        state.node_scope = NodeScope::AllNodes;
    }

    // API client; one fetch in flight at startup
    let client = Arc::new(match &args.api_url {
        Some(url) => ApiClient::new(url.clone()),
        None => ApiClient::from_env(),
    });
    spawn_fetch(client.clone(), internal_tx.clone());

    // Initialize TUI
    let mut tui = Tui::new()?;

    // Initialize event handler
    let mut events = EventHandler::new(Duration::from_millis(args.tick_ms));

    // Initialize keybindings
    let keybindings = KeyBindings::new();

    let mut last_refresh = Instant::now();
    let mut should_quit = false;

    while !should_quit {
        render(&mut tui, &state)?;

        tokio::select! {
            event = events.next() => match event {
                Event::Key(key) => {
                    let context = if state.current_screen == Screen::ClusterList
                        && !state.help_visible
                    {
                        KeyContext::ClusterList
                    } else {
                        KeyContext::Global
                    };
                    if let Some(action) = keybindings.get_action(context, &key) {
                        let _ = action_tx.send(action);
                    }
                }
                Event::Tick => {
                    if let Some(secs) = args.refresh {
                        if !state.loading && last_refresh.elapsed() >= Duration::from_secs(secs) {
                            last_refresh = Instant::now();
                            state.loading = true;
                            spawn_fetch(client.clone(), internal_tx.clone());
                        }
                    }
                }
                Event::Resize => {}
            },

            Some(internal) = internal_rx.recv() => match internal {
                InternalAction::ClustersLoaded(clusters) => state.clusters_loaded(clusters),
                InternalAction::FetchFailed(error) => {
                    tracing::warn!(%error, "cluster fetch failed");
                    state.fetch_failed(error);
                }
            },

            Some(action) = action_rx.recv() => {
                should_quit = apply_action(&mut state, action, &client, &internal_tx, &mut last_refresh);
            }
        }
    }

    events.shutdown();
    tui.restore()?;

    Ok(())
}

/// Apply one action to the state; returns true when the app should exit.
fn apply_action(
    state: &mut AppState,
    action: Action,
    client: &Arc<ApiClient>,
    internal_tx: &mpsc::UnboundedSender<InternalAction>,
    last_refresh: &mut Instant,
) -> bool {
    match action {
        Action::Quit => return true,
        Action::GoBack => state.dismiss_or_back(),
        Action::CursorUp => state.cursor_up(),
        Action::CursorDown => state.cursor_down(),
        Action::ToggleView => state.toggle_view(),
        Action::ToggleSelect => state.toggle_selected(),
        Action::ClearSelection => state.selection.clear(),
        Action::OpenDetail => state.open_detail(),
        Action::OpenCompare => state.open_compare(),
        Action::ToggleHelp => state.help_visible = !state.help_visible,
        Action::Refresh => {
            if !state.loading {
                *last_refresh = Instant::now();
                state.loading = true;
                state.fetch_error = None;
                spawn_fetch(client.clone(), internal_tx.clone());
            }
        }
    }
    false
}

fn render(tui: &mut Tui, state: &AppState) -> Result<()> {
    tui.draw(|frame| {
        match state.current_screen {
            Screen::ClusterList => ClusterListScreen::render(frame, state),
            Screen::ClusterDetail => ClusterDetailScreen::render(frame, state),
            Screen::Compare => CompareScreen::render(frame, state),
        }

        if state.help_visible {
            HelpOverlay::render(frame);
        }
    })?;
    Ok(())
}
