//! Watch command - development server with live reload

use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use color_eyre::eyre::{Result, WrapErr};
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher, event::ModifyKind};
use tokio::{net::TcpListener, sync::mpsc, time::sleep};
use vitae_generator::BuildStats;

use super::{Site, build::builder};
use crate::server::{LIVERELOAD_SCRIPT, ServerState, create_router};

/// Debounce interval for file changes.
const DEBOUNCE_MS: u64 = 200;

/// Run the watch command.
///
/// Builds the site, serves it, and rebuilds whenever the portfolio document,
/// the static directory or the configuration file changes.
pub async fn run(config_path: &Path, port: u16, open_browser: bool) -> Result<()> {
    tracing::info!(?config_path, port, "Starting watch mode");

    let mut site = Site::load(config_path)?;
    site.config.site.base_url = format!("http://127.0.0.1:{port}");
    let output_dir = site.output_dir();

    tracing::info!("Running initial build...");
    let stats = build_with_livereload(&site, &output_dir)?;
    print_build_stats(&stats);

    let state = Arc::new(ServerState::new());

    let (tx, mut rx) = mpsc::channel::<()>(16);
    let mut watcher = RecommendedWatcher::new(
        move |res: Result<notify::Event, notify::Error>| {
            if let Ok(event) = res {
                queue_rebuild(&tx, &event.kind);
            }
        },
        notify::Config::default(),
    )
    .wrap_err("Failed to create file watcher")?;

    for (path, mode) in watch_targets(&site, config_path) {
        if path.exists() {
            watcher
                .watch(&path, mode)
                .wrap_err_with(|| format!("Failed to watch {}", path.display()))?;
            tracing::debug!(path = %path.display(), "Watching");
        }
    }

    let rebuild_state = state.clone();
    let rebuild_config_path = config_path.to_path_buf();
    let rebuild_output = output_dir.clone();

    tokio::spawn(async move {
        while rx.recv().await.is_some() {
            // Editors fire bursts of events; settle before rebuilding.
            sleep(Duration::from_millis(DEBOUNCE_MS)).await;
            while rx.try_recv().is_ok() {}

            println!();
            println!("  File change detected, rebuilding...");

            let result = Site::load(&rebuild_config_path).and_then(|mut site| {
                site.config.site.base_url = format!("http://127.0.0.1:{port}");
                build_with_livereload(&site, &rebuild_output)
            });

            match result {
                Ok(stats) => {
                    println!("  ✓ Rebuilt in {}ms", stats.duration_ms);
                    rebuild_state.notify_reload();
                }
                Err(e) => {
                    tracing::error!("Rebuild failed: {e:#}");
                    eprintln!("  ✗ Rebuild failed: {e:#}");
                    rebuild_state.notify_build_failed(format!("{e:#}"));
                }
            }
        }
    });

    let app = create_router(&output_dir, state);
    let addr = format!("127.0.0.1:{port}");

    let listener = TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!();
    println!("  Dev server running at http://{addr}");
    println!("  Press Ctrl+C to stop");
    println!();

    if open_browser {
        if let Err(e) = open::that(format!("http://{addr}")) {
            tracing::warn!("Failed to open browser: {e}");
        }
    }

    // Keep watcher alive
    let _watcher = watcher;

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}

/// Paths to watch: the document's directory, the static directory, and the
/// configuration file itself.
fn watch_targets(site: &Site, config_path: &Path) -> Vec<(PathBuf, RecursiveMode)> {
    let data_dir = site
        .data_path()
        .parent()
        .map_or_else(|| site.root.clone(), Path::to_path_buf);

    vec![
        (data_dir, RecursiveMode::Recursive),
        (site.static_dir(), RecursiveMode::Recursive),
        (config_path.to_path_buf(), RecursiveMode::NonRecursive),
    ]
}

/// Queue a rebuild for content changes. Returns whether one was queued.
///
/// Never blocks the watcher thread: a full channel already has a rebuild
/// pending, so the event is dropped.
fn queue_rebuild(tx: &mpsc::Sender<()>, kind: &EventKind) -> bool {
    let relevant = matches!(
        kind,
        EventKind::Modify(ModifyKind::Data(_) | ModifyKind::Name(_))
            | EventKind::Create(_)
            | EventKind::Remove(_)
    );
    relevant && tx.try_send(()).is_ok()
}

fn build_with_livereload(site: &Site, output_dir: &Path) -> Result<BuildStats> {
    let stats = builder(site, output_dir)
        .with_extra_js(LIVERELOAD_SCRIPT)
        .build()
        .wrap_err("Build failed")?;

    tracing::debug!(?stats, "Build completed");
    Ok(stats)
}

fn print_build_stats(stats: &BuildStats) {
    println!();
    println!("  Build Statistics:");
    println!("  ─────────────────────────────────");
    println!("  Sections:     {:>6}", stats.sections);
    println!("  Omitted:      {:>6}", stats.omitted.len());
    println!("  Assets:       {:>6}", stats.assets);
    println!("  ─────────────────────────────────");
    println!("  Duration:     {:>6}ms", stats.duration_ms);
    println!();
}
