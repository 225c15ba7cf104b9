//! Embedded development server with live reload support

use std::{path::Path, sync::Arc, time::Duration};

use axum::{
    Router,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
};
use tokio::sync::broadcast;
use tokio_stream::{StreamExt, wrappers::BroadcastStream};
use tower_http::services::ServeDir;

/// Path of the Server-Sent Events endpoint.
pub const LIVERELOAD_PATH: &str = "/__livereload";

/// Live reload message type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadMessage {
    /// Full page reload after a successful rebuild.
    Reload,
    /// Rebuild failed; the old page stays up and the error is shown.
    BuildFailed(String),
}

impl ReloadMessage {
    /// Event payload sent to the browser.
    #[must_use]
    pub fn to_event_data(&self) -> String {
        match self {
            Self::Reload => "reload".to_string(),
            Self::BuildFailed(error) => format!("build-failed:{}", error.replace('\n', " ")),
        }
    }
}

/// Server state containing the reload broadcaster.
#[derive(Clone)]
pub struct ServerState {
    /// Broadcast channel for live reload events.
    pub reload_tx: broadcast::Sender<ReloadMessage>,
}

impl ServerState {
    /// Create a new server state.
    pub fn new() -> Self {
        let (reload_tx, _) = broadcast::channel(16);
        Self { reload_tx }
    }

    /// Send a reload notification to all connected clients.
    pub fn notify_reload(&self) {
        // No subscribers just means no browser tab is open.
        let _ = self.reload_tx.send(ReloadMessage::Reload);
    }

    /// Tell connected clients the last rebuild failed.
    pub fn notify_build_failed(&self, error: impl Into<String>) {
        let _ = self.reload_tx.send(ReloadMessage::BuildFailed(error.into()));
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}

/// Create the development server router.
pub fn create_router(output_dir: &Path, state: Arc<ServerState>) -> Router {
    Router::new()
        .route(LIVERELOAD_PATH, get(livereload_handler))
        .fallback_service(ServeDir::new(output_dir))
        .with_state(state)
}

/// Server-Sent Events handler for live reload.
async fn livereload_handler(
    State(state): State<Arc<ServerState>>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, std::convert::Infallible>>> {
    let rx = state.reload_tx.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|msg| {
        // Lagged receivers skip ahead; the next message still arrives.
        msg.ok().map(|m| Ok(Event::default().data(m.to_event_data())))
    });

    Sse::new(stream).keep_alive(
        KeepAlive::new()
            .interval(Duration::from_secs(30))
            .text("ping"),
    )
}

/// JavaScript snippet injected into the page while watching.
pub const LIVERELOAD_SCRIPT: &str = r#"<script>
(function() {
    const source = new EventSource('/__livereload');
    source.onmessage = function(event) {
        if (event.data === 'reload') {
            window.location.reload();
        } else if (event.data.startsWith('build-failed:')) {
            console.error('[vitae] ' + event.data.slice('build-failed:'.length));
        }
    };
    source.onerror = function() {
        console.log('[vitae] Connection lost, retrying...');
    };
})();
</script>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_data() {
        assert_eq!(ReloadMessage::Reload.to_event_data(), "reload");
        assert_eq!(
            ReloadMessage::BuildFailed("Malformed portfolio data\nline 2".into()).to_event_data(),
            "build-failed:Malformed portfolio data line 2"
        );
    }

    #[tokio::test]
    async fn test_notifications_reach_subscribers() {
        let state = ServerState::new();
        let mut rx = state.reload_tx.subscribe();

        state.notify_reload();
        state.notify_build_failed("boom");

        assert_eq!(rx.recv().await.unwrap(), ReloadMessage::Reload);
        assert_eq!(
            rx.recv().await.unwrap(),
            ReloadMessage::BuildFailed("boom".into())
        );
    }

    #[test]
    fn test_notify_without_subscribers_is_fine() {
        ServerState::new().notify_reload();
    }

    #[test]
    fn test_script_targets_endpoint() {
        assert!(LIVERELOAD_SCRIPT.contains(LIVERELOAD_PATH));
    }
}
