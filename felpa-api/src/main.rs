use felpa_api::{app, settings::Settings, state::AppState};
use felpa_core::{FeedbackChannel, MemoryClipboard, NullCue};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "felpa_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::load().expect("Failed to load settings");
    let port = settings.server.port;
    tracing::info!("Starting Felpa API on port {}", port);

    // Server hosts get the in-memory clipboard; a desktop shell would swap in
    // a real one through the same seam.
    let feedback = FeedbackChannel::new(Arc::new(MemoryClipboard::new()), Arc::new(NullCue));
    let app_state = AppState::new(settings, feedback);

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
