use crate::settings::Settings;
use felpa_core::FeedbackChannel;
use felpa_order::QuoteSession;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handler state. One quoting session per process; the lock exists
/// for axum's Send bounds, not for multi-user concurrency.
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<RwLock<QuoteSession>>,
    pub feedback: Arc<FeedbackChannel>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings, feedback: FeedbackChannel) -> Self {
        Self {
            session: Arc::new(RwLock::new(QuoteSession::new())),
            feedback: Arc::new(feedback),
            settings: Arc::new(settings),
        }
    }
}
