use async_trait::async_trait;
use felpa_shared::models::events::{MessageComposedEvent, QuoteSavedEvent};
use std::sync::{Arc, Mutex};

#[async_trait]
pub trait ClipboardAdapter: Send + Sync {
    /// Write text somewhere the operator can paste from
    async fn write_text(
        &self,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

#[async_trait]
pub trait CueAdapter: Send + Sync {
    /// Play a short cue confirming an operator action
    async fn tap(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Best-effort operator feedback. Every path degrades silently; a quote is
/// never blocked because a clipboard or cue is missing.
pub struct FeedbackChannel {
    clipboard: Arc<dyn ClipboardAdapter>,
    fallback_clipboard: Option<Arc<dyn ClipboardAdapter>>,
    cue: Arc<dyn CueAdapter>,
}

impl FeedbackChannel {
    pub fn new(clipboard: Arc<dyn ClipboardAdapter>, cue: Arc<dyn CueAdapter>) -> Self {
        Self {
            clipboard,
            fallback_clipboard: None,
            cue,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn ClipboardAdapter>) -> Self {
        self.fallback_clipboard = Some(fallback);
        self
    }

    /// Copy a composed message for the operator: primary clipboard first,
    /// then the fallback, then give up. Returns whether any attempt landed;
    /// failures are logged at debug and never surfaced.
    pub async fn copy_message(&self, event: &MessageComposedEvent) -> bool {
        match self.clipboard.write_text(&event.text).await {
            Ok(()) => return true,
            Err(err) => {
                tracing::debug!("primary clipboard rejected the copy: {err}");
            }
        }

        if let Some(fallback) = &self.fallback_clipboard {
            match fallback.write_text(&event.text).await {
                Ok(()) => return true,
                Err(err) => {
                    tracing::debug!("fallback clipboard rejected the copy: {err}");
                }
            }
        }

        false
    }

    /// Note a saved quote: a debug log line plus a cue tap, both best-effort.
    pub async fn note_saved(&self, event: &QuoteSavedEvent) {
        tracing::debug!(
            quote_id = %event.quote_id,
            total = event.total_with_included_fee,
            "quote saved"
        );
        self.tap().await;
    }

    /// Tap the cue, swallowing failures.
    pub async fn tap(&self) {
        if let Err(err) = self.cue.tap().await {
            tracing::debug!("cue adapter rejected the tap: {err}");
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedbackError {
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Cue rejected: {0}")]
    CueRejected(String),
}

/// Clipboard that keeps the last copied text in memory. Stands in for a
/// system clipboard on server hosts and in tests.
#[derive(Default)]
pub struct MemoryClipboard {
    last: Mutex<Option<String>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_copy(&self) -> Option<String> {
        self.last.lock().ok().and_then(|guard| guard.clone())
    }
}

#[async_trait]
impl ClipboardAdapter for MemoryClipboard {
    async fn write_text(
        &self,
        text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let mut guard = self
            .last
            .lock()
            .map_err(|_| FeedbackError::ClipboardUnavailable("clipboard store poisoned".into()))?;
        *guard = Some(text.to_string());
        Ok(())
    }
}

/// Host with no clipboard at all. Every write fails, which exercises the
/// fallback path of [`FeedbackChannel`].
pub struct HeadlessClipboard;

#[async_trait]
impl ClipboardAdapter for HeadlessClipboard {
    async fn write_text(
        &self,
        _text: &str,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(FeedbackError::ClipboardUnavailable("no clipboard on this host".into()).into())
    }
}

/// Cue that goes nowhere, for headless hosts.
pub struct NullCue;

#[async_trait]
impl CueAdapter for NullCue {
    async fn tap(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use felpa_shared::models::events::MessageKind;

    fn composed(text: &str) -> MessageComposedEvent {
        MessageComposedEvent {
            kind: MessageKind::Single,
            quote_count: 1,
            text: text.to_string(),
            timestamp: 0,
        }
    }

    struct FailingCue;

    #[async_trait]
    impl CueAdapter for FailingCue {
        async fn tap(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
            Err(FeedbackError::CueRejected("no cue device".into()).into())
        }
    }

    #[tokio::test]
    async fn test_copy_lands_on_the_primary_clipboard() {
        let clipboard = Arc::new(MemoryClipboard::new());
        let channel = FeedbackChannel::new(clipboard.clone(), Arc::new(NullCue));

        assert!(channel.copy_message(&composed("hello there")).await);
        assert_eq!(clipboard.last_copy().as_deref(), Some("hello there"));
    }

    #[tokio::test]
    async fn test_copy_falls_back_when_the_primary_fails() {
        let fallback = Arc::new(MemoryClipboard::new());
        let channel = FeedbackChannel::new(Arc::new(HeadlessClipboard), Arc::new(NullCue))
            .with_fallback(fallback.clone());

        assert!(channel.copy_message(&composed("fallback copy")).await);
        assert_eq!(fallback.last_copy().as_deref(), Some("fallback copy"));
    }

    #[tokio::test]
    async fn test_copy_gives_up_silently_when_everything_fails() {
        let channel = FeedbackChannel::new(Arc::new(HeadlessClipboard), Arc::new(NullCue))
            .with_fallback(Arc::new(HeadlessClipboard));

        assert!(!channel.copy_message(&composed("nowhere to go")).await);
    }

    #[tokio::test]
    async fn test_cue_failures_are_swallowed() {
        let channel = FeedbackChannel::new(Arc::new(MemoryClipboard::new()), Arc::new(FailingCue));

        channel.tap().await;
        let event = QuoteSavedEvent {
            quote_id: uuid::Uuid::new_v4(),
            size_cm: 5,
            quantity: 100,
            finish: "PLAIN_VINYL".to_string(),
            total_with_included_fee: 277,
            timestamp: 0,
        };
        channel.note_saved(&event).await;
    }
}
