use uuid::Uuid;

/// Which customer message form was composed.
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    Single,
    Combined,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct QuoteSavedEvent {
    pub quote_id: Uuid,
    pub size_cm: u8,
    pub quantity: u32,
    pub finish: String,
    pub total_with_included_fee: i64,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct MessageComposedEvent {
    pub kind: MessageKind,
    pub quote_count: usize,
    pub text: String,
    pub timestamp: i64,
}
