pub mod feedback;

pub use feedback::{
    ClipboardAdapter, CueAdapter, FeedbackChannel, FeedbackError, HeadlessClipboard,
    MemoryClipboard, NullCue,
};
