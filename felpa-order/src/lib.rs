pub mod models;
pub mod session;
pub mod aggregate;
pub mod messages;

pub use aggregate::{combine_totals, CombinedTotal};
pub use models::SavedQuote;
pub use session::{QuoteSession, RevenueSummary, SessionError};
