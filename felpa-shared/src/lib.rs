pub mod client;
pub mod models;
pub mod money;

pub use client::ClientName;
pub use money::Amount;
