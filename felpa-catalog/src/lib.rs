pub mod costs;
pub mod finishes;
pub mod sizes;

pub use costs::FormDefaults;
pub use finishes::Finish;
pub use sizes::{Quantity, StickerSize};
