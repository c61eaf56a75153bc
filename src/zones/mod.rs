//! Tables: the ordered per-side collections of cards in play.

mod table;

pub use table::Table;
