// Presentation layer: consumes the snapshot through PrizeQuery only.

pub mod query;
pub mod render;
pub mod selector;
