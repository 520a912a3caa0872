pub mod aggregate;
pub mod category;
pub mod decode;
pub mod engine;
pub mod pipeline;
pub mod prize_data;

pub use crate::domain::model::{LaureateRecord, PrizeRecord, PrizeRow, YearEntry};
pub use crate::domain::ports::{ConfigProvider, Pipeline};
pub use crate::utils::error::Result;
