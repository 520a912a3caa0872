pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use app::query::PrizeQuery;
pub use app::render::OutputFormat;
pub use app::selector::Selector;
pub use crate::core::{
    aggregate::AggregatedData, category::Category, engine::PrizeEngine, pipeline::PrizePipeline,
    prize_data::PrizeData,
};
pub use domain::model::{LaureateRecord, PrizeRecord, PrizeRow, YearEntry};
pub use utils::error::{NobelError, Result};
