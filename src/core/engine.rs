use crate::core::prize_data::PrizeData;
use crate::core::Pipeline;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Instant;

/// Runs fetch, decode and aggregate once. Any failure aborts the whole
/// sequence; no partial snapshot is produced.
pub struct PrizeEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PrizeEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<Arc<PrizeData>> {
        let started = Instant::now();
        tracing::info!("Fetching prize data...");
        let raw = self.pipeline.fetch_raw().await?;

        tracing::info!("Decoding {} bytes...", raw.len());
        let records = self.pipeline.decode(&raw)?;
        tracing::info!("Decoded {} prize records", records.len());

        let data = PrizeData::new(self.pipeline.aggregate(records));
        tracing::info!(
            "Aggregated {} categories, {} countries in {:?}",
            data.list_category_keys().len(),
            data.list_country_keys().len(),
            started.elapsed()
        );

        Ok(Arc::new(data))
    }
}
