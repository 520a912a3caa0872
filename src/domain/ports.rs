use crate::core::aggregate::AggregatedData;
use crate::domain::model::PrizeRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn category_filter(&self) -> Option<&str>;
    fn country_filter(&self) -> Option<&str>;
}

/// The three startup stages. Only `fetch_raw` touches the outside world.
#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn fetch_raw(&self) -> Result<String>;

    fn decode(&self, raw: &str) -> Result<Vec<PrizeRecord>> {
        crate::core::decode::decode(raw)
    }

    fn aggregate(&self, records: Vec<PrizeRecord>) -> AggregatedData {
        crate::core::aggregate::aggregate(records)
    }
}
