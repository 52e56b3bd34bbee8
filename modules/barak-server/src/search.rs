use anyhow::Result;
use async_trait::async_trait;

use crate::chat::criteria::SearchCriteria;

/// A single property listing. Opaque to this service: the shape is owned by
/// the external search capability.
pub type PropertyRecord = serde_json::Value;

/// Seam to the property-search backend (Firecrawl-based scraping, external).
/// Invoked only once a query has been classified as actionable.
#[async_trait]
pub trait PropertySearch: Send + Sync {
    async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<PropertyRecord>>;
}

/// Stand-in until the Firecrawl-backed search ships. Returns no results.
pub struct NoopSearch;

#[async_trait]
impl PropertySearch for NoopSearch {
    async fn search(&self, _criteria: &SearchCriteria) -> Result<Vec<PropertyRecord>> {
        Ok(Vec::new())
    }
}
