//! Restaurant search tool over Kakao Maps.

use std::sync::Arc;
use std::time::Instant;

use async_trait::async_trait;

use crate::context::ToolContext;
use crate::finder::RestaurantFinder;
use crate::format::format_results_full;
use crate::kakao::LocalSearchApi;
use crate::tools::tool::{Tool, ToolError, ToolOutput, require_i64, require_str};

/// Tool that finds restaurants near a location through Kakao Maps.
///
/// Returns the results as a `<search_results>` block; when the query
/// resolves to no location the block is simply empty.
pub struct RestaurantSearchTool {
    finder: RestaurantFinder,
}

impl RestaurantSearchTool {
    pub fn new(api: Arc<dyn LocalSearchApi>) -> Self {
        Self {
            finder: RestaurantFinder::new(api),
        }
    }
}

#[async_trait]
impl Tool for RestaurantSearchTool {
    fn name(&self) -> &str {
        "search_restaurants_from_kakao_map"
    }

    fn description(&self) -> &str {
        "A tool for finding restaurants through Kakao Maps"
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search term to enter into the Kakao Maps search engine. It should be a location name or a category name."
                },
                "radius": {
                    "type": "integer",
                    "description": "The radius of the search area in meters."
                },
                "n_search_results_to_use": {
                    "type": "integer",
                    "description": "The number of search results to return, where each search result is a restaurant."
                }
            },
            "required": ["query", "radius", "n_search_results_to_use"]
        })
    }

    async fn execute(
        &self,
        params: serde_json::Value,
        ctx: &ToolContext,
    ) -> Result<ToolOutput, ToolError> {
        let start = Instant::now();
        let query = require_str(&params, "query")?;
        // Non-positive values are not rejected; they fall through as zero,
        // which yields an empty result set.
        let radius = require_i64(&params, "radius")?.max(0) as u32;
        let limit = require_i64(&params, "n_search_results_to_use")?.max(0) as usize;

        tracing::info!(
            invocation_id = %ctx.invocation_id,
            query,
            radius,
            limit,
            "Restaurant search"
        );

        let results = self.finder.find(query, radius, limit).await?;
        tracing::info!(count = results.len(), "Restaurant search finished");

        Ok(ToolOutput::text(
            format_results_full(&results),
            start.elapsed(),
        ))
    }
}
