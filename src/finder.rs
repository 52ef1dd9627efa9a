//! Restaurant search: resolve a location, then page through nearby
//! restaurants.
//!
//! A `find` call is two sequential steps against the Kakao Local API:
//! one keyword search to turn the query into a coordinate, then up to
//! [`MAX_CATEGORY_PAGES`] category searches around it. There is no
//! parallelism across pages and no state survives the call.

use std::sync::Arc;

use crate::error::KakaoError;
use crate::kakao::{
    CategoryQuery, Coordinate, KeywordQuery, LocalSearchApi, RESTAURANT_CATEGORY_GROUP,
};

/// Hard upper bound on category-search pages per `find` call.
pub const MAX_CATEGORY_PAGES: u32 = 99;

/// Fixed page size for category search.
pub const CATEGORY_PAGE_SIZE: u32 = 15;

/// A single restaurant search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub name: String,
    pub category: String,
    /// Kakao place page URL.
    pub source: String,
}

/// Finds restaurants near a free-text location.
pub struct RestaurantFinder {
    api: Arc<dyn LocalSearchApi>,
}

impl RestaurantFinder {
    pub fn new(api: Arc<dyn LocalSearchApi>) -> Self {
        Self { api }
    }

    /// Return up to `limit` restaurants within `radius` meters of the
    /// location `query` resolves to.
    ///
    /// An unresolvable location or an exhausted result set yields fewer
    /// results (possibly none) rather than an error; only transport and
    /// decoding failures are errors.
    pub async fn find(
        &self,
        query: &str,
        radius: u32,
        limit: usize,
    ) -> Result<Vec<SearchResult>, KakaoError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let Some(center) = self.resolve_location(query).await? else {
            tracing::debug!(query, "No location found");
            return Ok(Vec::new());
        };

        self.collect_restaurants(center, radius, limit).await
    }

    /// Resolve a free-text query to the coordinate of its first keyword
    /// match. Ranking is left entirely to the upstream service.
    async fn resolve_location(&self, query: &str) -> Result<Option<Coordinate>, KakaoError> {
        let page = self.api.keyword_search(KeywordQuery::for_text(query)).await?;
        match page.documents.first() {
            Some(doc) => Ok(Some(doc.coordinate()?)),
            None => Ok(None),
        }
    }

    /// Page through restaurant-category results around `center` until
    /// `limit` results are collected or pages are exhausted.
    ///
    /// A page shorter than [`CATEGORY_PAGE_SIZE`] means the upstream has
    /// nothing further; the page cap guards against an upstream that
    /// never reports a short page.
    async fn collect_restaurants(
        &self,
        center: Coordinate,
        radius: u32,
        limit: usize,
    ) -> Result<Vec<SearchResult>, KakaoError> {
        let mut results = Vec::new();

        for page in 1..=MAX_CATEGORY_PAGES {
            let response = self
                .api
                .category_search(CategoryQuery {
                    category_group_code: RESTAURANT_CATEGORY_GROUP.to_string(),
                    radius,
                    center,
                    page,
                    size: CATEGORY_PAGE_SIZE,
                })
                .await?;

            let received = response.documents.len();
            for doc in response.documents {
                if results.len() >= limit {
                    break;
                }
                results.push(SearchResult {
                    name: doc.place_name,
                    category: doc.category_name,
                    source: doc.place_url,
                });
            }

            tracing::debug!(page, received, collected = results.len(), "Category page");

            if results.len() >= limit || received < CATEGORY_PAGE_SIZE as usize {
                break;
            }
        }

        Ok(results)
    }
}
