//! End-to-end tests for the restaurant search tool against a mock
//! Kakao Local API.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use lunch_agent::context::ToolContext;
use lunch_agent::error::KakaoError;
use lunch_agent::kakao::types::{AddressDocument, PlaceDocument, SearchPage};
use lunch_agent::kakao::{CategoryQuery, KeywordQuery, LocalSearchApi};
use lunch_agent::tools::{RestaurantSearchTool, Tool, ToolError};

/// Scripted Kakao Local API: one keyword document and a fixed restaurant
/// pool served in page-sized slices.
struct ScriptedApi {
    location: Vec<PlaceDocument>,
    restaurants: Vec<PlaceDocument>,
    category_calls: AtomicUsize,
}

impl ScriptedApi {
    fn new(location: Vec<PlaceDocument>, restaurants: Vec<PlaceDocument>) -> Self {
        Self {
            location,
            restaurants,
            category_calls: AtomicUsize::new(0),
        }
    }
}

fn station() -> PlaceDocument {
    PlaceDocument {
        place_name: "삼성역 2호선".to_string(),
        category_name: "교통,수송 > 지하철,전철".to_string(),
        place_url: "http://place.map.kakao.com/26042190".to_string(),
        x: "127.0".to_string(),
        y: "37.5".to_string(),
    }
}

fn restaurant(n: usize) -> PlaceDocument {
    PlaceDocument {
        place_name: format!("맛집 {n}"),
        category_name: format!("음식점 > 한식 > {n}"),
        place_url: format!("http://place.map.kakao.com/{n}"),
        x: "127.0".to_string(),
        y: "37.5".to_string(),
    }
}

#[async_trait]
impl LocalSearchApi for ScriptedApi {
    async fn keyword_search(
        &self,
        _query: KeywordQuery,
    ) -> Result<SearchPage<PlaceDocument>, KakaoError> {
        Ok(SearchPage {
            documents: self.location.clone(),
            meta: Default::default(),
        })
    }

    async fn category_search(
        &self,
        query: CategoryQuery,
    ) -> Result<SearchPage<PlaceDocument>, KakaoError> {
        self.category_calls.fetch_add(1, Ordering::SeqCst);
        let size = query.size as usize;
        let start = (query.page as usize - 1) * size;
        Ok(SearchPage {
            documents: self
                .restaurants
                .iter()
                .skip(start)
                .take(size)
                .cloned()
                .collect(),
            meta: Default::default(),
        })
    }

    async fn address_search(
        &self,
        _query: &str,
        _page: u32,
        _size: u32,
    ) -> Result<SearchPage<AddressDocument>, KakaoError> {
        unreachable!("the tool never issues address searches")
    }
}

/// Upstream that always answers with a non-success status.
struct FailingApi;

#[async_trait]
impl LocalSearchApi for FailingApi {
    async fn keyword_search(
        &self,
        _query: KeywordQuery,
    ) -> Result<SearchPage<PlaceDocument>, KakaoError> {
        Err(KakaoError::UpstreamStatus {
            status: 401,
            body: r#"{"errorType":"AccessDeniedError"}"#.to_string(),
        })
    }

    async fn category_search(
        &self,
        _query: CategoryQuery,
    ) -> Result<SearchPage<PlaceDocument>, KakaoError> {
        Err(KakaoError::UpstreamStatus {
            status: 401,
            body: r#"{"errorType":"AccessDeniedError"}"#.to_string(),
        })
    }

    async fn address_search(
        &self,
        _query: &str,
        _page: u32,
        _size: u32,
    ) -> Result<SearchPage<AddressDocument>, KakaoError> {
        Err(KakaoError::UpstreamStatus {
            status: 401,
            body: r#"{"errorType":"AccessDeniedError"}"#.to_string(),
        })
    }
}

#[tokio::test]
async fn samseong_station_scenario_returns_five_indexed_items() {
    let api = Arc::new(ScriptedApi::new(
        vec![station()],
        (1..=5).map(restaurant).collect(),
    ));
    let tool = RestaurantSearchTool::new(Arc::clone(&api) as Arc<dyn LocalSearchApi>);

    let params = serde_json::json!({
        "query": "삼성역",
        "radius": 2000,
        "n_search_results_to_use": 5,
    });
    let output = tool.execute(params, &ToolContext::default()).await.unwrap();
    let block = output.as_text().unwrap();

    assert!(block.starts_with("\n<search_results>\n"));
    assert!(block.ends_with("\n</search_results>"));
    assert_eq!(block.matches("<item index=").count(), 5);
    for n in 1..=5 {
        assert!(block.contains(&format!("<item index=\"{n}\">")));
        assert!(block.contains(&format!("<restaurant_name>\n맛집 {n}\n</restaurant_name>")));
        assert!(block.contains(&format!("<category>\n음식점 > 한식 > {n}\n</category>")));
        assert!(block.contains(&format!("<source>http://place.map.kakao.com/{n}</source>")));
    }
    assert!(!block.contains("<item index=\"6\">"));
}

#[tokio::test]
async fn repeated_invocations_are_byte_identical() {
    let api = Arc::new(ScriptedApi::new(
        vec![station()],
        (1..=40).map(restaurant).collect(),
    ));
    let tool = RestaurantSearchTool::new(Arc::clone(&api) as Arc<dyn LocalSearchApi>);

    let params = serde_json::json!({
        "query": "삼성역",
        "radius": 2000,
        "n_search_results_to_use": 20,
    });
    let first = tool
        .execute(params.clone(), &ToolContext::default())
        .await
        .unwrap();
    let second = tool.execute(params, &ToolContext::default()).await.unwrap();
    assert_eq!(first.as_text().unwrap(), second.as_text().unwrap());
}

#[tokio::test]
async fn unresolved_location_yields_an_empty_block() {
    let api = Arc::new(ScriptedApi::new(vec![], (1..=5).map(restaurant).collect()));
    let tool = RestaurantSearchTool::new(Arc::clone(&api) as Arc<dyn LocalSearchApi>);

    let params = serde_json::json!({
        "query": "어디에도없는곳",
        "radius": 2000,
        "n_search_results_to_use": 5,
    });
    let output = tool.execute(params, &ToolContext::default()).await.unwrap();

    assert_eq!(output.as_text().unwrap(), "\n<search_results>\n\n</search_results>");
    assert_eq!(api.category_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn non_positive_limit_yields_an_empty_block_without_requests() {
    let api = Arc::new(ScriptedApi::new(
        vec![station()],
        (1..=5).map(restaurant).collect(),
    ));
    let tool = RestaurantSearchTool::new(Arc::clone(&api) as Arc<dyn LocalSearchApi>);

    let params = serde_json::json!({
        "query": "삼성역",
        "radius": 2000,
        "n_search_results_to_use": -3,
    });
    let output = tool.execute(params, &ToolContext::default()).await.unwrap();

    assert_eq!(output.as_text().unwrap(), "\n<search_results>\n\n</search_results>");
    assert_eq!(api.category_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn missing_parameters_are_invalid() {
    let api = Arc::new(ScriptedApi::new(vec![station()], vec![]));
    let tool = RestaurantSearchTool::new(api as Arc<dyn LocalSearchApi>);

    let params = serde_json::json!({ "query": "삼성역" });
    let err = tool
        .execute(params, &ToolContext::default())
        .await
        .unwrap_err();
    assert!(matches!(err, ToolError::InvalidParameters(_)));
}

#[tokio::test]
async fn upstream_failures_surface_as_upstream_errors() {
    let tool = RestaurantSearchTool::new(Arc::new(FailingApi) as Arc<dyn LocalSearchApi>);

    let params = serde_json::json!({
        "query": "삼성역",
        "radius": 2000,
        "n_search_results_to_use": 5,
    });
    let err = tool
        .execute(params, &ToolContext::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ToolError::Upstream(KakaoError::UpstreamStatus { status: 401, .. })
    ));
}
