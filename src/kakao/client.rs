//! Kakao Local API client.
//!
//! Three endpoints under one host: address search, keyword search, and
//! category search. Every request is an authorized GET returning JSON;
//! there is no retry, backoff, or caching layer.

use async_trait::async_trait;
use reqwest::header;
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use crate::config::KakaoConfig;
use crate::error::KakaoError;
use crate::kakao::types::{AddressDocument, Coordinate, PlaceDocument, SearchPage};

/// Base URL for the Kakao Local API.
pub const KAKAO_API_BASE: &str = "https://dapi.kakao.com";

const ADDRESS_SEARCH_PATH: &str = "/v2/local/search/address.json";
const KEYWORD_SEARCH_PATH: &str = "/v2/local/search/keyword.json";
const CATEGORY_SEARCH_PATH: &str = "/v2/local/search/category.json";

/// Kakao's category group code for restaurants.
pub const RESTAURANT_CATEGORY_GROUP: &str = "FD6";

/// Default page size for keyword and address search.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Keyword search parameters. Everything but `page`/`size` is optional;
/// absent values are stripped before the request is sent.
#[derive(Debug, Clone)]
pub struct KeywordQuery {
    pub query: Option<String>,
    pub category_group_code: Option<String>,
    pub radius: Option<u32>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    pub page: u32,
    pub size: u32,
}

impl Default for KeywordQuery {
    fn default() -> Self {
        Self {
            query: None,
            category_group_code: None,
            radius: None,
            longitude: None,
            latitude: None,
            page: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl KeywordQuery {
    /// Query a free-text term with the default page and size.
    pub fn for_text(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            ..Default::default()
        }
    }
}

/// Category search parameters. The category code, center coordinate, and
/// radius are all required by the endpoint.
#[derive(Debug, Clone)]
pub struct CategoryQuery {
    pub category_group_code: String,
    pub radius: u32,
    pub center: Coordinate,
    pub page: u32,
    pub size: u32,
}

/// Seam for the Kakao Local endpoints.
///
/// [`KakaoLocalClient`] is the HTTP implementation; tests substitute a
/// deterministic mock.
#[async_trait]
pub trait LocalSearchApi: Send + Sync {
    /// Resolve free text (place names, categories) to place documents.
    async fn keyword_search(
        &self,
        query: KeywordQuery,
    ) -> Result<SearchPage<PlaceDocument>, KakaoError>;

    /// List places of one category group around a coordinate.
    async fn category_search(
        &self,
        query: CategoryQuery,
    ) -> Result<SearchPage<PlaceDocument>, KakaoError>;

    /// Resolve an address string to address documents. Addresses only —
    /// place names do not match here.
    async fn address_search(
        &self,
        query: &str,
        page: u32,
        size: u32,
    ) -> Result<SearchPage<AddressDocument>, KakaoError>;
}

/// HTTP client for the Kakao Local API.
pub struct KakaoLocalClient {
    config: KakaoConfig,
    base_url: String,
    http: reqwest::Client,
}

impl KakaoLocalClient {
    pub fn new(config: KakaoConfig) -> Self {
        Self {
            config,
            base_url: KAKAO_API_BASE.to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Authorized GET returning the decoded JSON body.
    ///
    /// Non-success statuses become [`KakaoError::UpstreamStatus`] with the
    /// raw body attached; undecodable bodies become
    /// [`KakaoError::MalformedResponse`].
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, Option<String>)],
    ) -> Result<T, KakaoError> {
        let url = format!("{}{}", self.base_url, path);
        let query = strip_absent(params);

        tracing::debug!(path, params = query.len(), "Kakao Local request");

        let response = self
            .http
            .get(&url)
            .header(
                header::AUTHORIZATION,
                format!("KakaoAK {}", self.config.api_key.expose_secret()),
            )
            .query(&query)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(KakaoError::UpstreamStatus {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body)
            .map_err(|e| KakaoError::MalformedResponse(format!("{path}: {e}")))
    }
}

/// Drop parameters with absent values so they are never sent as
/// empty-string query parameters.
fn strip_absent(params: &[(&str, Option<String>)]) -> Vec<(String, String)> {
    params
        .iter()
        .filter_map(|(k, v)| v.as_ref().map(|v| (k.to_string(), v.clone())))
        .collect()
}

#[async_trait]
impl LocalSearchApi for KakaoLocalClient {
    async fn keyword_search(
        &self,
        query: KeywordQuery,
    ) -> Result<SearchPage<PlaceDocument>, KakaoError> {
        let params = [
            ("query", query.query),
            ("category_group_code", query.category_group_code),
            ("radius", query.radius.map(|r| r.to_string())),
            ("x", query.longitude.map(|x| x.to_string())),
            ("y", query.latitude.map(|y| y.to_string())),
            ("page", Some(query.page.to_string())),
            ("size", Some(query.size.to_string())),
        ];
        self.get_json(KEYWORD_SEARCH_PATH, &params).await
    }

    async fn category_search(
        &self,
        query: CategoryQuery,
    ) -> Result<SearchPage<PlaceDocument>, KakaoError> {
        let params = [
            ("category_group_code", Some(query.category_group_code)),
            ("radius", Some(query.radius.to_string())),
            ("x", Some(query.center.longitude.to_string())),
            ("y", Some(query.center.latitude.to_string())),
            ("page", Some(query.page.to_string())),
            ("size", Some(query.size.to_string())),
        ];
        self.get_json(CATEGORY_SEARCH_PATH, &params).await
    }

    async fn address_search(
        &self,
        query: &str,
        page: u32,
        size: u32,
    ) -> Result<SearchPage<AddressDocument>, KakaoError> {
        let params = [
            ("query", Some(query.to_string())),
            ("page", Some(page.to_string())),
            ("size", Some(size.to_string())),
        ];
        self.get_json(ADDRESS_SEARCH_PATH, &params).await
    }
}
