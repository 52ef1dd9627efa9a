//! Kakao Local API integration: typed wire shapes and the HTTP client.

pub mod client;
pub mod types;

pub use client::{
    CategoryQuery, KakaoLocalClient, KeywordQuery, LocalSearchApi, RESTAURANT_CATEGORY_GROUP,
};
pub use types::{AddressDocument, Coordinate, PlaceDocument, SearchPage};
