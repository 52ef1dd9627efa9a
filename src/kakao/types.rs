//! Typed wire shapes for the Kakao Local API.
//!
//! Kakao serializes coordinates as decimal strings (`"x": "127.05"`), so
//! the wire types keep them as strings and expose a checked parse into
//! [`Coordinate`]. Anything that fails to decode surfaces as
//! [`KakaoError::MalformedResponse`] instead of panicking on a missing
//! field.

use serde::Deserialize;

use crate::error::KakaoError;

/// A geographic coordinate (WGS84).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub longitude: f64,
    pub latitude: f64,
}

/// One page of a Kakao Local search response.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage<D> {
    pub documents: Vec<D>,
    #[serde(default)]
    pub meta: PageMeta,
}

/// Kakao's page metadata. Decoded for logging; pagination is driven by
/// document counts, not `is_end`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageMeta {
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub pageable_count: u32,
    #[serde(default)]
    pub is_end: bool,
}

/// A place document from keyword or category search.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDocument {
    pub place_name: String,
    pub category_name: String,
    pub place_url: String,
    /// Longitude, as a decimal string.
    pub x: String,
    /// Latitude, as a decimal string.
    pub y: String,
}

impl PlaceDocument {
    /// Parse the document's coordinate strings.
    pub fn coordinate(&self) -> Result<Coordinate, KakaoError> {
        let longitude = parse_axis(&self.x, "x")?;
        let latitude = parse_axis(&self.y, "y")?;
        Ok(Coordinate {
            longitude,
            latitude,
        })
    }
}

/// An address document from address search.
#[derive(Debug, Clone, Deserialize)]
pub struct AddressDocument {
    pub address_name: String,
    /// Longitude, as a decimal string.
    pub x: String,
    /// Latitude, as a decimal string.
    pub y: String,
}

impl AddressDocument {
    /// Parse the document's coordinate strings.
    pub fn coordinate(&self) -> Result<Coordinate, KakaoError> {
        let longitude = parse_axis(&self.x, "x")?;
        let latitude = parse_axis(&self.y, "y")?;
        Ok(Coordinate {
            longitude,
            latitude,
        })
    }
}

fn parse_axis(raw: &str, field: &str) -> Result<f64, KakaoError> {
    raw.parse().map_err(|_| {
        KakaoError::MalformedResponse(format!("non-numeric coordinate {field}: {raw:?}"))
    })
}
