use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Whether a listing is offered for rent or for sale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    Rent,
    Sale,
}

impl ListingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::Rent => "rent",
            ListingType::Sale => "sale",
        }
    }
}

impl fmt::Display for ListingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scraped property listing as served by the backend.
///
/// Date-like fields stay as raw strings; they are parsed at render time so a
/// malformed date degrades to "N/A" instead of failing the whole response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Property {
    pub id: i64,
    pub url: String,
    pub title: String,
    pub listing_type: ListingType,
    #[serde(default)]
    pub price_eur: Option<f64>,
    #[serde(default)]
    pub price_period: Option<String>,
    #[serde(default)]
    pub bedrooms: Option<i64>,
    #[serde(default)]
    pub bathrooms: Option<i64>,
    #[serde(default)]
    pub property_type: Option<String>,
    #[serde(default)]
    pub size_sqm: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub date_listed: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub address_full: Option<String>,
    #[serde(default)]
    pub inserted_at: Option<String>,
}

/// One page of a filtered property query.
///
/// `total_count` covers the whole filtered set, not just this page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertyPage {
    pub properties: Vec<Property>,
    pub total_count: u64,
    pub limit: u32,
    pub offset: u32,
    pub has_more: bool,
}

/// Aggregate statistics over all stored listings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    pub total_properties: u64,
    pub rent_properties: u64,
    pub sale_properties: u64,
    #[serde(default)]
    pub properties_by_location: HashMap<String, u64>,
    #[serde(default)]
    pub properties_by_type: HashMap<String, u64>,
    #[serde(default)]
    pub average_price_rent: Option<f64>,
    #[serde(default)]
    pub average_price_sale: Option<f64>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Backend health report from `GET /health`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Health {
    pub status: HealthStatus,
    pub timestamp: String,
    pub version: String,
    #[serde(default)]
    pub services: HashMap<String, String>,
}
