use crate::models::ListingType;
use serde::{Deserialize, Serialize};

/// Field the backend can sort a property query by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    PriceEur,
    DateListed,
    Bedrooms,
    Bathrooms,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::PriceEur => "price_eur",
            SortKey::DateListed => "date_listed",
            SortKey::Bedrooms => "bedrooms",
            SortKey::Bathrooms => "bathrooms",
        }
    }

    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "price_eur" => Some(SortKey::PriceEur),
            "date_listed" => Some(SortKey::DateListed),
            "bedrooms" => Some(SortKey::Bedrooms),
            "bathrooms" => Some(SortKey::Bathrooms),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

/// Identifies one settable filter field for [`PropertyFilters::set`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    ListingType,
    Location,
    MinPrice,
    MaxPrice,
    MinBedrooms,
    MaxBedrooms,
    MinBathrooms,
    PropertyType,
    Limit,
    Offset,
    SortBy,
    SortOrder,
}

/// The current filter selection for property queries.
///
/// This struct is the single source of truth for what the user has chosen.
/// An unset `Option` means "no constraint" and produces no query parameter;
/// pagination and sorting always carry a value. Ranges are deliberately not
/// validated here (min > max passes through); the backend is the authority
/// on query validity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyFilters {
    pub listing_type: Option<ListingType>,
    pub location: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_bedrooms: Option<i64>,
    pub max_bedrooms: Option<i64>,
    pub min_bathrooms: Option<i64>,
    pub property_type: Option<String>,
    pub limit: u32,
    pub offset: u32,
    pub sort_by: SortKey,
    pub sort_order: SortOrder,
}

impl Default for PropertyFilters {
    fn default() -> Self {
        Self {
            listing_type: None,
            location: None,
            min_price: None,
            max_price: None,
            min_bedrooms: None,
            max_bedrooms: None,
            min_bathrooms: None,
            property_type: None,
            limit: 20,
            offset: 0,
            sort_by: SortKey::DateListed,
            sort_order: SortOrder::Desc,
        }
    }
}

impl PropertyFilters {
    /// Merge one field update from raw user input.
    ///
    /// An empty value unsets the field rather than being stored literally,
    /// which keeps `to_query` free of empty markers. Input that fails to
    /// parse for a typed field also unsets it. Pagination and sorting fall
    /// back to their defaults when unset this way.
    pub fn set(&mut self, field: FilterField, value: &str) {
        let value = value.trim();
        match field {
            FilterField::ListingType => {
                self.listing_type = match value {
                    "rent" => Some(ListingType::Rent),
                    "sale" => Some(ListingType::Sale),
                    _ => None,
                };
            }
            FilterField::Location => {
                self.location = non_empty(value);
            }
            FilterField::MinPrice => self.min_price = value.parse().ok(),
            FilterField::MaxPrice => self.max_price = value.parse().ok(),
            FilterField::MinBedrooms => self.min_bedrooms = value.parse().ok(),
            FilterField::MaxBedrooms => self.max_bedrooms = value.parse().ok(),
            FilterField::MinBathrooms => self.min_bathrooms = value.parse().ok(),
            FilterField::PropertyType => {
                self.property_type = non_empty(value);
            }
            FilterField::Limit => {
                self.limit = value.parse().unwrap_or(Self::default().limit);
            }
            FilterField::Offset => {
                self.offset = value.parse().unwrap_or(Self::default().offset);
            }
            FilterField::SortBy => {
                self.sort_by = SortKey::parse(value).unwrap_or(Self::default().sort_by);
            }
            FilterField::SortOrder => {
                self.sort_order = match value {
                    "asc" => SortOrder::Asc,
                    "desc" => SortOrder::Desc,
                    _ => Self::default().sort_order,
                };
            }
        }
    }

    /// Drop every constraint and return to the default page and sort.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Serialize the present fields as query parameters.
    ///
    /// Unset fields produce no pair at all; the backend treats a missing
    /// parameter as "no constraint".
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(listing_type) = self.listing_type {
            params.push(("listing_type", listing_type.as_str().to_string()));
        }
        if let Some(location) = &self.location {
            params.push(("location", location.clone()));
        }
        if let Some(min_price) = self.min_price {
            params.push(("min_price", min_price.to_string()));
        }
        if let Some(max_price) = self.max_price {
            params.push(("max_price", max_price.to_string()));
        }
        if let Some(min_bedrooms) = self.min_bedrooms {
            params.push(("min_bedrooms", min_bedrooms.to_string()));
        }
        if let Some(max_bedrooms) = self.max_bedrooms {
            params.push(("max_bedrooms", max_bedrooms.to_string()));
        }
        if let Some(min_bathrooms) = self.min_bathrooms {
            params.push(("min_bathrooms", min_bathrooms.to_string()));
        }
        if let Some(property_type) = &self.property_type {
            params.push(("property_type", property_type.clone()));
        }
        params.push(("limit", self.limit.to_string()));
        params.push(("offset", self.offset.to_string()));
        params.push(("sort_by", self.sort_by.as_str().to_string()));
        params.push(("sort_order", self.sort_order.as_str().to_string()));
        params
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_matches_backend_defaults() {
        let filters = PropertyFilters::default();
        assert_eq!(filters.limit, 20);
        assert_eq!(filters.offset, 0);
        assert_eq!(filters.sort_by, SortKey::DateListed);
        assert_eq!(filters.sort_order, SortOrder::Desc);
        assert!(filters.listing_type.is_none());
        assert!(filters.location.is_none());
    }

    #[test]
    fn clear_resets_regardless_of_prior_state() {
        let mut filters = PropertyFilters::default();
        filters.set(FilterField::ListingType, "rent");
        filters.set(FilterField::Location, "dublin");
        filters.set(FilterField::MinPrice, "500");
        filters.set(FilterField::Limit, "50");
        filters.set(FilterField::SortBy, "price_eur");
        filters.set(FilterField::SortOrder, "asc");

        filters.clear();
        assert_eq!(filters, PropertyFilters::default());
    }

    #[test]
    fn empty_value_unsets_the_field() {
        let mut filters = PropertyFilters::default();
        filters.set(FilterField::Location, "cork");
        assert_eq!(filters.location.as_deref(), Some("cork"));

        filters.set(FilterField::Location, "");
        assert!(filters.location.is_none());
    }

    #[test]
    fn unparsable_numeric_unsets_rather_than_stores() {
        let mut filters = PropertyFilters::default();
        filters.set(FilterField::MinPrice, "1200");
        filters.set(FilterField::MinPrice, "cheap");
        assert!(filters.min_price.is_none());
    }

    #[test]
    fn zero_bedrooms_stays_set() {
        let mut filters = PropertyFilters::default();
        filters.set(FilterField::MinBedrooms, "0");
        assert_eq!(filters.min_bedrooms, Some(0));

        let query: HashMap<_, _> = filters.to_query().into_iter().collect();
        assert_eq!(query.get("min_bedrooms").map(String::as_str), Some("0"));
    }

    #[test]
    fn set_merges_without_touching_other_fields() {
        let mut filters = PropertyFilters::default();
        filters.set(FilterField::ListingType, "sale");
        filters.set(FilterField::MaxPrice, "450000");

        assert_eq!(filters.listing_type, Some(ListingType::Sale));
        assert_eq!(filters.max_price, Some(450000.0));
        assert_eq!(filters.limit, 20);
        assert!(filters.min_price.is_none());
    }

    #[test]
    fn query_omits_absent_fields() {
        let query: HashMap<_, _> = PropertyFilters::default().to_query().into_iter().collect();
        assert_eq!(query.len(), 4);
        assert_eq!(query.get("limit").map(String::as_str), Some("20"));
        assert_eq!(query.get("offset").map(String::as_str), Some("0"));
        assert_eq!(query.get("sort_by").map(String::as_str), Some("date_listed"));
        assert_eq!(query.get("sort_order").map(String::as_str), Some("desc"));
        assert!(!query.contains_key("listing_type"));
        assert!(!query.contains_key("min_price"));
    }

    #[test]
    fn query_round_trips_exactly_the_present_fields() {
        let mut filters = PropertyFilters::default();
        filters.set(FilterField::ListingType, "rent");
        filters.set(FilterField::Location, "galway");
        filters.set(FilterField::MinPrice, "800");
        filters.set(FilterField::MaxBedrooms, "3");

        let query: HashMap<_, _> = filters.to_query().into_iter().collect();
        let keys: std::collections::HashSet<_> = query.keys().copied().collect();
        let expected: std::collections::HashSet<_> = [
            "listing_type",
            "location",
            "min_price",
            "max_bedrooms",
            "limit",
            "offset",
            "sort_by",
            "sort_order",
        ]
        .into_iter()
        .collect();
        assert_eq!(keys, expected);

        // And the encoded values parse back to what was set.
        assert_eq!(query.get("listing_type").map(String::as_str), Some("rent"));
        assert_eq!(query.get("location").map(String::as_str), Some("galway"));
        assert_eq!(query["min_price"].parse::<f64>().unwrap(), 800.0);
        assert_eq!(query["max_bedrooms"].parse::<i64>().unwrap(), 3);
    }

    #[test]
    fn remaining_fields_set_and_serialize() {
        let mut filters = PropertyFilters::default();
        filters.set(FilterField::MinBathrooms, "2");
        filters.set(FilterField::PropertyType, "Apartment");
        filters.set(FilterField::Offset, "40");

        let query: HashMap<_, _> = filters.to_query().into_iter().collect();
        assert_eq!(query.get("min_bathrooms").map(String::as_str), Some("2"));
        assert_eq!(query.get("property_type").map(String::as_str), Some("Apartment"));
        assert_eq!(query.get("offset").map(String::as_str), Some("40"));
    }

    #[test]
    fn min_greater_than_max_passes_through() {
        let mut filters = PropertyFilters::default();
        filters.set(FilterField::MinPrice, "900000");
        filters.set(FilterField::MaxPrice, "100");
        assert_eq!(filters.min_price, Some(900000.0));
        assert_eq!(filters.max_price, Some(100.0));
    }
}
