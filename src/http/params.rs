//! Query-string parameters for the catalog routes.
//!
//! Names are camelCase on the wire. Absent or empty numeric parameters take
//! the documented defaults; unrecognized sort values are resolved later by
//! `SortSpec`.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserializer};
use serde::Deserialize;

use crate::query::{AdvancedQuery, BookFilter, Page, PriceRange, SortField, SortSpec};

/// Read an optional scalar, treating an empty value (`?minPrice=`) as absent.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

fn default_sort_field() -> String {
    "title".to_string()
}

fn default_sort_direction() -> String {
    "asc".to_string()
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRangeParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub min_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub max_price: Option<f64>,
}

impl From<PriceRangeParams> for PriceRange {
    fn from(params: PriceRangeParams) -> Self {
        PriceRange::new(params.min_price, params.max_price)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortParams {
    #[serde(default = "default_sort_field")]
    pub sort_by: String,
    #[serde(default = "default_sort_direction")]
    pub order: String,
}

impl From<SortParams> for SortSpec {
    fn from(params: SortParams) -> Self {
        SortSpec::from_params(&params.sort_by, &params.order, SortField::BASIC)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub index_of_page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub items_per_page: Option<i64>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Page::new(
            params.index_of_page.unwrap_or(Page::DEFAULT_INDEX),
            params.items_per_page.unwrap_or(Page::DEFAULT_SIZE),
        )
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedParams {
    pub title_filter: Option<String>,
    pub author_filter: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub minimum_price: Option<f64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub maximum_price: Option<f64>,
    #[serde(default = "default_sort_field")]
    pub sort_field: String,
    #[serde(default = "default_sort_direction")]
    pub sort_direction: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub index_of_page: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub items_per_page: Option<i64>,
}

impl From<AdvancedParams> for AdvancedQuery {
    fn from(params: AdvancedParams) -> Self {
        AdvancedQuery {
            filter: BookFilter {
                title: params.title_filter,
                author: params.author_filter,
                price: PriceRange::new(params.minimum_price, params.maximum_price),
            },
            sort: SortSpec::from_params(&params.sort_field, &params.sort_direction, SortField::ALL),
            page: Page::from(PageParams {
                index_of_page: params.index_of_page,
                items_per_page: params.items_per_page,
            }),
        }
    }
}
