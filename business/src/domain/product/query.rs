//! Validation of raw request parameters into a typed [`ProductQuery`].
//!
//! Every endpoint accepts `limit` and `skip`; the filter kind decides which
//! other keys are allowed. Unknown or repeated keys are rejected instead of
//! being ignored.

use std::collections::HashSet;
use std::num::IntErrorKind;

use super::errors::ProductError;
use super::filter::{FilterKind, ProductCriteria};
use super::value_objects::{BoundRange, Pagination, QueryDefaults};

pub const LIMIT: &str = "limit";
pub const SKIP: &str = "skip";
pub const NAME: &str = "name";
pub const MIN_PRICE: &str = "minPrice";
pub const MAX_PRICE: &str = "maxPrice";
pub const MIN_RATING: &str = "minRating";
pub const MAX_RATING: &str = "maxRating";

/// Undecoded key/value pairs exactly as they arrived in the query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawProductQuery {
    pairs: Vec<(String, String)>,
}

impl RawProductQuery {
    pub fn from_query_string(query: Option<&str>) -> Self {
        let pairs = query
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .map(|(k, v)| (k.into_owned(), v.into_owned()))
                    .collect()
            })
            .unwrap_or_default();
        Self { pairs }
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pairs.iter().map(|(k, _)| k.as_str())
    }
}

/// A validated request: the filter to apply and the page to return.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub pagination: Pagination,
    pub criteria: ProductCriteria,
}

pub struct ProductQueryParser {
    defaults: QueryDefaults,
}

impl ProductQueryParser {
    pub fn new(defaults: QueryDefaults) -> Self {
        Self { defaults }
    }

    pub fn parse(
        &self,
        kind: FilterKind,
        raw: &RawProductQuery,
    ) -> Result<ProductQuery, ProductError> {
        let mut seen = HashSet::new();
        for key in raw.keys() {
            if !accepts(kind, key) || !seen.insert(key) {
                return Err(ProductError::invalid_query(key));
            }
        }

        let limit = parse_count(raw, LIMIT)?.unwrap_or(self.defaults.limit);
        let skip = parse_count(raw, SKIP)?.unwrap_or(self.defaults.skip);

        let criteria = match kind {
            FilterKind::All => ProductCriteria::All,
            FilterKind::InStock => ProductCriteria::InStock,
            FilterKind::Title => ProductCriteria::Title(name(raw)),
            FilterKind::Brand => ProductCriteria::Brand(name(raw)),
            FilterKind::PriceRange => ProductCriteria::PriceRange(BoundRange::new(
                parse_bound(raw, MIN_PRICE)?,
                parse_bound(raw, MAX_PRICE)?,
            )),
            FilterKind::RatingRange => ProductCriteria::RatingRange(BoundRange::new(
                parse_bound(raw, MIN_RATING)?,
                parse_bound(raw, MAX_RATING)?,
            )),
        };

        Ok(ProductQuery {
            pagination: Pagination::new(limit, skip),
            criteria,
        })
    }
}

/// Parses a path product id. Negative ids parse successfully; the range
/// check happens once the catalog length is known. An integer too large for
/// `i64` can never index the catalog, so it is reported as not found.
pub fn parse_product_id(raw: &str) -> Result<i64, ProductError> {
    raw.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ProductError::NotFound,
        _ => ProductError::InvalidProductId,
    })
}

fn accepts(kind: FilterKind, key: &str) -> bool {
    if key == LIMIT || key == SKIP {
        return true;
    }
    match kind {
        FilterKind::All | FilterKind::InStock => false,
        FilterKind::Title | FilterKind::Brand => key == NAME,
        FilterKind::PriceRange => key == MIN_PRICE || key == MAX_PRICE,
        FilterKind::RatingRange => key == MIN_RATING || key == MAX_RATING,
    }
}

/// Present-and-non-blank value for `key`.
fn value<'a>(raw: &'a RawProductQuery, key: &str) -> Option<&'a str> {
    raw.get(key).map(str::trim).filter(|v| !v.is_empty())
}

fn name(raw: &RawProductQuery) -> String {
    raw.get(NAME).unwrap_or_default().to_string()
}

/// Non-negative integer; values past `usize::MAX` saturate.
fn parse_count(raw: &RawProductQuery, key: &str) -> Result<Option<usize>, ProductError> {
    value(raw, key)
        .map(|v| match v.parse::<usize>() {
            Ok(n) => Ok(n),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(usize::MAX),
            Err(_) => Err(ProductError::invalid_query(key)),
        })
        .transpose()
}

/// Finite number. An absent bound is returned as `None` and leaves the range
/// open, so a missing `minPrice` still admits a price of `0`.
fn parse_bound(raw: &RawProductQuery, key: &str) -> Result<Option<f64>, ProductError> {
    value(raw, key)
        .map(|v| match v.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ProductError::invalid_query(key)),
        })
        .transpose()
}
