use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use business::domain::product::value_objects::{IdBound, QueryDefaults};

const DEFAULT_PRODUCTS_FILE: &str = "data/products.json";

/// Catalog source and query defaults
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub products_file: PathBuf,
    pub defaults: QueryDefaults,
    pub id_bound: IdBound,
}

impl CatalogConfig {
    /// Load catalog configuration from environment variables
    ///
    /// Environment variables:
    /// - PRODUCTS_FILE: Path of the JSON catalog (default: "data/products.json")
    /// - DEFAULT_LIMIT: Page size when a request omits `limit` (default: 10)
    /// - DEFAULT_SKIP: Offset when a request omits `skip` (default: 0)
    /// - PRODUCT_ID_BOUND: "strict" rejects ids >= catalog length,
    ///   "inclusive" only rejects ids > catalog length (default: "strict")
    ///
    /// Unparseable values fall back to their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let fallback = QueryDefaults::default();
        let products_file = lookup("PRODUCTS_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PRODUCTS_FILE));

        Self {
            products_file,
            defaults: QueryDefaults {
                limit: parse_or(&lookup, "DEFAULT_LIMIT", fallback.limit),
                skip: parse_or(&lookup, "DEFAULT_SKIP", fallback.skip),
            },
            id_bound: parse_or(&lookup, "PRODUCT_ID_BOUND", IdBound::default()),
        }
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + std::fmt::Display,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    raw.trim().parse().unwrap_or_else(|_| {
        tracing::warn!(key, value = %raw, "invalid configuration value, using {default}");
        default
    })
}
