use super::model::Product;
use super::value_objects::{BoundRange, Pagination};

/// The filter dimension an endpoint works on, before its values are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    All,
    Title,
    Brand,
    PriceRange,
    InStock,
    RatingRange,
}

impl std::fmt::Display for FilterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterKind::All => write!(f, "all"),
            FilterKind::Title => write!(f, "title"),
            FilterKind::Brand => write!(f, "brand"),
            FilterKind::PriceRange => write!(f, "price_range"),
            FilterKind::InStock => write!(f, "in_stock"),
            FilterKind::RatingRange => write!(f, "rating_range"),
        }
    }
}

/// A fully specified predicate over products.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductCriteria {
    All,
    /// Case-insensitive substring of the title.
    Title(String),
    /// Case-insensitive substring of the brand.
    Brand(String),
    PriceRange(BoundRange),
    InStock,
    RatingRange(BoundRange),
}

impl ProductCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            ProductCriteria::All => true,
            ProductCriteria::Title(name) => contains_ignore_case(&product.title, name),
            ProductCriteria::Brand(name) => contains_ignore_case(&product.brand, name),
            ProductCriteria::PriceRange(range) => range.contains(product.price),
            ProductCriteria::InStock => product.is_in_stock(),
            ProductCriteria::RatingRange(range) => range.contains(product.rating),
        }
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// One page of filtered results and the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub total: usize,
    pub products: Vec<Product>,
}

/// Filters `products` in order, then cuts the requested window out of the
/// matches. Windows past the end produce an empty page.
pub fn filter_and_paginate(
    products: Vec<Product>,
    criteria: &ProductCriteria,
    pagination: Pagination,
) -> Page {
    let matching: Vec<Product> = products
        .into_iter()
        .filter(|p| criteria.matches(p))
        .collect();

    Page {
        total: matching.len(),
        products: pagination.slice(&matching).to_vec(),
    }
}
