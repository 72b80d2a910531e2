use poem_openapi::Object;

use business::domain::product::model::Product;
use business::domain::product::use_cases::get_all::ProductPage;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier
    pub id: u64,
    /// Product title
    pub title: String,
    /// Brand name
    pub brand: String,
    /// Unit price
    pub price: f64,
    /// Units available; 0 means out of stock
    pub stock: i64,
    /// Average customer rating
    pub rating: f64,
    /// Free-form description
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    /// Catalog category
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<String>,
    /// Thumbnail image URL
    #[oai(skip_serializing_if_is_none)]
    pub thumbnail: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            title: product.title,
            brand: product.brand,
            price: product.price,
            stock: product.stock,
            rating: product.rating,
            description: product.description,
            category: product.category,
            thumbnail: product.thumbnail,
        }
    }
}

/// Unfiltered page of the catalog
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub limit: u64,
    pub skip: u64,
    /// Size of the whole catalog
    pub total_products: u64,
    pub products: Vec<ProductResponse>,
}

impl From<ProductPage> for ProductListResponse {
    fn from(result: ProductPage) -> Self {
        Self {
            limit: result.pagination.limit as u64,
            skip: result.pagination.skip as u64,
            total_products: result.page.total as u64,
            products: result.page.products.into_iter().map(Into::into).collect(),
        }
    }
}

/// Page of the products matching a filter
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProductQueryResponse {
    pub limit: u64,
    pub skip: u64,
    /// Number of products matching the filter across all pages
    pub total_products_queried: u64,
    pub products: Vec<ProductResponse>,
}

impl From<ProductPage> for ProductQueryResponse {
    fn from(result: ProductPage) -> Self {
        Self {
            limit: result.pagination.limit as u64,
            skip: result.pagination.skip as u64,
            total_products_queried: result.page.total as u64,
            products: result.page.products.into_iter().map(Into::into).collect(),
        }
    }
}
