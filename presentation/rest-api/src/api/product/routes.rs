use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::product::errors::ProductError;
use business::domain::product::filter::FilterKind;
use business::domain::product::query::RawProductQuery;
use business::domain::product::use_cases::filter::{FilterProductsParams, FilterProductsUseCase};
use business::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};
use business::domain::product::use_cases::get_by_id::{
    GetProductByIdParams, GetProductByIdUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::product::dto::{ProductListResponse, ProductQueryResponse, ProductResponse};
use crate::api::tags::ApiTags;

pub struct ProductApi {
    get_all_use_case: Arc<dyn GetAllProductsUseCase>,
    get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
    filter_use_case: Arc<dyn FilterProductsUseCase>,
}

impl ProductApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllProductsUseCase>,
        get_by_id_use_case: Arc<dyn GetProductByIdUseCase>,
        filter_use_case: Arc<dyn FilterProductsUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
            filter_use_case,
        }
    }

    async fn filter(&self, kind: FilterKind, req: &Request) -> FilterProductsResponse {
        let params = FilterProductsParams {
            kind,
            query: RawProductQuery::from_query_string(req.uri().query()),
        };

        match self.filter_use_case.execute(params).await {
            Ok(result) => FilterProductsResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => FilterProductsResponse::BadRequest(json),
                    _ => FilterProductsResponse::InternalError(json),
                }
            }
        }
    }
}

/// Product catalog API
///
/// Read-only endpoints over the product catalog. Every listing accepts
/// `limit` and `skip`; any other query parameter not listed for the
/// endpoint is rejected.
#[OpenApi]
impl ProductApi {
    /// List all products
    ///
    /// Query parameters: `limit`, `skip`.
    #[oai(path = "/products", method = "get", tag = "ApiTags::Products")]
    async fn get_all_products(&self, req: &Request) -> GetAllProductsResponse {
        let params = GetAllProductsParams {
            query: RawProductQuery::from_query_string(req.uri().query()),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(result) => GetAllProductsResponse::Ok(Json(result.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetAllProductsResponse::BadRequest(json),
                    _ => GetAllProductsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a product by ID
    #[oai(path = "/products/:productId", method = "get", tag = "ApiTags::Products")]
    async fn get_product_by_id(
        &self,
        #[oai(name = "productId")] product_id: Path<String>,
    ) -> GetProductByIdResponse {
        let params = GetProductByIdParams {
            product_id: product_id.0,
        };

        let result = self
            .get_by_id_use_case
            .execute(params)
            .await
            .and_then(|product| product.ok_or(ProductError::NotFound));

        match result {
            Ok(product) => GetProductByIdResponse::Ok(Json(product.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => GetProductByIdResponse::BadRequest(json),
                    404 => GetProductByIdResponse::NotFound(json),
                    _ => GetProductByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Search products by title
    ///
    /// Query parameters: `limit`, `skip`, `name` (case-insensitive substring).
    #[oai(path = "/products/search/title", method = "get", tag = "ApiTags::Products")]
    async fn search_by_title(&self, req: &Request) -> FilterProductsResponse {
        self.filter(FilterKind::Title, req).await
    }

    /// Filter products by price range
    ///
    /// Query parameters: `limit`, `skip`, `minPrice` (exclusive), `maxPrice` (inclusive).
    #[oai(path = "/products/search/price", method = "get", tag = "ApiTags::Products")]
    async fn filter_by_price(&self, req: &Request) -> FilterProductsResponse {
        self.filter(FilterKind::PriceRange, req).await
    }

    /// Filter products by brand
    ///
    /// Query parameters: `limit`, `skip`, `name` (case-insensitive substring).
    #[oai(path = "/products/search/brand", method = "get", tag = "ApiTags::Products")]
    async fn filter_by_brand(&self, req: &Request) -> FilterProductsResponse {
        self.filter(FilterKind::Brand, req).await
    }

    /// List products in stock
    ///
    /// Query parameters: `limit`, `skip`.
    #[oai(path = "/products/search/in-stock", method = "get", tag = "ApiTags::Products")]
    async fn list_in_stock(&self, req: &Request) -> FilterProductsResponse {
        self.filter(FilterKind::InStock, req).await
    }

    /// Filter products by rating range
    ///
    /// Query parameters: `limit`, `skip`, `minRating` (exclusive), `maxRating` (inclusive).
    #[oai(path = "/products/search/rating", method = "get", tag = "ApiTags::Products")]
    async fn filter_by_rating(&self, req: &Request) -> FilterProductsResponse {
        self.filter(FilterKind::RatingRange, req).await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductListResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProductByIdResponse {
    #[oai(status = 200)]
    Ok(Json<ProductResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum FilterProductsResponse {
    #[oai(status = 200)]
    Ok(Json<ProductQueryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
