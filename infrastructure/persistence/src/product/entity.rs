use serde::Deserialize;

use business::domain::product::errors::ProductError;
use business::domain::product::model::{NewProductProps, Product};

#[derive(Debug, Deserialize)]
pub struct ProductEntity {
    pub id: Option<u64>,
    pub title: String,
    #[serde(default)]
    pub brand: String,
    pub price: f64,
    pub stock: i64,
    pub rating: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
}

impl ProductEntity {
    /// Converts the record found at `position` in the file. Records without
    /// an id take their position as id.
    pub fn into_domain(self, position: usize) -> Result<Product, ProductError> {
        Product::new(NewProductProps {
            id: self.id.unwrap_or(position as u64),
            title: self.title,
            brand: self.brand,
            price: self.price,
            stock: self.stock,
            rating: self.rating,
            description: self.description,
            category: self.category,
            thumbnail: self.thumbnail,
        })
    }
}
