use super::errors::ProductError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub brand: String,
    pub price: f64,
    pub stock: i64,
    pub rating: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
}

pub struct NewProductProps {
    pub id: u64,
    pub title: String,
    pub brand: String,
    pub price: f64,
    pub stock: i64,
    pub rating: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub thumbnail: Option<String>,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        if !props.price.is_finite() || props.price < 0.0 {
            return Err(ProductError::InvalidPrice);
        }

        Ok(Self {
            id: props.id,
            title: props.title,
            brand: props.brand,
            price: props.price,
            stock: props.stock,
            rating: props.rating,
            description: props.description,
            category: props.category,
            thumbnail: props.thumbnail,
        })
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }
}
