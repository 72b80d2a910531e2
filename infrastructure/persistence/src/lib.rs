pub mod catalog_file;
pub mod product {
    pub mod entity;
    pub mod repository;
}
