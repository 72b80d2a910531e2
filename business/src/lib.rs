pub mod application {
    pub mod product {
        pub mod filter;
        pub mod get_all;
        pub mod get_by_id;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod model;
        pub mod query;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod filter;
            pub mod get_all;
            pub mod get_by_id;
        }
    }
}
