pub mod application {
    pub mod product {
        pub mod fetch_detail;
        pub mod fetch_image;
    }
    pub mod screen {
        pub mod load;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod model;
        pub mod payload;
        pub mod services;
        pub mod use_cases {
            pub mod fetch_detail;
            pub mod fetch_image;
        }
    }
    pub mod screen {
        pub mod model;
        pub mod sink;
        pub mod use_cases {
            pub mod load;
        }
    }
}
