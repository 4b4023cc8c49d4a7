pub mod router;
pub mod types;
pub mod handlers {
    pub mod beer;
    pub mod common;
    pub mod customer;
    pub mod health;
}

pub use handlers::common::ApiError;
pub use router::{create_router, ApiDoc, BEER_PATH, CUSTOMER_PATH};
pub use types::AppState;
