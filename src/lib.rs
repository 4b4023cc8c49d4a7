pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{BeerService, CustomerService, PatchTimestampPolicy};
pub use domain::model::{Beer, BeerDto, Customer, CustomerDto};
pub use infra::config::Config;
pub use storage::{InMemoryRepository, Repository, StoreError};
