//! In-process server harness shared by the endpoint tests.
#![allow(dead_code)]

use async_trait::async_trait;
use brewery_api::domain::model::{Beer, Customer};
use brewery_api::storage::{Document, InMemoryRepository, Repository, StoreError};
use brewery_api::{transport, PatchTimestampPolicy};
use std::sync::Arc;
use uuid::Uuid;

pub struct TestApp {
    pub base_url: String,
    pub client: reqwest::Client,
    pub beers: Arc<InMemoryRepository<Beer>>,
    pub customers: Arc<InMemoryRepository<Customer>>,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// A store whose backend is always unreachable.
pub struct UnavailableRepository;

fn unavailable() -> StoreError {
    StoreError::Database(sqlx::Error::PoolTimedOut)
}

#[async_trait]
impl<E: Document> Repository<E> for UnavailableRepository {
    async fn count(&self) -> Result<u64, StoreError> {
        Err(unavailable())
    }

    async fn find_all(&self) -> Result<Vec<E>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<E>, StoreError> {
        Err(unavailable())
    }

    async fn find_by_field(&self, _field: E::Field, _value: &str) -> Result<Vec<E>, StoreError> {
        Err(unavailable())
    }

    async fn save(&self, _entity: E) -> Result<E, StoreError> {
        Err(unavailable())
    }

    async fn delete_by_id(&self, _id: Uuid) -> Result<(), StoreError> {
        Err(unavailable())
    }

    async fn delete_all(&self) -> Result<(), StoreError> {
        Err(unavailable())
    }
}

async fn serve(app_state: transport::http::AppState) -> String {
    let router = transport::http::create_router(app_state);

    // Bind to an ephemeral port so tests can run in parallel.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://127.0.0.1:{}", port)
}

/// Starts the router on an ephemeral port over fresh in-memory stores.
pub async fn spawn_app() -> TestApp {
    let beers = Arc::new(InMemoryRepository::<Beer>::new());
    let customers = Arc::new(InMemoryRepository::<Customer>::new());
    let app_state = transport::http::AppState::new(
        beers.clone(),
        customers.clone(),
        PatchTimestampPolicy::OnChange,
    );

    TestApp {
        base_url: serve(app_state).await,
        client: reqwest::Client::new(),
        beers,
        customers,
    }
}

/// Starts the router over stores that fail every call; returns the base url.
pub async fn spawn_unavailable_app() -> String {
    let app_state = transport::http::AppState::new(
        Arc::new(UnavailableRepository),
        Arc::new(UnavailableRepository),
        PatchTimestampPolicy::OnChange,
    );
    serve(app_state).await
}
