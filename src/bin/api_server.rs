// src/bin/api_server.rs

use brewery_api::app::bootstrap;
use brewery_api::domain::model::{Beer, Customer};
use brewery_api::infra::config::{Config, StoreBackend};
use brewery_api::infra::telemetry;
use brewery_api::storage::postgres::{self, PgBeerRepository, PgCustomerRepository};
use brewery_api::storage::{InMemoryRepository, Repository};
use brewery_api::transport;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

type Stores = (Arc<dyn Repository<Beer>>, Arc<dyn Repository<Customer>>);

async fn open_stores(config: &Config) -> anyhow::Result<Stores> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL must be set"))?;
            let pool = postgres::connect(url, config.db_max_connections).await?;
            info!("connected to postgres; schema ready");
            Ok((
                Arc::new(PgBeerRepository::new(pool.clone())),
                Arc::new(PgCustomerRepository::new(pool)),
            ))
        }
        StoreBackend::Memory => {
            info!("using in-memory store; data is lost on exit");
            Ok((
                Arc::new(InMemoryRepository::<Beer>::new()),
                Arc::new(InMemoryRepository::<Customer>::new()),
            ))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init_tracing();
    let config = Config::from_env()?;
    info!(
        backend = ?config.store_backend,
        env = %config.app_env,
        patch_policy = ?config.patch_timestamp_policy,
        "starting brewery api"
    );

    let (beers, customers) = open_stores(&config).await?;

    // Fixtures are a development convenience, never part of a production start.
    if config.seed_enabled() {
        bootstrap::seed(beers.as_ref(), customers.as_ref()).await?;
    }

    let app_state = transport::http::AppState::new(beers, customers, config.patch_timestamp_policy);

    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("API server listening on http://{}", config.bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutdown signal received");
        })
        .await?;

    Ok(())
}
