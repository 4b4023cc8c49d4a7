use crate::domain::model::{BeerDto, CustomerDto};
use crate::transport::http::handlers::{beer, customer, health};
use crate::transport::http::types::{ApiResponse, AppState};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

pub const BEER_PATH: &str = "/api/v3/beer";
pub const BEER_PATH_ID: &str = "/api/v3/beer/:beer_id";
pub const CUSTOMER_PATH: &str = "/api/v3/customer";
pub const CUSTOMER_PATH_ID: &str = "/api/v3/customer/:customer_id";

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        beer::list_beers,
        beer::get_beer_by_id,
        beer::create_beer,
        beer::update_beer_by_id,
        beer::patch_beer_by_id,
        beer::delete_beer_by_id,
        customer::list_customers,
        customer::get_customer_by_id,
        customer::create_customer,
        customer::update_customer_by_id,
        customer::patch_customer_by_id,
        customer::delete_customer_by_id
    ),
    components(schemas(ApiResponse, BeerDto, CustomerDto))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(BEER_PATH, get(beer::list_beers).post(beer::create_beer))
        .route(
            BEER_PATH_ID,
            get(beer::get_beer_by_id)
                .put(beer::update_beer_by_id)
                .patch(beer::patch_beer_by_id)
                .delete(beer::delete_beer_by_id),
        )
        .route(
            CUSTOMER_PATH,
            get(customer::list_customers).post(customer::create_customer),
        )
        .route(
            CUSTOMER_PATH_ID,
            get(customer::get_customer_by_id)
                .put(customer::update_customer_by_id)
                .patch(customer::patch_customer_by_id)
                .delete(customer::delete_customer_by_id),
        )
        .with_state(app_state)
}
