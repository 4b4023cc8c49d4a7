//! Beer endpoints, end to end over HTTP against an in-memory store.

mod common;

use brewery_api::app::bootstrap;
use brewery_api::transport::http::BEER_PATH;
use brewery_api::BeerDto;
use common::{spawn_app, TestApp};
use reqwest::{header, StatusCode};
use rust_decimal::Decimal;
use serde_json::json;

fn space_dust() -> serde_json::Value {
    json!({
        "beerName": "Space Dust",
        "beerStyle": "IPA",
        "upc": "123456789",
        "price": 10
    })
}

/// POSTs a beer and follows the Location header back to the stored DTO.
async fn saved_test_beer(app: &TestApp) -> BeerDto {
    let resp = app
        .client
        .post(app.url(BEER_PATH))
        .json(&space_dust())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
    app.client
        .get(app.url(&location))
        .send()
        .await
        .unwrap()
        .json::<BeerDto>()
        .await
        .unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_beers_after_seeding() {
    let app = spawn_app().await;
    bootstrap::seed(app.beers.as_ref(), app.customers.as_ref())
        .await
        .unwrap();

    let resp = app.client.get(app.url(BEER_PATH)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[header::CONTENT_TYPE].to_str().unwrap(),
        "application/json"
    );
    let beers: Vec<BeerDto> = resp.json().await.unwrap();
    assert_eq!(beers.len(), 3);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_beers_on_empty_store_is_an_empty_array() {
    let app = spawn_app().await;
    let resp = app.client.get(app.url(BEER_PATH)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<serde_json::Value>().await.unwrap(), json!([]));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn list_beers_by_style() {
    let app = spawn_app().await;
    bootstrap::seed(app.beers.as_ref(), app.customers.as_ref())
        .await
        .unwrap();
    let mut test_beer = space_dust();
    test_beer["beerStyle"] = json!("TEST");
    app.client
        .post(app.url(BEER_PATH))
        .json(&test_beer)
        .send()
        .await
        .unwrap();

    let resp = app
        .client
        .get(app.url(BEER_PATH))
        .query(&[("beerStyle", "TEST")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let beers: Vec<BeerDto> = resp.json().await.unwrap();
    assert_eq!(beers.len(), 1);
    assert_eq!(beers[0].beer_name.as_deref(), Some("Space Dust"));

    let by_name: Vec<BeerDto> = app
        .client
        .get(app.url(BEER_PATH))
        .query(&[("beerName", "Crank")])
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(by_name.len(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_then_get_via_location() {
    let app = spawn_app().await;
    let resp = app
        .client
        .post(app.url(BEER_PATH))
        .json(&json!({
            "beerName": "Galaxy Cat",
            "beerStyle": "Pale Ale",
            "upc": "123456",
            "price": 12.99,
            "quantityOnHand": 122
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let location = resp.headers()[header::LOCATION].to_str().unwrap().to_string();
    assert!(location.starts_with("/api/v3/beer/"));

    let resp = app.client.get(app.url(&location)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let beer: BeerDto = resp.json().await.unwrap();
    assert_eq!(beer.id.as_deref(), location.strip_prefix("/api/v3/beer/"));
    assert_eq!(beer.beer_name.as_deref(), Some("Galaxy Cat"));
    assert_eq!(beer.beer_style.as_deref(), Some("Pale Ale"));
    assert_eq!(beer.upc.as_deref(), Some("123456"));
    assert_eq!(beer.price.map(|p| p.round_dp(2)), Some(Decimal::new(1299, 2)));
    assert_eq!(beer.quantity_on_hand, Some(122));
    assert!(beer.created_date.is_some());
    assert!(beer.last_modified_date.is_some());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn create_beer_bad_data() {
    let app = spawn_app().await;
    let mut bad = space_dust();
    bad["beerName"] = json!("");

    let resp = app
        .client
        .post(app.url(BEER_PATH))
        .json(&bad)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
    assert!(body["data"].is_object());

    // nothing was written
    let beers: Vec<BeerDto> = app
        .client
        .get(app.url(BEER_PATH))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(beers.is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn malformed_json_is_unprocessable() {
    let app = spawn_app().await;
    let resp = app
        .client
        .post(app.url(BEER_PATH))
        .header(header::CONTENT_TYPE, "application/json")
        .body("{\"beerName\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_json_content_type_is_unsupported() {
    let app = spawn_app().await;
    let resp = app
        .client
        .post(app.url(BEER_PATH))
        .body(space_dust().to_string())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn update_beer() {
    let app = spawn_app().await;
    let mut beer = saved_test_beer(&app).await;
    let id = beer.id.clone().unwrap();
    beer.beer_name = Some("New Name".to_string());

    let resp = app
        .client
        .put(app.url(&format!("{}/{}", BEER_PATH, id)))
        .json(&beer)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let fetched: BeerDto = app
        .client
        .get(app.url(&format!("{}/{}", BEER_PATH, id)))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.beer_name.as_deref(), Some("New Name"));
    assert_eq!(fetched.created_date, beer.created_date);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn update_beer_not_found() {
    let app = spawn_app().await;
    let resp = app
        .client
        .put(app.url(&format!("{}/999", BEER_PATH)))
        .json(&space_dust())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn update_beer_bad_request() {
    let app = spawn_app().await;
    let beer = saved_test_beer(&app).await;
    let mut bad = space_dust();
    bad["beerName"] = json!("");

    let resp = app
        .client
        .put(app.url(&format!("{}/{}", BEER_PATH, beer.id.unwrap())))
        .json(&bad)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn patch_beer_style_only() {
    let app = spawn_app().await;
    let beer = saved_test_beer(&app).await;
    let path = format!("{}/{}", BEER_PATH, beer.id.clone().unwrap());

    let resp = app
        .client
        .patch(app.url(&path))
        .json(&json!({ "beerStyle": "ALE" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let fetched: BeerDto = app
        .client
        .get(app.url(&path))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched.beer_name.as_deref(), Some("Space Dust"));
    assert_eq!(fetched.beer_style.as_deref(), Some("ALE"));
    assert_eq!(fetched.upc, beer.upc);
    assert_eq!(fetched.price, beer.price);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn patch_ignores_blank_fields() {
    let app = spawn_app().await;
    let beer = saved_test_beer(&app).await;
    let path = format!("{}/{}", BEER_PATH, beer.id.clone().unwrap());

    let resp = app
        .client
        .patch(app.url(&path))
        .json(&json!({ "beerName": "  ", "price": 0, "quantityOnHand": 0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let fetched: BeerDto = app
        .client
        .get(app.url(&path))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, beer);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn patch_beer_not_found() {
    let app = spawn_app().await;
    let resp = app
        .client
        .patch(app.url(&format!("{}/999", BEER_PATH)))
        .json(&space_dust())
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn delete_beer_then_get_is_not_found() {
    let app = spawn_app().await;
    let beer = saved_test_beer(&app).await;
    let path = format!("{}/{}", BEER_PATH, beer.id.unwrap());

    let resp = app.client.delete(app.url(&path)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = app.client.get(app.url(&path)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = app.client.delete(app.url(&path)).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn get_by_id_not_found() {
    let app = spawn_app().await;
    let resp = app
        .client
        .get(app.url(&format!("{}/999", BEER_PATH)))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["success"], json!(false));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn health_reports_ok() {
    let app = spawn_app().await;
    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["data"]["status"], json!("ok"));
}
