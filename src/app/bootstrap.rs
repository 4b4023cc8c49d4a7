//! Development fixtures.
//!
//! Wipes both collections and loads a small known data set. Only the server
//! binary calls this, and only when `Config::seed_enabled()` allows it.

use crate::domain::model::{Beer, Customer};
use crate::storage::{Repository, StoreError};
use rust_decimal::Decimal;
use tracing::info;

pub async fn seed(
    beers: &dyn Repository<Beer>,
    customers: &dyn Repository<Customer>,
) -> Result<(), StoreError> {
    beers.delete_all().await?;
    if beers.count().await? == 0 {
        let loaded = beers.save_all(beer_fixtures()).await?;
        info!(count = loaded.len(), "loaded beer data");
    }

    customers.delete_all().await?;
    if customers.count().await? == 0 {
        let loaded = customers.save_all(customer_fixtures()).await?;
        info!(count = loaded.len(), "loaded customer data");
    }
    Ok(())
}

fn beer(name: &str, style: &str, upc: &str, cents: i64, quantity: i32) -> Beer {
    Beer {
        beer_name: name.to_string(),
        beer_style: Some(style.to_string()),
        upc: Some(upc.to_string()),
        price: Some(Decimal::new(cents, 2)),
        quantity_on_hand: Some(quantity),
        ..Default::default()
    }
}

pub fn beer_fixtures() -> Vec<Beer> {
    vec![
        beer("Galaxy Cat", "Pale Ale", "123456", 1299, 122),
        beer("Crank", "Pale Ale", "1235622", 1199, 392),
        beer("Sunshine City", "IPA", "123456", 1399, 144),
    ]
}

pub fn customer_fixtures() -> Vec<Customer> {
    ["Alice", "Bob", "Charlie"]
        .into_iter()
        .map(|name| Customer {
            customer_name: name.to_string(),
            ..Default::default()
        })
        .collect()
}
