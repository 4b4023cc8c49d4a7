//! Entity <-> DTO conversion.
//!
//! Plain field copies. The store key is a UUID internally and an opaque string on
//! the wire; an inbound id that does not parse is dropped rather than rejected,
//! since writes never trust a client-supplied id anyway.

use crate::domain::model::{Beer, BeerDto, Customer, CustomerDto};
use uuid::Uuid;

/// Parses a wire id into a store key. Malformed ids map to `None`.
pub fn parse_id(id: &str) -> Option<Uuid> {
    Uuid::parse_str(id.trim()).ok()
}

impl From<Beer> for BeerDto {
    fn from(beer: Beer) -> Self {
        Self {
            id: beer.id.map(|id| id.to_string()),
            beer_name: Some(beer.beer_name),
            beer_style: beer.beer_style,
            upc: beer.upc,
            price: beer.price,
            quantity_on_hand: beer.quantity_on_hand,
            created_date: beer.created_date,
            last_modified_date: beer.last_modified_date,
        }
    }
}

impl From<BeerDto> for Beer {
    fn from(dto: BeerDto) -> Self {
        Self {
            id: dto.id.as_deref().and_then(parse_id),
            beer_name: dto.beer_name.unwrap_or_default(),
            beer_style: dto.beer_style,
            upc: dto.upc,
            price: dto.price,
            quantity_on_hand: dto.quantity_on_hand,
            created_date: dto.created_date,
            last_modified_date: dto.last_modified_date,
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id.map(|id| id.to_string()),
            customer_name: Some(customer.customer_name),
            created_date: customer.created_date,
            last_modified_date: customer.last_modified_date,
        }
    }
}

impl From<CustomerDto> for Customer {
    fn from(dto: CustomerDto) -> Self {
        Self {
            id: dto.id.as_deref().and_then(parse_id),
            customer_name: dto.customer_name.unwrap_or_default(),
            created_date: dto.created_date,
            last_modified_date: dto.last_modified_date,
        }
    }
}
