use super::{assign, has_text, not_blank};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Persisted beer record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Beer {
    pub id: Option<Uuid>,
    pub beer_name: String,
    pub beer_style: Option<String>,
    pub upc: Option<String>,
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

impl Beer {
    /// Full update: every mutable field takes the DTO's value, including empty
    /// or missing ones. Identity and audit fields are left to the store.
    pub fn overwrite_from(&mut self, dto: BeerDto) {
        self.beer_name = dto.beer_name.unwrap_or_default();
        self.beer_style = dto.beer_style;
        self.upc = dto.upc;
        self.price = dto.price;
        self.quantity_on_hand = dto.quantity_on_hand;
    }
}

/// Wire representation of a beer.
///
/// The validation attributes describe a full write (create / PUT). Partial
/// updates go through [`BeerPatch`] instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BeerDto {
    pub id: Option<String>,
    #[validate(required, length(min = 3, max = 255), custom(function = "not_blank"))]
    pub beer_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub beer_style: Option<String>,
    #[validate(length(max = 25))]
    pub upc: Option<String>,
    #[validate(custom(function = "non_negative"))]
    pub price: Option<Decimal>,
    #[validate(range(min = 0))]
    pub quantity_on_hand: Option<i32>,
    pub created_date: Option<DateTime<Utc>>,
    pub last_modified_date: Option<DateTime<Utc>>,
}

fn non_negative(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("non_negative"));
    }
    Ok(())
}

/// The fields a PATCH actually applies.
///
/// Built from a [`BeerDto`]: blank strings and non-positive numbers count as
/// unset. Bounds only apply to fields that remain set.
#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct BeerPatch {
    #[validate(length(min = 3, max = 255))]
    pub beer_name: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub beer_style: Option<String>,
    #[validate(length(max = 25))]
    pub upc: Option<String>,
    pub price: Option<Decimal>,
    pub quantity_on_hand: Option<i32>,
}

impl From<BeerDto> for BeerPatch {
    fn from(dto: BeerDto) -> Self {
        Self {
            beer_name: dto.beer_name.filter(|s| has_text(s)),
            beer_style: dto.beer_style.filter(|s| has_text(s)),
            upc: dto.upc.filter(|s| has_text(s)),
            price: dto.price.filter(|p| p.is_sign_positive() && !p.is_zero()),
            quantity_on_hand: dto.quantity_on_hand.filter(|q| *q > 0),
        }
    }
}

impl BeerPatch {
    pub fn is_empty(&self) -> bool {
        self.beer_name.is_none()
            && self.beer_style.is_none()
            && self.upc.is_none()
            && self.price.is_none()
            && self.quantity_on_hand.is_none()
    }

    /// Applies the set fields to `beer`. Returns whether anything changed.
    pub fn apply_to(self, beer: &mut Beer) -> bool {
        let mut changed = false;
        if let Some(name) = self.beer_name {
            changed |= assign(&mut beer.beer_name, name);
        }
        if let Some(style) = self.beer_style {
            changed |= assign(&mut beer.beer_style, Some(style));
        }
        if let Some(upc) = self.upc {
            changed |= assign(&mut beer.upc, Some(upc));
        }
        if let Some(price) = self.price {
            changed |= assign(&mut beer.price, Some(price));
        }
        if let Some(quantity) = self.quantity_on_hand {
            changed |= assign(&mut beer.quantity_on_hand, Some(quantity));
        }
        changed
    }
}

/// Exact-match filters accepted by `GET /api/v3/beer`.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct BeerQuery {
    pub beer_name: Option<String>,
    pub beer_style: Option<String>,
}
