//! Domain DTOs for the Tremendous API.
//!
//! # Design
//! Decode-only records (`Campaign`, `Order`, `Reward`, `Product`) fall back to
//! the zero value for every field the server leaves out or sends as `null`.
//! Input records drop only the fields the API treats as optional when empty;
//! the identifiers wrapped in `Nullable` are sent as `null` unless explicitly
//! omitted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

/// Treat an explicit JSON `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A JSON field that distinguishes "send null" from "leave the key out".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Nullable<T> {
    /// The key is not written at all.
    Omitted,
    /// The key is written with a `null` value.
    #[default]
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    pub fn is_omitted(&self) -> bool {
        matches!(self, Nullable::Omitted)
    }

    /// The present value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Nullable::Value(v) => Some(v),
            _ => None,
        }
    }

    fn omitted() -> Self {
        Nullable::Omitted
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Nullable::Null, Nullable::Value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(v) => v.serialize(serializer),
            Nullable::Null | Nullable::Omitted => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

// ---------------------------------------------------------------------------
// Campaigns
// ---------------------------------------------------------------------------

/// A single campaign record.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Campaign {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub status: String,
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

/// An order as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Order {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub external_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub message: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub payment: Payment,
    #[serde(default, deserialize_with = "null_as_default")]
    pub rewards: Vec<Reward>,
}

/// Payment details attached to an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Payment {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub funding_source_id: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub amount: f64,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub currency_code: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub object: String,
}

/// A single payout belonging to an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Reward {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub value: OrderDenomination,
    #[serde(default, deserialize_with = "null_as_default")]
    pub delivery: OrderDelivery,
    #[serde(default, deserialize_with = "null_as_default")]
    pub recipient: OrderRecipient,
}

/// Body for `POST /orders`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderArgs {
    #[serde(default = "Nullable::omitted", skip_serializing_if = "Nullable::is_omitted")]
    pub campaign_id: Nullable<String>,
    #[serde(default = "Nullable::omitted", skip_serializing_if = "Nullable::is_omitted")]
    pub external_id: Nullable<String>,
    pub payment: OrderPaymentArg,
    pub reward: RewardArg,
}

/// Funding source charged for an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderPaymentArg {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub funding_source_id: String,
}

/// Monetary value of a reward.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OrderDenomination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub denomination: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub currency_code: String,
}

/// How a reward is delivered. `method` is one of `EMAIL`, `LINK` or `PHONE`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderDelivery {
    #[serde(default, deserialize_with = "null_as_default")]
    pub method: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub link: String,
}

/// Reward portion of an order creation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RewardArg {
    #[serde(default = "Nullable::omitted", skip_serializing_if = "Nullable::is_omitted")]
    pub campaign_id: Nullable<String>,
    pub delivery: OrderDelivery,
    /// Sent as `null` when unset.
    #[serde(default)]
    pub products: Option<Vec<String>>,
    pub recipient: OrderRecipient,
    pub value: OrderDenomination,
}

/// Who receives a reward.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRecipient {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

/// A catalog product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub brand: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "is_zero")]
    pub price: f64,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub currency: String,
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "String::is_empty")]
    pub object: String,
}

/// Body for `POST /products`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateProductArgs {
    pub product: CreateProduct,
}

/// Fields accepted when creating a product.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreateProduct {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub brand: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub price: f64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub currency: String,
}

/// Filters for `GET /products`. Empty filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListProductsOptions {
    /// ISO country code, e.g. `US` or `CA`.
    pub country: String,
}

impl ListProductsOptions {
    pub fn country(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
        }
    }
}
