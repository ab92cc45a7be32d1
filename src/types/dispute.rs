//! Dispute resource shapes.
//!
//! Field names mirror the Chargehound API. See
//! <https://www.chargehound.com/docs/api/index.html#disputes>.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Evidence fields keyed by field name.
pub type EvidenceFields = BTreeMap<String, FieldValue>;

/// A dynamically typed evidence value.
///
/// Values that are neither scalars nor `null` (arrays, objects) are kept
/// as raw JSON so a decoded dispute always re-encodes the same keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`
    Unsigned(u64),
    Float(f64),
    Text(String),
    Null,
    Json(serde_json::Value),
}

impl FieldValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Integer(n) => u64::try_from(*n).ok(),
            Self::Unsigned(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(n) => Some(*n as f64),
            Self::Unsigned(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(n) => Self::Integer(n),
            Err(_) => Self::Unsigned(value),
        }
    }
}

/// A product in the disputed order.
///
/// Empty members are left out of the serialized body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub sku: String,
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub quantity: i64,
    /// Amount in cents (or other minor currency unit)
    #[serde(skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub amount: i64,
    #[serde(skip_serializing_if = "String::is_empty", deserialize_with = "null_as_default")]
    pub url: String,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_amount(mut self, amount: i64) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }
}

/// A dispute, as returned by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dispute {
    /// Identifier set by the payment processor, e.g. `dp_XXX` for Stripe
    pub id: String,
    /// One of `needs_response`, `submitted`, `under_review`, `won`, `lost`, ...
    pub state: Option<String>,
    /// Bank provided reason, e.g. `fraudulent`, `general`, `duplicate`, ...
    pub reason: Option<String>,
    pub charged_at: Option<String>,
    pub disputed_at: Option<String>,
    pub due_by: Option<String>,
    pub submitted_at: Option<String>,
    pub closed_at: Option<String>,
    pub submitted_count: Option<i64>,
    /// Id of the template attached to the dispute
    pub template: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub fields: EvidenceFields,
    /// Template fields that have not been provided yet
    #[serde(deserialize_with = "null_as_default")]
    pub missing_fields: serde_json::Map<String, serde_json::Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub products: Vec<Product>,
    pub charge: Option<String>,
    pub is_charge_refundable: Option<bool>,
    /// Amount in cents (or other minor currency unit)
    pub amount: Option<i64>,
    pub currency: Option<String>,
    pub fee: Option<i64>,
    pub reversal_amount: Option<i64>,
    pub reversal_currency: Option<String>,
    pub customer: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_purchase_ip: Option<String>,
    pub address_zip: Option<String>,
    pub address_line1_check: Option<String>,
    pub address_zip_check: Option<String>,
    pub cvc_check: Option<String>,
    pub statement_descriptor: Option<String>,
    /// Account id for Stripe connected accounts charged directly
    pub user_id: Option<String>,
    /// `chargeback`, `retrieval` or `pre_arbitration`
    pub kind: Option<String>,
    pub created: Option<String>,
    pub updated: Option<String>,
    /// `mock`, `braintree`, `api` or `stripe`
    pub source: Option<String>,
    pub processor: Option<String>,
    pub reference_url: Option<String>,
}

impl Dispute {
    pub fn charged_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.charged_at.as_deref())
    }

    pub fn disputed_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.disputed_at.as_deref())
    }

    pub fn due_by_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.due_by.as_deref())
    }

    pub fn submitted_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.submitted_at.as_deref())
    }

    pub fn closed_at_utc(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(self.closed_at.as_deref())
    }
}

/// A page of disputes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeList {
    #[serde(deserialize_with = "null_as_default")]
    pub data: Vec<Dispute>,
    pub has_more: bool,
    pub livemode: bool,
    pub object: Option<String>,
    pub url: Option<String>,
}

impl DisputeList {
    /// Cursor for the next page, when there is one.
    pub fn next_cursor(&self) -> Option<&str> {
        if self.has_more {
            self.data.last().map(|d| d.id.as_str())
        } else {
            None
        }
    }
}

/// The evidence response generated for a submitted dispute.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeResponse {
    pub livemode: bool,
    pub dispute_id: String,
    pub external_charge: Option<String>,
    pub account_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub evidence: serde_json::Map<String, serde_json::Value>,
    pub response_url: Option<String>,
}

fn parse_timestamp(value: Option<&str>) -> Option<DateTime<Utc>> {
    value
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

pub(crate) fn is_zero(n: &i64) -> bool {
    *n == 0
}

// Accept `null` wherever the API may send it for a collection or scalar.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
