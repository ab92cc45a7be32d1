//! Request parameters for dispute operations.

use super::dispute::{Dispute, EvidenceFields, FieldValue, Product, is_zero};
use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool {
    !*b
}

/// Body of a create dispute request.
///
/// See <https://www.chargehound.com/docs/api/index.html#creating-a-dispute>.
/// `id`, `charge`, `reason`, the timestamps, `currency` and `amount` are
/// required by the API; everything else is sent only when set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateDisputeParams {
    /// Dispute id in your payment processor, e.g. `dp_XXX` for Stripe
    pub id: String,
    /// Disputed charge id, e.g. `ch_XXX` for Stripe
    pub charge: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub customer: String,
    pub reason: String,
    pub charged_at: String,
    pub disputed_at: String,
    pub due_by: String,
    pub currency: String,
    /// Amount in cents (or other minor currency unit)
    pub amount: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub processor: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub state: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reversal_currency: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub fee: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub reversal_amount: i64,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub reversal_total: i64,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_charge_refundable: bool,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub submitted_count: i64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_line1_check: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub address_zip_check: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cvc_check: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub template: String,
    #[serde(default, skip_serializing_if = "EvidenceFields::is_empty")]
    pub fields: EvidenceFields,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub kind: String,
    /// Submit evidence right after creation
    #[serde(default, skip_serializing_if = "is_false")]
    pub submit: bool,
    /// Queue evidence for submission right after creation
    #[serde(default, skip_serializing_if = "is_false")]
    pub queue: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub reference_url: String,
}

/// The mutable subset of a dispute, sent by update and submit.
///
/// Empty strings, `false`, empty maps and empty lists are left out of the
/// body entirely, so only the fields that were set reach the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisputeUpdate {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub template: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub charge: String,
    /// Connected account id (when several accounts are connected)
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub user_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub reference_url: String,
    /// Submit even if template fields are missing
    #[serde(skip_serializing_if = "is_false")]
    pub force: bool,
    /// Queue the submission instead of sending it immediately
    #[serde(skip_serializing_if = "is_false")]
    pub queue: bool,
    #[serde(skip_serializing_if = "EvidenceFields::is_empty")]
    pub fields: EvidenceFields,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub products: Vec<Product>,
}

impl DisputeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    pub fn charge(mut self, charge: impl Into<String>) -> Self {
        self.charge = charge.into();
        self
    }

    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = account.into();
        self
    }

    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    pub fn reference_url(mut self, url: impl Into<String>) -> Self {
        self.reference_url = url.into();
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn queue(mut self, queue: bool) -> Self {
        self.queue = queue;
        self
    }

    /// Set a single evidence field.
    pub fn field(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn fields(mut self, fields: EvidenceFields) -> Self {
        self.fields.extend(fields);
        self
    }

    pub fn product(mut self, product: Product) -> Self {
        self.products.push(product);
        self
    }

    pub fn products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }
}

impl From<&Dispute> for DisputeUpdate {
    /// Carry over the mutable fields of a retrieved dispute; read-only,
    /// server computed fields are never copied.
    fn from(dispute: &Dispute) -> Self {
        Self {
            template: dispute.template.clone().unwrap_or_default(),
            charge: dispute.charge.clone().unwrap_or_default(),
            account: String::new(),
            user_id: dispute.user_id.clone().unwrap_or_default(),
            reference_url: dispute.reference_url.clone().unwrap_or_default(),
            force: false,
            queue: false,
            fields: dispute.fields.clone(),
            products: dispute.products.clone(),
        }
    }
}

/// Filters and cursors of a list disputes request.
///
/// At most one cursor is sent: `starting_after` wins over `ending_before`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListDisputesParams {
    /// Page size; omitted unless positive
    pub limit: Option<i64>,
    pub starting_after: Option<String>,
    pub ending_before: Option<String>,
    /// Only return disputes in this state
    pub state: Option<String>,
}

impl ListDisputesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn starting_after(mut self, cursor: impl Into<String>) -> Self {
        self.starting_after = Some(cursor.into());
        self
    }

    pub fn ending_before(mut self, cursor: impl Into<String>) -> Self {
        self.ending_before = Some(cursor.into());
        self
    }

    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Query pairs to send, in key order. Unset and empty values are skipped.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        fn non_empty(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }

        let after = non_empty(&self.starting_after);
        let before = match after {
            Some(_) => None,
            None => non_empty(&self.ending_before),
        };

        let mut query = Vec::new();
        if let Some(before) = before {
            query.push(("ending_before", before.to_string()));
        }
        if let Some(limit) = self.limit.filter(|l| *l > 0) {
            query.push(("limit", limit.to_string()));
        }
        if let Some(after) = after {
            query.push(("starting_after", after.to_string()));
        }
        if let Some(state) = non_empty(&self.state) {
            query.push(("state", state.to_string()));
        }
        query
    }
}
