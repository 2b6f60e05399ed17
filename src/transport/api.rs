//! Request and response payloads for the bark Lightning endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::Sats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightningPayRequest {
    pub destination: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_sat: Option<Sats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LightningPayResponse {
    #[serde(default)]
    pub message: String,
    pub preimage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LightningInvoiceRequest {
    pub amount_sat: Sats,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InvoiceInfo {
    pub invoice: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LightningReceiveStatus {
    #[serde(default)]
    pub payment_hash: String,
    #[serde(default)]
    pub payment_preimage: String,
    #[serde(default)]
    pub invoice: String,
    #[serde(default)]
    pub preimage_revealed_at: Option<String>,
}
