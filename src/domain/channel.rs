//! Orchestrator payloads for channel, peer and node operations.
//!
//! Bark backs none of these; the types exist so the client interface is
//! complete and callers can build requests without caring which backend
//! is plugged in.

use serde::{Deserialize, Serialize};

use super::Millisats;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub id: String,
    pub remote_pubkey: String,
    pub funding_tx_id: String,
    pub local_balance: Millisats,
    pub remote_balance: Millisats,
    pub active: bool,
    pub public: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TlvRecord {
    pub tlv_type: u64,
    /// Hex-encoded value
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayInvoiceResponse {
    pub preimage: String,
    pub fee: Millisats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayKeysendResponse {
    pub fee: Millisats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectPeerRequest {
    pub pubkey: String,
    pub address: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerDetails {
    pub node_id: String,
    pub address: String,
    pub is_persisted: bool,
    pub is_connected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenChannelRequest {
    pub pubkey: String,
    pub amount_sats: i64,
    pub public: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpenChannelResponse {
    pub funding_tx_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseChannelRequest {
    pub channel_id: String,
    pub node_id: String,
    pub force: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloseChannelResponse {}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateChannelRequest {
    pub channel_id: String,
    pub node_id: String,
    pub forwarding_fee_base_msat: u32,
    pub max_dust_htlc_exposure_from_fee_rate_multiplier: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnchainTransaction {
    pub amount_sat: u64,
    pub created_at: u64,
    pub state: String,
    pub transaction_type: String,
    pub num_confirmations: u32,
    pub tx_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNodeCommandArgDef {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNodeCommandDef {
    pub name: String,
    pub description: String,
    pub args: Vec<CustomNodeCommandArgDef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomNodeCommandRequest {
    pub name: String,
    pub args: Vec<(String, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomNodeCommandResponse {
    pub response: serde_json::Value,
}

/// Filters the orchestrator may pass when listing transactions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListTransactionsFilter {
    pub from: u64,
    pub until: u64,
    pub limit: u64,
    pub offset: u64,
    pub unpaid: bool,
    pub invoice_type: String,
}

impl ListTransactionsFilter {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
