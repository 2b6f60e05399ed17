//! Node identity reported to the orchestrator.
//!
//! Bark is a custodial-style wallet daemon with no Lightning node of its own,
//! so these values are fixed placeholders for the Ark server's gateway node.
//! They are not read from the service and never change at runtime.

use serde::{Deserialize, Serialize};

pub const NODE_PUBKEY: &str = "0326e692c455dd554c709bbb470b0ca7e0bb04152f777d1445fd0bf3709a2833a3";
pub const NODE_ALIAS: &str = "allNice | torq.co | second.tech";
pub const NODE_NETWORK: &str = "mainnet";
pub const NODE_ADDRESS: &str = "57.129.59.146";
pub const NODE_PORT: u16 = 9735;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub alias: String,
    pub color: String,
    pub pubkey: String,
    pub network: String,
    pub block_height: u32,
    pub block_hash: String,
}

impl NodeInfo {
    pub fn placeholder() -> Self {
        Self {
            alias: NODE_ALIAS.to_string(),
            color: String::new(),
            pubkey: NODE_PUBKEY.to_string(),
            network: NODE_NETWORK.to_string(),
            block_height: 0,
            block_hash: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConnectionInfo {
    pub pubkey: String,
    pub address: String,
    pub port: u16,
}

impl NodeConnectionInfo {
    pub fn placeholder() -> Self {
        Self {
            pubkey: NODE_PUBKEY.to_string(),
            address: NODE_ADDRESS.to_string(),
            port: NODE_PORT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub is_ready: bool,
    pub internal_node_status: Option<serde_json::Value>,
}
