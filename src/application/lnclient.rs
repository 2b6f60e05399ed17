//! The Lightning client interface the wallet orchestrator drives.
//!
//! The interface is wide and most backends can only serve part of it. Every
//! fallible operation has a default body returning
//! [`LnClientError::NotSupported`], so a backend overrides exactly the
//! operations it can back and inherits the refusal for everything else.
//! Defaults never touch the network.
//!
//! Operations return `Send` futures so a caller generic over the backend can
//! spawn them onto a multi-threaded runtime. Implementors may still write
//! them as `async fn`.

use std::path::PathBuf;

use crate::domain::{
    Balances, Channel, CloseChannelRequest, CloseChannelResponse, ConnectPeerRequest,
    CustomNodeCommandDef, CustomNodeCommandRequest, CustomNodeCommandResponse,
    ListTransactionsFilter, Millisats, Nip47Method, Nip47Notification, NodeConnectionInfo,
    NodeInfo, NodeStatus, OnchainBalance, OnchainTransaction, OpenChannelRequest,
    OpenChannelResponse, PayInvoiceResponse, PayKeysendResponse, PeerDetails, Sats, TlvRecord,
    Transaction, UpdateChannelRequest,
};

use super::{LnClientError, Result};

pub trait LnClient: Send + Sync {
    /// Node public key, hex encoded.
    fn get_pubkey(&self) -> String;

    /// NIP-47 methods this backend can serve.
    fn get_supported_nip47_methods(&self) -> Vec<Nip47Method>;

    /// Hint that the orchestrator wants fresh wallet state on the next sync.
    fn update_last_wallet_sync_request(&self);

    fn supports(&self, method: Nip47Method) -> bool {
        self.get_supported_nip47_methods().contains(&method)
    }

    fn get_supported_nip47_notification_types(&self) -> Vec<Nip47Notification> {
        Vec::new()
    }

    fn get_custom_node_command_definitions(&self) -> Vec<CustomNodeCommandDef> {
        Vec::new()
    }

    fn execute_custom_node_command(
        &self,
        command: &CustomNodeCommandRequest,
    ) -> impl Future<Output = Result<CustomNodeCommandResponse>> + Send {
        let name = command.name.clone();
        async move { Err(LnClientError::UnknownCustomNodeCommand(name)) }
    }

    // ========================
    // Payments
    // ========================

    fn send_payment_sync(
        &self,
        _pay_req: &str,
        _amount_sat: Option<Sats>,
    ) -> impl Future<Output = Result<PayInvoiceResponse>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn send_keysend(
        &self,
        _amount: Millisats,
        _destination: &str,
        _custom_records: &[TlvRecord],
        _preimage: &str,
    ) -> impl Future<Output = Result<PayKeysendResponse>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn send_payment_probes(&self, _invoice: &str) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn send_spontaneous_payment_probes(
        &self,
        _amount_msat: Millisats,
        _node_id: &str,
    ) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    // ========================
    // Invoices
    // ========================

    fn make_invoice(
        &self,
        _amount: Millisats,
        _description: &str,
        _description_hash: &str,
        _expiry: i64,
        _through_node_pubkey: Option<&str>,
    ) -> impl Future<Output = Result<Transaction>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn make_hold_invoice(
        &self,
        _amount: Millisats,
        _description: &str,
        _description_hash: &str,
        _expiry: i64,
        _payment_hash: &str,
    ) -> impl Future<Output = Result<Transaction>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn settle_hold_invoice(&self, _preimage: &str) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn cancel_hold_invoice(&self, _payment_hash: &str) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn lookup_invoice(&self, _payment_hash: &str) -> impl Future<Output = Result<Transaction>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn make_offer(&self, _description: &str) -> impl Future<Output = Result<String>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn list_transactions(&self, _filter: &ListTransactionsFilter) -> impl Future<Output = Result<Vec<Transaction>>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    // ========================
    // Balances and on-chain funds
    // ========================

    fn get_balances(&self, _include_inactive_channels: bool) -> impl Future<Output = Result<Balances>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn get_onchain_balance(&self) -> impl Future<Output = Result<OnchainBalance>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn list_onchain_transactions(&self) -> impl Future<Output = Result<Vec<OnchainTransaction>>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn get_new_onchain_address(&self) -> impl Future<Output = Result<String>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn redeem_onchain_funds(
        &self,
        _to_address: &str,
        _amount: Sats,
        _fee_rate: Option<u64>,
        _send_all: bool,
    ) -> impl Future<Output = Result<String>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    // ========================
    // Node
    // ========================

    fn get_info(&self) -> impl Future<Output = Result<NodeInfo>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn get_node_connection_info(&self) -> impl Future<Output = Result<NodeConnectionInfo>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn get_node_status(&self) -> impl Future<Output = Result<NodeStatus>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn sign_message(&self, _message: &str) -> impl Future<Output = Result<String>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn get_log_output(&self, _max_len: usize) -> impl Future<Output = Result<Vec<u8>>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn get_storage_dir(&self) -> Result<PathBuf> {
        Err(LnClientError::NotSupported)
    }

    fn get_network_graph(&self, _node_ids: &[String]) -> impl Future<Output = Result<serde_json::Value>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn reset_router(&self, _key: &str) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn shutdown(&self) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    // ========================
    // Channels and peers
    // ========================

    fn list_channels(&self) -> impl Future<Output = Result<Vec<Channel>>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn open_channel(&self, _request: &OpenChannelRequest) -> impl Future<Output = Result<OpenChannelResponse>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn close_channel(&self, _request: &CloseChannelRequest) -> impl Future<Output = Result<CloseChannelResponse>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn update_channel(&self, _request: &UpdateChannelRequest) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn connect_peer(&self, _request: &ConnectPeerRequest) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn disconnect_peer(&self, _peer_id: &str) -> impl Future<Output = Result<()>> + Send {
        async { Err(LnClientError::NotSupported) }
    }

    fn list_peers(&self) -> impl Future<Output = Result<Vec<PeerDetails>>> + Send {
        async { Err(LnClientError::NotSupported) }
    }
}
