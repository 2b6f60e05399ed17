use tracing::{debug, info};

use crate::config::Config;
use crate::domain::{
    Balances, Channel, ListTransactionsFilter, Millisats, Movement, NODE_PUBKEY, Nip47Method,
    Nip47Notification, NodeConnectionInfo, NodeInfo, NodeStatus, OnchainBalance,
    OnchainBalanceRecord, PayInvoiceResponse, SUPPORTED_NIP47_METHODS,
    SUPPORTED_NIP47_NOTIFICATIONS, Sats, Transaction, WalletBalance, map_movements, msat_to_sat,
    parse_optional_timestamp, sat_to_msat,
};
use crate::transport::api::{
    InvoiceInfo, LightningInvoiceRequest, LightningPayRequest, LightningPayResponse,
    LightningReceiveStatus,
};
use crate::transport::{ApiRequest, Transport, routes};

use super::{LnClient, Result};

/// Lightning client backed by a bark daemon.
///
/// Stateless: every call is one or two REST round trips, nothing is cached.
/// Clones share the underlying HTTP connection pool.
#[derive(Debug, Clone)]
pub struct BarkService {
    transport: Transport,
}

impl BarkService {
    pub fn new(config: &Config) -> Self {
        Self::from_transport(Transport::new(config))
    }

    /// Build the service around a caller-configured HTTP client.
    pub fn with_client(config: &Config, http: reqwest::Client) -> Self {
        Self::from_transport(Transport::with_client(config, http))
    }

    pub fn from_transport(transport: Transport) -> Self {
        Self { transport }
    }

    async fn wallet_balance(&self) -> Result<WalletBalance> {
        self.transport
            .execute(ApiRequest::get(routes::WALLET_BALANCE))
            .await
    }

    async fn onchain_balance_record(&self) -> Result<OnchainBalanceRecord> {
        self.transport
            .execute(ApiRequest::get(routes::ONCHAIN_BALANCE))
            .await
    }

    async fn movements(&self) -> Result<Vec<Movement>> {
        self.transport.execute(ApiRequest::get(routes::MOVEMENTS)).await
    }
}

impl LnClient for BarkService {
    fn get_pubkey(&self) -> String {
        NODE_PUBKEY.to_string()
    }

    fn get_supported_nip47_methods(&self) -> Vec<Nip47Method> {
        SUPPORTED_NIP47_METHODS.to_vec()
    }

    fn get_supported_nip47_notification_types(&self) -> Vec<Nip47Notification> {
        SUPPORTED_NIP47_NOTIFICATIONS.to_vec()
    }

    /// Bark keeps its own wallet in sync; there is nothing to trigger.
    fn update_last_wallet_sync_request(&self) {}

    async fn send_payment_sync(
        &self,
        pay_req: &str,
        amount_sat: Option<Sats>,
    ) -> Result<PayInvoiceResponse> {
        let body = LightningPayRequest {
            destination: pay_req.to_string(),
            amount_sat,
            comment: None,
        };
        let request = ApiRequest::post(routes::LIGHTNING_PAY).json(&body)?;
        let response: LightningPayResponse = self.transport.execute(request).await?;

        info!("Paid {}: {}", pay_req, response.message);

        // Bark does not report routing fees
        Ok(PayInvoiceResponse {
            preimage: response.preimage,
            fee: 0,
        })
    }

    async fn make_invoice(
        &self,
        amount: Millisats,
        description: &str,
        description_hash: &str,
        _expiry: i64,
        _through_node_pubkey: Option<&str>,
    ) -> Result<Transaction> {
        let body = LightningInvoiceRequest {
            amount_sat: msat_to_sat(amount),
        };
        if sat_to_msat(body.amount_sat) != amount {
            debug!(
                "Invoice amount {} msat truncated to {} sat",
                amount, body.amount_sat
            );
        }

        let request = ApiRequest::post(routes::LIGHTNING_RECEIVE_INVOICE).json(&body)?;
        let response: InvoiceInfo = self.transport.execute(request).await?;

        Ok(Transaction::incoming(response.invoice)
            .with_description(description)
            .with_description_hash(description_hash)
            .with_amount(amount))
    }

    async fn lookup_invoice(&self, payment_hash: &str) -> Result<Transaction> {
        let request =
            ApiRequest::get(routes::LIGHTNING_RECEIVE_STATUS).query("filter", payment_hash);
        let status: LightningReceiveStatus = self.transport.execute(request).await?;

        let settled_at = parse_optional_timestamp(status.preimage_revealed_at.as_deref());
        if settled_at.is_none() && status.preimage_revealed_at.is_some() {
            debug!(
                "Ignoring unparsable preimage_revealed_at for {}",
                status.payment_hash
            );
        }

        Ok(Transaction::incoming(status.invoice)
            .with_preimage(status.payment_preimage)
            .with_payment_hash(status.payment_hash)
            .with_settled_at(settled_at))
    }

    async fn list_transactions(&self, filter: &ListTransactionsFilter) -> Result<Vec<Transaction>> {
        // TODO: forward the filter once bark's movements endpoint supports paging
        if !filter.is_empty() {
            debug!("Movement filters are not supported by bark, ignoring {:?}", filter);
        }

        let movements = self.movements().await?;
        let mapping = map_movements(&movements);
        for (id, reason) in &mapping.skipped {
            debug!("Skipping movement {}: {}", id, reason);
        }

        Ok(mapping.transactions)
    }

    async fn get_balances(&self, _include_inactive_channels: bool) -> Result<Balances> {
        let wallet = self.wallet_balance().await?;
        let onchain = self.onchain_balance_record().await?;
        Ok(Balances::new(wallet, onchain))
    }

    async fn get_onchain_balance(&self) -> Result<OnchainBalance> {
        Ok(self.onchain_balance_record().await?.into())
    }

    async fn get_info(&self) -> Result<NodeInfo> {
        Ok(NodeInfo::placeholder())
    }

    async fn get_node_connection_info(&self) -> Result<NodeConnectionInfo> {
        Ok(NodeConnectionInfo::placeholder())
    }

    async fn get_node_status(&self) -> Result<NodeStatus> {
        Ok(NodeStatus {
            is_ready: true,
            internal_node_status: None,
        })
    }

    async fn list_channels(&self) -> Result<Vec<Channel>> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> BarkService {
        BarkService::new(&Config::new("http://127.0.0.1:9").unwrap())
    }

    #[test]
    fn test_supported_methods() {
        let service = service();

        assert_eq!(service.get_supported_nip47_methods().len(), 5);
        assert!(service.supports(Nip47Method::LookupInvoice));
        assert!(!service.supports(Nip47Method::PayKeysend));
        assert!(service.get_supported_nip47_notification_types().is_empty());
        assert!(service.get_custom_node_command_definitions().is_empty());
    }

    #[tokio::test]
    async fn test_static_metadata() {
        let service = service();

        assert_eq!(service.get_pubkey(), NODE_PUBKEY);
        assert_eq!(service.get_info().await.unwrap().network, "mainnet");
        assert!(service.get_node_status().await.unwrap().is_ready);
        assert!(service.list_channels().await.unwrap().is_empty());
        assert_eq!(service.get_node_connection_info().await.unwrap().port, 9735);
    }
}
