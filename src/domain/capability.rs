use serde::{Deserialize, Serialize};

/// NIP-47 (Nostr Wallet Connect) request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nip47Method {
    PayInvoice,
    MultiPayInvoice,
    PayKeysend,
    MultiPayKeysend,
    MakeInvoice,
    LookupInvoice,
    ListTransactions,
    GetBalance,
    GetInfo,
    SignMessage,
    MakeHoldInvoice,
    SettleHoldInvoice,
    CancelHoldInvoice,
}

impl Nip47Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nip47Method::PayInvoice => "pay_invoice",
            Nip47Method::MultiPayInvoice => "multi_pay_invoice",
            Nip47Method::PayKeysend => "pay_keysend",
            Nip47Method::MultiPayKeysend => "multi_pay_keysend",
            Nip47Method::MakeInvoice => "make_invoice",
            Nip47Method::LookupInvoice => "lookup_invoice",
            Nip47Method::ListTransactions => "list_transactions",
            Nip47Method::GetBalance => "get_balance",
            Nip47Method::GetInfo => "get_info",
            Nip47Method::SignMessage => "sign_message",
            Nip47Method::MakeHoldInvoice => "make_hold_invoice",
            Nip47Method::SettleHoldInvoice => "settle_hold_invoice",
            Nip47Method::CancelHoldInvoice => "cancel_hold_invoice",
        }
    }
}

impl std::fmt::Display for Nip47Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// NIP-47 notification types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nip47Notification {
    PaymentReceived,
    PaymentSent,
    HoldInvoiceAccepted,
}

/// The methods bark can back over its REST API.
pub const SUPPORTED_NIP47_METHODS: [Nip47Method; 5] = [
    Nip47Method::PayInvoice,
    Nip47Method::MakeInvoice,
    Nip47Method::GetBalance,
    Nip47Method::ListTransactions,
    Nip47Method::LookupInvoice,
];

/// Bark pushes no notifications.
pub const SUPPORTED_NIP47_NOTIFICATIONS: [Nip47Notification; 0] = [];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_methods_are_fixed() {
        let names: Vec<&str> = SUPPORTED_NIP47_METHODS.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "pay_invoice",
                "make_invoice",
                "get_balance",
                "list_transactions",
                "lookup_invoice"
            ]
        );
        assert!(SUPPORTED_NIP47_NOTIFICATIONS.is_empty());
    }

    #[test]
    fn test_serde_name_matches_as_str() {
        let json = serde_json::to_string(&Nip47Method::MultiPayKeysend).unwrap();
        assert_eq!(json, "\"multi_pay_keysend\"");
    }
}
