use chrono::DateTime;
use serde::{Deserialize, Serialize};

use super::Millisats;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Funds received by this wallet
    Incoming,
    /// Funds sent from this wallet
    Outgoing,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Incoming => "incoming",
            TransactionType::Outgoing => "outgoing",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A Lightning payment as the orchestrator sees it.
/// All amounts are millisatoshis and all times are unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// BOLT11 invoice or other destination the payment went through
    pub invoice: String,
    pub description: String,
    pub description_hash: String,
    pub preimage: String,
    pub payment_hash: String,
    pub amount: Millisats,
    pub fees_paid: Millisats,
    pub created_at: i64,
    pub expires_at: Option<i64>,
    /// Only set once the payment is final
    pub settled_at: Option<i64>,
}

impl Transaction {
    pub fn new(transaction_type: TransactionType, invoice: impl Into<String>) -> Self {
        Self {
            transaction_type,
            invoice: invoice.into(),
            description: String::new(),
            description_hash: String::new(),
            preimage: String::new(),
            payment_hash: String::new(),
            amount: 0,
            fees_paid: 0,
            created_at: 0,
            expires_at: None,
            settled_at: None,
        }
    }

    pub fn incoming(invoice: impl Into<String>) -> Self {
        Self::new(TransactionType::Incoming, invoice)
    }

    pub fn outgoing(invoice: impl Into<String>) -> Self {
        Self::new(TransactionType::Outgoing, invoice)
    }

    pub fn with_amount(mut self, amount: Millisats) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_fees_paid(mut self, fees_paid: Millisats) -> Self {
        self.fees_paid = fees_paid;
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_description_hash(mut self, description_hash: impl Into<String>) -> Self {
        self.description_hash = description_hash.into();
        self
    }

    pub fn with_preimage(mut self, preimage: impl Into<String>) -> Self {
        self.preimage = preimage.into();
        self
    }

    pub fn with_payment_hash(mut self, payment_hash: impl Into<String>) -> Self {
        self.payment_hash = payment_hash.into();
        self
    }

    pub fn with_created_at(mut self, created_at: i64) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn with_settled_at(mut self, settled_at: Option<i64>) -> Self {
        self.settled_at = settled_at;
        self
    }

    pub fn is_settled(&self) -> bool {
        self.settled_at.is_some()
    }
}

/// Parse an RFC 3339 timestamp into unix seconds.
pub fn parse_timestamp(input: &str) -> Option<i64> {
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| dt.timestamp())
}

/// Parse an optional timestamp, treating a malformed value as absent.
pub fn parse_optional_timestamp(input: Option<&str>) -> Option<i64> {
    input.and_then(parse_timestamp)
}
