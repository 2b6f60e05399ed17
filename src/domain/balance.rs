use serde::{Deserialize, Serialize};

use super::wire::null_as_default;
use super::{Millisats, Sats, sat_to_msat};

/// Off-chain wallet balance as reported by bark, in sats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WalletBalance {
    #[serde(default, deserialize_with = "null_as_default")]
    pub spendable_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_lightning_send_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_lightning_receive_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_in_round_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pending_board_sat: Sats,
    #[serde(default)]
    pub pending_exit_sat: Option<Sats>,
}

/// On-chain wallet balance as reported by bark, in sats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnchainBalanceRecord {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trusted_spendable_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub immature_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub trusted_pending_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub untrusted_pending_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub confirmed_sat: Sats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnchainBalance {
    pub spendable: Millisats,
    pub total: Millisats,
    pub reserved: Millisats,
}

impl From<OnchainBalanceRecord> for OnchainBalance {
    fn from(record: OnchainBalanceRecord) -> Self {
        Self {
            spendable: sat_to_msat(record.trusted_spendable_sat),
            total: sat_to_msat(record.total_sat),
            reserved: sat_to_msat(record.immature_sat),
        }
    }
}

/// Lightning-side balance. Bark has no notion of inbound capacity, so every
/// receivable figure is zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LightningBalance {
    pub total_spendable: Millisats,
    pub total_receivable: Millisats,
    pub next_max_spendable: Millisats,
    pub next_max_receivable: Millisats,
    pub next_max_spendable_mpp: Millisats,
    pub next_max_receivable_mpp: Millisats,
}

impl From<WalletBalance> for LightningBalance {
    fn from(wallet: WalletBalance) -> Self {
        let spendable = sat_to_msat(wallet.spendable_sat);
        Self {
            total_spendable: spendable,
            total_receivable: 0,
            next_max_spendable: spendable,
            next_max_receivable: 0,
            next_max_spendable_mpp: spendable,
            next_max_receivable_mpp: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Balances {
    pub onchain: OnchainBalance,
    pub lightning: LightningBalance,
}

impl Balances {
    pub fn new(wallet: WalletBalance, onchain: OnchainBalanceRecord) -> Self {
        Self {
            onchain: onchain.into(),
            lightning: wallet.into(),
        }
    }
}
