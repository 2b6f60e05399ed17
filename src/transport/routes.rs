//! Bark REST routes, relative to the configured base address.

pub const LIGHTNING_PAY: &str = "/api/v1/lightning/pay";
pub const LIGHTNING_RECEIVE_INVOICE: &str = "/api/v1/lightning/receive/invoice";
pub const LIGHTNING_RECEIVE_STATUS: &str = "/api/v1/lightning/receive/status";
pub const MOVEMENTS: &str = "/api/v1/movements";
pub const WALLET_BALANCE: &str = "/api/v1/wallet/balance";
pub const ONCHAIN_BALANCE: &str = "/api/v1/onchain/balance";
