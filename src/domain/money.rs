/// Amounts on the bark REST API are whole satoshis.
pub type Sats = i64;

/// Amounts exposed to the orchestrator are millisatoshis.
pub type Millisats = i64;

pub const MSAT_PER_SAT: i64 = 1000;

/// Convert satoshis to millisatoshis.
pub fn sat_to_msat(sats: Sats) -> Millisats {
    sats.saturating_mul(MSAT_PER_SAT)
}

/// Convert millisatoshis to satoshis, truncating toward zero.
///
/// Anything below one satoshi is lost: 1_999 msat becomes 1 sat.
pub fn msat_to_sat(msats: Millisats) -> Sats {
    msats / MSAT_PER_SAT
}

/// Format millisatoshis as a sat amount with three decimals.
/// Example: 1999 -> "1.999", -500 -> "-0.500"
pub fn format_msat(msats: Millisats) -> String {
    let sign = if msats < 0 { "-" } else { "" };
    let abs = msats.unsigned_abs();
    let sats = abs / MSAT_PER_SAT as u64;
    let remainder = abs % MSAT_PER_SAT as u64;
    format!("{}{}.{:03}", sign, sats, remainder)
}
