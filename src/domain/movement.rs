//! Movements are bark's record of every balance-affecting event.
//!
//! Only `receive` and `send` movements map onto Lightning transactions. The
//! conversion applies two separate recovery policies that must not be
//! conflated:
//!
//! - an unparsable `created_at` drops the movement ([`SkipReason`]);
//! - an unparsable `completed_at` keeps the movement with no settlement time.

use serde::{Deserialize, Serialize};

use super::wire::null_as_default;
use super::{Sats, Transaction, parse_optional_timestamp, parse_timestamp, sat_to_msat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementStatus {
    Pending,
    Finished,
    Failed,
    Cancelled,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubsystemKind {
    Receive,
    Send,
    #[default]
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovementSubsystem {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: SubsystemKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovementDestination {
    #[serde(default, deserialize_with = "null_as_default")]
    pub destination: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub amount_sat: Sats,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MovementTime {
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,
    #[serde(default)]
    pub completed_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Movement {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: MovementStatus,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subsystem: MovementSubsystem,
    #[serde(default)]
    pub metadata: serde_json::Value,
    #[serde(default, deserialize_with = "null_as_default")]
    pub intended_balance_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub effective_balance_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub offchain_fee_sat: Sats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sent_to: Vec<MovementDestination>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub received_on: Vec<MovementDestination>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub input_vtxos: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub output_vtxos: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exited_vtxos: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub time: MovementTime,
}

/// Why a movement produced no transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    InvalidCreatedAt(String),
    NotLightning(SubsystemKind),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::InvalidCreatedAt(raw) => write!(f, "invalid created_at '{}'", raw),
            SkipReason::NotLightning(kind) => write!(f, "non-lightning kind {:?}", kind),
        }
    }
}

impl Movement {
    pub fn is_finished(&self) -> bool {
        self.status == MovementStatus::Finished
    }

    /// Settlement time, only for finished movements with a parsable `completed_at`.
    pub fn settled_at(&self) -> Option<i64> {
        if !self.is_finished() {
            return None;
        }
        parse_optional_timestamp(self.time.completed_at.as_deref())
    }

    /// Map this movement onto a transaction.
    /// Multi-leg movements are represented by their first leg only.
    pub fn to_transaction(&self) -> Result<Transaction, SkipReason> {
        let created_at = parse_timestamp(&self.time.created_at)
            .ok_or_else(|| SkipReason::InvalidCreatedAt(self.time.created_at.clone()))?;

        let (base, first_leg) = match self.subsystem.kind {
            SubsystemKind::Receive => (Transaction::incoming(""), self.received_on.first()),
            SubsystemKind::Send => (Transaction::outgoing(""), self.sent_to.first()),
            SubsystemKind::Other => return Err(SkipReason::NotLightning(self.subsystem.kind)),
        };

        let mut tx = base
            .with_fees_paid(sat_to_msat(self.offchain_fee_sat))
            .with_created_at(created_at)
            .with_settled_at(self.settled_at());

        if let Some(leg) = first_leg {
            tx.invoice = leg.destination.clone();
            tx.amount = sat_to_msat(leg.amount_sat);
        }

        Ok(tx)
    }
}

/// Outcome of mapping a batch of movements.
#[derive(Debug, Default)]
pub struct MovementMapping {
    pub transactions: Vec<Transaction>,
    pub skipped: Vec<(i64, SkipReason)>,
}

/// Map movements to transactions, dropping the ones that don't map.
pub fn map_movements(movements: &[Movement]) -> MovementMapping {
    let mut mapping = MovementMapping::default();
    for movement in movements {
        match movement.to_transaction() {
            Ok(tx) => mapping.transactions.push(tx),
            Err(reason) => mapping.skipped.push((movement.id, reason)),
        }
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TransactionType;
    use serde_json::json;

    fn movement(value: serde_json::Value) -> Movement {
        serde_json::from_value(value).unwrap()
    }

    fn receive_movement() -> Movement {
        movement(json!({
            "id": 1,
            "status": "pending",
            "subsystem": {"name": "bark.lightning_receive", "kind": "receive"},
            "offchain_fee_sat": 2,
            "received_on": [{"destination": "lnbc1...", "amount_sat": 500}],
            "time": {
                "created_at": "2025-01-10T10:00:00Z",
                "updated_at": "2025-01-10T10:00:05Z",
                "completed_at": null
            }
        }))
    }

    #[test]
    fn test_receive_maps_to_incoming() {
        let tx = receive_movement().to_transaction().unwrap();

        assert_eq!(tx.transaction_type, TransactionType::Incoming);
        assert_eq!(tx.invoice, "lnbc1...");
        assert_eq!(tx.amount, 500_000);
        assert_eq!(tx.fees_paid, 2_000);
        assert_eq!(tx.created_at, 1_736_503_200);
        assert_eq!(tx.settled_at, None);
    }

    #[test]
    fn test_send_uses_first_leg_only() {
        let m = movement(json!({
            "id": 2,
            "status": "finished",
            "subsystem": {"name": "bark.lightning_send", "kind": "send"},
            "sent_to": [
                {"destination": "lnbc-first", "amount_sat": 10},
                {"destination": "lnbc-second", "amount_sat": 99}
            ],
            "time": {
                "created_at": "2025-01-10T10:00:00Z",
                "updated_at": "2025-01-10T10:00:05Z",
                "completed_at": "2025-01-10T10:01:00Z"
            }
        }));

        let tx = m.to_transaction().unwrap();
        assert_eq!(tx.transaction_type, TransactionType::Outgoing);
        assert_eq!(tx.invoice, "lnbc-first");
        assert_eq!(tx.amount, 10_000);
        assert_eq!(tx.settled_at, Some(1_736_503_260));
    }

    #[test]
    fn test_missing_leg_defaults_to_zero_amount() {
        let mut m = receive_movement();
        m.received_on.clear();

        let tx = m.to_transaction().unwrap();
        assert_eq!(tx.invoice, "");
        assert_eq!(tx.amount, 0);
    }

    #[test]
    fn test_other_kind_is_skipped() {
        let m = movement(json!({
            "id": 3,
            "status": "finished",
            "subsystem": {"name": "bark.round", "kind": "swap"},
            "time": {"created_at": "2025-01-10T10:00:00Z", "updated_at": ""}
        }));

        assert_eq!(m.subsystem.kind, SubsystemKind::Other);
        assert_eq!(
            m.to_transaction(),
            Err(SkipReason::NotLightning(SubsystemKind::Other))
        );
    }

    #[test]
    fn test_invalid_created_at_is_skipped() {
        let mut m = receive_movement();
        m.time.created_at = "yesterday".to_string();

        assert_eq!(
            m.to_transaction(),
            Err(SkipReason::InvalidCreatedAt("yesterday".to_string()))
        );
    }

    #[test]
    fn test_invalid_completed_at_keeps_movement() {
        let mut m = receive_movement();
        m.status = MovementStatus::Finished;
        m.time.completed_at = Some("not a time".to_string());

        let tx = m.to_transaction().unwrap();
        assert_eq!(tx.settled_at, None);
    }

    #[test]
    fn test_completed_at_ignored_unless_finished() {
        let mut m = receive_movement();
        m.time.completed_at = Some("2025-01-10T10:01:00Z".to_string());

        assert_eq!(m.settled_at(), None);
        m.status = MovementStatus::Finished;
        assert_eq!(m.settled_at(), Some(1_736_503_260));
    }

    #[test]
    fn test_unknown_status_decodes_as_other() {
        let m = movement(json!({
            "status": "sleeping",
            "subsystem": {"name": "x", "kind": "receive"}
        }));
        assert_eq!(m.status, MovementStatus::Other);
        assert!(m.time.created_at.is_empty());
    }

    #[test]
    fn test_null_and_missing_fields_decode_as_zero() {
        let m = movement(json!({
            "id": 4,
            "status": null,
            "sent_to": null,
            "received_on": [{"destination": null, "amount_sat": 7}],
            "input_vtxos": null,
            "offchain_fee_sat": null,
            "time": {"created_at": "2025-01-10T10:00:00Z", "updated_at": null}
        }));

        assert_eq!(m.status, MovementStatus::Other);
        assert_eq!(m.subsystem.kind, SubsystemKind::Other);
        assert!(m.sent_to.is_empty());
        assert_eq!(m.received_on[0].destination, "");
        assert_eq!(m.received_on[0].amount_sat, 7);
        assert_eq!(m.offchain_fee_sat, 0);
        assert_eq!(
            m.to_transaction(),
            Err(SkipReason::NotLightning(SubsystemKind::Other))
        );
    }

    #[test]
    fn test_map_movements_keeps_policies_apart() {
        let good = receive_movement();

        let mut bad_created = receive_movement();
        bad_created.id = 10;
        bad_created.time.created_at = "???".to_string();

        let mut bad_completed = receive_movement();
        bad_completed.id = 11;
        bad_completed.status = MovementStatus::Finished;
        bad_completed.time.completed_at = Some("???".to_string());

        let mapping = map_movements(&[good, bad_created, bad_completed]);

        assert_eq!(mapping.transactions.len(), 2);
        assert!(mapping.transactions.iter().all(|tx| tx.settled_at.is_none()));
        assert_eq!(mapping.skipped.len(), 1);
        assert_eq!(mapping.skipped[0].0, 10);
    }
}
