use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::application::LnClient;
use crate::domain::{Balances, ListTransactionsFilter, Transaction};

/// Transaction history snapshot for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionsSnapshot {
    pub version: String,
    pub exported_at: DateTime<Utc>,
    pub node_pubkey: String,
    pub transactions: Vec<Transaction>,
}

/// Exporter for writing wallet data to CSV or JSON
pub struct Exporter<'a, C: LnClient> {
    client: &'a C,
}

impl<'a, C: LnClient> Exporter<'a, C> {
    pub fn new(client: &'a C) -> Self {
        Self { client }
    }

    /// Export transactions to CSV format. Amounts are millisats.
    pub async fn export_transactions_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let transactions = self
            .client
            .list_transactions(&ListTransactionsFilter::default())
            .await?;
        write_transactions_csv(&transactions, writer)
    }

    /// Export transactions as a JSON snapshot
    pub async fn export_transactions_json<W: Write>(&self, mut writer: W) -> Result<usize> {
        let transactions = self
            .client
            .list_transactions(&ListTransactionsFilter::default())
            .await?;
        let count = transactions.len();

        let snapshot = TransactionsSnapshot {
            version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: Utc::now(),
            node_pubkey: self.client.get_pubkey(),
            transactions,
        };

        let json = serde_json::to_string_pretty(&snapshot)?;
        writer.write_all(json.as_bytes())?;
        writer.flush()?;

        Ok(count)
    }

    /// Export balances to CSV format, one row per figure
    pub async fn export_balances_csv<W: Write>(&self, writer: W) -> Result<usize> {
        let balances = self.client.get_balances(false).await?;
        write_balances_csv(&balances, writer)
    }
}

/// Write transactions as CSV rows.
pub fn write_transactions_csv<W: Write>(transactions: &[Transaction], writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    // Write header
    csv_writer.write_record([
        "type",
        "invoice",
        "amount_msat",
        "fees_paid_msat",
        "created_at",
        "settled_at",
        "description",
        "payment_hash",
    ])?;

    for tx in transactions {
        csv_writer.write_record([
            tx.transaction_type.as_str().to_string(),
            tx.invoice.clone(),
            tx.amount.to_string(),
            tx.fees_paid.to_string(),
            tx.created_at.to_string(),
            tx.settled_at.map(|t| t.to_string()).unwrap_or_default(),
            tx.description.clone(),
            tx.payment_hash.clone(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(transactions.len())
}

/// Write balances as `section,field,msat` rows.
pub fn write_balances_csv<W: Write>(balances: &Balances, writer: W) -> Result<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["section", "field", "msat"])?;

    let onchain = &balances.onchain;
    let lightning = &balances.lightning;
    let rows = [
        ("onchain", "spendable", onchain.spendable),
        ("onchain", "total", onchain.total),
        ("onchain", "reserved", onchain.reserved),
        ("lightning", "total_spendable", lightning.total_spendable),
        ("lightning", "total_receivable", lightning.total_receivable),
        ("lightning", "next_max_spendable", lightning.next_max_spendable),
        ("lightning", "next_max_receivable", lightning.next_max_receivable),
        ("lightning", "next_max_spendable_mpp", lightning.next_max_spendable_mpp),
        ("lightning", "next_max_receivable_mpp", lightning.next_max_receivable_mpp),
    ];

    for (section, field, msat) in rows {
        csv_writer.write_record([section, field, msat.to_string().as_str()])?;
    }

    csv_writer.flush()?;
    Ok(rows.len())
}
