use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs::File;
use std::io::{Write, stdout};
use tracing_subscriber::EnvFilter;

use crate::application::{BarkService, LnClient};
use crate::config::Config;
use crate::domain::{ListTransactionsFilter, Transaction, format_msat};
use crate::io::{Exporter, write_transactions_csv};

/// bark-lnclient - Lightning client for a bark wallet daemon
#[derive(Parser)]
#[command(name = "bark-lnclient")]
#[command(about = "Drive a bark wallet daemon through a Lightning node client interface")]
#[command(version)]
pub struct Cli {
    /// Base address of bark's REST API
    #[arg(short, long, env = "BARK_ADDRESS", default_value = "http://127.0.0.1:3000")]
    pub address: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Csv,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show node identity and connection info
    Info,

    /// Show Lightning and on-chain balances
    Balance,

    /// Show on-chain balance only
    OnchainBalance,

    /// List Lightning transactions
    Transactions {
        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Pay a BOLT11 invoice, offer or lightning address
    Pay {
        /// Payment destination
        destination: String,

        /// Amount in sats, for amountless destinations
        #[arg(long)]
        amount_sat: Option<i64>,
    },

    /// Create an invoice
    Invoice {
        /// Amount in millisats (rounded down to whole sats)
        amount_msat: i64,

        /// Invoice description
        #[arg(short, long, default_value = "")]
        description: String,
    },

    /// Look up an invoice by payment hash
    Lookup {
        /// Payment hash, hex encoded
        payment_hash: String,
    },

    /// List the NIP-47 methods this client supports
    Capabilities,

    /// Export data to CSV or JSON
    Export {
        /// What to export: transactions, balances
        export_type: String,

        /// Output file (stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Format: csv, json (default: csv)
        #[arg(short, long)]
        format: Option<String>,
    },
}

impl Cli {
    fn init_tracing(&self) {
        let default_level = if self.verbose { "debug" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("bark_lnclient={}", default_level)));

        // Logs go to stderr so exported data on stdout stays clean
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    pub async fn run(self) -> Result<()> {
        self.init_tracing();

        let config = Config::new(&self.address)?;
        let service = BarkService::new(&config);

        match self.command {
            Commands::Info => run_info_command(&service).await?,

            Commands::Balance => run_balance_command(&service).await?,

            Commands::OnchainBalance => {
                let balance = service
                    .get_onchain_balance()
                    .await
                    .context("Failed to fetch on-chain balance")?;
                println!("{:<12} {:>20}", "spendable", format_msat(balance.spendable));
                println!("{:<12} {:>20}", "total", format_msat(balance.total));
                println!("{:<12} {:>20}", "reserved", format_msat(balance.reserved));
            }

            Commands::Transactions { format, output } => {
                run_transactions_command(&service, format, output.as_deref()).await?
            }

            Commands::Pay {
                destination,
                amount_sat,
            } => {
                let result = service
                    .send_payment_sync(&destination, amount_sat)
                    .await
                    .context("Payment failed")?;
                println!("Paid {}", destination);
                println!("Preimage: {}", result.preimage);
            }

            Commands::Invoice {
                amount_msat,
                description,
            } => {
                if amount_msat <= 0 {
                    bail!("Amount must be positive");
                }
                let tx = service
                    .make_invoice(amount_msat, &description, "", 0, None)
                    .await
                    .context("Failed to create invoice")?;
                println!("{}", tx.invoice);
            }

            Commands::Lookup { payment_hash } => {
                let tx = service
                    .lookup_invoice(&payment_hash)
                    .await
                    .with_context(|| format!("Failed to look up invoice {}", payment_hash))?;
                println!("Invoice:  {}", tx.invoice);
                println!("Preimage: {}", tx.preimage);
                match tx.settled_at {
                    Some(ts) => println!("Settled:  {}", format_timestamp(ts)),
                    None => println!("Settled:  no"),
                }
            }

            Commands::Capabilities => {
                for method in service.get_supported_nip47_methods() {
                    println!("{}", method);
                }
            }

            Commands::Export {
                export_type,
                output,
                format,
            } => {
                run_export_command(&service, &export_type, output.as_deref(), format.as_deref())
                    .await?;
            }
        }

        Ok(())
    }
}

fn open_output(output: Option<&str>) -> Result<Box<dyn Write>> {
    Ok(match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path))?;
            Box::new(file)
        }
        None => Box::new(stdout()),
    })
}

async fn run_info_command(service: &BarkService) -> Result<()> {
    let info = service.get_info().await?;
    let connection = service.get_node_connection_info().await?;
    let status = service.get_node_status().await?;

    println!("Alias:   {}", info.alias);
    println!("Pubkey:  {}", info.pubkey);
    println!("Network: {}", info.network);
    println!("Address: {}:{}", connection.address, connection.port);
    println!("Ready:   {}", status.is_ready);
    Ok(())
}

async fn run_balance_command(service: &BarkService) -> Result<()> {
    let balances = service
        .get_balances(false)
        .await
        .context("Failed to fetch balances")?;

    println!("{:<28} {:>20}", "BALANCE", "SATS");
    println!("{}", "-".repeat(49));
    println!(
        "{:<28} {:>20}",
        "lightning spendable",
        format_msat(balances.lightning.total_spendable)
    );
    println!(
        "{:<28} {:>20}",
        "lightning receivable",
        format_msat(balances.lightning.total_receivable)
    );
    println!(
        "{:<28} {:>20}",
        "onchain spendable",
        format_msat(balances.onchain.spendable)
    );
    println!(
        "{:<28} {:>20}",
        "onchain total",
        format_msat(balances.onchain.total)
    );
    println!(
        "{:<28} {:>20}",
        "onchain reserved",
        format_msat(balances.onchain.reserved)
    );
    Ok(())
}

async fn run_transactions_command(
    service: &BarkService,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    let transactions = service
        .list_transactions(&ListTransactionsFilter::default())
        .await
        .context("Failed to list transactions")?;
    let mut writer = open_output(output)?;

    match format {
        OutputFormat::Csv => {
            write_transactions_csv(&transactions, writer)?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&transactions)?;
            writeln!(writer, "{}", json)?;
        }
        OutputFormat::Table => print_transactions_table(&transactions, &mut writer)?,
    }
    Ok(())
}

fn print_transactions_table(transactions: &[Transaction], writer: &mut dyn Write) -> Result<()> {
    if transactions.is_empty() {
        writeln!(writer, "No transactions found.")?;
        return Ok(());
    }

    writeln!(
        writer,
        "{:<17} {:<9} {:>16} {:>10} {:<8} INVOICE",
        "DATE", "TYPE", "AMOUNT", "FEE", "SETTLED"
    )?;
    writeln!(writer, "{}", "-".repeat(90))?;

    for tx in transactions {
        writeln!(
            writer,
            "{:<17} {:<9} {:>16} {:>10} {:<8} {}",
            format_timestamp(tx.created_at),
            tx.transaction_type.as_str(),
            format_msat(tx.amount),
            format_msat(tx.fees_paid),
            if tx.is_settled() { "yes" } else { "no" },
            truncate(&tx.invoice, 30)
        )?;
    }
    Ok(())
}

async fn run_export_command(
    service: &BarkService,
    export_type: &str,
    output: Option<&str>,
    format: Option<&str>,
) -> Result<()> {
    let exporter = Exporter::new(service);
    let writer = open_output(output)?;

    match (export_type, format.unwrap_or("csv")) {
        ("transactions", "csv") => {
            let count = exporter.export_transactions_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} transactions", count);
            }
        }
        ("transactions", "json") => {
            let count = exporter.export_transactions_json(writer).await?;
            if output.is_some() {
                eprintln!("Exported {} transactions", count);
            }
        }
        ("balances", "csv") => {
            exporter.export_balances_csv(writer).await?;
            if output.is_some() {
                eprintln!("Exported balances");
            }
        }
        ("transactions" | "balances", other) => {
            bail!(
                "Invalid format '{}' for {}. Valid formats: csv{}",
                other,
                export_type,
                if export_type == "transactions" { ", json" } else { "" }
            );
        }
        _ => {
            bail!(
                "Invalid export type '{}'. Valid types: transactions, balances",
                export_type
            );
        }
    }

    Ok(())
}

fn format_timestamp(ts: i64) -> String {
    chrono::DateTime::from_timestamp(ts, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| ts.to_string())
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}
