use chrono::{DateTime, Utc};
use clap::Subcommand;
use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;
use crate::types::{Transaction, TransactionDraft};

#[derive(Subcommand)]
pub enum TransactionCommands {
    #[command(about = "List transactions")]
    List,

    #[command(about = "Record a transaction (negative amount = expense)")]
    Add {
        #[arg(help = "Signed amount", allow_hyphen_values = true)]
        amount: f64,
        #[arg(help = "Description")]
        description: String,
        #[arg(long, help = "Category")]
        category: Option<String>,
        #[arg(long, help = "Date (RFC 3339), defaults to now")]
        date: Option<String>,
        #[arg(long, help = "External reference")]
        reference: Option<String>,
        #[arg(long, help = "Free-form notes")]
        notes: Option<String>,
        #[arg(long, help = "Mark as reconciled")]
        reconciled: bool,
    },
}

pub async fn handle(cmd: TransactionCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new()?;
    let user = utils::current_user(&client)?;

    match cmd {
        TransactionCommands::List => {
            let transactions = client.transactions(user.id).await?;
            utils::output_data(&output_format, &transactions, render_transactions)
        }
        TransactionCommands::Add {
            amount,
            description,
            category,
            date,
            reference,
            notes,
            reconciled,
        } => {
            let transaction_date: DateTime<Utc> = match date {
                Some(raw) => DateTime::parse_from_rfc3339(&raw)
                    .map_err(|e| {
                        crate::error::ClientError::Validation(format!("invalid date '{}': {}", raw, e))
                    })?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let draft = TransactionDraft {
                amount,
                description: Some(description),
                category,
                transaction_date: Some(transaction_date),
                reference,
                notes,
                is_reconciled: Some(reconciled),
            };
            let txn = client.create_transaction(user.id, &draft).await?;
            utils::output_success(
                &output_format,
                &format!("Recorded '{}' for {:.2}", txn.description, txn.amount),
                Some(json!({ "transaction": txn })),
            )
        }
    }
}

fn render_transactions(transactions: &Vec<Transaction>) {
    if transactions.is_empty() {
        println!("No transactions yet");
        return;
    }
    for t in transactions {
        println!(
            "#{:<4} {}  {:>10.2}  {:<20} {}{}",
            t.id,
            t.transaction_date.format("%Y-%m-%d"),
            t.amount,
            t.description,
            t.category.as_deref().unwrap_or("-"),
            if t.is_reconciled { "  ✓" } else { "" },
        );
    }
}
