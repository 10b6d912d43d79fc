use chrono::{DateTime, Duration, Utc};
use clap::Subcommand;
use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;
use crate::types::{Bucket, BucketDraft};

#[derive(Subcommand)]
pub enum BucketCommands {
    #[command(about = "List savings buckets")]
    List {
        #[arg(long, help = "Order by priority score, highest first")]
        by_priority: bool,
    },

    #[command(about = "Create a savings bucket")]
    Create {
        #[arg(help = "Bucket name")]
        name: String,
        #[arg(help = "Target amount")]
        target: f64,
        #[arg(long, help = "Deadline (RFC 3339), defaults to 180 days out")]
        deadline: Option<String>,
        #[arg(long, help = "Priority score in [0,1]")]
        priority: Option<f64>,
        #[arg(long, help = "Amount already saved")]
        saved: Option<f64>,
        #[arg(long, help = "Bucket status")]
        status: Option<String>,
    },

    #[command(about = "Adjust a bucket's priority score")]
    Priority {
        #[arg(help = "Bucket ID")]
        bucket_id: i64,
        #[arg(help = "New priority score in [0,1]")]
        score: f64,
    },

    #[command(about = "Delete a bucket")]
    Delete {
        #[arg(help = "Bucket ID")]
        bucket_id: i64,
    },
}

pub async fn handle(cmd: BucketCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new()?;
    let user = utils::current_user(&client)?;

    match cmd {
        BucketCommands::List { by_priority } => {
            let mut buckets = client.buckets(user.id).await?;
            if by_priority {
                // Display ordering only
                buckets.sort_by(|a, b| {
                    b.priority_score
                        .partial_cmp(&a.priority_score)
                        .unwrap_or(std::cmp::Ordering::Equal)
                });
            }
            utils::output_data(&output_format, &buckets, render_buckets)
        }
        BucketCommands::Create {
            name,
            target,
            deadline,
            priority,
            saved,
            status,
        } => {
            let deadline: DateTime<Utc> = match deadline {
                Some(raw) => DateTime::parse_from_rfc3339(&raw)
                    .map_err(|e| {
                        crate::error::ClientError::Validation(format!(
                            "invalid deadline '{}': {}",
                            raw, e
                        ))
                    })?
                    .with_timezone(&Utc),
                None => Utc::now() + Duration::days(180),
            };
            let draft = BucketDraft {
                name,
                target_amount: target,
                current_saved_amount: saved,
                priority_score: priority.map(|p| p.clamp(0.0, 1.0)),
                deadline: Some(deadline),
                status,
            };
            let bucket = client.create_bucket(user.id, &draft).await?;
            utils::output_success(
                &output_format,
                &format!("Created bucket '{}'", bucket.name),
                Some(json!({ "bucket": bucket })),
            )
        }
        BucketCommands::Priority { bucket_id, score } => {
            let score = score.clamp(0.0, 1.0);
            client.set_bucket_priority(user.id, bucket_id, score).await?;
            utils::output_success(
                &output_format,
                &format!("Bucket {} priority set to {}", bucket_id, score),
                None,
            )
        }
        BucketCommands::Delete { bucket_id } => {
            client.delete_bucket(user.id, bucket_id).await?;
            utils::output_success(&output_format, &format!("Bucket {} deleted", bucket_id), None)
        }
    }
}

fn render_buckets(buckets: &Vec<Bucket>) {
    if buckets.is_empty() {
        println!("No savings buckets yet");
        return;
    }
    for b in buckets {
        println!(
            "#{:<4} {:<20} {:>10.2} / {:<10.2} priority {:.2}  due {}  [{}]",
            b.id,
            b.name,
            b.current_saved_amount,
            b.target_amount,
            b.priority_score,
            b.deadline.format("%Y-%m-%d"),
            b.status,
        );
    }
}
