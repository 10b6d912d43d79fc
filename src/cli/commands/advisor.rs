use clap::Subcommand;

use crate::advisor;
use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;
use crate::types::Recommendation;

#[derive(Subcommand)]
pub enum AdvisorCommands {
    #[command(about = "Show financial recommendations")]
    Recommendations,

    #[command(about = "Ask the assistant a question")]
    Chat {
        #[arg(help = "Question to ask")]
        question: Vec<String>,
    },
}

pub async fn handle(cmd: AdvisorCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new()?;
    let user = utils::current_user(&client)?;

    match cmd {
        AdvisorCommands::Recommendations => {
            let recommendations = client.recommendations(user.id).await?;
            utils::output_data(&output_format, &recommendations, render_recommendations)
        }
        AdvisorCommands::Chat { question } => {
            let question = question.join(" ");
            if question.trim().is_empty() {
                anyhow::bail!("Question is required");
            }

            // Demo sessions answer locally; the mock layer has no chat route
            let answer = match client.session() {
                Some(ctx) if ctx.is_synthetic => advisor::advice_for(&question),
                _ => client.chat(user.id, &question).await?.response,
            };

            utils::output_data(&output_format, &serde_json::json!({ "response": answer }), |v| {
                println!("{}", v["response"].as_str().unwrap_or(""));
            })
        }
    }
}

fn render_recommendations(recommendations: &Vec<Recommendation>) {
    for r in recommendations {
        println!(
            "[{:?} impact / {:?} effort] {} ({})",
            r.potential_impact, r.difficulty, r.title, r.category
        );
        println!("    {}", r.description);
    }
}
