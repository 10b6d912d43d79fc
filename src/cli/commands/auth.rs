use clap::Subcommand;
use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::client::ApiClient;
use crate::session;
use crate::types::UserProfile;

/// Accounts that log in without a backend, the way the hosted demo does.
/// Matching one of these mints a synthetic session token locally.
const DEMO_ACCOUNTS: &[(&str, &str, i64, &str)] = &[
    ("demo@example.com", "password123", 1, "Demo User"),
    ("john@example.com", "password123", 2, "John Doe"),
    ("jane@example.com", "password123", 3, "Jane Smith"),
];

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Log in and store the session locally")]
    Login {
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, help = "Account password")]
        password: String,
        #[arg(long, help = "Force a demo session without contacting the backend")]
        demo: bool,
    },

    #[command(about = "Register a new account")]
    Register {
        #[arg(help = "Display name")]
        name: String,
        #[arg(help = "Account email")]
        email: String,
        #[arg(long, help = "Account password")]
        password: String,
    },

    #[command(about = "Drop the stored session")]
    Logout,

    #[command(about = "Show the logged-in user and session kind")]
    Whoami,
}

pub async fn handle(cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    let client = ApiClient::new()?;

    match cmd {
        AuthCommands::Login {
            email,
            password,
            demo,
        } => {
            let demo_account = DEMO_ACCOUNTS
                .iter()
                .find(|(e, p, _, _)| e.eq_ignore_ascii_case(&email) && *p == password);

            if let Some((email, _, id, name)) = demo_account {
                start_demo_session(&client, *id, name, email)?;
                return utils::output_success(
                    &output_format,
                    "Demo login successful",
                    Some(json!({ "userId": id })),
                );
            }

            if demo {
                start_demo_session(&client, session::DEFAULT_USER_ID, "Demo User", &email)?;
                return utils::output_success(
                    &output_format,
                    "Demo session started",
                    Some(json!({ "userId": session::DEFAULT_USER_ID })),
                );
            }

            // A failed backend login is an error, not a silent demo session
            let auth = client.login(&email, &password).await?;
            store_session(&client, &auth.token, auth.id, &auth.name, &auth.email)?;
            utils::output_success(
                &output_format,
                &format!("Logged in as {}", auth.email),
                Some(json!({ "userId": auth.id })),
            )
        }
        AuthCommands::Register {
            name,
            email,
            password,
        } => {
            let auth = client.register(&name, &email, &password).await?;
            store_session(&client, &auth.token, auth.id, &auth.name, &auth.email)?;
            utils::output_success(
                &output_format,
                &format!("Registered {}", auth.email),
                Some(json!({ "userId": auth.id })),
            )
        }
        AuthCommands::Logout => {
            client.credentials().clear()?;
            utils::output_success(&output_format, "Logged out", None)
        }
        AuthCommands::Whoami => {
            let profile = utils::current_user(&client)?;
            let kind = match client.session() {
                Some(ctx) if ctx.is_synthetic => "demo",
                Some(_) => "server",
                None => "none",
            };
            utils::output_data(&output_format, &json!({
                "id": profile.id,
                "name": profile.name,
                "email": profile.email,
                "session": kind,
            }), |v| {
                println!("{} <{}> (user {}, {} session)", v["name"].as_str().unwrap_or(""), v["email"].as_str().unwrap_or(""), v["id"], v["session"].as_str().unwrap_or(""));
            })
        }
    }
}

fn start_demo_session(
    client: &ApiClient,
    user_id: i64,
    name: &str,
    email: &str,
) -> anyhow::Result<()> {
    store_session(
        client,
        &session::synthetic_token(user_id),
        user_id,
        name,
        email,
    )
}

fn store_session(
    client: &ApiClient,
    token: &str,
    id: i64,
    name: &str,
    email: &str,
) -> anyhow::Result<()> {
    client.credentials().save_token(token)?;
    client.credentials().save_profile(&UserProfile {
        id,
        name: name.to_string(),
        email: email.to_string(),
    })
}
