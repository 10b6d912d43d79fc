use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::OutputFormat;
use crate::client::ApiClient;
use crate::error::ClientError;
use crate::types::UserProfile;

/// Output a success message in the appropriate format
pub fn output_success(
    output_format: &OutputFormat,
    message: &str,
    data: Option<Value>,
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            let mut response = json!({
                "success": true,
                "message": message
            });

            if let Some(Value::Object(extra)) = data {
                response.as_object_mut().unwrap().extend(extra);
            }

            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        OutputFormat::Text => {
            println!("✓ {}", message);
        }
    }
    Ok(())
}

/// Output a data payload: pretty JSON, or a caller-rendered text block
pub fn output_data<T: Serialize>(
    output_format: &OutputFormat,
    data: &T,
    render_text: impl FnOnce(&T),
) -> anyhow::Result<()> {
    match output_format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(data)?);
        }
        OutputFormat::Text => render_text(data),
    }
    Ok(())
}

/// Resolve the logged-in user from the credential store. A missing or
/// unreadable profile is the generic "information not found" condition.
pub fn current_user(client: &ApiClient) -> anyhow::Result<UserProfile> {
    client.credentials().load_profile().ok_or_else(|| {
        ClientError::Session(
            "User information not found. Log in first with 'finbin auth login'.".to_string(),
        )
        .into()
    })
}
