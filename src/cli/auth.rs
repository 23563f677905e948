use anyhow::{Context, Result};

use super::CliContext;
use crate::backend::AuthStatus;

pub async fn handle_auth_command(ctx: &CliContext) -> Result<()> {
    let status = ctx
        .backend()
        .auth_status()
        .await
        .context("Failed to fetch authentication status")?;

    for line in auth_lines(&status) {
        println!("{}", line);
    }
    Ok(())
}

fn auth_lines(status: &AuthStatus) -> Vec<String> {
    let mut lines = vec![if status.authenticated {
        "Authenticated".to_string()
    } else {
        "Not authenticated".to_string()
    }];

    if let Some(email) = &status.email {
        lines.push(format!("Account: {}", email));
    }
    if let Some(provider) = &status.provider {
        lines.push(format!("Provider: {}", provider));
    }
    if let Some(message) = &status.message {
        lines.push(message.clone());
    }
    lines
}
