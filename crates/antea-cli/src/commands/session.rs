use anyhow::{Context, Result};
use antea_core::{SessionManager, headers_for};
use antea_infrastructure::ClientConfig;
use colored::Colorize;

pub fn show(manager: &SessionManager, config: &ClientConfig) -> Result<()> {
    let session = manager
        .current()
        .context("Could not create an anonymous session")?;
    let info = session.info();

    println!("✅ {}", info.contributing_as().green());
    println!("  Session ID: {}", info.session_id);
    println!("  Created:    {}", session.created_at().to_rfc3339());
    println!("  Expires:    {}", info.expires_at.to_rfc3339());
    println!("  Server:     {}", config.api_url);
    Ok(())
}

pub fn clear(manager: &SessionManager) -> Result<()> {
    manager.clear().context("Failed to clear the session")?;
    println!(
        "✅ {}",
        "Session cleared - a new anonymous session will be created".green()
    );
    Ok(())
}

pub fn headers(manager: &SessionManager) -> Result<()> {
    let session = manager
        .current()
        .context("Could not create an anonymous session")?;
    println!("{}", render_headers(&session)?);
    Ok(())
}

fn render_headers(session: &antea_core::Session) -> Result<String> {
    Ok(serde_json::to_string_pretty(&headers_for(session))?)
}
