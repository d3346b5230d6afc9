//! `surromatch` - smoke check against a SurroMatch API.
//!
//! Prints the endpoint the client would use. With `SURROMATCH_EMAIL` and
//! `SURROMATCH_PASSWORD` set, also logs in and prints the wallet balance,
//! unread notifications and journey progress.

use std::env;
use std::sync::Arc;

use anyhow::Context;
use surromatch_client::config::Settings;
use surromatch_client::core::service::PlatformApi;
use surromatch_client::logging;
use surromatch_client::services::api::ApiClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; variables may come from the shell.
    let _ = dotenvy::dotenv();

    let settings = Settings::from_env().context("invalid configuration")?;
    let _log_guard = logging::init(&settings.log).context("failed to initialize logging")?;
    settings.validate().context("invalid configuration")?;

    let client = ApiClient::from_settings(&settings).context("failed to build HTTP client")?;
    tracing::info!(
        platform = %settings.platform,
        base_url = %client.endpoint().base_url(),
        timeout_secs = settings.http_timeout.map(|t| t.as_secs()),
        "SurroMatch client ready"
    );

    let credentials = env::var("SURROMATCH_EMAIL")
        .ok()
        .zip(env::var("SURROMATCH_PASSWORD").ok());
    let Some((email, password)) = credentials else {
        tracing::info!("No credentials set; skipping session check");
        return Ok(());
    };

    let api: Arc<dyn PlatformApi> = Arc::new(client);
    run_session(api.as_ref(), &email, &password).await
}

async fn run_session(api: &dyn PlatformApi, email: &str, password: &str) -> anyhow::Result<()> {
    let auth = api
        .login(email, password)
        .await
        .context("login failed")?;
    let user = auth.user;
    tracing::info!(
        user = %shared::display_name(&user),
        role = %user.role.label(),
        "Logged in"
    );

    match api.wallet_balance().await {
        Ok(balance) => tracing::info!(
            available = %shared::format_amount(balance.available, &balance.currency),
            pending = %shared::format_amount(balance.pending, &balance.currency),
            "Wallet"
        ),
        Err(e) => tracing::warn!(kind = %e.kind, "Wallet unavailable: {}", e.user_message()),
    }

    match api.notifications().await {
        Ok(notifications) => {
            let unread = shared::unread_only(&notifications);
            tracing::info!(unread = unread.len(), total = notifications.len(), "Notifications");
            for notification in unread {
                tracing::info!(id = %notification.id, "  {}", notification.title);
            }
        }
        Err(e) => tracing::warn!(kind = %e.kind, "Notifications unavailable: {}", e.user_message()),
    }

    match api.journey(user.role).await {
        Ok(journey) => tracing::info!(
            progress = %format!("{}%", journey.progress_percent()),
            completed = journey.completed_count(),
            steps = journey.steps.len(),
            current = journey.current_step().map(|s| s.title.as_str()).unwrap_or("done"),
            "Journey"
        ),
        Err(e) => tracing::warn!(kind = %e.kind, "Journey unavailable: {}", e.user_message()),
    }

    api.logout();
    Ok(())
}
