//! Session commands: login, logout, whoami.

use ecoverde_client::AuthStore;

use super::{CliError, build_client};

/// Log in and persist the session to the configured session file.
pub async fn login(email: &str, password: &str) -> Result<(), CliError> {
    let store = AuthStore::new(build_client()?);
    let user = store.login(email, password).await?;

    tracing::info!(
        "Logged in as {} {} <{}>",
        user.first_name,
        user.last_name,
        user.email
    );
    if user.is_business() {
        tracing::info!("Business account: {}", user.business_name.as_deref().unwrap_or("-"));
    }
    Ok(())
}

/// Drop the persisted session. Succeeds even when not logged in.
pub fn logout() -> Result<(), CliError> {
    let store = AuthStore::new(build_client()?);
    store.logout();
    tracing::info!("Logged out");
    Ok(())
}

/// Restore the session and show the logged-in user as JSON.
pub async fn whoami() -> Result<(), CliError> {
    let store = AuthStore::new(build_client()?);
    store.init().await;

    let state = store.state();
    match state.current_user() {
        Some(user) => {
            let json = serde_json::to_string_pretty(user)?;
            tracing::info!("{json}");
        }
        None => tracing::info!("Not logged in"),
    }
    Ok(())
}
