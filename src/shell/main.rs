use anyhow::Context;
use tracing_subscriber::EnvFilter;
use user_registration::shell::config::ShellConfig;
use user_registration::shell::http::router;
use user_registration::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ShellConfig::from_env()?;
    let address = config.bind_address();

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;

    tracing::info!(%address, "registration form listening");

    axum::serve(listener, router(AppState::in_memory()))
        .await
        .context("server stopped unexpectedly")?;

    Ok(())
}
