use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::Client;
use skill_assessment_backend::{
    app,
    config::{get_config, init_config},
    database::pool::create_pool,
    services::{
        model_client::GeminiClient,
        result_service::{NoopResultStore, PgResultStore, ResultStore},
    },
    AppState,
};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json")) {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    init_config()?;
    let config = get_config()?;

    let result_store: Arc<dyn ResultStore> = match &config.database_url {
        Some(url) => {
            let pool = create_pool(url).await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Persisting quiz results to Postgres");
            Arc::new(PgResultStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, quiz results will not be persisted");
            Arc::new(NoopResultStore)
        }
    };

    let http_client = Client::builder().build()?;
    let model_client = Arc::new(GeminiClient::new(
        http_client,
        config.gemini_api_key.clone(),
        config.gemini_model.clone(),
        config.gemini_base_url.clone(),
        config.model_timeout,
    ));
    info!(
        model = %config.gemini_model,
        pass_threshold = config.pass_threshold,
        "Quiz generation configured"
    );

    let state = AppState::new(model_client, result_store, config.quiz_settings());

    let addr: SocketAddr = config.server_address.parse()?;
    info!("Server listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app(state)).await?;

    Ok(())
}
