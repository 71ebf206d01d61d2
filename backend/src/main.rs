//! Service entry-point: loads settings, wires adapters and serves HTTP.

mod server;

use actix_web::web;
use color_eyre::eyre::{Context, eyre};
use mockable::DefaultEnv;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, build_http_state, create_server};
use yelp::config::AppSettings;
use yelp::inbound::http::health::HealthState;
use yelp::inbound::http::session_config::{BuildMode, session_settings_from_env};
use yelp::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use yelp::seed::seed_demo_accounts;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os()).wrap_err("load settings")?;
    let session = session_settings_from_env(&DefaultEnv::new(), BuildMode::from_debug_assertions())
        .wrap_err("session settings")?;
    let db_pool = connect(&settings).await?;

    let config = ServerConfig::new(session, settings.bind_addr()).with_db_pool(db_pool);
    let http_state = build_http_state(&config);
    seed_demo_accounts(settings.seed_demo_accounts(), http_state.registration.as_ref())
        .await
        .wrap_err("seed demo accounts")?;

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, http_state, config)?;
    server.await?;
    Ok(())
}

/// Open the database pool, applying migrations first when enabled.
///
/// Returns `None` when no database URL is configured.
async fn connect(settings: &AppSettings) -> color_eyre::Result<Option<DbPool>> {
    let Some(database_url) = settings.database_url() else {
        warn!("no database URL configured; using in-memory stores");
        return Ok(None);
    };

    if settings.run_migrations() {
        let url = database_url.to_owned();
        let applied = tokio::task::spawn_blocking(move || run_pending_migrations(&url))
            .await
            .map_err(|e| eyre!("migration task failed: {e}"))??;
        info!(applied, "database migrations applied");
    }

    let pool = DbPool::new(
        PoolConfig::new(database_url).with_max_size(settings.db_max_connections()),
    )
    .await
    .wrap_err("build database pool")?;
    Ok(Some(pool))
}
