use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use spacetour_api::auth::gotrue::GoTrueClient;
use spacetour_api::config::ServerConfig;
use spacetour_api::router::build_app_router;
use spacetour_api::services::content::ContentService;
use spacetour_api::state::AppState;
use spacetour_db::PgStore;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spacetour_api=debug,spacetour_db=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let pool = spacetour_db::create_pool(&config.database_url).expect("Invalid DATABASE_URL");
    tracing::info!("Database connection pool created");

    // Content pages keep working from fallback data while the database is
    // down, so an unreachable database only skips migrations.
    match spacetour_db::health_check(&pool).await {
        Ok(()) => {
            tracing::info!("Database health check passed");
            spacetour_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Database unreachable at startup, skipping migrations");
        }
    }

    // --- Identity provider ---
    let identity = GoTrueClient::new(&config.supabase_url, &config.supabase_anon_key)
        .expect("Failed to build identity provider client");
    tracing::info!(url = %config.supabase_url, "Identity provider client created");

    // --- App state ---
    let store = Arc::new(PgStore::new(pool));
    let content = ContentService::new(store.clone(), config.content_fetch, config.content_precheck);

    let state = AppState {
        config: Arc::new(config.clone()),
        content: Arc::new(content),
        store,
        identity: Arc::new(identity),
    };

    // --- Router ---
    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Wait for SIGINT (Ctrl-C) or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
