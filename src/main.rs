#![recursion_limit = "256"]

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use axum::Router;
    use leptos::logging::log;
    use leptos::prelude::*;
    use leptos_axum::{LeptosRoutes, generate_route_list};
    use std::sync::Arc;
    use tower_http::compression::{CompressionLayer, CompressionLevel};
    use tower_http::services::ServeDir;
    use valid8::app::*;
    use valid8::core::api::{WaitlistApiState, waitlist_api_router};
    use valid8::core::config::Config;
    use valid8::core::db::{
        DbConfig, MemoryRecordStore, PgRecordStore, RecordStore, create_pool,
        create_pool_with_migrations, health_check,
    };

    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    // Log config status (without revealing the connection string)
    tracing::info!(
        "Config loaded: database={}, max_connections={}, run_migrations={}",
        config.has_database(),
        config.max_connections,
        config.run_migrations
    );

    let store: Arc<dyn RecordStore> = match DbConfig::from_config(&config) {
        Some(db_config) => {
            let pool = if config.run_migrations {
                create_pool_with_migrations(&db_config).await?
            } else {
                create_pool(&db_config).await?
            };
            health_check(&pool).await?;
            let store = PgRecordStore::new(pool);
            match store.count_signups().await {
                Ok(count) => tracing::info!("Waitlist has {} signups", count),
                Err(e) => tracing::warn!("Could not count waitlist signups: {}", e),
            }
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set, waitlist signups are kept in memory only");
            Arc::new(MemoryRecordStore::new())
        }
    };

    // Load configuration from Cargo.toml [package.metadata.leptos]
    // Can be overridden via LEPTOS_SITE_ADDR env var for Docker/K8s
    let conf = get_configuration(None)?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let routes = generate_route_list(App);

    // Serves .br and .gz variants of the bundle when present
    let pkg_service = ServeDir::new(format!("{}/pkg", leptos_options.site_root))
        .precompressed_br()
        .precompressed_gzip();

    let leptos_router = Router::new()
        .nest_service("/pkg", pkg_service)
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    let app = Router::new()
        .merge(waitlist_api_router(WaitlistApiState::new(store)))
        .merge(leptos_router)
        .layer(
            CompressionLayer::new()
                .br(true)
                .gzip(true)
                .quality(CompressionLevel::Best),
        );

    log!("listening on http://{}", &addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
pub fn main() {
    // see lib.rs for the hydration entry point
}
