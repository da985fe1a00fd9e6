mod core;
mod features;
mod shared;

use crate::core::config::Config;
use crate::core::openapi::{ApiDoc, SwaggerInfoModifier};
use crate::core::{database, middleware};
use crate::features::analytics::{
    repositories::PageViewRepository, routes as analytics_routes, PageViewQueue, PageViewWriter,
    PgPageViewRepository,
};
use crate::features::auth::{routes as auth_routes, AuthService, JwtService};
use crate::features::contacts::{routes as contacts_routes, ContactService};
use crate::features::dashboard::{routes as dashboard_routes, DashboardService};
use crate::features::hero_sliders::{
    routes as hero_sliders_routes, HeroSliderService, PgHeroSliderRepository,
};
use crate::features::news::{routes as news_routes, NewsService, PgNewsRepository, SlugGenerator};
use crate::features::officials::{routes as officials_routes, OfficialService, PgOfficialRepository};
use crate::features::potentials::{routes as potentials_routes, PotentialService};
use crate::features::site_settings::{
    routes as settings_routes, PgSettingsRepository, SettingsService,
};
use crate::features::users::{routes as users_routes, UserService};
use crate::features::village_services::{routes as services_routes, VillageServiceService};
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .max_blocking_threads(worker_threads * 4)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;

    tracing::info!(
        "Starting version {} (tokio_worker_threads={}, pid={})",
        config.app.version,
        worker_threads,
        std::process::id()
    );

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(|e| anyhow::anyhow!("Migration failed: {}", e))?;
    tracing::info!("Database migrations completed successfully");

    // Accounts and auth
    let user_service = Arc::new(UserService::new(pool.clone()));
    user_service
        .ensure_superadmin(&config.seed)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to seed superadmin: {}", e))?;

    let jwt_service = Arc::new(JwtService::new(
        &config.auth.jwt_secret,
        config.auth.token_ttl,
        config.auth.jwt_leeway,
    ));
    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_service),
        Arc::clone(&jwt_service),
    ));
    tracing::info!("Auth services initialized");

    // Content
    let news_service = Arc::new(NewsService::new(
        Arc::new(PgNewsRepository::new(pool.clone())),
        SlugGenerator::new(config.slug),
    ));
    let settings_service = Arc::new(SettingsService::new(Arc::new(PgSettingsRepository::new(
        pool.clone(),
    ))));
    let hero_slider_service = Arc::new(HeroSliderService::new(Arc::new(
        PgHeroSliderRepository::new(pool.clone()),
    )));
    let official_service = Arc::new(OfficialService::new(Arc::new(PgOfficialRepository::new(
        pool.clone(),
    ))));
    let village_service_service = Arc::new(VillageServiceService::new(pool.clone()));
    let potential_service = Arc::new(PotentialService::new(pool.clone()));
    let contact_service = Arc::new(ContactService::new(pool.clone()));
    tracing::info!("Content services initialized");

    // Analytics: handlers enqueue, a single writer drains to the database
    let page_view_repo: Arc<dyn PageViewRepository> =
        Arc::new(PgPageViewRepository::new(pool.clone()));
    let (page_view_queue, page_view_rx) = PageViewQueue::new(config.analytics.queue_capacity);
    let page_view_writer = PageViewWriter::new(Arc::clone(&page_view_repo), page_view_rx);
    tokio::spawn(async move {
        page_view_writer.run().await;
    });
    tracing::info!(
        "Page view writer spawned (queue capacity {})",
        config.analytics.queue_capacity
    );

    let dashboard_service = Arc::new(DashboardService::new(
        pool.clone(),
        page_view_repo,
        config.app.version.clone(),
    ));

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require JWT authentication)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes())
        .merge(users_routes::admin_routes(Arc::clone(&user_service)))
        .merge(news_routes::admin_routes(Arc::clone(&news_service)))
        .merge(settings_routes::admin_routes(Arc::clone(&settings_service)))
        .merge(hero_sliders_routes::admin_routes(Arc::clone(
            &hero_slider_service,
        )))
        .merge(officials_routes::admin_routes(Arc::clone(&official_service)))
        .merge(services_routes::admin_routes(Arc::clone(
            &village_service_service,
        )))
        .merge(potentials_routes::admin_routes(Arc::clone(&potential_service)))
        .merge(contacts_routes::admin_routes(Arc::clone(&contact_service)))
        .merge(dashboard_routes::admin_routes(dashboard_service))
        .route_layer(axum::middleware::from_fn_with_state(
            Arc::clone(&jwt_service),
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .merge(auth_routes::public_routes(auth_service))
        .merge(news_routes::public_routes(news_service))
        .merge(settings_routes::public_routes(settings_service))
        .merge(hero_sliders_routes::public_routes(hero_slider_service))
        .merge(officials_routes::public_routes(official_service))
        .merge(services_routes::public_routes(village_service_service))
        .merge(potentials_routes::public_routes(potential_service))
        .merge(contacts_routes::public_routes(contact_service))
        .merge(analytics_routes::public_routes(page_view_queue));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
