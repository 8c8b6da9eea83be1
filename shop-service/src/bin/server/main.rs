use std::sync::Arc;

use auth::Authenticator;
use axum::http::HeaderValue;
use shop_service::config::Config;
use shop_service::domain::inventory::service::InventoryService;
use shop_service::domain::sales::service::SalesService;
use shop_service::domain::user::service::UserService;
use shop_service::inbound::http::router::create_router;
use shop_service::outbound::email::SmtpResetMailer;
use shop_service::outbound::oauth::GoogleTokenInfoClient;
use shop_service::outbound::repositories::PostgresInventoryRepository;
use shop_service::outbound::repositories::PostgresSaleRepository;
use shop_service::outbound::repositories::PostgresUserRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shop_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "shop-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        http_port = config.server.http_port,
        frontend_url = %config.frontend.url,
        smtp_host = %config.smtp.host,
        access_ttl_minutes = config.jwt.access_ttl_minutes,
        reset_ttl_minutes = config.jwt.reset_ttl_minutes,
        "Configuration loaded"
    );

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = 5,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let authenticator = Arc::new(Authenticator::with_ttls(
        config.jwt.secret.as_bytes(),
        config.jwt.access_ttl_minutes,
        config.jwt.reset_ttl_minutes,
    ));

    let user_repository = Arc::new(PostgresUserRepository::new(pg_pool.clone()));
    let reset_mailer = Arc::new(SmtpResetMailer::new(&config.smtp, &config.frontend.url)?);
    let google_verifier = Arc::new(GoogleTokenInfoClient::new(
        config.google.tokeninfo_url.clone(),
    ));

    let user_service = Arc::new(UserService::new(
        user_repository,
        reset_mailer,
        google_verifier,
        authenticator,
    ));
    let inventory_service = Arc::new(InventoryService::new(Arc::new(
        PostgresInventoryRepository::new(pg_pool.clone()),
    )));
    let sales_service = Arc::new(SalesService::new(Arc::new(PostgresSaleRepository::new(
        pg_pool,
    ))));

    let allowed_origin = config.frontend.url.parse::<HeaderValue>()?;

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    let application = create_router(
        user_service,
        inventory_service,
        sales_service,
        allowed_origin,
    );

    axum::serve(http_listener, application).await?;

    Ok(())
}
