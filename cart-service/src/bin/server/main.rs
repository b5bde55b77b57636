use std::sync::Arc;

use auth::TokenCodec;
use cart_service::config::Config;
use cart_service::domain::auth::service::AuthService;
use cart_service::domain::cart::service::CartService;
use cart_service::domain::customer::service::CustomerService;
use cart_service::domain::product::service::ProductService;
use cart_service::inbound::http::router::create_router;
use cart_service::inbound::http::router::AppState;
use cart_service::outbound::repositories::cart_item::PostgresCartItemRepository;
use cart_service::outbound::repositories::customer::PostgresCustomerRepository;
use cart_service::outbound::repositories::product::PostgresProductRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cart_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "cart-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(
        database_url = %config.database.url,
        http_port = config.server.http_port,
        jwt_expiration_hours = config.jwt.expiration_hours,
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

    let token_codec = Arc::new(TokenCodec::new(
        config.jwt.secret.as_bytes(),
        chrono::Duration::hours(config.jwt.expiration_hours),
    ));

    let customer_repository = Arc::new(PostgresCustomerRepository::new(pg_pool.clone()));
    let product_repository = Arc::new(PostgresProductRepository::new(pg_pool.clone()));
    let cart_item_repository = Arc::new(PostgresCartItemRepository::new(pg_pool));

    let state = AppState {
        customer_service: Arc::new(CustomerService::new(Arc::clone(&customer_repository))),
        auth_service: Arc::new(AuthService::new(
            Arc::clone(&customer_repository),
            Arc::clone(&token_codec),
        )),
        product_service: Arc::new(ProductService::new(Arc::clone(&product_repository))),
        cart_service: Arc::new(CartService::new(
            cart_item_repository,
            customer_repository,
            product_repository,
        )),
        token_codec,
    };

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(state)).await?;

    Ok(())
}
