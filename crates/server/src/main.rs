use axum::middleware;
use database::{db::create_connection, services::school::SchoolService};
use log::info;
use migration::{Migrator, MigratorTrait};
use server::{
    AppState,
    auth::attach_subject,
    config::Config,
    routes::{protected_routes, public_routes},
    utils::shutdown::shutdown_signal,
};
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_oauth2_resource_server::server::OAuth2ResourceServer;

#[tokio::main]
async fn main() {
    env_logger::init();

    let config = Config::from_env().expect("Invalid configuration");

    let db = create_connection(&config.database_url)
        .await
        .expect("Failed to connect to the database");

    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    if config.seed_schools {
        SchoolService::seed_schools(&db)
            .await
            .expect("Failed to seed schools");
    }

    let oauth2_resource_server = <OAuth2ResourceServer>::builder()
        .issuer_url(config.oidc_issuer_url.as_str())
        .build()
        .await
        .expect("Failed to build OAuth2ResourceServer");

    let protected = protected_routes().route_layer(
        ServiceBuilder::new()
            .layer(oauth2_resource_server.into_layer())
            .layer(middleware::from_fn(attach_subject)),
    );

    let app = public_routes()
        .merge(protected)
        .layer(CompressionLayer::new())
        .with_state(AppState::new(db));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .expect("Failed to bind listener");
    info!("Running axum on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}
