use ident_server::{AppState, build_registry, build_router, build_session_codec, logger};

use ident_auth::ScryptHasher;
use ident_config::Config;
use ident_core::AccountStore;
use ident_db::AccountRepository;

use std::error::Error;
use std::sync::Arc;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional; real environment variables win
    dotenvy::dotenv().ok();

    let config = Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting ident-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening database: {}", database_path.display());
    let pool = ident_db::open_pool(&database_path).await?;

    let store: Arc<dyn AccountStore> = Arc::new(AccountRepository::new(pool));
    let registry = build_registry(&config, store.clone(), Arc::new(ScryptHasher::new()))?;
    let sessions = build_session_codec(&config, store);

    let state = AppState::new(registry, sessions, config.auth.secure_cookies);
    let app = build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");

    Ok(())
}
