use serde::Deserialize;
use server::ServerState;
use sparta_db::{DbClient, StorageError};
use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::Arc,
};
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod server;
mod views;

#[derive(Debug, Error)]
enum InitError {
    #[error("Error parsing .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
    #[error("Error parsing environment: {0}")]
    Envy(#[from] envy::Error),
    #[error("Error creating database client: {0}")]
    Database(#[from] StorageError),
    #[error("Error loading templates: {0}")]
    Templates(#[from] minijinja::Error),
    #[error("Error binding tcp listener: {0}")]
    TcpBind(std::io::Error),
    #[error("Error serving server: {0}")]
    TcpServe(std::io::Error),
}

#[derive(Clone, Eq, PartialEq, Debug, Hash, Deserialize)]
struct Env {
    #[serde(default = "default_port")]
    port: u16,
    #[serde(default = "default_db_host")]
    db_host: String,
}

fn default_port() -> u16 {
    3000
}

fn default_db_host() -> String {
    "mongodb://localhost:27017/sparta_app".to_owned()
}

fn install_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "sparta_app=debug,\
                sparta_db=debug,\
                tower_http=debug,axum::rejection=trace,mongodb=info"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn get_env() -> Result<Env, InitError> {
    if let Err(e) = dotenvy::dotenv() {
        if e.not_found() {
            debug!("No .dotenv file found");
        } else {
            return Err(e.into());
        }
    }

    envy::from_env().map_err(InitError::from)
}

/// An unreachable database is reported but does not stop the server.
async fn report_connectivity(db_client: Arc<DbClient>) {
    match db_client.ping().await {
        Ok(()) => info!(database = db_client.database_name(), "Connected to MongoDB"),
        Err(err) => error!(error = %err, "MongoDB connection error"),
    }
}

async fn cancel_on_ctrl_c(shutdown: CancellationToken) {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down"),
        Err(err) => error!(error = %err, "Could not listen for ctrl-c"),
    }
    shutdown.cancel();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), InitError> {
    install_tracing();
    let env = get_env()?;

    let db_client = Arc::new(DbClient::connect(&env.db_host).await?);
    tokio::spawn(report_connectivity(Arc::clone(&db_client)));

    let state = ServerState::new(db_client)?;
    let tracing_layer = TraceLayer::new_for_http();
    let app = server::routes().layer(tracing_layer).with_state(state);

    let server_address = SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), env.port);
    let listener = tokio::net::TcpListener::bind(server_address)
        .await
        .map_err(InitError::TcpBind)?;
    info!("Server is running on http://localhost:{}", env.port);

    let shutdown = CancellationToken::new();
    tokio::spawn(cancel_on_ctrl_c(shutdown.clone()));

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(InitError::TcpServe)?;

    Ok(())
}
