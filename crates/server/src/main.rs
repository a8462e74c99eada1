//! Trivia API server.
//!
//! Serves the trivia question API over HTTP.

use clap::Parser;
use trivia_persistence::core::QuestionStorage;
use trivia_persistence::seed::seed_sample_questions;
use trivia_rest::{ServerConfig, StorageBackendMode, create_app_with_config, init_logging};
use tracing::info;

#[cfg(feature = "sqlite")]
use trivia_persistence::backends::sqlite::SqliteBackend;

/// Creates and initializes a SQLite backend from the server configuration.
#[cfg(feature = "sqlite")]
fn create_sqlite_backend(config: &ServerConfig) -> anyhow::Result<SqliteBackend> {
    let db_path = config.database_url.as_deref().unwrap_or("trivia.db");
    info!(database = %db_path, "Initializing SQLite backend");

    let backend = if db_path == ":memory:" {
        SqliteBackend::in_memory()?
    } else {
        SqliteBackend::open(db_path)?
    };
    backend.init_schema()?;

    Ok(backend)
}

/// Inserts the sample questions when requested.
async fn maybe_seed<S>(storage: &S, config: &ServerConfig) -> anyhow::Result<()>
where
    S: QuestionStorage,
{
    if config.seed_sample_data {
        let inserted = seed_sample_questions(storage).await?;
        if inserted == 0 {
            info!("Store already holds questions, skipping sample data");
        }
    }
    Ok(())
}

/// Starts the Axum HTTP server.
async fn serve(app: axum::Router, config: &ServerConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr();
    info!(address = %addr, "Server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level);

    if let Err(errors) = config.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let backend_mode = config
        .storage_backend_mode()
        .map_err(|e| anyhow::anyhow!("Invalid storage backend configuration: {}", e))?;

    info!(
        port = config.port,
        host = %config.host,
        storage_backend = %backend_mode,
        page_size = config.page_size,
        "Starting trivia server"
    );

    match backend_mode {
        StorageBackendMode::Sqlite => start_sqlite(config).await,
        StorageBackendMode::Postgres => start_postgres(config).await,
    }
}

/// Starts the server with the SQLite backend.
#[cfg(feature = "sqlite")]
async fn start_sqlite(config: ServerConfig) -> anyhow::Result<()> {
    let backend = create_sqlite_backend(&config)?;
    maybe_seed(&backend, &config).await?;
    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when sqlite feature is not enabled.
#[cfg(not(feature = "sqlite"))]
async fn start_sqlite(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The sqlite backend requires the 'sqlite' feature. \
         Build with: cargo build -p trivia-server --features sqlite"
    )
}

/// Starts the server with the PostgreSQL backend.
#[cfg(feature = "postgres")]
async fn start_postgres(config: ServerConfig) -> anyhow::Result<()> {
    use trivia_persistence::backends::postgres::PostgresBackend;

    let backend = match config.database_url {
        Some(ref url) if url.starts_with("postgres://") || url.starts_with("postgresql://") => {
            info!("Initializing PostgreSQL backend from connection string");
            PostgresBackend::from_connection_string(url).await?
        }
        _ => {
            info!("Initializing PostgreSQL backend from environment variables");
            PostgresBackend::from_env().await?
        }
    };

    backend.init_schema().await?;
    maybe_seed(&backend, &config).await?;

    let app = create_app_with_config(backend, config.clone());
    serve(app, &config).await
}

/// Fallback when postgres feature is not enabled.
#[cfg(not(feature = "postgres"))]
async fn start_postgres(_config: ServerConfig) -> anyhow::Result<()> {
    anyhow::bail!(
        "The postgres backend requires the 'postgres' feature. \
         Build with: cargo build -p trivia-server --features postgres"
    )
}

#[cfg(not(any(feature = "sqlite", feature = "postgres")))]
compile_error!("At least one database backend feature must be enabled");
