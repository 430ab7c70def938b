use taxi_service::config::{Config, REQUIRED_VARIABLES};
use taxi_service::db::Database;
use taxi_service::schema::SCHEMA;

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        log::error!("{e}");
    }
}

async fn run() -> anyhow::Result<()> {
    let config = Config::env().inspect_err(|e| {
        log::error!(
            "config: {e}. Check all required environment variables ({}) are set.",
            REQUIRED_VARIABLES.join(", ")
        );
    })?;

    config.log();

    let database = Database::connect(&config.pg_url).await?;
    log::info!("Connected to database ({})", config.pg_url);

    sqlx::raw_sql(SCHEMA).execute(&database.pool).await?;
    log::info!("Successfully ran init query");

    taxi_service::ingest::load_on_startup(&database, &config).await;

    let listen_addr = format!("0.0.0.0:{}", config.listen_port);
    let listener = tokio::net::TcpListener::bind(&listen_addr).await?;

    let router = taxi_service::api::router::router(database);

    log::info!("Listening on {listen_addr}");
    axum::serve(listener, router).await?;

    Ok(())
}
