#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, resolve_config};
use sea_orm::DatabaseConnection;
use tokio::sync::OnceCell;

// Ensure migrations run only once across the entire test process
static MIGRATED: OnceCell<()> = OnceCell::const_new();

pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    MIGRATED
        .get_or_init(|| async {
            // Throwaway connection just for migrations; connection problems
            // surface again below where the caller can skip
            match connect_with_config(&resolve_config()).await {
                Ok(db) => {
                    if let Err(e) = migration::Migrator::up(&db, None).await {
                        eprintln!("migrate up failed: {}", e);
                    }
                }
                Err(e) => eprintln!("cannot connect to db for migration: {}", e),
            }
        })
        .await;

    // Fresh connection for the current test's runtime
    let mut cfg = resolve_config();
    cfg.max_connections = cfg.max_connections.max(10);
    cfg.min_connections = cfg.min_connections.min(1);
    let db = connect_with_config(&cfg).await?;
    Ok(db)
}
