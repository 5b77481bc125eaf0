use crate::server::{config::Config, error::AppError, service::seed::SeedService};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations so that every table
/// exists before the first request arrives. With the default `mode=rwc` URL the database
/// file is created when absent.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Inserts demo data when enabled in configuration.
///
/// Seeding is skipped when airplanes already exist so restarts with the flag left on do not
/// duplicate rows.
pub async fn seed_demo_data(
    db: &sea_orm::DatabaseConnection,
    config: &Config,
) -> Result<(), AppError> {
    if !config.seed_demo_data {
        return Ok(());
    }

    let seeded = SeedService::new(db).seed_if_empty().await?;
    if seeded {
        tracing::info!("Seeded demo data");
    } else {
        tracing::info!("Skipping demo data, database already contains airplanes");
    }

    Ok(())
}
