use crate::entities::{
    admin_sessions, admins, articles, documents, institution_details, institutions,
    page_content, required_documents, test_requirements,
};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Schema,
};
use std::env;
use std::time::Duration;
use tracing::{info, warn};

pub async fn setup_database() -> anyhow::Result<DatabaseConnection> {
    let db_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    info!("📂 Database: {}", db_url);

    let mut opt = ConnectOptions::new(&db_url);
    opt.max_connections(20)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(30))
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(true)
        .sqlx_logging_level(log::LevelFilter::Debug);

    let db = Database::connect(opt).await?;

    info!("✅ Database connected successfully");

    run_migrations(&db).await?;

    crate::infrastructure::seed::seed_initial_data(&db).await?;

    Ok(db)
}

pub async fn run_migrations(db: &DatabaseConnection) -> anyhow::Result<()> {
    let builder = db.get_database_backend();

    if builder == DatabaseBackend::Postgres {
        info!("🔄 Running SQLx migrations for PostgreSQL...");
        sqlx::migrate!("./migrations")
            .run(db.get_postgres_connection_pool())
            .await?;
        return Ok(());
    }

    info!("🔄 Creating schema from entities for SQLite/Other...");
    let schema = Schema::new(builder);

    // Parents before children so FK references resolve
    let stmts = vec![
        schema
            .create_table_from_entity(institutions::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(institution_details::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(required_documents::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(test_requirements::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(page_content::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(documents::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(articles::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(admins::Entity)
            .if_not_exists()
            .to_owned(),
        schema
            .create_table_from_entity(admin_sessions::Entity)
            .if_not_exists()
            .to_owned(),
    ];

    for stmt in stmts {
        let stmt = builder.build(&stmt);
        if let Err(e) = db.execute(stmt).await {
            warn!("⚠️ Schema statement failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
