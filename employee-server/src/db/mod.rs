//! Database Module
//!
//! Opens the embedded SurrealDB store and applies the employee schema.

pub mod repository;

use crate::core::Config;
use crate::core::ServerError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

/// Idempotent schema definition
///
/// The UNIQUE index is what enforces `employee_id` uniqueness, including
/// under concurrent creates.
const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
DEFINE INDEX IF NOT EXISTS employee_id_unique ON TABLE employee FIELDS employee_id UNIQUE;
DEFINE INDEX IF NOT EXISTS employee_department ON TABLE employee FIELDS department;
DEFINE INDEX IF NOT EXISTS employee_skills ON TABLE employee FIELDS skills;
"#;

/// Database service, owns the SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the store selected by `config.database_path` and apply the schema
    pub async fn new(config: &Config) -> Result<Self, ServerError> {
        let db = if config.is_in_memory() {
            Surreal::new::<Mem>(()).await
        } else {
            if let Some(parent) = std::path::Path::new(&config.database_path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            Surreal::new::<RocksDb>(config.database_path.as_str()).await
        }
        .map_err(|e| ServerError::Database(format!("Failed to open database: {e}")))?;

        db.use_ns(config.database_namespace.as_str())
            .use_db(config.database_name.as_str())
            .await
            .map_err(|e| ServerError::Database(format!("Failed to select database: {e}")))?;

        tracing::info!(
            path = %config.database_path,
            namespace = %config.database_namespace,
            database = %config.database_name,
            "Database connection established"
        );

        apply_schema(&db).await?;

        Ok(Self { db })
    }
}

/// Define the employee table and its indexes
pub async fn apply_schema(db: &Surreal<Db>) -> Result<(), ServerError> {
    db.query(SCHEMA)
        .await
        .and_then(|response| response.check())
        .map_err(|e| ServerError::Database(format!("Failed to apply schema: {e}")))?;
    tracing::info!("Database schema applied");
    Ok(())
}
