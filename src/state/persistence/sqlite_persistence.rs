use std::path::{Path, PathBuf};

use async_trait::async_trait;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

use super::{Backend, StorageError};

/// Overrides the database location.
pub const DB_PATH_ENV: &str = "TODOS_DB";

#[derive(Debug, Clone)]
pub struct SqliteBackend {
    pool: SqlitePool,
}

impl SqliteBackend {
    pub async fn open(path: &Path) -> Result<Self, StorageError> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StorageError::Open(format!("failed to create {}: {e}", dir.display())))?;
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePool::connect_with(options)
            .await
            .map_err(|e| StorageError::Open(e.to_string()))?;

        let backend = Self { pool };
        backend.init_tables().await?;

        Ok(backend)
    }

    pub fn default_path() -> PathBuf {
        if let Some(path) = std::env::var_os(DB_PATH_ENV) {
            return PathBuf::from(path);
        }

        let mut path = if let Some(project_dirs) = directories::ProjectDirs::from("rs", "Todos", "TodoLists") {
            project_dirs.data_dir().into()
        } else {
            std::env::current_dir().unwrap_or_default()
        };

        path.push("todos.db");
        path
    }

    async fn init_tables(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS kv (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Open(format!("failed to create kv table: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl Backend for SqliteBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        sqlx::query_scalar::<_, String>("SELECT value FROM kv WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StorageError::Read(e.to_string()))
    }

    // A single upsert: SQLite applies it atomically, so a crash leaves either
    // the old value or the new one.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        sqlx::query(
            "INSERT INTO kv (key, value) VALUES (?, ?) \
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
        )
        .bind(key)
        .bind(value)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Write(e.to_string()))?;

        Ok(())
    }
}
