use crate::config::Config;
use anyhow::Result;
use libsql::{Builder, Connection, Database as LibsqlDatabase};
use std::path::Path;

const SYSTEM_MIGRATIONS: &[(&str, &str)] =
    &[("system/000_migrations_table.sql", include_str!("migrations/system/000_migrations_table.sql"))];

const MIGRATIONS: &[(&str, &str)] = &[("001_books.sql", include_str!("migrations/001_books.sql"))];

pub struct Database {
    // keeps the underlying database alive for as long as `conn` is in use
    _db: LibsqlDatabase,
    conn: Connection,
}

impl Database {
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Opens the database named in the config, relative to `data_dir`.
    pub async fn new(cfg: &Config, data_dir: &Path) -> Result<Self> {
        let path = data_dir.join(cfg.app.get_db());
        tracing::info!(path = ?path, "[db] opening local database");
        Self::open(&path).await
    }

    pub async fn open(path: &Path) -> Result<Self> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;
        conn.query("SELECT 1", ()).await?;

        Ok(Database { _db: db, conn })
    }

    /// Brings the schema up to date. Safe to call more than once.
    pub async fn migrate(&self) -> Result<()> {
        for (filename, sql) in SYSTEM_MIGRATIONS.iter().chain(MIGRATIONS) {
            Self::run_migration(&self.conn, filename, sql).await?;
        }
        Ok(())
    }

    async fn is_migration_applied(conn: &Connection, name: &str) -> Result<bool> {
        let query = "SELECT 1 FROM _migrations WHERE name = ?";
        match conn.query(query, libsql::params![name]).await {
            Ok(mut rows) => Ok(rows.next().await?.is_some()),
            Err(e) => {
                if e.to_string().contains("no such table") {
                    Ok(false)
                } else {
                    Err(e.into())
                }
            }
        }
    }

    async fn record_migration(conn: &Connection, name: &str) -> Result<()> {
        let query = r#"
            INSERT INTO _migrations (name, applied_at)
            VALUES (?, strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
        "#;
        conn.execute(query, libsql::params![name]).await?;
        Ok(())
    }

    async fn run_migration(conn: &Connection, name: &str, sql: &str) -> Result<()> {
        if Self::is_migration_applied(conn, name).await? {
            tracing::debug!("migration {} already applied, skipping", name);
            return Ok(());
        }

        tracing::info!("applying migration: {}", name);
        conn.execute_batch(sql)
            .await
            .map_err(|e| anyhow::anyhow!("failed to execute migration {name}: {e}"))?;

        Self::record_migration(conn, name).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    async fn count_migrations(db: &Database) -> i64 {
        let mut rows = db
            .connection()
            .query("SELECT COUNT(*) FROM _migrations", ())
            .await
            .unwrap();
        let row = rows.next().await.unwrap().unwrap();
        row.get(0).unwrap()
    }

    #[tokio::test]
    async fn migrate_creates_books_table() {
        let dir = tempdir().unwrap();
        let db = Database::open(&dir.path().join("test.db")).await.unwrap();
        db.migrate().await.unwrap();

        let mut rows = db
            .connection()
            .query("SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'books'", ())
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn migrate_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.db");

        let db = Database::open(&path).await.unwrap();
        db.migrate().await.unwrap();
        db.migrate().await.unwrap();
        assert_eq!(count_migrations(&db).await, 2);
        drop(db);

        let reopened = Database::open(&path).await.unwrap();
        reopened.migrate().await.unwrap();
        assert_eq!(count_migrations(&reopened).await, 2);
    }
}
