//! Embedded, versioned schema migrations.
//!
//! Each migration runs once inside its own transaction and is recorded in
//! `schema_version` together with a SHA-256 checksum of its SQL. Re-running is
//! a no-op; an applied migration whose SQL has since changed is an error.

use rusqlite::Connection;
use sha2::{Digest, Sha256};
use thiserror::Error;

use superheroes_core::storage::RepositoryError;

/// A migration compiled into the binary.
pub struct Migration {
    pub id: &'static str,
    pub sql: &'static str,
}

/// All migrations, in application order.
pub const MIGRATIONS: &[Migration] = &[
    Migration {
        id: "001_create_heroes_powers",
        sql: include_str!("../../../migrations/001_create_heroes_powers.sql"),
    },
    Migration {
        id: "002_index_hero_powers",
        sql: include_str!("../../../migrations/002_index_hero_powers.sql"),
    },
];

const CREATE_SCHEMA_VERSION: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    id INTEGER PRIMARY KEY,
    migration_id TEXT NOT NULL UNIQUE,
    applied_at INTEGER NOT NULL,
    checksum TEXT NOT NULL
)
"#;

#[derive(Debug, Error)]
pub enum MigrationError {
    #[error("{id}: {source}")]
    Sqlite {
        id: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("{id}: checksum mismatch (recorded {recorded}, embedded {embedded})")]
    ChecksumMismatch {
        id: String,
        recorded: String,
        embedded: String,
    },
}

impl From<MigrationError> for RepositoryError {
    fn from(err: MigrationError) -> Self {
        match &err {
            MigrationError::Sqlite { id, source } => RepositoryError::Migration {
                id: id.clone(),
                reason: source.to_string(),
            },
            MigrationError::ChecksumMismatch { id, .. } => RepositoryError::Migration {
                id: id.clone(),
                reason: err.to_string(),
            },
        }
    }
}

/// Computes the hex-encoded SHA-256 of a migration's SQL.
pub fn compute_checksum(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}

/// Applies every pending migration. Returns how many were applied.
pub fn apply_migrations(conn: &mut Connection) -> Result<usize, MigrationError> {
    apply(conn, MIGRATIONS)
}

fn apply(conn: &mut Connection, migrations: &[Migration]) -> Result<usize, MigrationError> {
    conn.execute(CREATE_SCHEMA_VERSION, [])
        .map_err(|source| MigrationError::Sqlite {
            id: "schema_version".to_string(),
            source,
        })?;

    let mut applied = 0;
    for migration in migrations {
        if apply_one(conn, migration)? {
            tracing::info!(migration = migration.id, "Applied migration");
            applied += 1;
        }
    }
    Ok(applied)
}

/// Applies a single migration unless already recorded.
fn apply_one(conn: &mut Connection, migration: &Migration) -> Result<bool, MigrationError> {
    let sqlite_err = |source: rusqlite::Error| MigrationError::Sqlite {
        id: migration.id.to_string(),
        source,
    };
    let checksum = compute_checksum(migration.sql);

    let recorded = match conn.query_row(
        "SELECT checksum FROM schema_version WHERE migration_id = ?1",
        [migration.id],
        |row| row.get::<_, String>(0),
    ) {
        Ok(recorded) => Some(recorded),
        Err(rusqlite::Error::QueryReturnedNoRows) => None,
        Err(e) => return Err(sqlite_err(e)),
    };

    if let Some(recorded) = recorded {
        if recorded != checksum {
            return Err(MigrationError::ChecksumMismatch {
                id: migration.id.to_string(),
                recorded,
                embedded: checksum,
            });
        }
        return Ok(false);
    }

    let tx = conn.transaction().map_err(sqlite_err)?;
    tx.execute_batch(migration.sql).map_err(sqlite_err)?;
    tx.execute(
        "INSERT INTO schema_version (migration_id, applied_at, checksum) \
         VALUES (?1, CAST(strftime('%s', 'now') AS INTEGER), ?2)",
        rusqlite::params![migration.id, checksum],
    )
    .map_err(sqlite_err)?;
    tx.commit().map_err(sqlite_err)?;

    Ok(true)
}
