//! SQLite error mapping.
//!
//! Maps `tokio_rusqlite::Error` and `rusqlite::Error` to `RepositoryError`
//! from `superheroes_core::storage`.

use rusqlite::ffi;

use superheroes_core::storage::RepositoryError;

/// Maps a rusqlite error to a RepositoryError.
///
/// # Error Mapping
///
/// - `SQLITE_CONSTRAINT_UNIQUE` / `PRIMARYKEY` → `RepositoryError::AlreadyExists`
/// - `SQLITE_CONSTRAINT_FOREIGNKEY` / `CHECK` → `RepositoryError::InvalidData`
/// - `CannotOpen` → `RepositoryError::ConnectionFailed`
/// - `QueryReturnedNoRows` → `RepositoryError::NotFound`
/// - `FromSqlConversionFailure` → `RepositoryError::Serialization`
/// - All other errors → `RepositoryError::QueryFailed`
fn map_rusqlite_error(
    err: &rusqlite::Error,
    entity_type: &'static str,
    id: &str,
) -> RepositoryError {
    match err {
        rusqlite::Error::SqliteFailure(sqlite_err, _) => match sqlite_err.extended_code {
            ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => {
                RepositoryError::AlreadyExists {
                    entity_type,
                    id: id.to_string(),
                }
            }
            ffi::SQLITE_CONSTRAINT_FOREIGNKEY => RepositoryError::InvalidData(format!(
                "Foreign key constraint violation for {entity_type}"
            )),
            ffi::SQLITE_CONSTRAINT_CHECK => RepositoryError::InvalidData(format!(
                "Check constraint violation for {entity_type}"
            )),
            _ if sqlite_err.code == rusqlite::ErrorCode::CannotOpen => {
                RepositoryError::ConnectionFailed(format!("Cannot open database: {err}"))
            }
            _ => RepositoryError::QueryFailed(err.to_string()),
        },
        rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
            entity_type,
            id: id.to_string(),
        },
        rusqlite::Error::FromSqlConversionFailure(..) => {
            RepositoryError::Serialization(format!("Invalid {entity_type} row: {err}"))
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

/// Maps a tokio_rusqlite error to a RepositoryError.
pub fn map_tokio_rusqlite_error(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
) -> RepositoryError {
    map_tokio_rusqlite_error_with_id(err, entity_type, "unknown")
}

/// Maps a tokio_rusqlite error with a known ID to a RepositoryError.
///
/// Use this variant when the entity ID is known at the call site.
pub fn map_tokio_rusqlite_error_with_id(
    err: tokio_rusqlite::Error,
    entity_type: &'static str,
    id: impl Into<String>,
) -> RepositoryError {
    match &err {
        tokio_rusqlite::Error::Rusqlite(rusqlite_err) => {
            map_rusqlite_error(rusqlite_err, entity_type, &id.into())
        }
        tokio_rusqlite::Error::ConnectionClosed | tokio_rusqlite::Error::Close(_) => {
            RepositoryError::ConnectionFailed("Connection closed unexpectedly".to_string())
        }
        _ => RepositoryError::QueryFailed(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constraint(extended_code: std::os::raw::c_int) -> tokio_rusqlite::Error {
        let sqlite_err = ffi::Error {
            code: rusqlite::ErrorCode::ConstraintViolation,
            extended_code,
        };
        tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(sqlite_err, None))
    }

    #[test]
    fn test_foreign_key_maps_to_invalid_data() {
        let err = constraint(ffi::SQLITE_CONSTRAINT_FOREIGNKEY);

        let result = map_tokio_rusqlite_error(err, "HeroPower");

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_check_maps_to_invalid_data() {
        let err = constraint(ffi::SQLITE_CONSTRAINT_CHECK);

        let result = map_tokio_rusqlite_error(err, "HeroPower");

        assert!(matches!(result, RepositoryError::InvalidData(_)));
    }

    #[test]
    fn test_unique_maps_to_already_exists() {
        let err = constraint(ffi::SQLITE_CONSTRAINT_UNIQUE);

        let result = map_tokio_rusqlite_error_with_id(err, "Hero", "3");

        assert_eq!(
            result,
            RepositoryError::AlreadyExists {
                entity_type: "Hero",
                id: "3".to_string(),
            }
        );
    }

    #[test]
    fn test_no_rows_maps_to_not_found_with_id() {
        let err = tokio_rusqlite::Error::Rusqlite(rusqlite::Error::QueryReturnedNoRows);

        let result = map_tokio_rusqlite_error_with_id(err, "Power", "12");

        assert_eq!(
            result,
            RepositoryError::NotFound {
                entity_type: "Power",
                id: "12".to_string(),
            }
        );
    }

    #[test]
    fn test_connection_closed_maps_to_connection_failed() {
        let result = map_tokio_rusqlite_error(tokio_rusqlite::Error::ConnectionClosed, "Hero");
        assert!(matches!(result, RepositoryError::ConnectionFailed(_)));
    }

    #[test]
    fn test_other_maps_to_query_failed() {
        let err = tokio_rusqlite::Error::Other(Box::new(std::io::Error::other("test error")));

        let result = map_tokio_rusqlite_error(err, "Hero");

        assert!(matches!(result, RepositoryError::QueryFailed(_)));
    }
}
