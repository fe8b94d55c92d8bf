use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Reads one value from the kv_store table; `Ok(None)` if the key is absent.
pub fn kv_get(conn: &Connection, key: &str) -> Result<Option<String>, ServerError> {
    conn.query_row("select value from kv_store where key = ?", [key], |r| {
        r.get(0)
    })
    .optional()
    .map_err(|e| ServerError::DbError(format!("kv get '{key}' failed: {e}")))
}

/// Upserts one value into the kv_store table.
pub fn kv_set(conn: &Connection, key: &str, value: &str) -> Result<(), ServerError> {
    conn.execute(
        r#"
        INSERT INTO kv_store (key, value) VALUES (?1, ?2)
        ON CONFLICT(key) DO UPDATE SET value = excluded.value
        "#,
        params![key, value],
    )
    .map_err(|e| ServerError::DbError(format!("kv set '{key}' failed: {e}")))?;
    Ok(())
}
