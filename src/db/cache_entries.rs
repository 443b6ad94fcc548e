use crate::errors::ServerError;
use rusqlite::{params, Connection, OptionalExtension};

/// Fetch a live payload. Rows past their expiry are deleted and read as a miss.
pub fn get_entry(conn: &Connection, key: &str, now: i64) -> Result<Option<String>, ServerError> {
    let row: Option<(String, i64)> = conn
        .query_row(
            "select payload, expires_at from property_cache where cache_key = ?",
            params![key],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .optional()
        .map_err(|e| ServerError::DbError(format!("cache lookup failed: {e}")))?;

    match row {
        Some((payload, expires_at)) if expires_at > now => Ok(Some(payload)),
        Some(_) => {
            delete_entry(conn, key)?;
            Ok(None)
        }
        None => Ok(None),
    }
}

pub fn put_entry(
    conn: &Connection,
    key: &str,
    payload: &str,
    now: i64,
    ttl_secs: i64,
) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into property_cache (cache_key, payload, created_at, expires_at)
        values (?, ?, ?, ?)
        on conflict(cache_key) do update set
            payload = excluded.payload,
            created_at = excluded.created_at,
            expires_at = excluded.expires_at
        "#,
        params![key, payload, now, now + ttl_secs],
    )
    .map_err(|e| ServerError::DbError(format!("cache write failed: {e}")))?;
    Ok(())
}

pub fn delete_entry(conn: &Connection, key: &str) -> Result<usize, ServerError> {
    conn.execute("delete from property_cache where cache_key = ?", params![key])
        .map_err(|e| ServerError::DbError(format!("cache delete failed: {e}")))
}

pub fn purge_expired(conn: &Connection, now: i64) -> Result<usize, ServerError> {
    conn.execute(
        "delete from property_cache where expires_at <= ?",
        params![now],
    )
    .map_err(|e| ServerError::DbError(format!("cache purge failed: {e}")))
}
