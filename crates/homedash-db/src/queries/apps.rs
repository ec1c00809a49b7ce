//! App shortcut database queries.

use crate::pool::{DbError, DbPool, DbResult};
use rusqlite::{params, Connection, Row};

/// App row from database.
#[derive(Debug, Clone)]
pub struct AppRow {
    pub id: i64,
    pub name: String,
    pub url: String,
    pub icon: String,
    pub is_pinned: bool,
    pub created_at: String,
    pub updated_at: String,
}

const APP_COLUMNS: &str = "id, name, url, icon, is_pinned, created_at, updated_at";

fn map_row(row: &Row<'_>) -> rusqlite::Result<AppRow> {
    Ok(AppRow {
        id: row.get(0)?,
        name: row.get(1)?,
        url: row.get(2)?,
        icon: row.get(3)?,
        is_pinned: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}

/// Insert a new app and return its assigned id.
pub fn insert_app(
    pool: &DbPool,
    name: &str,
    url: &str,
    icon: &str,
    is_pinned: bool,
    now: &str,
) -> DbResult<i64> {
    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO apps (name, url, icon, is_pinned, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
            params![name, url, icon, is_pinned, now],
        )?;
        Ok(conn.last_insert_rowid())
    })
}

fn not_found(id: i64) -> impl FnOnce(rusqlite::Error) -> DbError {
    move |e| match e {
        rusqlite::Error::QueryReturnedNoRows => DbError::NotFound(format!("App: {}", id)),
        e => DbError::Connection(e),
    }
}

fn fetch_app(conn: &Connection, id: i64) -> DbResult<AppRow> {
    conn.query_row(
        &format!("SELECT {APP_COLUMNS} FROM apps WHERE id = ?1"),
        params![id],
        map_row,
    )
    .map_err(not_found(id))
}

/// Get an app by ID.
pub fn get_app(pool: &DbPool, id: i64) -> DbResult<AppRow> {
    pool.with_conn(|conn| fetch_app(conn, id))
}

/// List all apps, alphabetically.
pub fn list_apps(pool: &DbPool) -> DbResult<Vec<AppRow>> {
    pool.with_conn(|conn| {
        let mut stmt = conn.prepare(&format!(
            "SELECT {APP_COLUMNS} FROM apps ORDER BY name COLLATE NOCASE ASC, id ASC"
        ))?;

        let rows = stmt.query_map([], map_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(DbError::from)
    })
}

/// User-editable fields of an app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppFields {
    pub name: String,
    pub url: String,
    pub icon: String,
    pub is_pinned: bool,
}

/// Read an app, let `edit` compute its new fields, and write them back
/// without releasing the connection in between.
///
/// The outer result carries database errors. The inner one carries whatever
/// `edit` rejected, in which case nothing is written.
///
/// `updated_at` is never stored earlier than `created_at`.
pub fn modify_app<E, F>(pool: &DbPool, id: i64, now: &str, edit: F) -> DbResult<Result<AppRow, E>>
where
    F: FnOnce(&AppRow) -> Result<AppFields, E>,
{
    pool.with_conn(|conn| {
        let existing = fetch_app(conn, id)?;
        let fields = match edit(&existing) {
            Ok(fields) => fields,
            Err(e) => return Ok(Err(e)),
        };

        let row = conn
            .query_row(
                &format!(
                    "UPDATE apps
                     SET name = ?1, url = ?2, icon = ?3, is_pinned = ?4,
                         updated_at = MAX(created_at, ?5)
                     WHERE id = ?6
                     RETURNING {APP_COLUMNS}"
                ),
                params![fields.name, fields.url, fields.icon, fields.is_pinned, now, id],
                map_row,
            )
            .map_err(not_found(id))?;
        Ok(Ok(row))
    })
}

/// Flip the pinned flag of an app in a single statement.
pub fn toggle_pinned(pool: &DbPool, id: i64, now: &str) -> DbResult<AppRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            &format!(
                "UPDATE apps
                 SET is_pinned = NOT is_pinned, updated_at = MAX(created_at, ?1)
                 WHERE id = ?2
                 RETURNING {APP_COLUMNS}"
            ),
            params![now, id],
            map_row,
        )
        .map_err(not_found(id))
    })
}

/// Delete an app, returning the removed row.
pub fn delete_app(pool: &DbPool, id: i64) -> DbResult<AppRow> {
    pool.with_conn(|conn| {
        conn.query_row(
            &format!("DELETE FROM apps WHERE id = ?1 RETURNING {APP_COLUMNS}"),
            params![id],
            map_row,
        )
        .map_err(not_found(id))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::init_memory_pool;

    const T0: &str = "2024-01-01T00:00:00+00:00";
    const T1: &str = "2024-01-02T00:00:00+00:00";

    #[test]
    fn test_insert_and_get() {
        let pool = init_memory_pool().unwrap();
        let id = insert_app(&pool, "Plex", "http://plex.local", "mdiPlex", false, T0).unwrap();

        let row = get_app(&pool, id).unwrap();
        assert_eq!(row.name, "Plex");
        assert_eq!(row.url, "http://plex.local");
        assert!(!row.is_pinned);
        assert_eq!(row.created_at, T0);
        assert_eq!(row.updated_at, T0);
    }

    #[test]
    fn test_ids_are_unique() {
        let pool = init_memory_pool().unwrap();
        let a = insert_app(&pool, "A", "http://a", "", false, T0).unwrap();
        let b = insert_app(&pool, "B", "http://b", "", false, T0).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_list_is_sorted_by_name() {
        let pool = init_memory_pool().unwrap();
        insert_app(&pool, "zulu", "http://z", "", false, T0).unwrap();
        insert_app(&pool, "Alpha", "http://a", "", false, T0).unwrap();
        insert_app(&pool, "bravo", "http://b", "", true, T0).unwrap();

        let names: Vec<String> = list_apps(&pool).unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Alpha", "bravo", "zulu"]);
    }

    fn fields(name: &str, is_pinned: bool) -> AppFields {
        AppFields {
            name: name.to_string(),
            url: format!("http://{}", name.to_lowercase()),
            icon: String::new(),
            is_pinned,
        }
    }

    #[test]
    fn test_modify_and_toggle() {
        let pool = init_memory_pool().unwrap();
        let id = insert_app(&pool, "Old", "http://old", "", false, T0).unwrap();

        let row = modify_app(&pool, id, T1, |existing| {
            assert_eq!(existing.name, "Old");
            Ok::<_, String>(fields("New", false))
        })
        .unwrap()
        .unwrap();
        assert_eq!(row.name, "New");
        assert_eq!(row.url, "http://new");
        assert_eq!(row.created_at, T0);
        assert_eq!(row.updated_at, T1);

        let row = toggle_pinned(&pool, id, T1).unwrap();
        assert!(row.is_pinned);
        assert!(!toggle_pinned(&pool, id, T1).unwrap().is_pinned);
    }

    #[test]
    fn test_modify_rejected_edit_writes_nothing() {
        let pool = init_memory_pool().unwrap();
        let id = insert_app(&pool, "Keep", "http://keep", "", false, T0).unwrap();

        let outcome = modify_app(&pool, id, T1, |_| Err("rejected")).unwrap();
        assert_eq!(outcome.unwrap_err(), "rejected");

        let row = get_app(&pool, id).unwrap();
        assert_eq!(row.name, "Keep");
        assert_eq!(row.updated_at, T0);
    }

    #[test]
    fn test_updated_at_never_precedes_created_at() {
        let pool = init_memory_pool().unwrap();
        let id = insert_app(&pool, "Late", "http://late", "", false, T1).unwrap();

        let row = toggle_pinned(&pool, id, T0).unwrap();
        assert_eq!(row.updated_at, T1);
    }

    #[test]
    fn test_missing_rows_are_not_found() {
        let pool = init_memory_pool().unwrap();

        assert!(matches!(get_app(&pool, 42), Err(DbError::NotFound(_))));
        assert!(matches!(delete_app(&pool, 42), Err(DbError::NotFound(_))));
        assert!(matches!(toggle_pinned(&pool, 42, T0), Err(DbError::NotFound(_))));
        assert!(matches!(
            modify_app(&pool, 42, T0, |_| Ok::<_, String>(fields("x", false))),
            Err(DbError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete() {
        let pool = init_memory_pool().unwrap();
        let id = insert_app(&pool, "Gone", "http://gone", "", false, T0).unwrap();

        let removed = delete_app(&pool, id).unwrap();
        assert_eq!(removed.name, "Gone");
        assert!(list_apps(&pool).unwrap().is_empty());
    }
}
