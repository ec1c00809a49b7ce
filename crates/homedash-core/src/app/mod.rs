//! App shortcut operations.

pub mod model;

use crate::error::{DashError, DashResult};
use chrono::{DateTime, SecondsFormat, Utc};
use homedash_db::queries::apps::{self as queries, AppFields};
use homedash_db::{DbError, DbPool};
use model::{App, AppUpdate, NewApp};

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn not_found(id: i64) -> impl FnOnce(DbError) -> DashError {
    move |e| match e {
        DbError::NotFound(_) => DashError::AppNotFound(id),
        e => DashError::Database(e),
    }
}

/// List all apps.
pub fn list_apps(pool: &DbPool) -> DashResult<Vec<App>> {
    queries::list_apps(pool)?
        .into_iter()
        .map(App::from_row)
        .collect()
}

/// Get an app by ID.
pub fn get_app(pool: &DbPool, id: i64) -> DashResult<App> {
    let row = queries::get_app(pool, id).map_err(not_found(id))?;
    App::from_row(row)
}

/// Create a new app.
pub fn create_app(pool: &DbPool, input: NewApp) -> DashResult<App> {
    let input = input.normalized()?;
    let now = timestamp(Utc::now());

    let id = queries::insert_app(
        pool,
        &input.name,
        &input.url,
        &input.icon,
        input.is_pinned.unwrap_or(false),
        &now,
    )?;

    tracing::debug!(id, name = %input.name, "App created");
    get_app(pool, id)
}

/// Apply a partial update. Fields missing from `update` keep their stored value.
///
/// The merge happens against the row as it is when the write lands, so
/// concurrent partial updates to different fields both survive.
pub fn update_app(pool: &DbPool, id: i64, update: &AppUpdate) -> DashResult<App> {
    let now = timestamp(Utc::now());

    let row = queries::modify_app(pool, id, &now, |row| {
        let existing = App::from_row(row.clone())?;
        let merged = update.apply_to(&existing)?;
        Ok::<_, DashError>(AppFields {
            name: merged.name,
            url: merged.url,
            icon: merged.icon,
            is_pinned: merged.is_pinned.unwrap_or(existing.is_pinned),
        })
    })
    .map_err(not_found(id))??;

    tracing::debug!(id, "App updated");
    App::from_row(row)
}

/// Flip the pinned flag of an app.
pub fn toggle_pin(pool: &DbPool, id: i64) -> DashResult<App> {
    let row = queries::toggle_pinned(pool, id, &timestamp(Utc::now())).map_err(not_found(id))?;

    tracing::debug!(id, is_pinned = row.is_pinned, "App pin toggled");
    App::from_row(row)
}

/// Delete an app, returning the record as it was before removal.
pub fn delete_app(pool: &DbPool, id: i64) -> DashResult<App> {
    let row = queries::delete_app(pool, id).map_err(not_found(id))?;

    tracing::debug!(id, "App deleted");
    App::from_row(row)
}

/// Apps marked as pinned, in list order.
pub fn pinned_apps(apps: &[App]) -> Vec<&App> {
    apps.iter().filter(|app| app.is_pinned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use homedash_db::init_memory_pool;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_create_assigns_id_and_timestamps() {
        let pool = init_memory_pool().unwrap();
        let app = create_app(&pool, NewApp::new("Plex", "http://plex", "mdiPlex")).unwrap();

        assert!(app.id > 0);
        assert!(!app.is_pinned);
        assert_eq!(app.created_at, app.updated_at);
    }

    #[test]
    fn test_create_rejects_blank_name() {
        let pool = init_memory_pool().unwrap();
        let err = create_app(&pool, NewApp::new("", "http://x", "")).unwrap_err();
        assert!(matches!(err, DashError::ValidationError(_)));
        assert!(list_apps(&pool).unwrap().is_empty());
    }

    #[test]
    fn test_toggle_pin_flips_and_back() {
        let pool = init_memory_pool().unwrap();
        let app = create_app(&pool, NewApp::new("Plex", "http://plex", "")).unwrap();

        let pinned = toggle_pin(&pool, app.id).unwrap();
        assert!(pinned.is_pinned);
        assert!(pinned.updated_at >= pinned.created_at);

        let unpinned = toggle_pin(&pool, app.id).unwrap();
        assert!(!unpinned.is_pinned);
    }

    #[test]
    fn test_update_is_partial() {
        let pool = init_memory_pool().unwrap();
        let app = create_app(&pool, NewApp::new("Plex", "http://plex", "mdiPlex")).unwrap();

        let update = AppUpdate {
            url: Some("https://plex.example".into()),
            ..AppUpdate::default()
        };
        let updated = update_app(&pool, app.id, &update).unwrap();

        assert_eq!(updated.id, app.id);
        assert_eq!(updated.name, "Plex");
        assert_eq!(updated.url, "https://plex.example");
        assert_eq!(updated.icon, "mdiPlex");
        assert_eq!(updated.created_at, app.created_at);
        assert!(updated.updated_at >= app.updated_at);
    }

    #[test]
    fn test_missing_app_is_not_found() {
        let pool = init_memory_pool().unwrap();

        assert!(matches!(get_app(&pool, 7), Err(DashError::AppNotFound(7))));
        assert!(matches!(toggle_pin(&pool, 7), Err(DashError::AppNotFound(7))));
        assert!(matches!(delete_app(&pool, 7), Err(DashError::AppNotFound(7))));
        assert!(update_app(&pool, 7, &AppUpdate::pinned(true))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_delete_returns_removed_record() {
        let pool = init_memory_pool().unwrap();
        let app = create_app(&pool, NewApp::new("Plex", "http://plex", "")).unwrap();

        let removed = delete_app(&pool, app.id).unwrap();
        assert_eq!(removed, app);
        assert!(list_apps(&pool).unwrap().is_empty());
    }

    #[test]
    fn test_pinned_apps_filters() {
        let pool = init_memory_pool().unwrap();
        let mut input = NewApp::new("A", "http://a", "");
        input.is_pinned = Some(true);
        create_app(&pool, input).unwrap();
        create_app(&pool, NewApp::new("B", "http://b", "")).unwrap();

        let apps = list_apps(&pool).unwrap();
        let pinned = pinned_apps(&apps);
        assert_eq!(pinned.len(), 1);
        assert_eq!(pinned[0].name, "A");
    }

    #[test]
    fn test_concurrent_toggles_are_not_lost() {
        let pool = Arc::new(init_memory_pool().unwrap());
        let app = create_app(&pool, NewApp::new("Plex", "http://plex", "")).unwrap();

        let handles: Vec<_> = (0..2)
            .map(|_| {
                let pool = Arc::clone(&pool);
                thread::spawn(move || {
                    for _ in 0..25 {
                        toggle_pin(&pool, app.id).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        // Fifty toggles in total land back where we started.
        assert!(!get_app(&pool, app.id).unwrap().is_pinned);
    }

    #[test]
    fn test_concurrent_partial_updates_keep_both_fields() {
        let pool = Arc::new(init_memory_pool().unwrap());
        let app = create_app(&pool, NewApp::new("Plex", "http://plex", "")).unwrap();

        let updates = [
            AppUpdate {
                name: Some("Jellyfin".into()),
                ..AppUpdate::default()
            },
            AppUpdate {
                icon: Some("mdiJellyfin".into()),
                ..AppUpdate::default()
            },
        ];
        let handles: Vec<_> = updates
            .into_iter()
            .map(|update| {
                let pool = Arc::clone(&pool);
                thread::spawn(move || {
                    for _ in 0..25 {
                        update_app(&pool, app.id, &update).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let stored = get_app(&pool, app.id).unwrap();
        assert_eq!(stored.name, "Jellyfin");
        assert_eq!(stored.icon, "mdiJellyfin");
        assert_eq!(stored.url, "http://plex");
    }

    #[test]
    fn test_invalid_update_leaves_record_untouched() {
        let pool = init_memory_pool().unwrap();
        let app = create_app(&pool, NewApp::new("Plex", "http://plex", "")).unwrap();

        let update = AppUpdate {
            name: Some("   ".into()),
            ..AppUpdate::default()
        };
        let err = update_app(&pool, app.id, &update).unwrap_err();
        assert!(matches!(err, DashError::ValidationError(_)));
        assert_eq!(get_app(&pool, app.id).unwrap(), app);
    }
}
