//! App shortcut commands.
//!
//! Each command runs the same action creators the dashboard uses and prints
//! what ended up in the store.

use anyhow::Result;
use clap::{Args, Subcommand};
use colored::Colorize;
use homedash_client::{Actions, ApiClient, Store};
use homedash_core::app::model::{App, NewApp};

use crate::output;

#[derive(Subcommand)]
pub enum AppCommands {
    /// List all apps
    List {
        /// Only show pinned apps
        #[arg(long)]
        pinned: bool,
    },

    /// Show one app
    Show {
        /// App ID
        id: i64,
    },

    /// Add a new app
    Add(AppFields),

    /// Pin or unpin an app
    Pin {
        /// App ID
        id: i64,
    },

    /// Replace an app's name, url and icon
    Update {
        /// App ID
        id: i64,

        #[command(flatten)]
        fields: AppFields,
    },

    /// Delete an app
    Rm {
        /// App ID
        id: i64,
    },
}

#[derive(Args)]
pub struct AppFields {
    /// Display name
    pub name: String,

    /// Target URL
    pub url: String,

    /// Icon name (e.g. mdiPlex)
    #[arg(short, long, default_value = "")]
    pub icon: String,

    /// Pin to the home screen
    #[arg(long)]
    pub pinned: bool,
}

impl From<AppFields> for NewApp {
    fn from(fields: AppFields) -> Self {
        let mut app = NewApp::new(fields.name, fields.url, fields.icon);
        if fields.pinned {
            app.is_pinned = Some(true);
        }
        app
    }
}

fn find_app(store: &Store, id: i64) -> Result<App> {
    store
        .state()
        .app
        .apps
        .into_iter()
        .find(|app| app.id == id)
        .ok_or_else(|| anyhow::anyhow!("App not found: {}", id))
}

pub async fn execute(cmd: AppCommands, api: ApiClient) -> Result<()> {
    let store = Store::new();
    let actions = Actions::new(api, &store);

    // Mutations act on what the server currently has.
    actions.get_apps().await;
    if let Some(error) = store.state().app.error {
        anyhow::bail!("Could not load apps from {}: {}", actions.api().base_url(), error);
    }

    match cmd {
        AppCommands::List { pinned } => {
            let state = store.state();
            let apps: Vec<_> = if pinned {
                homedash_core::app::pinned_apps(&state.app.apps)
                    .into_iter()
                    .cloned()
                    .collect()
            } else {
                state.app.apps
            };
            output::print_apps_table(&apps);
            return Ok(());
        }
        AppCommands::Show { id } => {
            output::print_app(&find_app(&store, id)?);
            return Ok(());
        }
        AppCommands::Add(fields) => actions.add_app(&fields.into()).await,
        AppCommands::Pin { id } => actions.pin_app(&find_app(&store, id)?).await,
        AppCommands::Update { id, fields } => actions.update_app(id, &fields.into()).await,
        AppCommands::Rm { id } => actions.delete_app(id).await,
    }

    let state = store.state();
    if state.notification.notifications.is_empty() {
        // Failed mutations leave no trace in the store; details are in the log.
        anyhow::bail!("Operation failed (run with --verbose for details)");
    }

    output::print_feedback(&state);
    println!();
    output::print_apps_table(&state.app.apps);
    println!();
    println!("{}", format!("{} apps", state.app.apps.len()).dimmed());

    Ok(())
}
