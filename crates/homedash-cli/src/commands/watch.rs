//! Push channel watcher.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use homedash_client::{apply_push, Actions, ApiClient, PushListener, Store};

use crate::output;

#[derive(Args)]
pub struct WatchArgs {
    /// Only print push messages, without re-fetching
    #[arg(long)]
    pub quiet: bool,
}

pub async fn execute(args: WatchArgs, api: ApiClient) -> Result<()> {
    let store = Store::new();
    let actions = Actions::new(api, &store);
    let listener = PushListener::for_api(actions.api());

    if !args.quiet {
        actions.get_apps().await;
        output::print_apps_table(&store.state().app.apps);
    }

    println!("{} {}", "Watching".cyan().bold(), listener.url());

    listener
        .listen(|msg| {
            let actions = &actions;
            let store = &store;
            let quiet = args.quiet;
            async move {
                output::print_push_message(&msg);
                if quiet {
                    return;
                }
                apply_push(&msg, actions).await;
                let state = store.state();
                if let Some(error) = &state.app.error {
                    println!("{} {}", "Error:".red().bold(), error);
                }
                output::print_apps_table(&state.app.apps);
            }
        })
        .await?;

    println!("{}", "Push channel closed".dimmed());
    Ok(())
}
