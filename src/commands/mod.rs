//! Command handlers. Each loads what it needs from storage, applies one
//! widget operation, saves, and prints a short result to stdout.

mod churches;
mod community;
mod giving;
mod personal;
mod recovery;

use crate::cli::Command;
use crate::error::CliError;
use crate::state::AppState;

pub async fn dispatch(state: &AppState, command: Command) -> Result<(), CliError> {
    match command {
        Command::Churches(cmd) => churches::run(state, cmd).await,
        Command::Theme { action } => personal::theme(state, action),
        Command::Tab { name } => personal::tab(name.as_deref()),
        Command::Kits(cmd) => community::kits(state, cmd),
        Command::Local(cmd) => personal::local(state, cmd),
        Command::Contacts(cmd) => community::contacts(state, cmd),
        Command::Chat(cmd) => community::chat(state, cmd),
        Command::Devotional(cmd) => personal::devotional(state, cmd),
        Command::Goals(cmd) => personal::checklist(state, &widgets::checklist::GOALS, "goal", cmd),
        Command::Ministry(cmd) => personal::checklist(state, &widgets::checklist::MINISTRY, "task", cmd),
        Command::Journal(cmd) => personal::journal(state, cmd),
        Command::Notes(cmd) => personal::notes(state, cmd),
        Command::Bookmarks(cmd) => community::bookmarks(state, cmd),
        Command::Schedule(args) => community::schedule(args),
        Command::Prayer(cmd) => community::prayer(state, cmd),
        Command::Recovery(cmd) => recovery::run(state, cmd),
        Command::Give(cmd) => giving::run(state, cmd),
        Command::Reset { key } => {
            state.storage.reset(key.trim())?;
            tracing::info!(key = %key.trim(), "key reset");
            println!("Reset {}", key.trim());
            Ok(())
        }
    }
}

/// First eight characters of a record id, enough to address it again.
pub(crate) fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
