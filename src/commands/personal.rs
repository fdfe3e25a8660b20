//! Theme, sections, local info, devotional, checklists, journal, notes.

use widgets::checklist::{self, ChecklistItem};
use widgets::store::StorageKey;
use widgets::tabs::Tab;
use widgets::theme::{THEME, Theme};
use widgets::{WidgetError, devotional, journal, local, notes};

use super::short_id;
use crate::cli::{ChecklistCommand, DevotionalCommand, JournalCommand, LocalCommand, NotesCommand, ThemeAction, ThemeArg};
use crate::error::CliError;
use crate::state::{AppState, now_local};

pub fn theme(state: &AppState, action: Option<ThemeAction>) -> Result<(), CliError> {
    let theme = match action.unwrap_or(ThemeAction::Get) {
        ThemeAction::Get => state.storage.load(&THEME)?,
        ThemeAction::Set { theme } => {
            let theme = match theme {
                ThemeArg::Light => Theme::Light,
                ThemeArg::Dark => Theme::Dark,
            };
            state.storage.save(&THEME, &theme)?;
            theme
        }
        ThemeAction::Toggle => state.storage.update(&THEME, |t| {
            *t = t.toggled();
            Ok::<_, CliError>(*t)
        })?,
    };
    println!("{theme}");
    Ok(())
}

pub fn tab(name: Option<&str>) -> Result<(), CliError> {
    let Some(name) = name else {
        for tab in Tab::ALL {
            println!("{:<10} {:<15} {}", tab.hash(), tab.label(), tab.subtitle());
        }
        return Ok(());
    };
    let tab = Tab::from_hash(name)
        .ok_or_else(|| WidgetError::NotFound { kind: "section", id: name.trim().to_owned() })?;
    println!("{} ({})", tab.label(), tab.hash());
    println!("{}", tab.subtitle());
    Ok(())
}

pub fn local(state: &AppState, cmd: LocalCommand) -> Result<(), CliError> {
    if let LocalCommand::Set { city, region } = cmd {
        if let Some(city) = city {
            state.storage.save(&local::CITY, &city.trim().to_owned())?;
        }
        if let Some(region) = region {
            state.storage.save(&local::REGION, &region.trim().to_owned())?;
        }
    }
    let city = state.storage.load(&local::CITY)?;
    let region = state.storage.load(&local::REGION)?;
    println!("{}", local::place_query(&city, &region));
    Ok(())
}

pub fn devotional(state: &AppState, cmd: DevotionalCommand) -> Result<(), CliError> {
    match cmd {
        DevotionalCommand::Today => {
            let verses = state.storage.load(&devotional::DEVOTIONAL)?;
            match devotional::for_day(&verses, now_local().day()) {
                Some(verse) => println!("{}\n{}", verse.reference, verse.text),
                None => println!("No devotionals yet."),
            }
        }
        DevotionalCommand::Add { text } => {
            let verse = state
                .storage
                .update(&devotional::DEVOTIONAL, |verses| devotional::add_custom(verses, &text).cloned())?;
            println!("Added {}: {}", verse.reference, verse.text);
        }
        DevotionalCommand::List => {
            for verse in state.storage.load(&devotional::DEVOTIONAL)? {
                println!("{} | {}", verse.reference, verse.text);
            }
        }
    }
    Ok(())
}

pub fn checklist(
    state: &AppState,
    key: &StorageKey<Vec<ChecklistItem>>,
    noun: &str,
    cmd: ChecklistCommand,
) -> Result<(), CliError> {
    match cmd {
        ChecklistCommand::Add { text } => {
            let item = state.storage.update(key, |items| checklist::add(items, &text).cloned())?;
            println!("Added {noun} {}", short_id(&item.id));
        }
        ChecklistCommand::Toggle { id } => {
            let done = state.storage.update(key, |items| checklist::toggle(items, &id))?;
            println!("Marked {}", if done { "done" } else { "not done" });
        }
        ChecklistCommand::Remove { id } => {
            let item = state.storage.update(key, |items| checklist::remove(items, &id))?;
            println!("Removed {noun}: {}", item.text);
        }
        ChecklistCommand::List => {
            let items = state.storage.load(key)?;
            let (done, total) = checklist::progress(&items);
            println!("{done}/{total} done");
            for item in &items {
                println!("[{}] {}  {}", if item.done { 'x' } else { ' ' }, short_id(&item.id), item.text);
            }
        }
    }
    Ok(())
}

pub fn journal(state: &AppState, cmd: JournalCommand) -> Result<(), CliError> {
    match cmd {
        JournalCommand::Add { text } => {
            let now = now_local();
            let entry = state.storage.update(&journal::JOURNAL, |entries| journal::add(entries, &text, now).cloned())?;
            println!("Saved entry {} at {}", short_id(&entry.id), entry.date);
        }
        JournalCommand::Remove { id } => {
            state.storage.update(&journal::JOURNAL, |entries| journal::remove(entries, &id))?;
            println!("Removed entry");
        }
        JournalCommand::List => {
            for entry in state.storage.load(&journal::JOURNAL)? {
                println!("{}  {}\n{}\n", short_id(&entry.id), entry.date, entry.text);
            }
        }
    }
    Ok(())
}

pub fn notes(state: &AppState, cmd: NotesCommand) -> Result<(), CliError> {
    match cmd {
        NotesCommand::Add { text, at } => {
            let now = now_local();
            let note = state
                .storage
                .update(&notes::NOTES, |list| notes::add(list, &text, at.as_deref(), now).cloned())?;
            println!("Saved note {} for {}", short_id(&note.id), note.at);
        }
        NotesCommand::Remove { id } => {
            state.storage.update(&notes::NOTES, |list| notes::remove(list, &id))?;
            println!("Removed note");
        }
        NotesCommand::List => {
            for note in state.storage.load(&notes::NOTES)? {
                println!("{}  {}  {}", short_id(&note.id), note.at, note.text);
            }
        }
    }
    Ok(())
}
