//! Starter kits, contacts, chat, bookmarks, scheduling, prayer.

use widgets::bookmarks::{self, BookmarkForm};
use widgets::{WidgetError, chat, contacts, kits, notes, prayer, schedule};

use super::short_id;
use crate::cli::{BookmarkArgs, BookmarksCommand, ChatCommand, ContactsCommand, KitsCommand, PrayerCommand, ScheduleArgs};
use crate::error::CliError;
use crate::state::{AppState, display_now, now_local, now_ms};

pub fn kits(state: &AppState, cmd: KitsCommand) -> Result<(), CliError> {
    match cmd {
        KitsCommand::List => {
            for kit in state.storage.load(&kits::STARTER_KITS)? {
                println!("{:<16} {}", kit.id.get(..16).unwrap_or(&kit.id), kit.title);
            }
        }
        KitsCommand::Add { title, intro, study } => {
            let kit = state
                .storage
                .update(&kits::STARTER_KITS, |list| kits::add(list, &title, &intro, study.as_deref()).cloned())?;
            println!("Added kit {} ({})", kit.title, kit.id);
        }
        KitsCommand::Show { id } => {
            let list = state.storage.load(&kits::STARTER_KITS)?;
            let kit = kits::find(&list, &id)?;
            println!("{}\n{}", kit.title, kit.intro);
            for (i, study) in kit.studies.iter().enumerate() {
                println!("\n{}. {}\n   {}", i + 1, study.title, study.content);
            }
        }
    }
    Ok(())
}

pub fn contacts(state: &AppState, cmd: ContactsCommand) -> Result<(), CliError> {
    match cmd {
        ContactsCommand::Add { name } => {
            let contact = state
                .storage
                .update(&contacts::CONTACTS, |list| contacts::add(list, &name).cloned())?;
            println!("Added {} ({})", contact.name, short_id(&contact.id));
        }
        ContactsCommand::Remove { id_or_name } => {
            let contact = state
                .storage
                .update(&contacts::CONTACTS, |list| contacts::remove(list, &id_or_name))?;
            println!("Removed {}", contact.name);
        }
        ContactsCommand::List => {
            for contact in state.storage.load(&contacts::CONTACTS)? {
                println!("{}  {}", short_id(&contact.id), contact.name);
            }
        }
    }
    Ok(())
}

pub fn chat(state: &AppState, cmd: ChatCommand) -> Result<(), CliError> {
    match cmd {
        ChatCommand::Open { contact } => {
            let name = state.storage.update(&chat::THREADS, |threads| chat::open(threads, &contact))?;
            println!("Opened chat with {name}");
        }
        ChatCommand::Send { contact, text } => {
            let ts = display_now();
            state
                .storage
                .update(&chat::THREADS, |threads| chat::send(threads, &contact, &text, &ts).map(|_| ()))?;
            println!("Sent to {} (saved on this device only)", contact.trim());
        }
        ChatCommand::Clear { contact } => {
            state.storage.update(&chat::THREADS, |threads| chat::clear(threads, &contact))?;
            println!("Cleared chat with {}", contact.trim());
        }
        ChatCommand::List => {
            let threads = state.storage.load(&chat::THREADS)?;
            for (name, preview) in chat::previews(&threads) {
                println!("{name}: {preview}");
            }
        }
        ChatCommand::Show { contact } => {
            let threads = state.storage.load(&chat::THREADS)?;
            let messages = threads
                .get(contact.trim())
                .ok_or_else(|| WidgetError::NotFound { kind: "chat", id: contact.trim().to_owned() })?;
            if messages.is_empty() {
                println!("{}", chat::EMPTY_PREVIEW);
            }
            for message in messages.iter().rev() {
                println!("[{}] {}: {}", message.ts, message.from, message.text);
            }
        }
    }
    Ok(())
}

fn form(args: BookmarkArgs) -> BookmarkForm {
    BookmarkForm { title: args.title, schedule: args.schedule, notes: args.notes }
}

pub fn bookmarks(state: &AppState, cmd: BookmarksCommand) -> Result<(), CliError> {
    match cmd {
        BookmarksCommand::Add(args) => {
            let now = now_ms();
            let bookmark = state
                .storage
                .update(&bookmarks::STUDY_BOOKMARKS, |list| bookmarks::add(list, form(args), now).cloned())?;
            println!("Bookmarked {} ({})", bookmark.title, short_id(&bookmark.id));
        }
        BookmarksCommand::Edit { id, fields } => {
            let now = now_ms();
            let bookmark = state
                .storage
                .update(&bookmarks::STUDY_BOOKMARKS, |list| bookmarks::edit(list, &id, form(fields), now).cloned())?;
            println!("Updated {}", bookmark.title);
        }
        BookmarksCommand::Delete { id } => {
            let bookmark = state
                .storage
                .update(&bookmarks::STUDY_BOOKMARKS, |list| bookmarks::delete(list, &id))?;
            println!("Deleted {}", bookmark.title);
        }
        BookmarksCommand::List { search } => {
            let list = state.storage.load(&bookmarks::STUDY_BOOKMARKS)?;
            for b in bookmarks::search(&list, search.as_deref().unwrap_or_default()) {
                println!("{}  {} | {}", short_id(&b.id), b.title, b.schedule);
                if !b.notes.is_empty() {
                    println!("          {}", b.notes);
                }
            }
        }
    }
    Ok(())
}

pub fn schedule(args: ScheduleArgs) -> Result<(), CliError> {
    let now = now_local();
    let start = args.start.unwrap_or_else(|| notes::local_stamp(now));
    let url = schedule::calendar_url_from_stamp(&args.title, &start, args.minutes, now.offset())?;
    println!("Calendar: {url}");
    println!("Meet:     {}", schedule::MEET_URL);
    Ok(())
}

pub fn prayer(state: &AppState, cmd: PrayerCommand) -> Result<(), CliError> {
    match cmd {
        PrayerCommand::Add { request, name } => {
            let now = now_ms();
            let added = state.storage.update(&prayer::PRAYER_REQUESTS, |list| {
                prayer::add(list, name.as_deref(), &request, now).cloned()
            })?;
            println!("Request {} posted by {}", short_id(&added.id), added.display_name());
        }
        PrayerCommand::Answer { id } => {
            state
                .storage
                .update(&prayer::PRAYER_REQUESTS, |list| prayer::mark_answered(list, &id))?;
            println!("Marked answered. Praise God!");
        }
        PrayerCommand::Remove { id } => {
            state.storage.update(&prayer::PRAYER_REQUESTS, |list| prayer::remove(list, &id))?;
            println!("Removed request");
        }
        PrayerCommand::List => {
            let list = state.storage.load(&prayer::PRAYER_REQUESTS)?;
            for request in prayer::ordered(&list) {
                let mark = if request.answered { " (answered)" } else { "" };
                println!("{}  {}{}: {}", short_id(&request.id), request.display_name(), mark, request.request);
            }
        }
    }
    Ok(())
}
