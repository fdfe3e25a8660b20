//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "biblebelt", version, about = "Church finder and ministry widgets for the Bible Belt community site")]
pub struct Cli {
    /// Directory for stored widget data.
    #[arg(long, global = true, env = "BIBLEBELT_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find nearby places of worship.
    #[command(subcommand)]
    Churches(ChurchesCommand),
    /// Show or change the colour theme.
    Theme {
        #[command(subcommand)]
        action: Option<ThemeAction>,
    },
    /// Resolve a section name or hash; lists all sections when omitted.
    Tab { name: Option<String> },
    #[command(subcommand)]
    Kits(KitsCommand),
    /// Local community city and region.
    #[command(subcommand)]
    Local(LocalCommand),
    #[command(subcommand)]
    Contacts(ContactsCommand),
    #[command(subcommand)]
    Chat(ChatCommand),
    #[command(subcommand)]
    Devotional(DevotionalCommand),
    #[command(subcommand)]
    Goals(ChecklistCommand),
    #[command(subcommand)]
    Ministry(ChecklistCommand),
    #[command(subcommand)]
    Journal(JournalCommand),
    /// Dated Bible-study notes.
    #[command(subcommand)]
    Notes(NotesCommand),
    /// Study bookmarks.
    #[command(subcommand)]
    Bookmarks(BookmarksCommand),
    /// Google Calendar invite and Meet link for a study session.
    Schedule(ScheduleArgs),
    #[command(subcommand)]
    Prayer(PrayerCommand),
    #[command(subcommand)]
    Recovery(RecoveryCommand),
    /// Fundraising progress and payment links.
    #[command(subcommand)]
    Give(GiveCommand),
    /// Forget a stored key so it reads as its default again.
    Reset { key: String },
}

// =============================================================================
// CHURCHES
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum ChurchesCommand {
    /// Search around a latitude/longitude.
    Near {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        #[command(flatten)]
        output: SearchOutput,
    },
    /// Search around a city; defaults to the stored local city.
    City {
        name: Option<String>,
        #[command(flatten)]
        output: SearchOutput,
    },
}

#[derive(Args, Debug, Clone)]
pub struct SearchOutput {
    /// Search radius in miles: 5, 10, 25, or 50.
    #[arg(long)]
    pub radius: Option<u32>,
    /// Print the search state as JSON.
    #[arg(long)]
    pub json: bool,
    /// Select result N (1-based) and centre the map on it.
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub focus: Option<usize>,
}

// =============================================================================
// PERSONAL
// =============================================================================

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum ThemeAction {
    Get,
    Set { theme: ThemeArg },
    Toggle,
}

#[derive(clap::ValueEnum, Debug, Clone, Copy)]
pub enum ThemeArg {
    Light,
    Dark,
}

#[derive(Subcommand, Debug)]
pub enum LocalCommand {
    Get,
    Set {
        #[arg(long)]
        city: Option<String>,
        #[arg(long)]
        region: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DevotionalCommand {
    /// Verse for today's date.
    Today,
    /// Put a custom devotional at the top of the list.
    Add { text: String },
    List,
}

#[derive(Subcommand, Debug)]
pub enum ChecklistCommand {
    Add { text: String },
    Toggle { id: String },
    Remove { id: String },
    List,
}

#[derive(Subcommand, Debug)]
pub enum JournalCommand {
    Add { text: String },
    Remove { id: String },
    List,
}

#[derive(Subcommand, Debug)]
pub enum NotesCommand {
    Add {
        text: String,
        /// Local date-time `YYYY-MM-DDTHH:MM`; defaults to now.
        #[arg(long)]
        at: Option<String>,
    },
    Remove { id: String },
    List,
}

// =============================================================================
// COMMUNITY
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum KitsCommand {
    List,
    Add {
        title: String,
        #[arg(long, default_value = "")]
        intro: String,
        /// Content of a first "Getting Started" study.
        #[arg(long)]
        study: Option<String>,
    },
    Show { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ContactsCommand {
    Add { name: String },
    /// Remove by id or exact name.
    Remove { id_or_name: String },
    List,
}

#[derive(Subcommand, Debug)]
pub enum ChatCommand {
    Open { contact: String },
    /// Add a message to a thread on this device.
    Send { contact: String, text: String },
    Clear { contact: String },
    List,
    Show { contact: String },
}

#[derive(Subcommand, Debug)]
pub enum BookmarksCommand {
    Add(BookmarkArgs),
    Edit {
        id: String,
        #[command(flatten)]
        fields: BookmarkArgs,
    },
    Delete { id: String },
    List {
        /// Case-insensitive match on title, schedule, or notes.
        #[arg(long)]
        search: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct BookmarkArgs {
    #[arg(long)]
    pub title: Option<String>,
    /// When you read it, e.g. "Daily 6:30 AM".
    #[arg(long)]
    pub schedule: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Args, Debug)]
pub struct ScheduleArgs {
    #[arg(long, default_value = widgets::schedule::DEFAULT_TITLE)]
    pub title: String,
    /// Local start `YYYY-MM-DDTHH:MM`; defaults to now.
    #[arg(long)]
    pub start: Option<String>,
    #[arg(long, default_value_t = widgets::schedule::DEFAULT_MINUTES)]
    pub minutes: u32,
}

#[derive(Subcommand, Debug)]
pub enum PrayerCommand {
    Add {
        request: String,
        /// Leave out to post anonymously.
        #[arg(long)]
        name: Option<String>,
    },
    Answer { id: String },
    Remove { id: String },
    List,
}

// =============================================================================
// RECOVERY / GIVING
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum RecoveryCommand {
    /// Sign up for a recovery program.
    Signup {
        #[arg(long)]
        name: String,
        /// Phone or email.
        #[arg(long)]
        contact: String,
        #[arg(long)]
        program: Option<String>,
        #[arg(long)]
        time: Option<String>,
        #[arg(long)]
        notes: Option<String>,
    },
    Signups,
    Unsign { id: String },
    /// Show the recovery plan.
    Plan,
    /// Set one plan field.
    Set { section: String, label: String, value: String },
    /// Export the plan as a printable HTML page.
    Print {
        /// Output file; `-` writes to stdout.
        #[arg(long, default_value = crate::services::print::DEFAULT_FILE)]
        out: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum GiveCommand {
    Status,
    /// Add one step to the amount raised.
    Add,
    /// Remove one step from the amount raised.
    Sub,
    /// Set the amount raised back to zero.
    Reset,
    Goal { amount: u64 },
    /// Show or set the preferred payment method.
    Method { method: Option<String> },
    /// Set a payment handle: cashapp, venmo, paypal, btc, mail, show-qr.
    Handle { name: String, value: String },
    /// Payment links for every method.
    Links,
}
