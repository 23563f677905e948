use clap::{Args as ClapArgs, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notetaker")]
#[command(about = "Track meeting notetakers and their transcripts", long_about = None)]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Override the backend URL from the config file
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Work with recordings
    Recordings(RecordingsCliArgs),
    /// Browse calendar events and deploy notetakers to them
    Calendar(CalendarCliArgs),
    /// Schedule a notetaker for a meeting link
    Schedule(ScheduleCliArgs),
    /// Show backend authentication status
    Auth,
    /// Print version information
    Version,
}

#[derive(ClapArgs, Debug)]
pub struct RecordingsCliArgs {
    #[command(subcommand)]
    pub command: RecordingsCommand,
}

#[derive(Subcommand, Debug)]
pub enum RecordingsCommand {
    /// List all recordings with their status and available actions
    List {
        /// Print full transcripts instead of previews
        #[arg(long)]
        full: bool,
    },
    /// Show a single recording with its full transcript
    Show { id: String },
    /// Poll a recording until it is ready or has failed
    Watch {
        id: String,
        /// Seconds between polls (defaults to config)
        #[arg(long)]
        interval: Option<u64>,
        /// Give up after this many seconds (defaults to config)
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Copy a notetaker ID to the clipboard
    CopyId { id: String },
    /// Delete a recording
    Delete {
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub struct CalendarCliArgs {
    #[command(subcommand)]
    pub command: CalendarCommand,
}

#[derive(Subcommand, Debug)]
pub enum CalendarCommand {
    /// List calendar events (dates in YYYY-MM-DD format)
    Events {
        start_date: String,
        #[arg(long)]
        end_date: Option<String>,
        #[arg(long)]
        calendar_id: Option<String>,
    },
    /// Send a notetaker to a calendar event
    Deploy {
        event_id: String,
        #[arg(long)]
        calendar_id: Option<String>,
        /// Day of the event (YYYY-MM-DD); checks the event has a meeting link first
        #[arg(long)]
        date: Option<String>,
    },
    /// Delete a calendar event
    Delete {
        event_id: String,
        #[arg(long)]
        calendar_id: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(ClapArgs, Debug)]
pub struct ScheduleCliArgs {
    /// Meeting title
    #[arg(long)]
    pub title: String,
    /// Meeting link (Google Meet, Zoom, Teams)
    #[arg(long)]
    pub link: String,
    /// Start time, e.g. "2025-10-07 09:30 AM"
    #[arg(long)]
    pub start: String,
}
