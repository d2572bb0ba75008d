use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rSchoolTimer
/// CLI application to track the school day with SQLite
#[derive(Parser)]
#[command(
    name = "rschooltimer",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple school-day CLI: period countdown and weekly timetable using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long, short = 'f', help = "Delete and recreate an existing database file")]
        force: bool,
    },

    /// Show where the clock sits in the day's timetable
    Status {
        #[arg(
            long = "at",
            help = "Analyze this clock time instead of now (HH:MM or HH:MM:SS)"
        )]
        at: Option<String>,

        #[arg(long = "day", help = "Weekday to analyze: 0-6 or a name (default: today)")]
        day: Option<String>,

        #[arg(long = "json", help = "Print the raw analysis as JSON")]
        json: bool,

        #[arg(long = "watch", help = "Redraw the panel every second until interrupted")]
        watch: bool,
    },

    /// List the stored periods for a day or the whole week
    Show {
        #[arg(long = "day", help = "Weekday to list: 0-6 or a name (default: today)")]
        day: Option<String>,

        #[arg(long = "week", help = "List all seven days")]
        week: bool,
    },

    /// Append a period to a day's timetable
    Add {
        #[arg(long = "day", help = "Weekday to add to: 0-6 or a name (default: today)")]
        day: Option<String>,

        #[arg(
            long = "name",
            help = "Period name (default: continue the day's numbering)"
        )]
        name: Option<String>,

        #[arg(
            long = "start",
            help = "Start time; loose input accepted (9, 930, 09:30)"
        )]
        start: Option<String>,

        #[arg(long = "end", help = "End time; loose input accepted")]
        end: Option<String>,

        #[arg(long = "kind", help = "Period kind: class, break, lunch or other")]
        kind: Option<String>,
    },

    /// Delete one period or clear a whole day
    Del {
        #[arg(long = "day", help = "Weekday to delete from: 0-6 or a name (default: today)")]
        day: Option<String>,

        #[arg(long = "id", help = "Period id to delete")]
        id: Option<String>,

        #[arg(long = "all", help = "Clear the whole day")]
        all: bool,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Copy one day's timetable onto other days
    Copy {
        #[arg(long = "from", help = "Source weekday: 0-6 or a name")]
        from: String,

        #[arg(
            long = "to",
            help = "Target weekdays, comma separated (default: Mon-Fri except the source)"
        )]
        to: Option<String>,
    },

    /// Install the stock timetable on one or more days
    Template {
        #[arg(
            long = "level",
            help = "School level: MIDDLE (45-minute classes) or HIGH (50; default: configured level)"
        )]
        level: Option<String>,

        #[arg(
            long = "classes",
            default_value_t = 2,
            help = "Number of class blocks"
        )]
        classes: u32,

        #[arg(
            long = "days",
            help = "Weekdays to install on, comma separated (default: Mon-Fri)"
        )]
        days: Option<String>,
    },

    /// Manage the configuration file (view or create)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "init", help = "Write a fresh configuration file with defaults")]
        init: bool,
    },

    /// Print or manage the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Export the weekly schedule and preferences
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(
            long,
            value_name = "FILE",
            help = "Output file (default: school-timer-backup-<date> in the current directory)"
        )]
        output: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Import a backup document, replacing the stored schedule
    Import {
        #[arg(long, value_name = "FILE", help = "Backup document to load")]
        input: String,
    },
}
