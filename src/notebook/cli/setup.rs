use clap::{Parser, Subcommand, ValueEnum};
use notebook::model::{Priority, Status};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.1" for releases, "0.3.1@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("NOTEBOOK_GIT_HASH");
    const IS_RELEASE: &str = env!("NOTEBOOK_IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "notebook", bin_name = "notebook", version = get_version())]
#[command(about = "Keep short notes in a local file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Notes file to use (default: ./notes.json)
    #[arg(short, long, global = true, value_name = "PATH", help_heading = "Options")]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Active,
    Completed,
    Archived,
}

impl From<StatusArg> for Status {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Active => Status::Active,
            StatusArg::Completed => Status::Completed,
            StatusArg::Archived => Status::Archived,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new note
    #[command(alias = "n", display_order = 1)]
    Add {
        /// Title of the note
        #[arg(long)]
        title: String,

        /// Body of the note
        #[arg(long, default_value = "")]
        content: String,

        /// Priority of the note
        #[arg(long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,

        /// Comma-separated tags (e.g. work,home)
        #[arg(long, value_name = "TAGS")]
        tags: Option<String>,
    },

    /// List notes (archived notes are hidden unless --all)
    #[command(alias = "ls", display_order = 2)]
    List {
        /// Only notes with this status
        #[arg(long, value_enum)]
        status: Option<StatusArg>,

        /// Only notes with this priority
        #[arg(long, value_enum)]
        priority: Option<PriorityArg>,

        /// Only notes carrying this exact tag
        #[arg(long)]
        tag: Option<String>,

        /// Include archived notes
        #[arg(long)]
        all: bool,
    },

    /// Search titles, content and tags (case-insensitive)
    #[command(display_order = 3)]
    Search { query: String },

    /// Delete a note
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// Id of the note
        id: u64,
    },

    /// Change the status of a note
    #[command(display_order = 5)]
    Status {
        /// Id of the note
        id: u64,

        /// New status
        #[arg(value_enum)]
        status: StatusArg,
    },

    /// Get or set configuration
    #[command(display_order = 6)]
    Config {
        /// Configuration key (notes-file, date-format)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Splits `a, b,,c` into `["a", "b", "c"]`, keeping order and duplicates.
pub fn parse_tags(raw: Option<&str>) -> Vec<String> {
    raw.map(|s| {
        s.split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    })
    .unwrap_or_default()
}
