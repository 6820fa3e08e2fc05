use clap::{ArgGroup, Parser};

/// wlog — Weather mood journal
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    group(ArgGroup::new("write_mode").args(["temp", "description", "mood", "notes", "category"]).multiple(true)),
    group(ArgGroup::new("read_mode").args(["recent", "search", "stats", "correlation", "range", "count", "summary"]).multiple(true).conflicts_with("write_mode")),
    group(ArgGroup::new("maintenance").args(["export", "backup", "path", "moods"]).conflicts_with_all(["write_mode", "read_mode"])),
)]
pub struct Cli {
    /// Prints the journal data directory
    #[arg(long, short)]
    pub path: bool,
    /// Lists the available mood options
    #[arg(long)]
    pub moods: bool,

    /// City of the observation (defaults to the configured city)
    #[arg(long)]
    pub city: Option<String>,
    /// Observed temperature, in degrees
    #[arg(long, requires = "description", allow_negative_numbers = true)]
    pub temp: Option<f64>,
    /// Weather description as reported by the provider (e.g. "light rain")
    #[arg(long, requires = "temp")]
    pub description: Option<String>,
    /// Coarse condition keyword, only used for the confirmation icon (e.g. rain, clouds)
    #[arg(long)]
    pub category: Option<String>,
    /// Your mood, one of the fixed options (see --moods)
    #[arg(long)]
    pub mood: Option<String>,
    /// Free-form notes for the entry
    #[arg(long)]
    pub notes: Option<String>,

    /// Show the most recent entries (N defaults to the configured limit)
    #[arg(long, value_name = "N")]
    pub recent: Option<Option<usize>>,
    /// Search entries for a term (case-insensitive)
    #[arg(long, value_name = "QUERY")]
    pub search: Option<String>,
    /// Print how often each mood occurs
    #[arg(long)]
    pub stats: bool,
    /// Print the weather/mood correlation table
    #[arg(long)]
    pub correlation: bool,
    /// Print the first and last entry timestamps
    #[arg(long)]
    pub range: bool,
    /// Print the number of entries
    #[arg(long)]
    pub count: bool,
    /// Print a JSON summary of the whole journal
    #[arg(long)]
    pub summary: bool,

    /// Export the journal and print the artifact path (txt, csv or json)
    #[arg(long, value_name = "FORMAT")]
    pub export: Option<String>,
    /// Copy the narrative store to a timestamped backup
    #[arg(long)]
    pub backup: bool,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
