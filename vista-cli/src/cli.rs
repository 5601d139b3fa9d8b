use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vista")]
#[command(version, about = "Render recipe search results into an in-memory page", long_about = None)]
pub struct Cli {
    /// Log view operations at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON file with view settings (icons_url, results_per_page, messages)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render one page of search results
    Render {
        /// Search results: a JSON array of recipes or the API response envelope
        file: PathBuf,
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
        /// Recipe id to highlight
        #[arg(short, long)]
        active: Option<String>,
        /// Query the results came from
        #[arg(short, long, default_value = "")]
        query: String,
    },
    /// Render the first page, then follow pagination clicks
    Browse {
        /// Search results: a JSON array of recipes or the API response envelope
        file: PathBuf,
        /// Pagination button to click, in order
        #[arg(long = "click", value_enum)]
        clicks: Vec<Click>,
        /// Query the results came from
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Click {
    /// Next page button
    Next,
    /// Previous page button
    Prev,
}

impl Click {
    pub fn button_class(self) -> &'static str {
        match self {
            Click::Next => "pagination__btn--next",
            Click::Prev => "pagination__btn--prev",
        }
    }
}

impl std::fmt::Display for Click {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Click::Next => write!(f, "next"),
            Click::Prev => write!(f, "prev"),
        }
    }
}
