use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "basket")]
#[command(about = "A terminal shopping-list manager", long_about = None)]
#[command(version, arg_required_else_help = false)]
pub struct Cli {
    /// Path to the list file (or set BASKET_FILE; defaults to the
    /// configured list path)
    #[arg(value_name = "FILE", env = "BASKET_FILE")]
    pub file: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new item to the end of the list
    Add {
        #[arg(long)]
        name: String,
    },
    /// List items, optionally filtered by completion state
    List {
        /// all, completed, or incomplete
        #[arg(long)]
        filter: Option<String>,
    },
    /// Get a single item
    Get {
        #[arg(long)]
        id: Uuid,
    },
    /// Rename an incomplete item
    Rename {
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        name: String,
    },
    /// Flip an item's completed flag
    Toggle {
        #[arg(long)]
        id: Uuid,
    },
    /// Remove an item
    Remove {
        #[arg(long)]
        id: Uuid,
    },
    /// Remove every item, without confirmation
    Clear,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}
