use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "todz")]
#[command(about = "A small, fast to-do list for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new item
    #[command(alias = "a")]
    Add {
        /// Item text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// List items
    #[command(alias = "ls")]
    List {
        /// Show only items still to do
        #[arg(long, conflicts_with_all = ["completed", "all"])]
        active: bool,

        /// Show only completed items
        #[arg(long, conflicts_with = "all")]
        completed: bool,

        /// Show everything (overrides the configured default filter)
        #[arg(long)]
        all: bool,
    },

    /// Mark one or more items done
    #[command(alias = "d")]
    Done {
        /// Item numbers as shown by `list` (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Mark one or more items not done
    #[command(alias = "u")]
    Undone {
        /// Item numbers as shown by `list` (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Replace the text of an item
    #[command(alias = "e")]
    Edit {
        /// Item number as shown by `list`
        index: String,

        /// New text (words are joined with spaces)
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Delete one or more items
    #[command(alias = "rm")]
    Delete {
        /// Item numbers as shown by `list` (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Mark every item done, or every item not done if all are done
    #[command(name = "toggle-all", alias = "t")]
    ToggleAll,

    /// Remove all completed items
    Clear,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., default-filter)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
