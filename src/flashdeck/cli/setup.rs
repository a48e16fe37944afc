use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "flashdeck",
    bin_name = "flashdeck",
    version,
    about = "Split markdown notes into cards and study them one at a time",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logging to stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Core(CoreCommands),

    #[command(flatten)]
    Card(CardCommands),

    #[command(flatten)]
    Doc(DocCommands),

    #[command(flatten)]
    Data(DataCommands),

    #[command(flatten)]
    Misc(MiscCommands),
}

#[derive(Subcommand, Debug)]
pub enum CoreCommands {
    /// Create a document from text (editor, --file or stdin)
    #[command(alias = "n", display_order = 1)]
    Create {
        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,

        /// Read the text from a file
        #[arg(long, short, value_name = "PATH")]
        file: Option<String>,

        /// Document name (derived from the first heading if omitted)
        #[arg(trailing_var_arg = true)]
        name: Vec<String>,
    },

    /// List documents
    #[command(alias = "ls", display_order = 2)]
    List,

    /// Search all cards of all documents
    #[command(alias = "s", display_order = 3)]
    Search {
        /// Treat the query as a regular expression
        #[arg(long, short)]
        regex: bool,

        /// Match the query literally (overrides the configured mode)
        #[arg(long, conflicts_with = "regex")]
        literal: bool,

        /// Query words (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// Show the current card of the active document, or select a document
    #[command(alias = "v", display_order = 10)]
    View {
        /// Index or name of a document (e.g. 1, p1, notes)
        #[arg(num_args = 0..)]
        indexes: Vec<String>,
    },

    /// Move to the next card
    #[command(display_order = 11)]
    Next,

    /// Move to the previous card
    #[command(display_order = 12)]
    Prev,

    /// Jump to a card by number
    #[command(alias = "j", display_order = 13)]
    Jump {
        /// Card number, starting at 1
        card: usize,

        /// Index or name of a document (defaults to the active one)
        #[arg(num_args = 0..)]
        indexes: Vec<String>,
    },

    /// Show the table of contents of a document
    #[command(display_order = 14)]
    Toc {
        /// Index or name of a document (defaults to the active one)
        #[arg(num_args = 0..)]
        indexes: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DocCommands {
    /// Edit a document in the editor
    #[command(alias = "e", display_order = 20)]
    Edit {
        /// Index or name of a document (defaults to the active one)
        #[arg(num_args = 0..)]
        indexes: Vec<String>,
    },

    /// Pin one or more documents
    #[command(alias = "p", display_order = 21)]
    Pin {
        /// Indexes of the documents (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Unpin one or more documents
    #[command(alias = "u", display_order = 22)]
    Unpin {
        /// Indexes of the documents (e.g. p1 p2)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Delete one or more documents
    #[command(alias = "rm", display_order = 23)]
    Delete {
        /// Indexes of the documents (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Import files as documents
    #[command(display_order = 30)]
    Import {
        /// Paths to files or directories to import
        #[arg(required = true, num_args = 1..)]
        paths: Vec<String>,
    },

    /// Export documents as markdown files, or a tar.gz with --archive
    #[command(display_order = 31)]
    Export {
        /// Write a single tar.gz archive
        #[arg(long, short)]
        archive: bool,

        /// Output directory (defaults to the current directory)
        #[arg(long, short, value_name = "DIR")]
        out: Option<String>,

        /// Indexes of the documents - if omitted, exports all documents
        #[arg(required = false, num_args = 0..)]
        indexes: Vec<String>,
    },

    /// Remove every document
    #[command(display_order = 32)]
    Reset {
        /// Skip confirmation
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum MiscCommands {
    /// Get or set configuration
    #[command(display_order = 40)]
    Config {
        /// Configuration key (e.g. match_mode)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
