use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineArgs {
    #[command(subcommand)]
    pub command: Command,

    /// The path to a dirtree.toml config file of defaults
    #[arg(short, long, global = true)]
    pub config_file: Option<Utf8PathBuf>,

    /// Increase logging verbosity level (0: warn; 1: info; 2: info, pretty; 3: debug; 4: trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a listing of the directory tree at the given root
    Export {
        /// Root directory to export
        root: Utf8PathBuf,

        /// The listing file to write [default: structure.txt]
        #[arg(short, long)]
        output: Option<Utf8PathBuf>,

        /// Glob pattern for directories to ignore (may be repeated)
        #[arg(long, value_name = "PATTERN")]
        ignore: Vec<String>,

        /// File of glob patterns for directories to ignore, one per line
        #[arg(long)]
        ignore_file: Option<Utf8PathBuf>,

        /// Maximum depth of the listing (0 for the root only, negative for nothing)
        #[arg(long, allow_negative_numbers = true)]
        depth: Option<i32>,
    },

    /// Create the directories and empty files described by a listing
    Create {
        /// The listing file to read
        file: Utf8PathBuf,

        /// Destination root directory
        #[arg(short, long, default_value = ".")]
        dir: Utf8PathBuf,

        /// Leave out the top-level root line, creating its entries directly in the destination
        #[arg(long)]
        strip_root: bool,

        /// Fail on the first malformed or misplaced line instead of skipping it
        #[arg(long)]
        strict: bool,

        /// Only simulate in memory, printing the resulting tree
        #[arg(long)]
        dry_run: bool,
    },
}
