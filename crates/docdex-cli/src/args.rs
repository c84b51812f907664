use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "docdex")]
#[command(about = "Regenerates the Documentation section of a README from article metadata")]
#[command(version)]
pub struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet output (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Base directory (default: current directory)
    #[arg(long, global = true)]
    pub base_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan articles and rewrite the README Documentation section
    ///
    /// Running docdex without a subcommand does the same with defaults.
    Update {
        /// Articles directory (default: <base-dir>/articles)
        #[arg(long)]
        articles_dir: Option<PathBuf>,

        /// README to rewrite (default: <base-dir>/README.md)
        #[arg(long)]
        readme: Option<PathBuf>,

        /// Print the rendered section instead of writing the README
        #[arg(long)]
        dry_run: bool,
    },

    /// Validate frontmatter structure of article files
    Validate {
        /// Files to validate (default: every article in the articles directory)
        paths: Vec<PathBuf>,

        /// Articles directory scanned when no paths are given
        #[arg(long)]
        articles_dir: Option<PathBuf>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Write a commented default docdex.toml
    Init,

    /// Show the resolved configuration
    Show,
}
