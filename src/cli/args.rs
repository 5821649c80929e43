// src/cli/args.rs
use crate::constants::{DEFAULT_NOTE_BODY, DEFAULT_NOTE_TITLE};
use crate::infrastructure::CacheBackend;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Path to config file (optional)
    #[arg(short, long, value_name = "CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Path to the cache file, overrides the config (optional)
    #[arg(short, long, value_name = "DATABASE", global = true)]
    pub database: Option<PathBuf>,

    /// Cache backend, overrides the config (optional)
    #[arg(short, long, value_enum, global = true)]
    pub backend: Option<CacheBackend>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute (list, add, or init-config)
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all notes
    List {
        /// Output notes as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a note and save the whole list
    Add {
        /// Note title
        #[arg(short, long, default_value = DEFAULT_NOTE_TITLE)]
        title: String,

        /// Free-text body
        #[arg(short, long, default_value = DEFAULT_NOTE_BODY)]
        notes: String,

        /// Due date as RFC 3339 timestamp (defaults to now)
        #[arg(long, value_name = "RFC3339")]
        due: Option<DateTime<Utc>>,

        /// Mark the note as complete
        #[arg(long)]
        complete: bool,
    },

    /// Write a default config file
    InitConfig {
        /// Target path (defaults to the platform config directory)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}
