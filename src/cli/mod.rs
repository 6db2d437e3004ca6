//! CLI argument parsing for inilock.
//!
//! Uses clap derive macros for declarative argument definitions. This
//! module defines the command structure; actual implementations are in the
//! `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inilock: lock-protected, atomic mutation of shared INI files.
///
/// Every command acquires an exclusive cross-process lock derived from the
/// target path, performs its work, and releases the lock. Mutations are
/// applied by atomic replacement, so concurrent readers never see a
/// half-written file.
#[derive(Parser, Debug)]
#[command(name = "inilock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the target INI file.
    #[arg(short, long)]
    pub file: PathBuf,

    /// Optional YAML settings file overriding the lock tuning defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for inilock.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read one value, or a whole section when the key is omitted.
    Get(GetArgs),

    /// Write one key, creating the file and section as needed.
    Set(SetArgs),

    /// Delete a key; its section is removed when it becomes empty.
    ///
    /// Reports whether the key existed. A miss is not an error.
    Del(DelArgs),

    /// List section names.
    Sections(SectionsArgs),

    /// List key names in a section.
    Keys(KeysArgs),

    /// Print the whole file, re-serialized.
    Dump(DumpArgs),
}

/// Arguments for the `get` command.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Section to read from.
    pub section: String,

    /// Key to read. When omitted, the whole section is printed.
    pub key: Option<String>,

    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,

    /// Coerce values to bool/int/float where they parse as one
    /// (implies JSON output).
    #[arg(long)]
    pub typed: bool,
}

/// Arguments for the `set` command.
#[derive(Parser, Debug)]
pub struct SetArgs {
    /// Section to write into (created if absent).
    pub section: String,

    /// Key to write.
    pub key: String,

    /// Value to store.
    pub value: String,
}

/// Arguments for the `del` command.
#[derive(Parser, Debug)]
pub struct DelArgs {
    /// Section to delete from.
    pub section: String,

    /// Key to delete.
    pub key: String,
}

/// Arguments for the `sections` command.
#[derive(Parser, Debug)]
pub struct SectionsArgs {
    /// Emit a JSON array instead of one name per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `keys` command.
#[derive(Parser, Debug)]
pub struct KeysArgs {
    /// Section to list keys of.
    pub section: String,

    /// Emit a JSON array instead of one name per line.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `dump` command.
#[derive(Parser, Debug)]
pub struct DumpArgs {
    /// Emit the full two-level mapping as JSON instead of INI text.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
