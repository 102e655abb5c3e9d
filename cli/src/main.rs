//! logicfind - recent Logic Pro projects from the command line.
//!
//! This binary is thin presentation glue over `logicfind-core`: it runs the
//! discovery pipeline, renders the sorted project list, and passes selected
//! paths to the host OS opener.
//!
//! # Commands
//!
//! - `logicfind list`: Print recent projects, most recently modified first
//! - `logicfind open <target>`: Open a project by path or by name
//!
//! # Environment Variables
//!
//! See the `config` module of `logicfind-core` for available options.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use logicfind_core::config::ScanConfig;
use logicfind_core::finder::{find_projects, try_find_projects};
use logicfind_core::types::ProjectEntry;

/// Application bundle locations checked by the installed-check on macOS.
#[cfg(target_os = "macos")]
const LOGIC_APP_PATHS: &[&str] = &[
    "/Applications/Logic Pro.app",
    "/Applications/Logic Pro X.app",
];

/// Where to get Logic Pro when the installed-check fails.
#[cfg(target_os = "macos")]
const LOGIC_DOWNLOAD_URL: &str = "https://www.apple.com/logic-pro/";

/// logicfind - recent Logic Pro projects from the command line.
///
/// Scans a projects directory for Logic Pro project files and lists them
/// by modification time, most recent first.
#[derive(Parser, Debug)]
#[command(name = "logicfind")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
ENVIRONMENT VARIABLES:
    LOGICFIND_ROOT               Directory scanned for projects (default: ~/Music/Logic)
    LOGICFIND_EXTENSION          Project file extension (default: .logicx)
    LOGICFIND_MAX_RESULTS        Soft cap on scanned files (default: 200)
    LOGICFIND_SCAN_TIMEOUT_SECS  Scan timeout in seconds (default: 30)

EXAMPLES:
    # List recent projects under the default directory
    logicfind list

    # Five most recent projects, as JSON
    logicfind list --json --limit 5

    # Open a project by name
    logicfind open Song.logicx
")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// CLI subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// List recent projects, most recently modified first.
    List {
        /// Print the entries as a JSON array.
        #[arg(long)]
        json: bool,

        /// Show at most this many entries.
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Open a project in its default application.
    ///
    /// The target is either a path to a project file, or a project name
    /// that is resolved against a fresh scan.
    Open {
        /// Path to a project file, or a project name.
        target: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to create tokio runtime")?;

    match cli.command {
        Command::List { json, limit } => runtime.block_on(run_list(json, limit)),
        Command::Open { target } => runtime.block_on(run_open(&target)),
    }
}

/// Runs the list command: scan, render, hint on empty results.
async fn run_list(json: bool, limit: Option<usize>) -> Result<()> {
    let config = ScanConfig::from_env().context("Failed to load configuration")?;

    warn_if_logic_missing();

    let mut entries = find_projects(&config).await;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No Logic projects found.");
        println!(
            "Are you sure {} is the right directory?",
            config.root_dir.display()
        );
        println!("Set LOGICFIND_ROOT to change where projects are searched for.");
        return Ok(());
    }

    for entry in &entries {
        println!(
            "{}  {}  {}",
            entry.last_modified.format("%Y-%m-%d %H:%M"),
            entry.name,
            entry.path
        );
    }

    Ok(())
}

/// Runs the open command: pass paths through, resolve names via a scan.
async fn run_open(target: &str) -> Result<()> {
    let path = PathBuf::from(target);
    if path.exists() {
        return open_path(&path);
    }

    let config = ScanConfig::from_env().context("Failed to load configuration")?;
    let entries = try_find_projects(&config)
        .await
        .context("Project scan failed")?;

    match resolve_by_name(&entries, target) {
        Some(entry) => {
            info!(name = %entry.name, path = %entry.path, "resolved project by name");
            open_path(Path::new(&entry.path))
        }
        None => bail!(
            "no project matching '{target}' under {}",
            config.root_dir.display()
        ),
    }
}

/// Resolves a project by name against scanned entries.
///
/// Exact name matches win over prefix matches; both are case-insensitive.
/// Entries are already sorted most recent first, so ambiguous names resolve
/// to the most recently modified project.
fn resolve_by_name<'a>(entries: &'a [ProjectEntry], target: &str) -> Option<&'a ProjectEntry> {
    let needle = target.to_lowercase();

    entries
        .iter()
        .find(|e| e.name.to_lowercase() == needle)
        .or_else(|| {
            entries
                .iter()
                .find(|e| e.name.to_lowercase().starts_with(&needle))
        })
}

/// Opens a path with the host OS default opener.
#[cfg(target_os = "macos")]
fn open_path(path: &Path) -> Result<()> {
    std::process::Command::new("open")
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(())
}

/// Opens a path with the host OS default opener.
#[cfg(all(unix, not(target_os = "macos")))]
fn open_path(path: &Path) -> Result<()> {
    std::process::Command::new("xdg-open")
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(())
}

/// Opens a path with the host OS default opener.
#[cfg(windows)]
fn open_path(path: &Path) -> Result<()> {
    std::process::Command::new("explorer")
        .arg(path)
        .spawn()
        .with_context(|| format!("Failed to open {}", path.display()))?;
    Ok(())
}

/// Warns when Logic Pro is not installed. No-op outside macOS.
#[cfg(target_os = "macos")]
fn warn_if_logic_missing() {
    let installed = LOGIC_APP_PATHS.iter().any(|p| Path::new(p).exists());
    if !installed {
        tracing::warn!(
            download = LOGIC_DOWNLOAD_URL,
            "Logic Pro does not appear to be installed"
        );
    }
}

/// Warns when Logic Pro is not installed. No-op outside macOS.
#[cfg(not(target_os = "macos"))]
fn warn_if_logic_missing() {}

/// Initializes the logging subsystem.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .init();
}
