//! Shopping list maintenance CLI.
//!
//! Operates on the same `shoplist.toml` and JSON list file the web server
//! uses, which makes it handy for seeding, inspecting, and scripting a list.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use shoplist::core::action::ActionForm;
use shoplist::core::types::Outcome;
use shoplist::exit_codes;
use shoplist::io::config::{CONFIG_FILE_NAME, CorruptPolicy, load_config};
use shoplist::io::dispatch::dispatch;
use shoplist::io::init::{InitOptions, init_shoplist};
use shoplist::io::list_store::ListStore;
use shoplist::logging;

#[derive(Parser)]
#[command(name = "shoplist", version, about = "Single-user shopping list")]
struct Cli {
    /// Path to the config file.
    #[arg(long, global = true, default_value = CONFIG_FILE_NAME)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create `shoplist.toml` and an empty list next to it.
    Init {
        /// Overwrite an existing config file.
        #[arg(short, long)]
        force: bool,
    },
    /// Print every item, one per line.
    Show,
    /// Check the list file decodes and holds unique, positive ids and non-blank text.
    Validate,
    /// Apply one action, exactly as the web form would submit it.
    Apply {
        /// One of add, update, delete, toggle, delete_done.
        action: String,
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        text: Option<String>,
    },
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(exit_codes::INVALID);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Show => cmd_show(&cli.config),
        Command::Validate => cmd_validate(&cli.config),
        Command::Apply { action, id, text } => cmd_apply(
            &cli.config,
            ActionForm {
                action: Some(action),
                id,
                text,
            },
        ),
    }
}

fn cmd_init(config_path: &Path, force: bool) -> Result<()> {
    let root = match config_path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let paths = init_shoplist(root, &InitOptions { force })?;
    println!("{}", paths.config_path.display());
    Ok(())
}

fn cmd_show(config_path: &Path) -> Result<()> {
    let store = open_store(config_path, Some(CorruptPolicy::Fail))?;
    let list = store.load()?;
    for item in list.items() {
        println!("{}", item);
    }
    Ok(())
}

fn cmd_validate(config_path: &Path) -> Result<()> {
    let store = open_store(config_path, Some(CorruptPolicy::Fail))?;
    let list = store
        .load()
        .with_context(|| format!("validate {}", store.path().display()))?;
    println!("ok: {} items", list.len());
    Ok(())
}

fn cmd_apply(config_path: &Path, form: ActionForm) -> Result<()> {
    let store = open_store(config_path, None)?;
    match dispatch(&store, &form)? {
        Outcome::Rejected(reason) => println!("ignored: {}", reason.as_str()),
        Outcome::Unchanged => println!("unchanged"),
        Outcome::Added { id } => println!("added {}", id),
        Outcome::Updated { id } => println!("updated {}", id),
        Outcome::Deleted { id } => println!("deleted {}", id),
        Outcome::Toggled { id, done } => println!("toggled {} done={}", id, done),
        Outcome::DeletedDone { removed } => println!("deleted {} done items", removed),
    }
    Ok(())
}

/// Load config and build the store, optionally overriding the corrupt-file policy.
fn open_store(config_path: &Path, policy: Option<CorruptPolicy>) -> Result<ListStore> {
    let cfg = load_config(config_path)?;
    Ok(ListStore::new(
        cfg.resolved_list_path(config_path),
        policy.unwrap_or(cfg.on_corrupt),
    ))
}
