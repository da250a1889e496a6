//! producer-pal - run the browser tools against a Live set snapshot
//!
//! Subcommands:
//! - `producer-pal tools` - Print tool definitions
//! - `producer-pal read-browser` - List browser items
//! - `producer-pal load-item <uri>` - Load an item onto a track
//! - `producer-pal call <tool> <json>` - Call a tool with raw JSON arguments
//! - `producer-pal config` - Show the effective configuration

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lom::MemoryHost;
use palconf::PalConfig;
use producer_pal::{telemetry, Category, PalTools};
use serde_json::{json, Map, Value};

#[derive(Parser)]
#[command(name = "producer-pal")]
#[command(about = "Browse the Live library and load items into a Live set")]
#[command(version)]
struct Cli {
    /// Live set snapshot (JSON) to run tools against
    #[arg(long, global = true, env = "PRODUCER_PAL_SNAPSHOT")]
    snapshot: Option<PathBuf>,

    /// Config file, used in place of ./producer-pal.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print tool definitions as JSON
    Tools,

    /// List items from the browser
    ReadBrowser {
        /// Browser category (defaults to the configured category)
        #[arg(long)]
        category: Option<Category>,

        /// Path within the category (e.g., "Drums/Acoustic")
        #[arg(long)]
        path: Option<String>,

        /// Case-insensitive name filter
        #[arg(long)]
        search: Option<String>,

        /// Max recursion depth (0 = no recursion)
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Load a browser item into the set
    LoadItem {
        /// Item uri, as listed by read-browser
        uri: String,

        /// Track to load into (defaults to the selected track)
        #[arg(long)]
        track_id: Option<String>,

        /// before, after, or replace (relative to the selected device)
        #[arg(long)]
        position: Option<String>,
    },

    /// Call a tool by name with a JSON arguments object
    Call {
        /// Tool name (e.g., ppal-read-browser)
        tool: String,

        /// JSON arguments
        #[arg(default_value = "{}")]
        json: String,
    },

    /// Print the effective configuration and where it came from
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, sources) = PalConfig::load_with_sources_from(cli.config.as_deref())
        .context("failed to load configuration")?;
    telemetry::init(&config.telemetry.log_level)?;
    tracing::debug!(files = ?sources.files, env = ?sources.env_overrides, "configuration loaded");

    let (tool, arguments) = match cli.command {
        Commands::Tools => {
            print_json(&serde_json::to_value(producer_pal::list_tools())?)?;
            return Ok(());
        }
        Commands::Config => {
            for file in &sources.files {
                println!("# loaded: {}", file.display());
            }
            for var in &sources.env_overrides {
                println!("# env: {}", var);
            }
            print!("{}", config.to_toml());
            return Ok(());
        }
        Commands::ReadBrowser {
            category,
            path,
            search,
            max_depth,
        } => {
            let mut args = Map::new();
            if let Some(category) = category {
                args.insert("category".into(), json!(category.as_str()));
            }
            insert_opt(&mut args, "path", path);
            insert_opt(&mut args, "search", search);
            if let Some(depth) = max_depth {
                args.insert("maxDepth".into(), json!(depth));
            }
            ("ppal-read-browser".to_string(), Value::Object(args))
        }
        Commands::LoadItem {
            uri,
            track_id,
            position,
        } => {
            let mut args = Map::new();
            args.insert("uri".into(), json!(uri));
            insert_opt(&mut args, "trackId", track_id);
            insert_opt(&mut args, "position", position);
            ("ppal-load-item".to_string(), Value::Object(args))
        }
        Commands::Call { tool, json } => {
            let arguments: Value =
                serde_json::from_str(&json).context("tool arguments must be valid JSON")?;
            (tool, arguments)
        }
    };

    let snapshot = cli
        .snapshot
        .as_deref()
        .context("a Live set snapshot is required (--snapshot or PRODUCER_PAL_SNAPSHOT)")?;
    let host = load_host(snapshot)?;
    let tools = PalTools::new(&host, config.browser);

    match tools.call_tool(&tool, arguments) {
        Ok(output) => {
            tracing::info!("{}", output.text);
            print_json(&output.data)?;
            Ok(())
        }
        Err(e) => {
            print_json(&e.to_json())?;
            std::process::exit(1);
        }
    }
}

fn load_host(path: &Path) -> Result<MemoryHost> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    MemoryHost::from_json(&json).with_context(|| format!("invalid snapshot {}", path.display()))
}

fn insert_opt(args: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(value) = value {
        args.insert(key.to_string(), Value::String(value));
    }
}

fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
