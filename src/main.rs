use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roster_tally::config::{self, Config};
use roster_tally::loader::{self, NameSource};
use roster_tally::prefs;
use roster_tally::roster::{NullView, Roster};

const EXIT_SUCCESS: i32 = 0;
const EXIT_RUNTIME: i32 = 1;
const EXIT_LOAD: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Open the interactive roster editor (default if no subcommand)
    Tui,
    /// Load a name list and print it in display order with default scores
    List {
        /// Name list path or http(s) URL (defaults to the configured source)
        source: Option<String>,

        /// Print tab-separated values instead of a table
        #[arg(long)]
        tsv: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "roster-tally")]
#[command(about = "Keep a 0-10 score per roster member", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/roster-tally/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Name list to load at startup (path or http(s) URL), overrides the config
    #[arg(short, long, global = true)]
    names: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    roster_tally::logging::init_logger(cli.verbose);

    // Install rustls crypto provider (required for rustls 0.23+)
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        tracing::debug!("rustls crypto provider already installed");
    }

    let command = cli.command.unwrap_or(Commands::Tui);

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let mut config = match config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Some(names) = cli.names {
        config.names_source = names;
    }

    if let Err(errors) = config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    tracing::debug!(source = %config.names_source, tick_rate_ms = config.tick_rate_ms, "config loaded");

    let code = match command {
        Commands::Tui => run_editor(config).await,
        Commands::List { source, tsv } => {
            let source = source.unwrap_or_else(|| config.names_source.clone());
            run_list(source, tsv).await
        }
    };

    std::process::exit(code);
}

async fn run_editor(config: Config) -> i32 {
    let prefs_path = prefs::get_prefs_path();
    let stored = match prefs::load_preferences(&prefs_path) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("ignoring unreadable preferences: {:#}", e);
            prefs::Preferences::default()
        }
    };
    let theme_mode = roster_tally::tui::resolve_theme(stored.theme);

    let mut app = roster_tally::tui::App::new(config, theme_mode, prefs_path);
    app.request_reload(true);

    match roster_tally::tui::run_tui(app).await {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_RUNTIME
        }
    }
}

async fn run_list(location: String, tsv: bool) -> i32 {
    let names = match loader::load_names(&NameSource::Configured(location.clone())).await {
        Ok(names) => names,
        Err(e) => {
            eprintln!("Could not load {}: {}", location, e);
            return EXIT_LOAD;
        }
    };

    let mut roster = Roster::new();
    roster.load_names(&names, &mut NullView);
    let entries = roster.store().entries();

    let output = if tsv {
        roster_tally::output::format_tsv(&entries)
    } else {
        roster_tally::output::format_roster_table(&entries, roster_tally::output::should_use_colors())
    };
    println!("{}", output);

    EXIT_SUCCESS
}
