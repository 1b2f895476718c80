//! CLI frontend for the Skirmish combat engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "skirmish",
    about = "Skirmish: turn-based battles between a hero and a band of enemies",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory battles are saved in
    #[arg(
        long,
        global = true,
        env = "SKIRMISH_DATA_DIR",
        default_value = ".skirmish"
    )]
    data_dir: PathBuf,

    /// RNG seed for reproducible turns
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start a new battle and save it
    New {
        /// Name of the player's hero
        #[arg(short, long, default_value = "Player")]
        player: String,

        /// Enemy archetype to add (repeatable; default: one "enemy")
        #[arg(short, long = "enemy")]
        enemies: Vec<String>,

        /// Read the battle from a JSON document instead of presets
        #[arg(long, value_name = "FILE", conflicts_with_all = ["player", "enemies"])]
        from: Option<PathBuf>,
    },

    /// Resolve one turn of a saved battle
    Turn {
        /// Battle id
        id: String,

        /// Player action: attack, defend, dodge, spell
        action: String,
    },

    /// Show a saved battle
    Show {
        /// Battle id
        id: String,

        /// Print the whole log instead of the last lines
        #[arg(long)]
        full_log: bool,
    },

    /// List saved battles
    List {
        /// Only battles still in progress
        #[arg(short, long)]
        active: bool,
    },

    /// Delete a saved battle
    Delete {
        /// Battle id
        id: String,
    },

    /// Fight a battle interactively without saving it
    Play {
        /// Name of the player's hero
        #[arg(short, long, default_value = "Player")]
        player: String,

        /// Enemy archetype to add (repeatable; default: one "enemy")
        #[arg(short, long = "enemy")]
        enemies: Vec<String>,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();
    let dir = cli.data_dir;

    let result = match cli.command {
        Commands::New {
            player,
            enemies,
            from,
        } => match from {
            Some(file) => commands::new::run_from_file(&dir, &file),
            None => commands::new::run(&dir, &player, &enemies),
        },
        Commands::Turn { id, action } => commands::turn::run(&dir, &id, &action, cli.seed),
        Commands::Show { id, full_log } => commands::show::run(&dir, &id, full_log),
        Commands::List { active } => commands::list::run(&dir, active),
        Commands::Delete { id } => commands::delete::run(&dir, &id),
        Commands::Play { player, enemies } => commands::play::run(&player, &enemies, cli.seed),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
