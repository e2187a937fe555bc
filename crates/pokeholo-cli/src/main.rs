//! PokeHolo CLI
//!
//! Thin wrapper around pokeholo-core for command-line usage. Shares the
//! session file with the desktop app when pointed at the same data directory.
//!
//! ## Usage
//!
//! ```bash
//! # List the card sets
//! pokeholo sets
//!
//! # Show one set and its cards
//! pokeholo set jungle
//!
//! # Show one card
//! pokeholo card jungle-7
//!
//! # Log in / out, and check who is logged in
//! pokeholo login -u admin -p 123456
//! pokeholo logout
//! pokeholo whoami
//!
//! # Ask the navigation guard about a path
//! pokeholo open /set/fossil
//!
//! # Run the tilt mapper for a pointer over a card
//! pokeholo tilt --width 300 --height 420 --x 0 --y 0
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pokeholo_core::{
    catalog, check_credentials, guard, AppPath, FileStore, GuardOutcome, HoloState, Session,
    SurfaceRect,
};

/// PokeHolo - Holographic card collection viewer
#[derive(Parser)]
#[command(name = "pokeholo")]
#[command(version = "0.1.0")]
#[command(about = "PokeHolo - browse card sets from the command line")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: <platform data dir>/pokeholo)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every card set
    Sets,

    /// Show a set and its cards (unknown ids show the first set)
    Set {
        /// Set ID, e.g. "jungle"
        id: String,
    },

    /// Show a card (unknown ids show the first card)
    Card {
        /// Card ID, e.g. "jungle-7"
        id: String,
    },

    /// Log in and save the session
    Login {
        #[arg(short, long)]
        username: String,

        #[arg(short, long)]
        password: String,
    },

    /// Clear the saved session
    Logout,

    /// Show the saved session
    Whoami,

    /// Show what the app would do when navigating to a path
    Open {
        /// Path, e.g. "/card/base-set-1"
        path: String,
    },

    /// Map a pointer position over a card to its tilt and glare
    Tilt {
        #[arg(long, default_value_t = 300.0)]
        width: f64,

        #[arg(long, default_value_t = 420.0)]
        height: f64,

        /// Pointer x, relative to the card's left edge
        #[arg(long, allow_negative_numbers = true)]
        x: f64,

        /// Pointer y, relative to the card's top edge
        #[arg(long, allow_negative_numbers = true)]
        y: f64,
    },
}

/// Setup logging based on verbosity level
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Get the default data directory, the same one the desktop app uses
fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pokeholo")
}

fn open_session(data_dir: &Path) -> Result<Session> {
    let store = FileStore::open(data_dir)
        .with_context(|| format!("Failed to open storage in {}", data_dir.display()))?;
    Ok(Session::open(store))
}

/// The view a path renders once the guard lets it through
fn describe_view(path: &AppPath) -> String {
    match path {
        AppPath::Login => "login form".to_string(),
        AppPath::Collection => "collection list".to_string(),
        AppPath::Set(id) => {
            let set = catalog::set_or_default(id);
            format!("set view: {} ({})", set.name, set.id)
        }
        AppPath::Card(id) => {
            let card = catalog::card_or_default(id);
            format!("card detail: {} ({})", card.name, card.id)
        }
        AppPath::NotFound(_) => "collection list (unknown path)".to_string(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    tracing::debug!(?data_dir, "Using data directory");

    match cli.command {
        Commands::Sets => {
            let sets = catalog::catalog();
            println!("Card sets ({}):", sets.len());
            for set in sets {
                println!();
                println!("  {}", set.name);
                println!("    ID: {}", set.id);
                println!("    Series: {}", set.series);
                println!("    Released: {}", set.release_label());
                println!("    Cards: {} / {}", set.collected(), set.total_cards);
            }
        }

        Commands::Set { id } => {
            let set = catalog::set_or_default(&id);
            if set.id != id {
                println!("Unknown set '{}', showing {}", id, set.id);
            }
            println!("{} ({} Series)", set.name, set.series);
            println!("  Released: {}", set.release_label());
            println!("  {} / {} Collected", set.collected(), set.total_cards);
            println!();
            for card in &set.cards {
                println!(
                    "  {:<14} {:<10} {:>4} HP  {}",
                    card.id,
                    card.name,
                    card.hp,
                    card.rarity
                );
            }
        }

        Commands::Card { id } => {
            let card = catalog::card_or_default(&id);
            if card.id != id {
                println!("Unknown card '{}', showing {}", id, card.id);
            }
            println!("{}", card.name);
            println!("  ID: {}", card.id);
            println!("  Types: {}", card.types.join(" / "));
            println!("  HP: {}", card.hp);
            println!("  Rarity: {}", card.rarity);
            println!("  Number: {} / {}", card.number(), card.set_id);
            println!("  \u{201C}{}\u{201D}", card.description);
            println!("  Image: {}", card.image);
        }

        Commands::Login { username, password } => {
            check_credentials(&username, &password)?;
            let mut session = open_session(&data_dir)?;
            session
                .login(&username)
                .context("Failed to save the session")?;
            println!("Logged in as {}", username);
        }

        Commands::Logout => {
            let mut session = open_session(&data_dir)?;
            let was_logged_in = session.state().is_authenticated();
            session.logout().context("Failed to save the session")?;
            if was_logged_in {
                println!("Logged out");
            } else {
                println!("Not logged in");
            }
        }

        Commands::Whoami => {
            let session = open_session(&data_dir)?;
            match session.user() {
                Some(user) => println!("Logged in as {} ({})", user.username, user.role),
                None => println!("Not logged in"),
            }
        }

        Commands::Open { path } => {
            let session = open_session(&data_dir)?;
            let target = AppPath::parse(&path);
            match guard(session.state(), &target) {
                GuardOutcome::Allow => {
                    println!("{} -> {}", target, describe_view(&target));
                }
                GuardOutcome::RedirectToLogin { from } => {
                    println!("{} -> redirect to /login (returns to {} after login)", target, from);
                }
                GuardOutcome::RedirectHome => {
                    println!("{} -> redirect to / (already logged in)", target);
                }
            }
        }

        Commands::Tilt {
            width,
            height,
            x,
            y,
        } => {
            let rect = SurfaceRect::new(0.0, 0.0, width, height);
            if !rect.is_measurable() {
                anyhow::bail!("Card size must be positive (got {}x{})", width, height);
            }
            let mut holo = HoloState::new();
            holo.pointer_move(x, y, rect);

            let tilt = holo.tilt();
            let glare = holo.glare();
            println!("rotateX: {:.2}deg", tilt.rotate_x);
            println!("rotateY: {:.2}deg", tilt.rotate_y);
            println!("glare: {:.2}% {:.2}%", glare.x, glare.y);
            println!("opacity: {}", holo.opacity());
            println!("transform: {}", holo.transform_css());
        }
    }

    Ok(())
}
