#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Default data directory: `<platform data dir>/pokeholo[-<name>]`
fn default_data_dir(name: Option<&str>) -> PathBuf {
    let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    match name {
        Some(name) => base.join(format!("pokeholo-{}", name)),
        None => base.join("pokeholo"),
    }
}

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| default_data_dir(None))
}

/// PokeHolo - Holographic card collection viewer
#[derive(Parser, Debug)]
#[command(name = "pokeholo-desktop")]
#[command(about = "PokeHolo - browse card sets with a holographic tilt effect")]
struct Args {
    /// Data directory for the saved session
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Instance name (creates data dir: pokeholo-<name>), for separate sessions
    #[arg(short, long)]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let data_dir = args
        .data_dir
        .unwrap_or_else(|| default_data_dir(args.name.as_deref()));
    let _ = DATA_DIR.set(data_dir.clone());

    let title = match args.name {
        Some(ref name) => format!("PokeHolo - {}", name),
        None => "PokeHolo".to_string(),
    };

    tracing::info!("Starting '{}' with data dir: {:?}", title, data_dir);

    // Portrait window, tall enough for the card detail view
    let window_width = 1100.0;
    let window_height = 900.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
