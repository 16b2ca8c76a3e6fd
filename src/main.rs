#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use prism_core::{ContentModel, PrismResult};
use tracing_subscriber::EnvFilter;

use crate::context::AppConfig;

/// Prism Identity - a gentle guide to the gender spectrum
#[derive(Parser, Debug)]
#[command(name = "prism-desktop")]
#[command(about = "Prism Identity - curated reading on gender identity, with a collectible quote scroll")]
struct Args {
    /// Directory where exported quote scrolls are saved (defaults to the Downloads folder)
    #[arg(short, long)]
    download_dir: Option<PathBuf>,

    /// Load content from a JSON file instead of the built-in dataset
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Initial window height
    #[arg(long, default_value_t = 900.0)]
    height: f64,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    // Content is installed before the first component asks for it.
    if let Some(path) = &args.content {
        match load_content(path) {
            Ok(model) => {
                ContentModel::install(model);
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load content");
                return ExitCode::FAILURE;
            }
        }
    }

    let download_dir = args
        .download_dir
        .or_else(dirs::download_dir)
        .unwrap_or_else(|| PathBuf::from("."));

    tracing::info!(download_dir = %download_dir.display(), "Starting Prism Identity");
    context::init_config(AppConfig { download_dir });

    let config = Config::new()
        .with_background_color(theme::colors::PAGE_RGBA)
        .with_window(
            WindowBuilder::new()
                .with_title("光棱自我 · Prism Identity")
                .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
                .with_resizable(true),
        );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    ExitCode::SUCCESS
}

fn load_content(path: &Path) -> PrismResult<ContentModel> {
    let json = std::fs::read_to_string(path)?;
    Ok(ContentModel::from_json(&json)?)
}
