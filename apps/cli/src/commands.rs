//! CLI command definitions, routing, and tracing setup.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, eyre};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use craftstall_shared::{AppConfig, ResolvedPaths, init_config, load_config};

use crate::menu;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// Craftstall — a home craft shop in one JSON file.
#[derive(Parser)]
#[command(
    name = "craftstall",
    version,
    about = "Manage a craft shop inventory and regenerate its static storefront.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Log format: text (default) or json.
    #[arg(long, default_value = "text", global = true)]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

/// Top-level CLI subcommands. With no subcommand the interactive menu runs.
#[derive(Subcommand)]
pub(crate) enum Command {
    /// Run the interactive inventory menu (the default).
    Menu,

    /// Regenerate the website from the current inventory.
    Render,

    /// Draw the promotional flyer PNG.
    Flyer {
        /// Output path (defaults to the configured flyer file).
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Draw the multi-size application icon.
    Icon {
        /// Output path (defaults to the configured icon file).
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Convert HEIC photos to PNG in the images directory.
    Convert {
        /// Directory to scan (repeatable; defaults to the images directory).
        #[arg(long)]
        dir: Vec<String>,
    },

    /// Configuration management.
    Config {
        /// Config subcommand.
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config subcommands.
#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Initialize config file with defaults.
    Init,
    /// Show resolved configuration.
    Show,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "craftstall=info",
        1 => "craftstall=debug",
        _ => "craftstall=trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt().with_env_filter(env_filter).with_target(false).init();
        }
        LogFormat::Json => {
            fmt().json().with_env_filter(env_filter).init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => menu_cmd(),
        Command::Render => cmd_render(),
        Command::Flyer { out } => cmd_flyer(out.as_deref()),
        Command::Icon { out } => cmd_icon(out.as_deref()),
        Command::Convert { dir } => cmd_convert(&dir),
        Command::Config { action } => match action {
            ConfigAction::Init => cmd_config_init(),
            ConfigAction::Show => cmd_config_show(),
        },
    }
}

/// Load config and resolve the shop's file locations against the working
/// directory.
pub(crate) fn workspace() -> Result<(AppConfig, ResolvedPaths)> {
    let config = load_config()?;
    let cwd =
        std::env::current_dir().map_err(|e| eyre!("cannot determine working directory: {e}"))?;
    let paths = config.paths.resolve(&cwd);
    Ok((config, paths))
}

/// Resolve an output path override against the working directory.
fn resolve_out(out: Option<&str>, default: &str) -> Result<PathBuf> {
    let cwd =
        std::env::current_dir().map_err(|e| eyre!("cannot determine working directory: {e}"))?;
    let path = PathBuf::from(out.unwrap_or(default));
    Ok(if path.is_absolute() { path } else { cwd.join(path) })
}

// ---------------------------------------------------------------------------
// Command handlers
// ---------------------------------------------------------------------------

fn menu_cmd() -> Result<()> {
    let (config, paths) = workspace()?;
    menu::run_menu(&config, &paths)
}

fn cmd_render() -> Result<()> {
    let (config, paths) = workspace()?;
    let inventory = craftstall_inventory::load(&paths.inventory_file)?;

    info!(items = inventory.len(), "rendering website");
    let html = craftstall_site::render(&inventory, &config.shop);
    let written = craftstall_site::write_site(&paths.site_file, &html)?;

    println!();
    println!("  Website updated!");
    println!("  Path:   {}", paths.site_file.display());
    println!("  Items:  {}", inventory.len());
    if !written {
        println!("  (content unchanged, file left as-is)");
    }
    println!();

    Ok(())
}

fn cmd_flyer(out: Option<&str>) -> Result<()> {
    let (config, _paths) = workspace()?;
    let out_path = resolve_out(out, &config.artwork.flyer_file)?;

    info!(shop = %config.shop.name, "drawing flyer");
    craftstall_artwork::generate_flyer(&config.shop, &config.artwork, &out_path)?;

    println!();
    println!("  Flyer saved!");
    println!("  Path:  {}", out_path.display());
    println!(
        "  Size:  {}x{} (8.5\" x 11\" at 150 DPI)",
        craftstall_artwork::FLYER_WIDTH,
        craftstall_artwork::FLYER_HEIGHT
    );
    println!();

    Ok(())
}

fn cmd_icon(out: Option<&str>) -> Result<()> {
    let (config, _paths) = workspace()?;
    let out_path = resolve_out(out, &config.artwork.icon_file)?;

    info!("drawing icon");
    craftstall_artwork::generate_icon(&out_path)?;

    println!();
    println!("  Icon saved!");
    println!("  Path:   {}", out_path.display());
    println!(
        "  Sizes:  {}",
        craftstall_artwork::ICON_SIZES.map(|s| s.to_string()).join(", ")
    );
    println!();

    Ok(())
}

fn cmd_convert(dirs: &[String]) -> Result<()> {
    let (_config, paths) = workspace()?;

    let scan_dirs: Vec<PathBuf> = if dirs.is_empty() {
        vec![paths.images_dir.clone()]
    } else {
        dirs.iter().map(PathBuf::from).collect()
    };

    let heic_files = craftstall_imaging::discover_heic(&scan_dirs)?;
    if heic_files.is_empty() {
        println!("\n  No HEIC files found to convert.\n");
        return Ok(());
    }

    info!(count = heic_files.len(), "converting HEIC files");

    let bar = ProgressBar::new(heic_files.len() as u64);
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} [{pos}/{len}] {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );

    let mut converted = 0usize;
    for heic in &heic_files {
        bar.set_message(heic.display().to_string());
        match craftstall_imaging::convert_to_png(heic, &paths.images_dir) {
            Ok(_) => converted += 1,
            Err(e) => warn!(path = %heic.display(), error = %e, "conversion failed, skipping"),
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!();
    println!(
        "  Converted {converted} of {} HEIC files.",
        heic_files.len()
    );

    let pngs = craftstall_imaging::list_pngs(&paths.images_dir)?;
    if !pngs.is_empty() {
        println!("\n  PNG files in the images folder ({}):", pngs.len());
        for (name, bytes) in pngs {
            println!("    - {name} ({} KB)", bytes / 1024);
        }
    }
    println!();

    Ok(())
}

fn cmd_config_init() -> Result<()> {
    let path = init_config()?;
    println!("Config initialized at: {}", path.display());
    Ok(())
}

fn cmd_config_show() -> Result<()> {
    let config: AppConfig = load_config()?;
    let toml_str = toml::to_string_pretty(&config)?;
    println!("{toml_str}");
    Ok(())
}
