use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slidestrip_core::{AppConfig, WrapPolicy};

mod commands;

const DEFAULT_ITEMS: usize = 7;
const DEFAULT_CARD_WIDTH: u16 = 24;

#[derive(Parser)]
#[command(name = "slidestrip")]
#[command(author, version, about = "A horizontally scrolling terminal carousel with a minimap slider")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ~/.config/slidestrip/config.toml
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the carousel TUI
    Run(RunArgs),
    /// Print slider thumb geometry for a layout
    Geometry {
        /// Number of items
        #[arg(long, default_value_t = DEFAULT_ITEMS)]
        items: usize,
        /// Width of one item
        #[arg(long, default_value_t = 100.0)]
        item_width: f64,
        /// Visible width of the carousel
        #[arg(long, default_value_t = 300.0)]
        viewport: f64,
        /// Horizontal scroll offset (negative once scrolled)
        #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
        offset: f64,
        /// Gap between items (defaults to carousel.spacing)
        #[arg(long)]
        spacing: Option<f64>,
        /// Slider track width (defaults to slider.track_width)
        #[arg(long)]
        track_width: Option<f64>,
        /// Thumb inset on each side (defaults to slider.thumb_inset)
        #[arg(long)]
        inset: Option<f64>,
    },
    /// Step auto-advance without a terminal and print where it lands
    Simulate {
        /// Number of timer ticks to feed
        #[arg(long, default_value_t = 10)]
        ticks: u64,
        #[arg(long, default_value_t = DEFAULT_ITEMS)]
        items: usize,
        #[arg(long, default_value_t = 20.0)]
        item_width: f64,
        #[arg(long, default_value_t = 60.0)]
        viewport: f64,
        /// Gap between items (defaults to carousel.spacing)
        #[arg(long)]
        spacing: Option<f64>,
        /// End detection (defaults to auto_advance.wrap)
        #[arg(long, value_enum)]
        wrap: Option<WrapArg>,
        /// Tolerance for `--wrap tolerant`
        #[arg(long)]
        tolerance: Option<f64>,
    },
    /// Show the effective configuration
    Config {
        /// Write a default config file
        #[arg(long)]
        init: bool,
        /// Overwrite an existing file with --init
        #[arg(long, requires = "init")]
        force: bool,
    },
}

#[derive(Args, Default)]
struct RunArgs {
    /// Start with auto-advance enabled
    #[arg(short = 'a', long)]
    auto_advance: bool,
    /// Seconds between auto-advance steps
    #[arg(short = 'i', long)]
    interval: Option<f64>,
    /// Start with the minimap slider hidden
    #[arg(long)]
    no_slider: bool,
    /// Number of demo cards
    #[arg(short = 'n', long)]
    items: Option<usize>,
    /// Width of each card in columns
    #[arg(short = 'w', long)]
    card_width: Option<u16>,
    /// Gap between cards in columns
    #[arg(long)]
    spacing: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum WrapArg {
    /// Loop only when the offset matches the end exactly
    Exact,
    /// Loop once the offset is within the tolerance of the end
    Tolerant,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let command = cli.command.unwrap_or(Commands::Run(RunArgs::default()));

    // Writing defaults must not depend on the current file being valid
    if let Commands::Config { init: true, force } = command {
        init_logging(&AppConfig::default(), false)?;
        return commands::config::init(&config_path, force);
    }

    // Load configuration
    let mut config = AppConfig::load_from(&config_path)?;

    match command {
        Commands::Run(args) => {
            apply_run_args(&mut config, &args);
            config.validate()?;
            // The TUI owns the terminal, so logs go to a file
            init_logging(&config, true)?;
            commands::run::run(
                &config,
                args.items.unwrap_or(DEFAULT_ITEMS),
                args.card_width.unwrap_or(DEFAULT_CARD_WIDTH),
            )
            .await
        }
        Commands::Geometry {
            items,
            item_width,
            viewport,
            offset,
            spacing,
            track_width,
            inset,
        } => {
            init_logging(&config, false)?;
            if let Some(width) = track_width {
                config.slider.track_width = width;
            }
            if let Some(inset) = inset {
                config.slider.thumb_inset = inset;
            }
            let input = commands::geometry::GeometryInput {
                items,
                item_width,
                viewport,
                offset,
                spacing: spacing.unwrap_or(config.carousel.spacing),
            };
            commands::geometry::run(&input, &config.slider)
        }
        Commands::Simulate {
            ticks,
            items,
            item_width,
            viewport,
            spacing,
            wrap,
            tolerance,
        } => {
            init_logging(&config, false)?;
            let input = commands::simulate::SimulateInput {
                ticks,
                items,
                item_width,
                viewport,
                spacing: spacing.unwrap_or(config.carousel.spacing),
                wrap: resolve_wrap(config.auto_advance.wrap, wrap, tolerance),
            };
            commands::simulate::run(&config, &input).await
        }
        Commands::Config { .. } => {
            init_logging(&config, false)?;
            commands::config::show(&config, &config_path)
        }
    }
}

fn apply_run_args(config: &mut AppConfig, args: &RunArgs) {
    if args.auto_advance {
        config.auto_advance.enabled = true;
    }
    if let Some(interval) = args.interval {
        config.auto_advance.interval_secs = interval;
    }
    if args.no_slider {
        config.carousel.show_slider = false;
    }
    if let Some(spacing) = args.spacing {
        config.carousel.spacing = spacing;
    }
}

fn resolve_wrap(configured: WrapPolicy, wrap: Option<WrapArg>, tolerance: Option<f64>) -> WrapPolicy {
    let default_tolerance = match configured {
        WrapPolicy::AtOrBeyond { tolerance } => tolerance,
        WrapPolicy::Exact => 0.5,
    };
    match (wrap, tolerance) {
        (Some(WrapArg::Exact), _) => WrapPolicy::Exact,
        (Some(WrapArg::Tolerant), t) => WrapPolicy::AtOrBeyond {
            tolerance: t.unwrap_or(default_tolerance),
        },
        (None, Some(tolerance)) => WrapPolicy::AtOrBeyond { tolerance },
        (None, None) => configured,
    }
}

/// Initialize logging from `RUST_LOG`, falling back to `general.log_level`
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
    );
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_run_args_override_config() {
        let cli = Cli::parse_from(["slidestrip", "run", "-a", "--interval", "2.5", "--no-slider"]);
        let Some(Commands::Run(args)) = cli.command else {
            panic!("expected run");
        };
        let mut config = AppConfig::default();
        apply_run_args(&mut config, &args);
        assert!(config.auto_advance.enabled);
        assert_eq!(config.auto_advance.interval_secs, 2.5);
        assert!(!config.carousel.show_slider);
    }

    #[test]
    fn test_negative_offset_accepted() {
        let cli = Cli::parse_from(["slidestrip", "geometry", "--offset", "-448"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Geometry { offset, .. }) if offset == -448.0
        ));
    }

    #[test]
    fn test_resolve_wrap() {
        let configured = WrapPolicy::default();
        assert_eq!(resolve_wrap(configured, None, None), configured);
        assert_eq!(
            resolve_wrap(configured, Some(WrapArg::Exact), Some(2.0)),
            WrapPolicy::Exact
        );
        assert_eq!(
            resolve_wrap(WrapPolicy::Exact, Some(WrapArg::Tolerant), None),
            WrapPolicy::AtOrBeyond { tolerance: 0.5 }
        );
        assert_eq!(
            resolve_wrap(configured, None, Some(1.0)),
            WrapPolicy::AtOrBeyond { tolerance: 1.0 }
        );
    }
}
