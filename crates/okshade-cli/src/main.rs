//! okshade - sRGB / OkLab / OkLCh conversions from the command line

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use okshade_color::gamut::DEFAULT_STEP;

mod commands;

#[derive(Parser, Debug)]
#[command(name = "okshade")]
#[command(author, version, about = "sRGB / OkLab / OkLCh color conversions")]
#[command(long_about = "
Converts colors between sRGB, OkLab and OkLCh and maps out-of-gamut
OkLCh colors back into sRGB by chroma reduction.

Numeric colors are written as three comma separated values.
OkLCh hues on the command line are in degrees.

Examples:
  okshade convert 1A2B3C --from hex            # Show all representations
  okshade convert 255,128,0 --from srgb8 --to oklch
  okshade convert 0.7,0.3,140 --from oklch --to hex
  okshade gamut 0.7,0.4,140 --step 0.0005      # Pull into sRGB
  okshade distance FF0000 FF3300 --lightness
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert a color between spaces
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Map an OkLCh color into the sRGB gamut
    #[command(visible_alias = "g")]
    Gamut(GamutArgs),

    /// Perceptual distance between two hex colors
    #[command(visible_alias = "d")]
    Distance(DistanceArgs),
}

/// Color space selector for `convert`.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Space {
    /// Six hex digits, optional '#'
    Hex,
    /// sRGB in [0, 1]
    Srgb,
    /// sRGB bytes in [0, 255]
    Srgb8,
    /// OkLab L,a,b
    Oklab,
    /// OkLCh L,C,h (h in degrees)
    Oklch,
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Input color (hex or comma separated triple)
    #[arg(allow_hyphen_values = true)]
    pub color: String,

    /// Input color space
    #[arg(short, long, value_enum, default_value = "hex")]
    pub from: Space,

    /// Output color space (all if omitted)
    #[arg(short, long, value_enum)]
    pub to: Option<Space>,
}

#[derive(Args, Debug)]
pub struct GamutArgs {
    /// OkLCh color as L,C,h (h in degrees)
    #[arg(allow_hyphen_values = true)]
    pub color: String,

    /// Chroma decrement per iteration; smaller is tighter but slower
    #[arg(short, long, default_value_t = DEFAULT_STEP)]
    pub step: f64,
}

#[derive(Args, Debug)]
pub struct DistanceArgs {
    /// First color (hex)
    pub first: String,

    /// Second color (hex)
    pub second: String,

    /// Compare lightness only
    #[arg(short, long)]
    pub lightness: bool,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args),
        Commands::Gamut(args) => commands::gamut::run(args),
        Commands::Distance(args) => commands::distance::run(args),
    }
}
