//! Distance command.
//!
//! Perceptual OkLab distance between two hex colors.

use anyhow::{Context, Result};
use tracing::trace;

use okshade_color::{DistanceMode, OkLab, Srgb};

use crate::DistanceArgs;

/// Run the distance command.
pub fn run(args: DistanceArgs) -> Result<()> {
    trace!(first = %args.first, second = %args.second, lightness = args.lightness, "distance::run");

    let first = Srgb::from_hex(&args.first)
        .with_context(|| format!("Failed to parse first color {:?}", args.first))?;
    let second = Srgb::from_hex(&args.second)
        .with_context(|| format!("Failed to parse second color {:?}", args.second))?;

    let mode = if args.lightness { DistanceMode::Lightness } else { DistanceMode::Euclidean };
    let d = OkLab::distance(OkLab::from_srgb(first), OkLab::from_srgb(second), mode);
    println!("{:.6}", d);

    Ok(())
}
