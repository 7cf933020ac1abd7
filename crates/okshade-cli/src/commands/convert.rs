//! Convert command.
//!
//! Prints a color in one or all of the supported spaces.

use anyhow::{Context, Result};
use tracing::{info, trace, warn};

use super::Color;
use crate::{ConvertArgs, Space};

const ALL_SPACES: [Space; 5] = [Space::Hex, Space::Srgb, Space::Srgb8, Space::Oklab, Space::Oklch];

/// Run the convert command.
pub fn run(args: ConvertArgs) -> Result<()> {
    trace!(color = %args.color, from = ?args.from, to = ?args.to, "convert::run");

    let color = Color::parse(&args.color, args.from)
        .with_context(|| format!("Failed to parse {:?} as {:?}", args.color, args.from))?;
    info!(?color, "Parsed input");

    if !color.to_srgb().is_inside() {
        warn!("color is outside the sRGB gamut; hex and byte output are clamped");
    }

    match args.to {
        Some(space) => println!("{}", color.format(space)),
        None => {
            for space in ALL_SPACES {
                println!("{}", color.format(space));
            }
        }
    }

    Ok(())
}
