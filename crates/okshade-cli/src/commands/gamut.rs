//! Gamut command.
//!
//! Runs the chroma-reduction fallback on an OkLCh color.

use anyhow::{Context, Result};
use tracing::{debug, info, trace};

use okshade_color::OkLch;

use super::parse_triple;
use crate::GamutArgs;

/// Run the gamut command.
pub fn run(args: GamutArgs) -> Result<()> {
    trace!(color = %args.color, step = args.step, "gamut::run");

    let [l, c, h] = parse_triple(&args.color)
        .with_context(|| format!("Failed to parse OkLCh color {:?}", args.color))?;
    let input = OkLch::from_degrees(l, c, h);
    debug!(inside = input.is_inside_srgb(), "Input gamut check");

    let mut mapped = input;
    let iterations = mapped.fallback(args.step)?;
    info!(iterations, chroma_before = input.c(), chroma_after = mapped.c(), "Gamut mapped");

    let srgb = mapped.to_srgb();
    println!("input:      {}", input.debug_string(true));
    println!("mapped:     {}", mapped.debug_string(true));
    println!("inside:     {}", srgb.is_inside());
    println!("hex:        {}", srgb.to_hex());
    println!("iterations: {}", iterations);

    Ok(())
}
