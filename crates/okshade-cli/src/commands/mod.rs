//! CLI command implementations

pub mod convert;
pub mod distance;
pub mod gamut;

use anyhow::{Context, Result, bail};
use okshade_color::{OkLab, OkLch, Srgb};

use crate::Space;

/// Parses `"a,b,c"` into three floats.
pub fn parse_triple(s: &str) -> Result<[f64; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected three comma separated values, got {:?}", s);
    }
    let mut out = [0.0; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<f64>()
            .with_context(|| format!("invalid number {:?} in {:?}", part, s))?;
    }
    Ok(out)
}

/// Parses `"r,g,b"` into three bytes.
pub fn parse_bytes(s: &str) -> Result<[u8; 3]> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        bail!("expected three comma separated bytes, got {:?}", s);
    }
    let mut out = [0u8; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part
            .parse::<u8>()
            .with_context(|| format!("invalid byte {:?} in {:?}", part, s))?;
    }
    Ok(out)
}

/// A parsed command-line color, kept in the space it was given in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    /// sRGB input (hex, float or byte form)
    Srgb(Srgb),
    /// OkLab input
    OkLab(OkLab),
    /// OkLCh input
    OkLch(OkLch),
}

impl Color {
    /// Parses `s` as a color in `space`. OkLCh hues are read in degrees.
    pub fn parse(s: &str, space: Space) -> Result<Self> {
        let color = match space {
            Space::Hex => Color::Srgb(Srgb::from_hex(s.trim())?),
            Space::Srgb => {
                let [r, g, b] = parse_triple(s)?;
                Color::Srgb(Srgb::new(r, g, b))
            }
            Space::Srgb8 => Color::Srgb(Srgb::from(parse_bytes(s)?)),
            Space::Oklab => {
                let [l, a, b] = parse_triple(s)?;
                Color::OkLab(OkLab::new(l, a, b))
            }
            Space::Oklch => {
                let [l, c, h] = parse_triple(s)?;
                Color::OkLch(OkLch::from_degrees(l, c, h))
            }
        };
        Ok(color)
    }

    pub fn to_srgb(self) -> Srgb {
        match self {
            Color::Srgb(c) => c,
            Color::OkLab(c) => c.to_srgb(),
            Color::OkLch(c) => c.to_srgb(),
        }
    }

    pub fn to_oklab(self) -> OkLab {
        match self {
            Color::Srgb(c) => OkLab::from_srgb(c),
            Color::OkLab(c) => c,
            Color::OkLch(c) => c.to_oklab(),
        }
    }

    pub fn to_oklch(self) -> OkLch {
        match self {
            Color::Srgb(c) => OkLch::from_srgb(c),
            Color::OkLab(c) => OkLch::from_oklab(c),
            Color::OkLch(c) => c,
        }
    }

    /// One output line for `space`.
    pub fn format(self, space: Space) -> String {
        match space {
            Space::Hex => format!("hex:   {}", self.to_srgb().to_hex()),
            Space::Srgb => format!("srgb:  {}", self.to_srgb()),
            Space::Srgb8 => format!("srgb8: {}", self.to_srgb().debug_u8()),
            Space::Oklab => format!("oklab: {}", self.to_oklab()),
            Space::Oklch => format!("oklch: {}", self.to_oklch().debug_string(true)),
        }
    }
}
