//! # okshade-color
//!
//! Conversions between gamma-encoded sRGB and the perceptual OkLab / OkLCh
//! spaces, plus a chroma-reduction gamut mapper.
//!
//! - [`Srgb`] - display color, byte quantization, hex strings, gamut test
//! - [`OkLab`] - Cartesian perceptual space, distance metric
//! - [`OkLch`] - polar form with wrapped hue and [`OkLch::fallback`]
//!
//! # Architecture
//!
//! ```text
//!        okshade-color
//!              |
//!   +----------+----------+
//!   |          |          |
//! Srgb <---> OkLab <---> OkLch ---> gamut
//!   |          |          |
//!   +----------+----------+
//!              |
//!        okshade-math (Triple, Mat3, wrap_angle)
//! ```
//!
//! All three color types are `Copy` values built on
//! [`Triple`](okshade_math::Triple). Conversions return new values, the
//! arithmetic operators and [`OkLch::fallback`] update only the value they
//! are called on. Nothing is shared, so independent colors can be processed
//! on any number of threads without coordination.
//!
//! # Quick Start
//!
//! ```rust
//! use okshade_color::{OkLch, Srgb, gamut::DEFAULT_STEP};
//!
//! let base = Srgb::from_hex("3366CC")?;
//! let mut lch = OkLch::from_srgb(base);
//!
//! // Boost chroma, then pull the result back into sRGB.
//! lch.set_c(lch.c() * 3.0);
//! lch.fallback(DEFAULT_STEP)?;
//!
//! let out = lch.to_srgb();
//! assert!(out.is_inside());
//! println!("{}", out.to_hex());
//! # Ok::<(), okshade_color::ColorError>(())
//! ```
//!
//! # Errors
//!
//! Only malformed hex input and invalid fallback steps are errors. Division
//! by zero and similar degenerate arithmetic produce `inf`/`NaN`, which
//! callers must sanitize before display.
//!
//! # Dependencies
//!
//! - [`okshade-math`] - Triple, Mat3, angle helpers
//! - [`thiserror`] - error derive
//! - [`tracing`] - diagnostics from the gamut search

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod oklch;
mod srgb;
pub mod gamut;
pub mod oklab;
pub mod transfer;

pub use error::{ColorError, ColorResult};
pub use oklab::{DistanceMode, OkLab};
pub use oklch::OkLch;
pub use srgb::{Srgb, u8_to_unit, unit_to_u8};

// Re-export the math crate for convenience
pub use okshade_math as math;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::gamut::DEFAULT_STEP;
    pub use crate::{ColorError, ColorResult, DistanceMode, OkLab, OkLch, Srgb};
    pub use okshade_math::{ColorTriple, Triple};
}
