//! # okshade-math
//!
//! Math primitives for okshade color conversions.
//!
//! - [`Triple`] - 3-component `f64` vector with component-wise arithmetic
//! - [`ColorTriple`] - capability interface implemented by every color space
//! - [`Mat3`] - row-major 3x3 matrix for the linear conversion stages
//! - [`unsigned_mod`] / [`wrap_angle`] - circular arithmetic for hues
//!
//! # Usage
//!
//! ```rust
//! use okshade_math::{Mat3, Triple, wrap_angle, TAU};
//!
//! let m = Mat3::from_rows([
//!     [0.5, 0.0, 0.0],
//!     [0.0, 0.5, 0.0],
//!     [0.0, 0.0, 0.5],
//! ]);
//! assert_eq!(m * Triple::ONE, Triple::splat(0.5));
//!
//! let h = wrap_angle(-1.0);
//! assert!(h > 0.0 && h < TAU);
//! ```
//!
//! # Used By
//!
//! - `okshade-color` - sRGB, OkLab and OkLCh value types

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod angle;
mod mat3;
mod space;
mod triple;

pub use angle::*;
pub use mat3::*;
pub use space::ColorTriple;
pub use triple::*;
