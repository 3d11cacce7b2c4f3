//! Vector math
//!
//! Pure functions over `glam` vectors. Every helper takes values and returns
//! a new value; degenerate input (zero-length vectors, zero-length lines)
//! produces a neutral result rather than NaN or a panic.

pub mod path;
pub mod vec;
pub mod vec3;

pub use path::{BreakPoint, ray_trace, tile_path};
pub use vec::{angle_to, dist, intersect, rotate, unit};
