//! Trochoidal gear profiles for **gerotor / trochoid pumps**: epicycloid and
//! hypocycloid curve evaluation, inner/outer rotor geometry, closed 2D outlines
//! and extruded 3D rotors.
//!
//! ```rust
//! use gerotor::pump::PumpSpec;
//!
//! let pair = PumpSpec::default().gear_pair().unwrap();
//! let inner = pair.inner_solid::<()>(200, None).unwrap();
//! assert!(inner.volume() > 0.0);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - [**stl-io**](https://en.wikipedia.org/wiki/STL_(file_format)): `.stl` export
//! - [**dxf-io**](https://en.wikipedia.org/wiki/AutoCAD_DXF): `.dxf` export of outlines
//! - **cli**: the `gerotor` command line tool
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: use rayon for point sampling

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod io;
pub mod mesh;
pub mod pump;
pub mod sampler;
pub mod sketch;
pub mod triangulated;
pub mod trochoid;
pub mod vertex;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::GearError;
pub use mesh::Mesh;
pub use pump::{GearPair, InnerGearSpec, PumpSpec};
pub use sketch::Sketch;
pub use trochoid::{CurvePoint, GearSpec};
