//! **Boolean operations** (*union*, *difference*, *intersection*) on closed
//! triangle meshes, computed with polygon-aligned [BSP](mesh::bsp) trees.
//!
//! Each operand is flattened to a triangle soup and partitioned into its own
//! tree; the two trees are then clipped against each other and inverted in a
//! fixed order specific to the operation (see [`boolean::BooleanOp::recipe`]).
//! Triangles are never cut along a splitting plane, they are only kept or
//! discarded whole, so results are exact only where the operands' faces do not
//! cross.
//!
//! ```
//! use mesh_boolean::{Mesh, traits::{CSGOps, TriangleSource}};
//!
//! let a = Mesh::cube(1.0);
//! let b = Mesh::cube(1.0).translate(5.0, 0.0, 0.0);
//!
//! assert_eq!(a.union(&b).face_count(), 24);
//! assert_eq!(a.intersection(&b).face_count(), 0);
//! ```
//!
//! # Features
//! #### Default
//! - **f64**: use f64 as Real
//! - **hashmap**: vertex welding of results with hashbrown
//!
//! #### Optional
//! - **f32**: use f32 as Real, this conflicts with f64
//! - **parallel**: run independent boolean operations on many mesh pairs with rayon

#![forbid(unsafe_code)]
#![warn(clippy::missing_const_for_fn, clippy::all)]

pub mod boolean;
pub mod errors;
pub mod float_types;
pub mod mesh;
pub mod traits;

#[cfg(any(
    all(feature = "f64", feature = "f32"),
    not(any(feature = "f64", feature = "f32"))
))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use boolean::{BooleanOp, BooleanOptions};
pub use errors::CsgError;
pub use mesh::Mesh;
pub use mesh::triangle::Triangle;
