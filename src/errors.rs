//! Errors reported by the fallible entry points.
//!
//! The plain boolean operations are total; only the `try_*` variants and the
//! raw-buffer mesh constructor return these.

use crate::float_types::Real;
use nalgebra::Point3;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CsgError {
    /// Three points did not span a plane (coincident or collinear).
    #[error("(DegeneratePlane) points {a}, {b} and {c} do not define a plane")]
    DegeneratePlane {
        a: Point3<Real>,
        b: Point3<Real>,
        c: Point3<Real>,
    },

    /// A BSP build would have produced a path deeper than the configured limit.
    #[error("(RecursionLimitExceeded) BSP tree depth exceeded the limit of {limit}")]
    RecursionLimitExceeded { limit: usize },

    /// A flat buffer whose length is not a multiple of three.
    #[error("(InvalidBufferLength) {name} buffer length {len} is not a multiple of 3")]
    InvalidBufferLength { name: &'static str, len: usize },

    /// A face refers to a vertex that does not exist.
    #[error("(IndexOutOfRange) face {face} refers to vertex {index} of {vertex_count}")]
    IndexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },
}
