// Re-export parry for the appropriate float size
#[cfg(feature = "f64")]
pub use parry3d_f64 as parry3d;

#[cfg(feature = "f32")]
pub use parry3d;

// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Tolerance used when classifying points against a plane.
///
/// Every front/back/on decision made by the BSP tree derives from this value.
/// Callers that need a different tolerance can use
/// [`Plane::classify_point_with`](crate::mesh::plane::Plane::classify_point_with).
pub const EPSILON: Real = 0.001;
