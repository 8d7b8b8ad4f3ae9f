//! Binary Space Partitioning (BSP) tree implementation
//!
//! Every node splits space with the plane of the first triangle it was built
//! from. Triangles are never cut where they cross a splitting plane: a
//! spanning triangle is routed to both subtrees during [`Node::build`], and
//! [`Node::clip_triangle`] sends it down the back branch.

pub mod node;
pub mod serial;
pub mod traits;

pub use node::Node;
pub use serial::SerialBspOps;
pub use traits::BspOps;

use crate::errors::CsgError;
use crate::mesh::triangle::Triangle;

impl Node {
    /// Creates a new BSP node from triangles
    pub fn from_triangles(triangles: &[Triangle]) -> Self {
        let mut node = Self::new();
        node.build(triangles);
        node
    }

    /// Creates a new BSP node from triangles, bounding the tree depth.
    pub fn try_from_triangles(
        triangles: &[Triangle],
        max_depth: usize,
    ) -> Result<Self, CsgError> {
        let mut node = Self::new();
        node.try_build(triangles, max_depth)?;
        Ok(node)
    }

    /// Build a BSP tree from the given triangles
    pub fn build(&mut self, triangles: &[Triangle]) {
        SerialBspOps::new().build(self, triangles);
    }

    /// Build a BSP tree from the given triangles, failing past `max_depth` levels
    pub fn try_build(
        &mut self,
        triangles: &[Triangle],
        max_depth: usize,
    ) -> Result<(), CsgError> {
        SerialBspOps::new().try_build(self, triangles, max_depth)
    }

    /// Invert all triangles and planes in the BSP tree
    pub fn invert(&mut self) {
        SerialBspOps::new().invert(self);
    }

    /// `true` if `triangle` is inside the solid this tree describes
    pub fn clip_triangle(&self, triangle: &Triangle) -> bool {
        SerialBspOps::new().clip_triangle(self, triangle)
    }

    /// Recursively remove all triangles that are inside this BSP tree
    pub fn clip_triangles(&self, triangles: &[Triangle]) -> Vec<Triangle> {
        SerialBspOps::new().clip_triangles(self, triangles)
    }

    /// Remove all triangles in this BSP tree that are inside the other BSP tree
    pub fn clip_to(&mut self, bsp: &Node) {
        SerialBspOps::new().clip_to(self, bsp);
    }

    /// Return all triangles in this BSP tree
    pub fn all_triangles(&self) -> Vec<Triangle> {
        SerialBspOps::new().all_triangles(self)
    }
}
