//! Traits defining BSP tree operations for dependency inversion

use crate::errors::CsgError;
use crate::mesh::bsp::node::Node;
use crate::mesh::triangle::Triangle;

/// Core BSP operations trait - implements algorithms on BSP nodes
pub trait BspOps {
    /// Build a BSP tree from the given triangles
    fn build(&self, node: &mut Node, triangles: &[Triangle]);

    /// Build a BSP tree, failing instead of descending past `max_depth` levels
    /// or adopting a splitting plane from a zero-area triangle.
    fn try_build(
        &self,
        node: &mut Node,
        triangles: &[Triangle],
        max_depth: usize,
    ) -> Result<(), CsgError>;

    /// Flip the inside/outside sense of the whole tree
    fn invert(&self, node: &mut Node);

    /// `true` if `triangle` lies inside the solid described by `node`
    fn clip_triangle(&self, node: &Node, triangle: &Triangle) -> bool;

    /// Keep only the triangles that are not inside the solid described by `node`
    fn clip_triangles(&self, node: &Node, triangles: &[Triangle]) -> Vec<Triangle>;

    /// Remove all triangles in this BSP tree that are inside the other BSP tree
    fn clip_to(&self, node: &mut Node, other: &Node);

    /// Return all triangles in this BSP tree
    fn all_triangles(&self, node: &Node) -> Vec<Triangle>;
}
