//! BSP tree node data structure

use crate::mesh::plane::Plane;
use crate::mesh::triangle::Triangle;

/// A BSP tree node, containing triangles plus optional front/back subtrees
#[derive(Debug, Clone, Default)]
pub struct Node {
    /// Splitting plane for this node *or* **None** for a node that has not
    /// been built from anything yet.
    pub plane: Option<Plane>,

    /// Subtree for the half-space in *front* of `plane`.
    pub front: Option<Box<Node>>,

    /// Subtree for the half-space *behind* `plane`.
    pub back: Option<Box<Node>>,

    /// Triangles that lie *exactly* on `plane`.
    pub triangles: Vec<Triangle>,
}

impl Node {
    /// Create a new empty BSP node
    pub const fn new() -> Self {
        Self {
            plane: None,
            front: None,
            back: None,
            triangles: Vec::new(),
        }
    }

    /// `true` for a node that was never given any geometry.
    pub fn is_empty(&self) -> bool {
        self.plane.is_none() && self.triangles.is_empty()
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let front = self.front.as_ref().map_or(0, |n| n.depth());
        let back = self.back.as_ref().map_or(0, |n| n.depth());
        1 + front.max(back)
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.front.as_ref().map_or(0, |n| n.node_count())
            + self.back.as_ref().map_or(0, |n| n.node_count())
    }

    /// Number of triangles stored anywhere in this subtree.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
            + self.front.as_ref().map_or(0, |n| n.triangle_count())
            + self.back.as_ref().map_or(0, |n| n.triangle_count())
    }
}
