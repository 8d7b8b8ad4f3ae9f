//! Serial implementation of BSP operations

use crate::errors::CsgError;
use crate::mesh::bsp::node::Node;
use crate::mesh::bsp::traits::BspOps;
use crate::mesh::plane::Plane;
use crate::mesh::triangle::Triangle;

/// A triangle waiting to be placed in the tree.
///
/// A triangle that spans a splitting plane is handed to both subtrees so its
/// plane takes part in partitioning each of them, but only one copy is
/// `retained`: the other is dropped once it reaches a node it is coplanar
/// with. A freshly built tree therefore holds every input triangle exactly once.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    triangle: Triangle,
    retained: bool,
}

/// Triangles grouped by their position relative to a splitting plane.
struct Partition {
    coplanar: Vec<Triangle>,
    front: Vec<Candidate>,
    back: Vec<Candidate>,
}

fn partition(plane: &Plane, candidates: Vec<Candidate>) -> Partition {
    let mut coplanar = Vec::new();
    let mut front = Vec::with_capacity(candidates.len() / 2);
    let mut back = Vec::with_capacity(candidates.len() / 2);

    for candidate in candidates {
        match candidate.triangle.side_counts(plane) {
            (0, 0) => {
                if candidate.retained {
                    coplanar.push(candidate.triangle);
                }
            },
            (_, 0) => front.push(candidate),
            (0, _) => back.push(candidate),
            _ => {
                // spanning: never split, send it both ways
                front.push(candidate);
                back.push(Candidate {
                    retained: false,
                    ..candidate
                });
            },
        }
    }

    Partition {
        coplanar,
        front,
        back,
    }
}

/// Serial implementation of BSP operations
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialBspOps;

impl SerialBspOps {
    pub const fn new() -> Self {
        Self
    }

    fn build_candidates(&self, node: &mut Node, candidates: Vec<Candidate>) {
        let Some(first) = candidates.first() else {
            return;
        };

        // The first triangle donates the splitting plane if there is none yet
        let plane = match node.plane {
            Some(plane) => plane,
            None => {
                let plane = first.triangle.plane();
                if !plane.is_finite() {
                    tracing::warn!(
                        triangle = ?first.triangle.vertices,
                        "adopting a degenerate splitting plane"
                    );
                }
                node.plane = Some(plane);
                plane
            },
        };

        let Partition {
            coplanar,
            front,
            back,
        } = partition(&plane, candidates);
        node.triangles.extend(coplanar);

        if !front.is_empty() {
            let child = node.front.get_or_insert_with(|| Box::new(Node::new()));
            self.build_candidates(child, front);
        }

        if !back.is_empty() {
            let child = node.back.get_or_insert_with(|| Box::new(Node::new()));
            self.build_candidates(child, back);
        }
    }

    fn try_build_candidates(
        &self,
        node: &mut Node,
        candidates: Vec<Candidate>,
        depth: usize,
        max_depth: usize,
    ) -> Result<(), CsgError> {
        let Some(first) = candidates.first() else {
            return Ok(());
        };
        if depth > max_depth {
            return Err(CsgError::RecursionLimitExceeded { limit: max_depth });
        }

        let plane = match node.plane {
            Some(plane) => plane,
            None => {
                let plane = first.triangle.try_plane()?;
                node.plane = Some(plane);
                plane
            },
        };

        let Partition {
            coplanar,
            front,
            back,
        } = partition(&plane, candidates);
        node.triangles.extend(coplanar);

        if !front.is_empty() {
            let child = node.front.get_or_insert_with(|| Box::new(Node::new()));
            self.try_build_candidates(child, front, depth + 1, max_depth)?;
        }

        if !back.is_empty() {
            let child = node.back.get_or_insert_with(|| Box::new(Node::new()));
            self.try_build_candidates(child, back, depth + 1, max_depth)?;
        }

        Ok(())
    }
}

fn retained(triangles: &[Triangle]) -> Vec<Candidate> {
    triangles
        .iter()
        .map(|&triangle| Candidate {
            triangle,
            retained: true,
        })
        .collect()
}

impl BspOps for SerialBspOps {
    fn build(&self, node: &mut Node, triangles: &[Triangle]) {
        self.build_candidates(node, retained(triangles));
    }

    fn try_build(
        &self,
        node: &mut Node,
        triangles: &[Triangle],
        max_depth: usize,
    ) -> Result<(), CsgError> {
        self.try_build_candidates(node, retained(triangles), 1, max_depth)
    }

    fn invert(&self, node: &mut Node) {
        // Use iterative approach with a stack
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            if let Some(ref mut plane) = current.plane {
                plane.flip();
            }
            current.triangles.iter_mut().for_each(|t| t.flip());

            std::mem::swap(&mut current.front, &mut current.back);

            if let Some(ref mut front) = current.front {
                stack.push(front.as_mut());
            }
            if let Some(ref mut back) = current.back {
                stack.push(back.as_mut());
            }
        }
    }

    fn clip_triangle(&self, node: &Node, triangle: &Triangle) -> bool {
        let Some(plane) = node.plane.as_ref() else {
            return false;
        };

        let (_, back) = triangle.side_counts(plane);
        if back == 0 {
            // entirely in front (or on the plane): outside unless the front subtree says otherwise
            node.front
                .as_deref()
                .is_some_and(|front| self.clip_triangle(front, triangle))
        } else {
            // behind or spanning: an empty back half-space is solid
            node.back
                .as_deref()
                .is_none_or(|back| self.clip_triangle(back, triangle))
        }
    }

    fn clip_triangles(&self, node: &Node, triangles: &[Triangle]) -> Vec<Triangle> {
        triangles
            .iter()
            .filter(|t| !self.clip_triangle(node, t))
            .copied()
            .collect()
    }

    fn clip_to(&self, node: &mut Node, other: &Node) {
        node.triangles.retain(|t| !self.clip_triangle(other, t));

        if let Some(ref mut front) = node.front {
            self.clip_to(front, other);
        }

        if let Some(ref mut back) = node.back {
            self.clip_to(back, other);
        }
    }

    fn all_triangles(&self, node: &Node) -> Vec<Triangle> {
        let mut result = Vec::new();
        let mut stack = vec![node];

        // pre-order: node, then front subtree, then back subtree
        while let Some(current) = stack.pop() {
            result.extend_from_slice(&current.triangles);

            if let Some(back) = current.back.as_deref() {
                stack.push(back);
            }
            if let Some(front) = current.front.as_deref() {
                stack.push(front);
            }
        }
        result
    }
}
