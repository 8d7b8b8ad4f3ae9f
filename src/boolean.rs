//! Boolean operations on closed triangle meshes.
//!
//! Each operation builds one BSP tree per operand and then runs a fixed
//! sequence of [`Step`]s over the pair (its *recipe*, see [`BooleanOp::recipe`]).
//! Whatever triangles survive in both trees form the result.

use crate::errors::CsgError;
#[cfg(feature = "hashmap")]
use crate::float_types::Real;
use crate::mesh::Mesh;
use crate::mesh::bsp::Node;
use crate::mesh::triangle::Triangle;
use crate::traits::TriangleSource;

/// The three supported boolean operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BooleanOp {
    Union,
    /// `A - B`
    Difference,
    Intersection,
}

/// One tree operation inside a recipe. `A` is the tree of the first operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `A.clip_to(B)`
    ClipAToB,
    /// `B.clip_to(A)`
    ClipBToA,
    /// `A.invert()`
    InvertA,
    /// `B.invert()`
    InvertB,
}

use Step::{ClipAToB, ClipBToA, InvertA, InvertB};

const UNION: &[Step] = &[ClipAToB, ClipBToA, InvertB, ClipBToA, InvertB];
const DIFFERENCE: &[Step] = &[
    InvertA, ClipAToB, ClipBToA, InvertB, ClipBToA, InvertB, InvertA,
];
const INTERSECTION: &[Step] = &[InvertA, ClipBToA, InvertB, ClipAToB, ClipBToA];

impl BooleanOp {
    pub const ALL: [BooleanOp; 3] = [
        BooleanOp::Union,
        BooleanOp::Difference,
        BooleanOp::Intersection,
    ];

    /// The clip/invert sequence that defines this operation. Order matters.
    pub const fn recipe(self) -> &'static [Step] {
        match self {
            BooleanOp::Union => UNION,
            BooleanOp::Difference => DIFFERENCE,
            BooleanOp::Intersection => INTERSECTION,
        }
    }

    /// `(a, b)`: whether the recipe leaves tree A / tree B inverted.
    pub fn leaves_inverted(self) -> (bool, bool) {
        self.recipe()
            .iter()
            .fold((false, false), |(a, b), step| match step {
                InvertA => (!a, b),
                InvertB => (a, !b),
                ClipAToB | ClipBToA => (a, b),
            })
    }

    /// `(a, b)`: whether the surviving faces of A / B must end up reversed.
    ///
    /// Only a difference reverses anything: what is left of B lines the
    /// cavity cut into A, so it faces into B's former interior.
    pub const fn reverses_output(self) -> (bool, bool) {
        match self {
            BooleanOp::Difference => (false, true),
            BooleanOp::Union | BooleanOp::Intersection => (false, false),
        }
    }

    /// Result for operands where at least one side is empty, without building trees.
    ///
    /// An empty tree has no splitting plane and cannot represent "everything"
    /// once inverted, so these cases are answered directly.
    fn trivial(self, a: &[Triangle], b: &[Triangle]) -> Option<Vec<Triangle>> {
        match (self, a.is_empty(), b.is_empty()) {
            (_, false, false) => None,
            (BooleanOp::Union, _, _) => Some([a, b].concat()),
            (BooleanOp::Difference, _, true) => Some(a.to_vec()),
            (BooleanOp::Difference, true, false) => Some(Vec::new()),
            (BooleanOp::Intersection, _, _) => Some(Vec::new()),
        }
    }
}

impl Step {
    pub fn apply(self, a: &mut Node, b: &mut Node) {
        match self {
            ClipAToB => a.clip_to(b),
            ClipBToA => b.clip_to(a),
            InvertA => a.invert(),
            InvertB => b.invert(),
        }
    }
}

/// Apply `op`'s recipe to two built trees, step by step and nothing else.
///
/// Both trees must hold geometry. A tree without a splitting plane treats every
/// triangle as outside, so empty operands do not get the answers [`boolean`]
/// gives them.
pub fn run_recipe(op: BooleanOp, a: &mut Node, b: &mut Node) {
    for &step in op.recipe() {
        tracing::trace!(?op, ?step, "applying recipe step");
        step.apply(a, b);
    }
}

/// Bring both trees into output orientation after [`run_recipe`].
///
/// A tree is inverted once more when the recipe left it inverted but the
/// operation does not reverse its faces, or the other way around (see
/// [`BooleanOp::reverses_output`]).
pub fn orient_output(op: BooleanOp, a: &mut Node, b: &mut Node) {
    let (a_inverted, b_inverted) = op.leaves_inverted();
    let (a_reversed, b_reversed) = op.reverses_output();
    if a_inverted != a_reversed {
        a.invert();
    }
    if b_inverted != b_reversed {
        b.invert();
    }
}

/// Run `op` over two built trees and gather the surviving triangles, A's first.
fn combine(op: BooleanOp, mut a: Node, mut b: Node) -> Vec<Triangle> {
    run_recipe(op, &mut a, &mut b);
    orient_output(op, &mut a, &mut b);

    let mut result = a.all_triangles();
    result.extend(b.all_triangles());
    result
}

/// Apply `op` to two triangle soups.
pub fn boolean_triangles(op: BooleanOp, a: &[Triangle], b: &[Triangle]) -> Vec<Triangle> {
    let result = match op.trivial(a, b) {
        Some(result) => result,
        None => combine(op, Node::from_triangles(a), Node::from_triangles(b)),
    };

    tracing::debug!(
        ?op,
        a = a.len(),
        b = b.len(),
        result = result.len(),
        "boolean operation"
    );
    result
}

/// Apply `op` to two meshes. The result is a triangle soup packed into a
/// [`Mesh`]: three fresh vertices per face, normals recomputed.
pub fn boolean<A, B>(op: BooleanOp, a: &A, b: &B) -> Mesh
where
    A: TriangleSource + ?Sized,
    B: TriangleSource + ?Sized,
{
    Mesh::from_triangles(&boolean_triangles(op, &a.triangles(), &b.triangles()))
}

pub fn union<A, B>(a: &A, b: &B) -> Mesh
where
    A: TriangleSource + ?Sized,
    B: TriangleSource + ?Sized,
{
    boolean(BooleanOp::Union, a, b)
}

/// `a` with everything inside `b` removed.
pub fn difference<A, B>(a: &A, b: &B) -> Mesh
where
    A: TriangleSource + ?Sized,
    B: TriangleSource + ?Sized,
{
    boolean(BooleanOp::Difference, a, b)
}

pub fn intersection<A, B>(a: &A, b: &B) -> Mesh
where
    A: TriangleSource + ?Sized,
    B: TriangleSource + ?Sized,
{
    boolean(BooleanOp::Intersection, a, b)
}

/// Knobs for [`try_boolean`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BooleanOptions {
    /// Deepest BSP path either tree may have before the operation is abandoned.
    pub max_depth: usize,

    /// Weld result vertices that round to the same cell of a grid with this spacing.
    ///
    /// Points closer than the spacing but on opposite sides of a cell boundary stay apart.
    #[cfg(feature = "hashmap")]
    pub weld_tolerance: Option<Real>,
}

impl Default for BooleanOptions {
    fn default() -> Self {
        Self {
            max_depth: usize::MAX,
            #[cfg(feature = "hashmap")]
            weld_tolerance: None,
        }
    }
}

/// Like [`boolean`], but builds both trees with [`Node::try_build`]: fails on
/// zero-area splitting triangles and on trees deeper than `options.max_depth`.
pub fn try_boolean<A, B>(
    op: BooleanOp,
    a: &A,
    b: &B,
    options: &BooleanOptions,
) -> Result<Mesh, CsgError>
where
    A: TriangleSource + ?Sized,
    B: TriangleSource + ?Sized,
{
    let (a, b) = (a.triangles(), b.triangles());

    let triangles = match op.trivial(&a, &b) {
        Some(result) => result,
        None => combine(
            op,
            Node::try_from_triangles(&a, options.max_depth)?,
            Node::try_from_triangles(&b, options.max_depth)?,
        ),
    };
    tracing::debug!(
        ?op,
        a = a.len(),
        b = b.len(),
        result = triangles.len(),
        "checked boolean operation"
    );

    let mesh = Mesh::from_triangles(&triangles);

    #[cfg(feature = "hashmap")]
    if let Some(tolerance) = options.weld_tolerance {
        return Ok(mesh.weld_vertices(tolerance));
    }

    Ok(mesh)
}

/// Run the same operation over many independent mesh pairs in parallel.
///
/// Each pair still runs single-threaded; only separate pairs are spread over threads.
#[cfg(feature = "parallel")]
pub fn par_boolean<M>(op: BooleanOp, pairs: &[(M, M)]) -> Vec<Mesh>
where
    M: TriangleSource + Sync,
{
    use rayon::prelude::*;

    pairs.par_iter().map(|(a, b)| boolean(op, a, b)).collect()
}
