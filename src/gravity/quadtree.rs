//! Barnes–Hut quadtree over 2D point masses.
//!
//! The tree is rebuilt from scratch for every force-evaluation call and
//! discarded afterwards; nothing is cached across calls. Nodes live in a
//! contiguous arena (`Vec<Node>`) and refer to their children by index,
//! so the tree never allocates per node on the heap beyond the arena
//! itself.
//!
//! Leaf semantics: a leaf holds a single body and subdivides on the next
//! insertion, except at [`MAX_DEPTH`], where a leaf accumulates multiple
//! bodies instead. That fallback is what keeps coincident or near-coincident
//! positions from recursing forever.

use log::debug;

use crate::vector::Vec2;

/// Subdivision stops at this depth; deeper leaves hold multiple bodies.
pub const MAX_DEPTH: u32 = 64;

/// Margin applied to the root cell so no position lands exactly on the
/// boundary of the bounding box.
const ROOT_MARGIN: f64 = 1.01;

/// Floor on the root half-size so a single body or a fully coincident
/// input still gets a non-degenerate cell.
const MIN_HALF_SIZE: f64 = 1e-6;

/// A square region in 2D space: center `(cx, cy)` and half the side length.
///
/// # Examples
///
/// ```
/// use rs_gravity::gravity::Quad;
///
/// let quad = Quad { cx: 0.0, cy: 0.0, half_size: 1.0 };
/// assert!(quad.contains(0.5, 0.5));
/// assert!(!quad.contains(1.5, 0.5));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Quad {
    pub cx: f64,
    pub cy: f64,
    pub half_size: f64,
}

// Child quadrant indices. The convention is fixed: NW=0, NE=1, SW=2, SE=3,
// with `x >= cx` selecting east and `y >= cy` selecting north.
pub const NW: usize = 0;
pub const NE: usize = 1;
pub const SW: usize = 2;
pub const SE: usize = 3;

impl Quad {
    /// Returns true if the point (x, y) is inside this quad. Lower bounds
    /// are inclusive, upper bounds exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.cx - self.half_size
            && x < self.cx + self.half_size
            && y >= self.cy - self.half_size
            && y < self.cy + self.half_size
    }

    /// Full side length of the cell, the `s` in the opening criterion.
    pub fn size(&self) -> f64 {
        2.0 * self.half_size
    }

    /// Which child quadrant a position falls into.
    pub fn quadrant(&self, p: Vec2) -> usize {
        if p.y >= self.cy {
            if p.x >= self.cx {
                NE
            } else {
                NW
            }
        } else if p.x >= self.cx {
            SE
        } else {
            SW
        }
    }

    /// The sub-quad covering the given child quadrant: half the half-size,
    /// center offset by a quarter side in each axis.
    pub fn child(&self, quadrant: usize) -> Quad {
        let hs = self.half_size / 2.0;
        let (dx, dy) = match quadrant {
            NW => (-hs, hs),
            NE => (hs, hs),
            SW => (-hs, -hs),
            _ => (hs, -hs),
        };
        Quad {
            cx: self.cx + dx,
            cy: self.cy + dy,
            half_size: hs,
        }
    }
}

/// Occupancy state of a tree node.
#[derive(Debug, Clone)]
pub enum NodeKind {
    /// No bodies in this region.
    Empty,
    /// Leaf holding body indices. Exactly one below [`MAX_DEPTH`], possibly
    /// several at it.
    Leaf(Vec<usize>),
    /// Internal node with four child slots (NW, NE, SW, SE), allocated
    /// lazily as quadrants are touched. `None` means the quadrant is empty.
    Internal([Option<usize>; 4]),
}

/// One node of the quadtree: a square region plus the aggregate mass and
/// center of mass of every body beneath it.
#[derive(Debug, Clone)]
pub struct Node {
    pub quad: Quad,
    pub depth: u32,
    pub total_mass: f64,
    pub com: Vec2,
    pub kind: NodeKind,
}

impl Node {
    fn empty(quad: Quad, depth: u32) -> Self {
        Node {
            quad,
            depth,
            total_mass: 0.0,
            com: Vec2::ZERO,
            kind: NodeKind::Empty,
        }
    }
}

/// A complete Barnes–Hut quadtree built over one set of point masses.
///
/// The root is always node 0. Aggregates (`total_mass`, `com`) are
/// maintained incrementally during insertion, so they are valid as soon as
/// [`QuadTree::build`] returns.
#[derive(Debug, Clone)]
pub struct QuadTree {
    pub nodes: Vec<Node>,
}

/// Index of the root node in the arena.
pub(crate) const ROOT: usize = 0;

impl QuadTree {
    /// Builds a quadtree from parallel mass/position slices, inserting
    /// bodies in input order.
    ///
    /// Empty input yields a degenerate root with zero mass.
    ///
    /// # Panics
    ///
    /// Panics if `masses` and `positions` differ in length. The batch entry
    /// points such as [`crate::compute_accelerations`] reject that case with
    /// [`crate::GravityError::MismatchedLengths`] before building.
    ///
    /// # Examples
    ///
    /// ```
    /// use rs_gravity::{QuadTree, Vec2};
    ///
    /// let masses = [1.0, 3.0];
    /// let positions = [Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)];
    /// let tree = QuadTree::build(&masses, &positions);
    ///
    /// // Root aggregates are the mass-weighted centroid of the input.
    /// assert_eq!(tree.root().total_mass, 4.0);
    /// assert!((tree.root().com.x - 0.5).abs() < 1e-12);
    /// ```
    pub fn build(masses: &[f64], positions: &[Vec2]) -> QuadTree {
        assert_eq!(
            masses.len(),
            positions.len(),
            "mismatched mass/position lengths"
        );

        let root_quad = bounding_quad(positions);
        let mut tree = QuadTree {
            nodes: vec![Node::empty(root_quad, 0)],
        };

        for i in 0..positions.len() {
            tree.insert(ROOT, i, masses, positions);
        }

        debug!(
            "built quadtree: {} bodies, {} nodes, root half_size {:.3e}",
            positions.len(),
            tree.nodes.len(),
            root_quad.half_size
        );

        tree
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.nodes[ROOT]
    }

    /// Inserts body `body` into the subtree rooted at `node_idx`, updating
    /// `total_mass` and `com` along the descent path.
    fn insert(&mut self, node_idx: usize, body: usize, masses: &[f64], positions: &[Vec2]) {
        let mass = masses[body];
        let pos = positions[body];

        // Empty cell: becomes a leaf holding this body.
        if matches!(self.nodes[node_idx].kind, NodeKind::Empty) {
            let node = &mut self.nodes[node_idx];
            node.kind = NodeKind::Leaf(vec![body]);
            node.total_mass = mass;
            node.com = pos;
            return;
        }

        // Fold the new body into the running aggregates on the way down:
        // newCOM = (oldCOM * oldMass + pos * mass) / (oldMass + mass).
        {
            let node = &mut self.nodes[node_idx];
            let total = node.total_mass + mass;
            node.com = (node.com * node.total_mass + pos * mass) / total;
            node.total_mass = total;
        }

        let depth = self.nodes[node_idx].depth;
        if matches!(self.nodes[node_idx].kind, NodeKind::Leaf(_)) {
            if depth >= MAX_DEPTH {
                // Coincident or extremely close bodies accumulate here
                // instead of subdividing forever.
                if let NodeKind::Leaf(bodies) = &mut self.nodes[node_idx].kind {
                    bodies.push(body);
                }
                return;
            }

            // Leaf at capacity: convert to an internal node and push the
            // resident body down before the new one descends.
            let resident = match std::mem::replace(
                &mut self.nodes[node_idx].kind,
                NodeKind::Internal([None; 4]),
            ) {
                NodeKind::Leaf(bodies) => bodies,
                _ => Vec::new(),
            };
            for idx in resident {
                self.insert_into_child(node_idx, idx, masses, positions);
            }
        }

        self.insert_into_child(node_idx, body, masses, positions);
    }

    /// Routes a body into the correct child of an internal node, allocating
    /// the child cell the first time its quadrant is touched.
    fn insert_into_child(
        &mut self,
        node_idx: usize,
        body: usize,
        masses: &[f64],
        positions: &[Vec2],
    ) {
        let quad = self.nodes[node_idx].quad;
        let depth = self.nodes[node_idx].depth;
        let q = quad.quadrant(positions[body]);

        let existing = match &self.nodes[node_idx].kind {
            NodeKind::Internal(children) => children[q],
            _ => None,
        };

        let child_idx = match existing {
            Some(idx) => idx,
            None => {
                let idx = self.nodes.len();
                self.nodes.push(Node::empty(quad.child(q), depth + 1));
                if let NodeKind::Internal(children) = &mut self.nodes[node_idx].kind {
                    children[q] = Some(idx);
                }
                idx
            }
        };

        self.insert(child_idx, body, masses, positions);
    }
}

/// Root cell for a set of positions: a square centered on the bounding-box
/// midpoint, sized to the larger extent plus a small margin.
fn bounding_quad(positions: &[Vec2]) -> Quad {
    if positions.is_empty() {
        return Quad {
            cx: 0.0,
            cy: 0.0,
            half_size: 1.0,
        };
    }

    let mut min_x = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for p in positions {
        min_x = min_x.min(p.x);
        max_x = max_x.max(p.x);
        min_y = min_y.min(p.y);
        max_y = max_y.max(p.y);
    }

    let half = (max_x - min_x).max(max_y - min_y) / 2.0 * ROOT_MARGIN;
    Quad {
        cx: (min_x + max_x) / 2.0,
        cy: (min_y + max_y) / 2.0,
        half_size: half.max(MIN_HALF_SIZE),
    }
}
