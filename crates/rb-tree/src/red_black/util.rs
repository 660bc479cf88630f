use std::cmp::Ordering;

use crate::error::InvariantError;
use crate::types::Node;
use crate::util::{child, first, next, replace_child, set_child, side_of, Side};

use super::types::{Color, RbNodeLike};

/// Position that carries an extra unit of blackness during deletion fixup.
///
/// A removed black node is replaced either by a real node or by nothing at
/// all; the second case is tracked as a vacant slot under a known parent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Deficit {
    Node(u32),
    Vacant { parent: u32, side: Side },
}

impl Deficit {
    fn at(node: Option<u32>, parent: u32, side: Side) -> Self {
        match node {
            Some(n) => Deficit::Node(n),
            None => Deficit::Vacant { parent, side },
        }
    }
}

#[inline]
fn color_of<K, V, N>(arena: &[N], i: Option<u32>) -> Color
where
    N: RbNodeLike<K, V>,
{
    i.map_or(Color::Black, |i| arena[i as usize].color())
}

#[inline]
fn is_red<K, V, N>(arena: &[N], i: Option<u32>) -> bool
where
    N: RbNodeLike<K, V>,
{
    color_of(arena, i) == Color::Red
}

#[inline]
fn paint<K, V, N>(arena: &mut [N], i: u32, color: Color)
where
    N: RbNodeLike<K, V>,
{
    arena[i as usize].set_color(color);
}

/// Rotates `n` down to the left; its right child takes its place.
pub fn rotate_left<N: Node>(arena: &mut [N], root: &mut Option<u32>, n: u32) {
    let pivot = arena[n as usize].r().expect("rotate_left needs a right child");
    let inner = arena[pivot as usize].l();

    arena[n as usize].set_r(inner);
    if let Some(inner) = inner {
        arena[inner as usize].set_p(Some(n));
    }

    replace_child(arena, root, n, Some(pivot));
    arena[pivot as usize].set_l(Some(n));
    arena[n as usize].set_p(Some(pivot));
}

/// Rotates `n` down to the right; its left child takes its place.
pub fn rotate_right<N: Node>(arena: &mut [N], root: &mut Option<u32>, n: u32) {
    let pivot = arena[n as usize].l().expect("rotate_right needs a left child");
    let inner = arena[pivot as usize].r();

    arena[n as usize].set_l(inner);
    if let Some(inner) = inner {
        arena[inner as usize].set_p(Some(n));
    }

    replace_child(arena, root, n, Some(pivot));
    arena[pivot as usize].set_r(Some(n));
    arena[n as usize].set_p(Some(pivot));
}

/// Rotates `n` down toward `side`.
#[inline]
fn rotate<N: Node>(arena: &mut [N], root: &mut Option<u32>, n: u32, side: Side) {
    match side {
        Side::Left => rotate_left(arena, root, n),
        Side::Right => rotate_right(arena, root, n),
    }
}

/// Inserts the detached node `n` by key and rebalances.
///
/// Returns the new root. When a node with an equal key is already linked,
/// `n` stays detached and `root` is returned unchanged.
pub fn insert<K, V, N, C>(arena: &mut [N], root: Option<u32>, n: u32, comparator: &C) -> Option<u32>
where
    N: RbNodeLike<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(mut curr) = root else {
        arena[n as usize].set_p(None);
        paint(arena, n, Color::Black);
        return Some(n);
    };

    loop {
        let side = match comparator(arena[n as usize].key(), arena[curr as usize].key()) {
            Ordering::Equal => return root,
            Ordering::Less => Side::Left,
            Ordering::Greater => Side::Right,
        };
        match child(arena, curr, side) {
            Some(next) => curr = next,
            None => return link(arena, root, n, curr, side),
        }
    }
}

/// Links `n` as the (empty) left child of `parent` and rebalances.
pub fn insert_left<K, V, N>(arena: &mut [N], root: Option<u32>, n: u32, parent: u32) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    link(arena, root, n, parent, Side::Left)
}

/// Links `n` as the (empty) right child of `parent` and rebalances.
pub fn insert_right<K, V, N>(arena: &mut [N], root: Option<u32>, n: u32, parent: u32) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    link(arena, root, n, parent, Side::Right)
}

fn link<K, V, N>(arena: &mut [N], mut root: Option<u32>, n: u32, parent: u32, side: Side) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    debug_assert!(child(arena, parent, side).is_none());
    set_child(arena, parent, side, Some(n));
    arena[n as usize].set_p(Some(parent));
    paint(arena, n, Color::Red);
    insert_fixup(arena, &mut root, n);
    root
}

fn insert_fixup<K, V, N>(arena: &mut [N], root: &mut Option<u32>, mut n: u32)
where
    N: RbNodeLike<K, V>,
{
    while let Some(mut p) = arena[n as usize].p() {
        if arena[p as usize].is_black() {
            break;
        }
        let g = arena[p as usize].p().expect("red parent is never the root");
        let side = side_of(arena, g, p);
        let uncle = child(arena, g, side.opposite());

        if is_red(arena, uncle) {
            paint(arena, p, Color::Black);
            if let Some(u) = uncle {
                paint(arena, u, Color::Black);
            }
            paint(arena, g, Color::Red);
            n = g;
            continue;
        }

        // Triangle: straighten into a line first.
        if side_of(arena, p, n) != side {
            rotate(arena, root, p, side);
            n = p;
            p = arena[n as usize].p().expect("rotated child has a parent");
        }

        paint(arena, p, Color::Black);
        paint(arena, g, Color::Red);
        rotate(arena, root, g, side.opposite());
        break;
    }

    if let Some(r) = *root {
        paint(arena, r, Color::Black);
    }
}

/// Unlinks `z` from the tree and rebalances. Returns the new root.
///
/// `z` stays in the arena, fully detached; freeing its slot is up to the
/// caller.
pub fn remove<K, V, N>(arena: &mut [N], mut root: Option<u32>, z: u32) -> Option<u32>
where
    N: RbNodeLike<K, V>,
{
    let zp = arena[z as usize].p();
    let zl = arena[z as usize].l();
    let zr = arena[z as usize].r();
    let z_color = arena[z as usize].color();

    let (spliced_color, deficit) = match (zl, zr) {
        (Some(l), Some(r)) => {
            let y = first(arena, Some(r)).expect("right subtree is not empty");
            let y_color = arena[y as usize].color();
            let x = arena[y as usize].r();

            let deficit = if y == r {
                Deficit::at(x, y, Side::Right)
            } else {
                let yp = arena[y as usize].p().expect("successor has a parent");
                replace_child(arena, &mut root, y, x);
                arena[y as usize].set_r(Some(r));
                arena[r as usize].set_p(Some(y));
                Deficit::at(x, yp, Side::Left)
            };

            replace_child(arena, &mut root, z, Some(y));
            arena[y as usize].set_l(Some(l));
            arena[l as usize].set_p(Some(y));
            paint(arena, y, z_color);
            (y_color, Some(deficit))
        }
        (only, None) | (None, only) => {
            let side = zp.map(|p| side_of(arena, p, z));
            replace_child(arena, &mut root, z, only);
            let deficit = match (only, zp, side) {
                (Some(c), _, _) => Some(Deficit::Node(c)),
                (None, Some(parent), Some(side)) => Some(Deficit::Vacant { parent, side }),
                _ => None,
            };
            (z_color, deficit)
        }
    };

    arena[z as usize].set_p(None);
    arena[z as usize].set_l(None);
    arena[z as usize].set_r(None);

    if spliced_color == Color::Black {
        if let Some(deficit) = deficit {
            remove_fixup(arena, &mut root, deficit);
        }
    }
    root
}

#[inline]
fn sibling<N: Node>(arena: &[N], parent: u32, side: Side) -> u32 {
    child(arena, parent, side).expect("a doubly black position always has a sibling")
}

fn remove_fixup<K, V, N>(arena: &mut [N], root: &mut Option<u32>, mut at: Deficit)
where
    N: RbNodeLike<K, V>,
{
    loop {
        let (p, side) = match at {
            Deficit::Node(x) => {
                if !arena[x as usize].is_black() {
                    break;
                }
                match arena[x as usize].p() {
                    Some(p) => (p, side_of(arena, p, x)),
                    None => break,
                }
            }
            Deficit::Vacant { parent, side } => (parent, side),
        };
        let far_side = side.opposite();
        let mut s = sibling(arena, p, far_side);

        if is_red(arena, Some(s)) {
            paint(arena, s, Color::Black);
            paint(arena, p, Color::Red);
            rotate(arena, root, p, side);
            s = sibling(arena, p, far_side);
        }

        let near = child(arena, s, side);
        let far = child(arena, s, far_side);

        if !is_red(arena, near) && !is_red(arena, far) {
            paint(arena, s, Color::Red);
            // A red parent absorbs the extra black on the next pass.
            at = Deficit::Node(p);
            continue;
        }

        if !is_red(arena, far) {
            let near = near.expect("near child is red");
            paint(arena, near, Color::Black);
            paint(arena, s, Color::Red);
            rotate(arena, root, s, far_side);
            s = sibling(arena, p, far_side);
        }

        let parent_color = arena[p as usize].color();
        paint(arena, s, parent_color);
        paint(arena, p, Color::Black);
        if let Some(far) = child(arena, s, far_side) {
            paint(arena, far, Color::Black);
        }
        rotate(arena, root, p, side);
        break;
    }

    if let Deficit::Node(x) = at {
        paint(arena, x, Color::Black);
    }
    if let Some(r) = *root {
        paint(arena, r, Color::Black);
    }
}

/// Number of black nodes on the leftmost root-to-leaf path.
///
/// Equals the black count of every such path in a valid tree.
pub fn black_height<K, V, N>(arena: &[N], root: Option<u32>) -> usize
where
    N: RbNodeLike<K, V>,
{
    let mut count = 0;
    let mut curr = root;
    while let Some(i) = curr {
        if arena[i as usize].is_black() {
            count += 1;
        }
        curr = arena[i as usize].l();
    }
    count
}

/// Checks the red-black and ordering invariants of the tree under `root`.
///
/// Returns the black height (black nodes on every root-to-leaf path).
pub fn assert_red_black_tree<K, V, N, C>(
    arena: &[N],
    root: Option<u32>,
    comparator: &C,
) -> Result<usize, InvariantError>
where
    N: RbNodeLike<K, V>,
    C: Fn(&K, &K) -> Ordering,
{
    let Some(root) = root else {
        return Ok(0);
    };

    if arena[root as usize].p().is_some() {
        return Err(InvariantError::RootHasParent(root));
    }
    if !arena[root as usize].is_black() {
        return Err(InvariantError::RedRoot(root));
    }

    fn check<K, V, N>(arena: &[N], node: Option<u32>) -> Result<usize, InvariantError>
    where
        N: RbNodeLike<K, V>,
    {
        let Some(node) = node else {
            return Ok(0);
        };

        let l = arena[node as usize].l();
        let r = arena[node as usize].r();

        for c in [l, r].into_iter().flatten() {
            if arena[c as usize].p() != Some(node) {
                return Err(InvariantError::BrokenParentLink(node));
            }
        }

        if !arena[node as usize].is_black() && (is_red(arena, l) || is_red(arena, r)) {
            return Err(InvariantError::RedRed(node));
        }

        let left = check(arena, l)?;
        let right = check(arena, r)?;
        if left != right {
            return Err(InvariantError::BlackHeightMismatch { node, left, right });
        }

        Ok(left + usize::from(arena[node as usize].is_black()))
    }

    let height = check(arena, Some(root))?;

    let mut curr = first(arena, Some(root));
    let mut prev_node: Option<u32> = None;
    while let Some(i) = curr {
        if let Some(prev) = prev_node {
            if comparator(arena[prev as usize].key(), arena[i as usize].key()) != Ordering::Less {
                return Err(InvariantError::OutOfOrder(i));
            }
        }
        prev_node = Some(i);
        curr = next(arena, i);
    }

    Ok(height)
}
