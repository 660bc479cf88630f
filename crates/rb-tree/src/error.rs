use thiserror::Error;

/// A broken structural or coloring invariant, as found by
/// [`assert_red_black_tree`](crate::red_black::assert_red_black_tree).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root node {0} has a parent link")]
    RootHasParent(u32),
    #[error("root node {0} is red")]
    RedRoot(u32),
    #[error("child of node {0} does not link back to it")]
    BrokenParentLink(u32),
    #[error("red node {0} has a red child")]
    RedRed(u32),
    #[error("black height mismatch at node {node}: left {left}, right {right}")]
    BlackHeightMismatch { node: u32, left: usize, right: usize },
    #[error("key order violated at node {0}")]
    OutOfOrder(u32),
    #[error("tracked size {tracked} differs from reachable node count {reachable}")]
    SizeMismatch { tracked: usize, reachable: usize },
}
