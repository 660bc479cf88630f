//! Red-black tree: node type, arena algorithms and the owning map.

pub mod print;
pub mod rb_map;
pub mod types;
pub mod util;

pub use print::{print, InOrder};
pub use rb_map::{Iter, RbMap};
pub use types::{Color, RbNode, RbNodeLike};
pub use util::{
    assert_red_black_tree, black_height, insert, insert_left, insert_right, remove, rotate_left,
    rotate_right,
};
