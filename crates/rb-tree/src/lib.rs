//! Arena-based red-black tree.
//!
//! Nodes live in a caller-owned (or [`RbMap`]-owned) `Vec<N>` arena and every
//! "pointer" is an `Option<u32>` index into it. Parent links are plain
//! indices used for upward traversal only; the arena owns every node.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] and [`KvNode`] link/key traits |
//! [`util`] | generic arena walkers: `first`, `next`, `prev`, `find`, `size`, `relocate` |
//! [`red_black`] | [`RbNode`], rotations, insert/remove fixups, validator, printers, [`RbMap`] |
//! [`error`] | [`InvariantError`] reported by the validator |
//!
//! # Example
//!
//! ```
//! use rb_tree::RbMap;
//!
//! let mut map = RbMap::new();
//! map.insert(20, "b");
//! map.insert(10, "a");
//! map.insert(20, "ignored");
//!
//! assert_eq!(map.find(&20), Some(&"b"));
//! assert_eq!(map.in_order().to_string(), "10 a 20 b \n");
//! map.assert_valid().unwrap();
//! ```

pub mod error;
pub mod red_black;
pub mod types;
pub mod util;

pub use error::InvariantError;
pub use red_black::{Color, RbMap, RbNode};
pub use types::{KvNode, Node};
