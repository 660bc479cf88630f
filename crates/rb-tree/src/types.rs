//! Node trait definitions.
//!
//! Each link is an `Option<u32>` index into a [`Vec`]-backed arena. All
//! tree-manipulation functions take the arena as a slice and work with
//! indices; pushing new nodes is left to the owner of the arena.

/// Binary tree links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Key/value node interface used by map-like structures.
pub trait KvNode<K, V>: Node {
    fn key(&self) -> &K;
    fn value(&self) -> &V;
    fn value_mut(&mut self) -> &mut V;
}
