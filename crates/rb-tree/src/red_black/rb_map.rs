use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::iter::FusedIterator;

use log::{debug, trace};

use crate::error::InvariantError;
use crate::types::KvNode;
use crate::util::{self as tree, find, find_or_next_lower, first, last, next, relocate, Side};

use super::print::{self, InOrder};
use super::types::RbNode;
use super::util;

fn default_comparator<K: Ord>(a: &K, b: &K) -> Ordering {
    a.cmp(b)
}

/// Arena slot for position `pos`. Links are `u32`, so the arena cannot grow
/// past `u32::MAX` nodes.
fn slot(pos: usize) -> u32 {
    u32::try_from(pos).expect("red-black map is limited to u32::MAX nodes")
}

/// Ordered map backed by an arena-allocated red-black tree.
///
/// Inserting a key that is already present keeps the stored value.
///
/// Arena indices returned by [`root_index`](Self::root_index) are only stable
/// until the next removal: freeing a node moves the last arena slot into the
/// freed one.
#[derive(Clone)]
pub struct RbMap<K, V, C = fn(&K, &K) -> Ordering>
where
    C: Fn(&K, &K) -> Ordering,
{
    arena: Vec<RbNode<K, V>>,
    root: Option<u32>,
    comparator: C,
}

impl<K: Ord, V> RbMap<K, V, fn(&K, &K) -> Ordering> {
    pub fn new() -> Self {
        Self::with_comparator(default_comparator::<K>)
    }
}

impl<K: Ord, V> Default for RbMap<K, V, fn(&K, &K) -> Ordering> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, C> RbMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    pub fn with_comparator(comparator: C) -> Self {
        Self {
            arena: Vec::new(),
            root: None,
            comparator,
        }
    }

    /// Inserts `key` unless it is already present.
    ///
    /// Returns `false` (and drops `value`) when the key exists; the stored
    /// value is left untouched.
    pub fn insert(&mut self, key: K, value: V) -> bool {
        let mut parent: Option<(u32, Side)> = None;
        let mut curr = self.root;
        while let Some(i) = curr {
            let node = &self.arena[i as usize];
            let side = match (self.comparator)(&key, &node.k) {
                Ordering::Equal => return false,
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
            };
            parent = Some((i, side));
            curr = tree::child(&self.arena, i, side);
        }

        let idx = slot(self.arena.len());
        self.arena.push(RbNode::new(key, value));
        self.root = match parent {
            None => util::insert(&mut self.arena, None, idx, &self.comparator),
            Some((p, Side::Left)) => util::insert_left(&mut self.arena, self.root, idx, p),
            Some((p, Side::Right)) => util::insert_right(&mut self.arena, self.root, idx, p),
        };
        true
    }

    fn find_index(&self, key: &K) -> Option<u32> {
        find(&self.arena, self.root, key, |n| &n.k, &self.comparator)
    }

    pub fn find(&self, key: &K) -> Option<&V> {
        self.find_index(key).map(|i| &self.arena[i as usize].v)
    }

    pub fn find_mut(&mut self, key: &K) -> Option<&mut V> {
        let idx = self.find_index(key)?;
        Some(self.arena[idx as usize].value_mut())
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.find_index(key).is_some()
    }

    /// Entry with `key`, or the entry with the greatest key below it.
    pub fn get_or_next_lower(&self, key: &K) -> Option<(&K, &V)> {
        find_or_next_lower(&self.arena, self.root, key, |n| &n.k, &self.comparator)
            .map(|i| self.entry(i))
    }

    /// Removes `key`, returning its value. Absent keys leave the map as is.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|(_, v)| v)
    }

    pub fn remove_entry(&mut self, key: &K) -> Option<(K, V)> {
        let idx = self.find_index(key)?;
        self.root = util::remove(&mut self.arena, self.root, idx);

        let last = slot(self.arena.len() - 1);
        if idx != last {
            trace!("moving arena node {last} into freed slot {idx}");
            self.root = relocate(&mut self.arena, self.root, last, idx);
        }
        Some(self.arena.swap_remove(idx as usize).into_entry())
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        debug!("clearing red-black map with {} nodes", self.arena.len());
        self.arena.clear();
        self.root = None;
    }

    pub fn size(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn first(&self) -> Option<(&K, &V)> {
        first(&self.arena, self.root).map(|i| self.entry(i))
    }

    pub fn last(&self) -> Option<(&K, &V)> {
        last(&self.arena, self.root).map(|i| self.entry(i))
    }

    fn entry(&self, idx: u32) -> (&K, &V) {
        let n = &self.arena[idx as usize];
        (&n.k, &n.v)
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            arena: &self.arena,
            curr: first(&self.arena, self.root),
            remaining: self.arena.len(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    pub fn for_each<G: FnMut(&K, &V)>(&self, mut f: G) {
        for (k, v) in self.iter() {
            f(k, v);
        }
    }

    /// `"key value "` tokens in ascending key order, newline terminated.
    pub fn in_order(&self) -> InOrder<'_, K, V> {
        InOrder::new(&self.arena, self.root)
    }

    /// Writes [`in_order`](Self::in_order) to stdout.
    pub fn print(&self)
    where
        K: Display,
        V: Display,
    {
        print!("{}", self.in_order());
    }

    /// Tree shape with node colors, for debugging.
    pub fn dump(&self) -> String
    where
        K: Debug,
        V: Debug,
    {
        print::print(&self.arena, self.root, "")
    }

    pub fn root_index(&self) -> Option<u32> {
        self.root
    }

    pub fn arena(&self) -> &[RbNode<K, V>] {
        &self.arena
    }

    /// Nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        tree::height(&self.arena, self.root)
    }

    pub fn black_height(&self) -> usize {
        util::black_height(&self.arena, self.root)
    }

    /// Checks every red-black invariant and that each arena node is reachable
    /// from the root. Returns the black height.
    pub fn assert_valid(&self) -> Result<usize, InvariantError> {
        let height = util::assert_red_black_tree(&self.arena, self.root, &self.comparator)?;
        let reachable = tree::size(&self.arena, self.root);
        if reachable != self.arena.len() {
            return Err(InvariantError::SizeMismatch {
                tracked: self.arena.len(),
                reachable,
            });
        }
        Ok(height)
    }
}

impl<K: Debug, V: Debug, C> Debug for RbMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'a, K, V, C> IntoIterator for &'a RbMap<K, V, C>
where
    C: Fn(&K, &K) -> Ordering,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over an [`RbMap`].
pub struct Iter<'a, K, V> {
    arena: &'a [RbNode<K, V>],
    curr: Option<u32>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let i = self.curr?;
        self.curr = next(self.arena, i);
        self.remaining -= 1;
        let n = &self.arena[i as usize];
        Some((&n.k, &n.v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removal_compacts_arena() {
        let mut map = RbMap::new();
        for k in 0..8 {
            map.insert(k, k * 10);
        }
        assert_eq!(map.remove(&0), Some(0));
        assert_eq!(map.arena().len(), 7);
        assert!(map.arena().iter().all(|n| n.k != 0));
        map.assert_valid().unwrap();

        // The node that used to sit in the last slot is still reachable.
        assert_eq!(map.find(&7), Some(&70));
    }

    #[test]
    fn slot_accepts_largest_index() {
        assert_eq!(slot(0), 0);
        assert_eq!(slot(u32::MAX as usize), u32::MAX);
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    #[should_panic(expected = "limited to u32::MAX nodes")]
    fn slot_past_u32_range_panics() {
        slot(u32::MAX as usize + 1);
    }

    #[test]
    fn find_mut_updates_stored_value() {
        let mut map = RbMap::new();
        map.insert("a", 1);
        *map.find_mut(&"a").unwrap() += 41;
        assert_eq!(map.find(&"a"), Some(&42));
        assert_eq!(map.find_mut(&"b"), None);
    }

    #[test]
    fn removing_last_slot_needs_no_move() {
        let mut map = RbMap::new();
        map.insert(1, 'a');
        map.insert(2, 'b');
        assert_eq!(map.remove(&2), Some('b'));
        assert_eq!(map.arena().len(), 1);
        assert_eq!(map.root_index(), Some(0));
        map.assert_valid().unwrap();
    }

    #[test]
    fn leaf_moves_into_freed_slot() {
        let mut map = RbMap::new();
        map.insert(1, ());
        map.insert(2, ());
        map.insert(3, ());
        // Key 2 sits in slot 1 as root; key 3 moves from slot 2 into slot 0.
        map.remove(&1);
        map.assert_valid().unwrap();
        assert_eq!(map.root_index(), Some(1));
        assert_eq!(map.arena()[1].r, Some(0));
        assert_eq!(map.arena()[0].k, 3);
        assert_eq!(map.arena()[0].p, Some(1));
    }

    #[test]
    fn root_moves_into_freed_slot() {
        let mut map = RbMap::new();
        map.insert(1, 'a');
        map.insert(2, 'b');
        assert_eq!(map.remove(&1), Some('a'));
        assert_eq!(map.root_index(), Some(0));
        assert_eq!(map.arena()[0].k, 2);
        assert_eq!(map.arena()[0].p, None);
        map.assert_valid().unwrap();
    }
}
