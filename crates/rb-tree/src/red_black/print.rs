use std::fmt::{self, Debug, Display};

use crate::util::{first, next};

use super::types::{Color, RbNode, RbNodeLike};

/// Debug printer for red-black trees.
pub fn print<K, V, N>(arena: &[N], node: Option<u32>, tab: &str) -> String
where
    K: Debug,
    V: Debug,
    N: RbNodeLike<K, V>,
{
    match node {
        None => "∅".to_string(),
        Some(i) => {
            let n = &arena[i as usize];
            let color = match n.color() {
                Color::Black => "black",
                Color::Red => "red",
            };
            let left = print::<K, V, N>(arena, n.l(), &format!("{tab}  "));
            let right = print::<K, V, N>(arena, n.r(), &format!("{tab}  "));
            format!(
                "Node[{i}] {color} {{ {:?} = {:?} }}\n{tab}L={left}\n{tab}R={right}",
                n.key(),
                n.value()
            )
        }
    }
}

/// In-order rendering: `"key value "` per entry, then a newline.
pub struct InOrder<'a, K, V> {
    arena: &'a [RbNode<K, V>],
    root: Option<u32>,
}

impl<'a, K, V> InOrder<'a, K, V> {
    pub fn new(arena: &'a [RbNode<K, V>], root: Option<u32>) -> Self {
        Self { arena, root }
    }
}

impl<K: Display, V: Display> Display for InOrder<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut curr = first(self.arena, self.root);
        while let Some(i) = curr {
            let n = &self.arena[i as usize];
            write!(f, "{} {} ", n.k, n.v)?;
            curr = next(self.arena, i);
        }
        writeln!(f)
    }
}
