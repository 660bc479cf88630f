use crate::container::IndexedSequence;
use crate::error::{AdapterError, Result};

/// Strict ordering used by [`PriorityQueue`]: the element that is "less"
/// sinks, the greatest one sits on top.
pub trait Compare<T> {
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Natural order; makes a max-heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct Less;

/// Reversed order; makes a min-heap.
#[derive(Clone, Copy, Debug, Default)]
pub struct Greater;

impl<T: Ord> Compare<T> for Less {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

impl<T: Ord> Compare<T> for Greater {
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}

impl<T, F> Compare<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Binary heap over an [`IndexedSequence`].
///
/// Element `i` has children `2i + 1` and `2i + 2`; no child ranks above its
/// parent under `F`.
#[derive(Clone, Debug)]
pub struct PriorityQueue<T, C = Vec<T>, F = Less>
where
    C: IndexedSequence<Item = T>,
    F: Compare<T>,
{
    data: C,
    compare: F,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        Self::with_comparator(Less)
    }
}

impl<T: Ord> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, F> PriorityQueue<T, C, F>
where
    C: IndexedSequence<Item = T>,
    F: Compare<T>,
{
    pub fn with_comparator(compare: F) -> Self
    where
        C: Default,
    {
        Self {
            data: C::default(),
            compare,
        }
    }

    /// Backing container in heap order.
    pub fn into_inner(self) -> C {
        self.data
    }

    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes and returns the top element.
    pub fn pop(&mut self) -> Result<T> {
        let last = match self.data.len() {
            0 => return Err(AdapterError::Empty("priority queue")),
            n => n - 1,
        };
        self.data.swap(0, last);
        let top = self
            .data
            .pop_back()
            .ok_or(AdapterError::Empty("priority queue"))?;
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Ok(top)
    }

    pub fn top(&self) -> Result<&T> {
        self.data.get(0).ok_or(AdapterError::Empty("priority queue"))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
        std::mem::swap(&mut self.compare, &mut other.compare);
    }

    fn less_at(&self, a: usize, b: usize) -> bool {
        match (self.data.get(a), self.data.get(b)) {
            (Some(x), Some(y)) => self.compare.less(x, y),
            _ => false,
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !self.less_at(parent, index) {
                break;
            }
            self.data.swap(parent, index);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut top = index;
            if left < len && self.less_at(top, left) {
                top = left;
            }
            if right < len && self.less_at(top, right) {
                top = right;
            }
            if top == index {
                break;
            }
            self.data.swap(index, top);
            index = top;
        }
    }
}
