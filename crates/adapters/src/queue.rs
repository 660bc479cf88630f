use std::collections::VecDeque;

use crate::container::FrontSequence;
use crate::error::{AdapterError, Result};

/// First-in, first-out adapter: push at the back, pop at the front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Queue<T, C = VecDeque<T>>
where
    C: FrontSequence<Item = T>,
{
    data: C,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self::from_container(VecDeque::new())
    }
}

impl<T, C> Default for Queue<T, C>
where
    C: FrontSequence<Item = T> + Default,
{
    fn default() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C> Queue<T, C>
where
    C: FrontSequence<Item = T>,
{
    pub fn from_container(data: C) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> C {
        self.data
    }

    /// Read-only view of the backing container, front first.
    pub fn container(&self) -> &C {
        &self.data
    }

    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
    }

    /// Takes the front element. An empty queue yields `None` and stays empty.
    pub fn pop(&mut self) -> Option<T> {
        self.data.pop_front()
    }

    pub fn front(&self) -> Result<&T> {
        self.data.front().ok_or(AdapterError::Empty("queue"))
    }

    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.data.front_mut().ok_or(AdapterError::Empty("queue"))
    }

    pub fn back(&self) -> Result<&T> {
        self.data.back().ok_or(AdapterError::Empty("queue"))
    }

    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.data.back_mut().ok_or(AdapterError::Empty("queue"))
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }
}
