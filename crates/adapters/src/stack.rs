use std::collections::VecDeque;

use crate::container::BackSequence;
use crate::error::{AdapterError, Result};

/// Last-in, first-out adapter over any [`BackSequence`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Stack<T, C = VecDeque<T>>
where
    C: BackSequence<Item = T>,
{
    data: C,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self::from_container(VecDeque::new())
    }
}

impl<T, C> Default for Stack<T, C>
where
    C: BackSequence<Item = T> + Default,
{
    fn default() -> Self {
        Self::from_container(C::default())
    }
}

impl<T, C> Stack<T, C>
where
    C: BackSequence<Item = T>,
{
    /// Wraps an existing container; its back end becomes the top.
    pub fn from_container(data: C) -> Self {
        Self { data }
    }

    pub fn into_inner(self) -> C {
        self.data
    }

    pub fn push(&mut self, value: T) {
        self.data.push_back(value);
    }

    pub fn pop(&mut self) -> Result<T> {
        self.data.pop_back().ok_or(AdapterError::Empty("stack"))
    }

    pub fn top(&self) -> Result<&T> {
        self.data.back().ok_or(AdapterError::Empty("stack"))
    }

    pub fn top_mut(&mut self) -> Result<&mut T> {
        self.data.back_mut().ok_or(AdapterError::Empty("stack"))
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
