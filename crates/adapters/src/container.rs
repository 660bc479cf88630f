//! Minimal sequence contract the adapters are written against.
//!
//! Implemented for [`Vec`] (back + indexed), [`VecDeque`] (back, front and
//! indexed) and [`LinkedList`] (back + front).

use std::collections::{LinkedList, VecDeque};

use crate::error::{AdapterError, Result};

pub trait Sequence {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Push/pop at the back end.
pub trait BackSequence: Sequence {
    type Item;

    fn push_back(&mut self, value: Self::Item);
    fn pop_back(&mut self) -> Option<Self::Item>;
    fn back(&self) -> Option<&Self::Item>;
    fn back_mut(&mut self) -> Option<&mut Self::Item>;
}

/// Pop at the front end.
pub trait FrontSequence: BackSequence {
    fn pop_front(&mut self) -> Option<Self::Item>;
    fn front(&self) -> Option<&Self::Item>;
    fn front_mut(&mut self) -> Option<&mut Self::Item>;
}

/// Random access by position.
pub trait IndexedSequence: BackSequence {
    fn get(&self, index: usize) -> Option<&Self::Item>;
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Item>;

    /// Swaps two elements. Both indices must be in bounds.
    fn swap(&mut self, a: usize, b: usize);

    /// Bounds-checked access.
    fn at(&self, index: usize) -> Result<&Self::Item> {
        let len = self.len();
        self.get(index)
            .ok_or(AdapterError::IndexOutOfBounds { index, len })
    }
}

impl<T> Sequence for Vec<T> {
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> BackSequence for Vec<T> {
    type Item = T;

    fn push_back(&mut self, value: T) {
        self.push(value);
    }

    fn pop_back(&mut self) -> Option<T> {
        self.pop()
    }

    fn back(&self) -> Option<&T> {
        self.last()
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        self.last_mut()
    }
}

impl<T> IndexedSequence for Vec<T> {
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.as_mut_slice().swap(a, b);
    }
}

impl<T> Sequence for VecDeque<T> {
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T> BackSequence for VecDeque<T> {
    type Item = T;

    fn push_back(&mut self, value: T) {
        VecDeque::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        VecDeque::pop_back(self)
    }

    fn back(&self) -> Option<&T> {
        VecDeque::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        VecDeque::back_mut(self)
    }
}

impl<T> FrontSequence for VecDeque<T> {
    fn pop_front(&mut self) -> Option<T> {
        VecDeque::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        VecDeque::front(self)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        VecDeque::front_mut(self)
    }
}

impl<T> IndexedSequence for VecDeque<T> {
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }

    fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        VecDeque::get_mut(self, index)
    }

    fn swap(&mut self, a: usize, b: usize) {
        VecDeque::swap(self, a, b);
    }
}

impl<T> Sequence for LinkedList<T> {
    fn len(&self) -> usize {
        LinkedList::len(self)
    }
}

impl<T> BackSequence for LinkedList<T> {
    type Item = T;

    fn push_back(&mut self, value: T) {
        LinkedList::push_back(self, value);
    }

    fn pop_back(&mut self) -> Option<T> {
        LinkedList::pop_back(self)
    }

    fn back(&self) -> Option<&T> {
        LinkedList::back(self)
    }

    fn back_mut(&mut self) -> Option<&mut T> {
        LinkedList::back_mut(self)
    }
}

impl<T> FrontSequence for LinkedList<T> {
    fn pop_front(&mut self) -> Option<T> {
        LinkedList::pop_front(self)
    }

    fn front(&self) -> Option<&T> {
        LinkedList::front(self)
    }

    fn front_mut(&mut self) -> Option<&mut T> {
        LinkedList::front_mut(self)
    }
}
