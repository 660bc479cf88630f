//! Container adapters.
//!
//! Each adapter exposes a restricted interface over a pluggable sequence
//! container:
//!
//! | Adapter | Discipline | Default container |
//! |---------|------------|-------------------|
//! [`Stack`] | LIFO | [`VecDeque`](std::collections::VecDeque) |
//! [`Queue`] | FIFO | [`VecDeque`](std::collections::VecDeque) |
//! [`PriorityQueue`] | binary heap, greatest first | [`Vec`] |
//!
//! Any type implementing the [`container`] traits can back an adapter.
//!
//! # Example
//!
//! ```
//! use container_adapters::{PriorityQueue, Queue, Stack};
//!
//! let mut stack = Stack::new();
//! stack.push(1);
//! stack.push(2);
//! assert_eq!(stack.pop(), Ok(2));
//!
//! let mut queue = Queue::new();
//! queue.push('a');
//! queue.push('b');
//! assert_eq!(queue.pop(), Some('a'));
//!
//! let mut heap = PriorityQueue::new();
//! heap.push(3);
//! heap.push(9);
//! heap.push(1);
//! assert_eq!(heap.top(), Ok(&9));
//! ```

pub mod container;
pub mod error;
pub mod priority_queue;
pub mod queue;
pub mod stack;

pub use container::{BackSequence, FrontSequence, IndexedSequence, Sequence};
pub use error::{AdapterError, Result};
pub use priority_queue::{Compare, Greater, Less, PriorityQueue};
pub use queue::Queue;
pub use stack::Stack;
