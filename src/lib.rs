pub mod prelude {
    pub use serde::{Deserialize, Serialize};

    pub use super::Error;

    /// Slot index inside an [`Arena`](crate::Arena). Links between nodes are
    /// these, never owning pointers, so rings are plain data.
    pub type Idx = usize;
    pub type IResult<T> = Result<T, Error>;
}

mod arena;
mod list;
mod queue;
mod ring;
mod search;
mod sort;
mod stack;
mod tree;

pub use arena::Arena;
pub use list::{CircularList, DoublyCircularList, DoublyLinkedList, LinkedList};
pub use queue::{BoundedFifo, Queue};
pub use ring::CircularQueue;
pub use search::binary_search;
pub use sort::{insertion_sort, quick_sort, selection_sort};
pub use stack::Stack;
pub use tree::{BinaryTree, Branch};

/// Capacity violations raised by the bounded structures.
///
/// The unbounded lists never raise these: removing from an empty list is an
/// absent value, not a failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Insertion attempted while the structure already holds `capacity`
    /// elements.
    #[error("overflow: capacity {0} exhausted")]
    Overflow(usize),
    /// Removal attempted while the structure is empty.
    #[error("underflow: nothing to remove")]
    Underflow,
}
