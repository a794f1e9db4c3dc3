mod cll;
mod dcll;
mod dll;
mod sll;

pub use self::{
    cll::CircularList, dcll::DoublyCircularList, dll::DoublyLinkedList, sll::LinkedList,
};
