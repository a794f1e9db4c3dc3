use crate::prelude::*;
use crate::Arena;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Node<T> {
    data: T,
    next: Option<Idx>,
}

/// Singly linked list. One forward link per node, so every tail operation
/// walks from the head.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LinkedList<T> {
    arena: Arena<Node<T>>,
    head: Option<Idx>,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self { arena: Arena::new(), head: None }
    }
}

impl<T> LinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build by repeated appends. Nothing here is bounded, so this cannot
    /// fail.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new();
        for value in values {
            list.push(value);
        }
        list
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Walk to the last node.
    fn tail(&self) -> Option<Idx> {
        let mut at = self.head?;
        while let Some(next) = self.arena[at].next {
            at = next;
        }
        Some(at)
    }

    /// Append at the tail.
    pub fn push(&mut self, value: T) {
        let tail = self.tail();
        let node = self.arena.alloc(Node { data: value, next: None });
        match tail {
            Some(tail) => self.arena[tail].next = Some(node),
            None => self.head = Some(node),
        }
    }

    /// Remove the tail, walking one behind so the new tail can be unlinked.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        match self.arena[head].next {
            None => {
                self.head = None;
                Some(self.arena.release(head).data)
            }
            Some(second) => {
                let mut prev = head;
                let mut at = second;
                while let Some(next) = self.arena[at].next {
                    prev = at;
                    at = next;
                }
                self.arena[prev].next = None;
                Some(self.arena.release(at).data)
            }
        }
    }

    /// Remove the head.
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        self.head = self.arena[head].next;
        Some(self.arena.release(head).data)
    }

    /// Prepend a new head.
    pub fn unshift(&mut self, value: T) {
        let head = self.head;
        let node = self.arena.alloc(Node { data: value, next: head });
        self.head = Some(node);
    }

    /// Splice in at `index`, counting from the head. An index past the tail
    /// settles for the last position.
    pub fn insert(&mut self, value: T, index: usize) {
        let head = match self.head {
            Some(head) if index > 0 => head,
            _ => return self.unshift(value),
        };
        let mut prev = head;
        for _ in 1..index {
            match self.arena[prev].next {
                Some(next) => prev = next,
                None => break,
            }
        }
        let next = self.arena[prev].next;
        let node = self.arena.alloc(Node { data: value, next });
        self.arena[prev].next = Some(node);
    }

    /// Turn every link around in one pass.
    pub fn reverse(&mut self) {
        let mut prev = None;
        let mut at = self.head;
        while let Some(idx) = at {
            let next = self.arena[idx].next;
            self.arena[idx].next = prev;
            prev = Some(idx);
            at = next;
        }
        self.head = prev;
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let arena = &self.arena;
        let mut at = self.head;
        std::iter::from_fn(move || {
            let idx = at?;
            at = arena[idx].next;
            Some(&arena[idx].data)
        })
    }
}

/// Head first: `a -> b -> c`.
impl<T: std::fmt::Display> std::fmt::Display for LinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (at, value) in self.iter().enumerate() {
            if at > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
