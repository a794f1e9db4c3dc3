use crate::prelude::*;
use crate::Arena;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Node<T> {
    data: T,
    prev: Option<Idx>,
    next: Option<Idx>,
}

/// Doubly linked list. The back links buy an O(1) unlink once a node is in
/// hand; finding the tail still walks, there is no tail cursor here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoublyLinkedList<T> {
    arena: Arena<Node<T>>,
    head: Option<Idx>,
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        Self { arena: Arena::new(), head: None }
    }
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> Self {
        Self::default()
    }

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

    fn tail(&self) -> Option<Idx> {
        let mut at = self.head?;
        while let Some(next) = self.arena[at].next {
            at = next;
        }
        Some(at)
    }

    /// Append at the tail, linked back as well as forward.
    pub fn push(&mut self, value: T) {
        let tail = self.tail();
        let node = self.arena.alloc(Node { data: value, prev: tail, next: None });
        match tail {
            Some(tail) => self.arena[tail].next = Some(node),
            None => self.head = Some(node),
        }
    }

    /// Remove the tail. The back link hands over the new tail directly, no
    /// one-behind walk.
    pub fn pop(&mut self) -> Option<T> {
        let mut at = self.head?;
        while let Some(next) = self.arena[at].next {
            at = next;
        }
        match self.arena[at].prev {
            Some(prev) => self.arena[prev].next = None,
            None => self.head = None,
        }
        Some(self.arena.release(at).data)
    }

    /// Remove the head. The new head's back link is cleared, and a lone
    /// node still yields its value.
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.arena[head].next;
        if let Some(next) = next {
            self.arena[next].prev = None;
        }
        self.head = next;
        Some(self.arena.release(head).data)
    }

    /// Prepend a new head and link the old head back to it.
    pub fn unshift(&mut self, value: T) {
        let head = self.head;
        let node = self.arena.alloc(Node { data: value, prev: None, next: head });
        if let Some(head) = head {
            self.arena[head].prev = Some(node);
        }
        self.head = Some(node);
    }

    /// Splice in at `index`, relinking both neighbours. An index past the
    /// tail settles for the last position.
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
        let node = self.arena.alloc(Node { data: value, prev: Some(prev), next });
        self.arena[prev].next = Some(node);
        if let Some(next) = next {
            self.arena[next].prev = Some(node);
        }
    }

    /// Swap every node's links in one pass; the old tail, whose new back
    /// link is absent, becomes the head.
    pub fn reverse(&mut self) {
        let mut at = self.head;
        while let Some(idx) = at {
            let node = &mut self.arena[idx];
            std::mem::swap(&mut node.prev, &mut node.next);
            if node.prev.is_none() {
                self.head = Some(idx);
            }
            at = node.prev;
        }
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

    /// Every node's `prev` must name the node we arrived from, and the
    /// forward chain must cover exactly `len` nodes.
    #[cfg(test)]
    fn assert_links(&self) {
        let mut count = 0;
        let mut from: Option<Idx> = None;
        let mut at = self.head;
        while let Some(idx) = at {
            assert_eq!(self.arena[idx].prev, from, "back link at slot {}", idx);
            count += 1;
            assert!(count <= self.len(), "forward chain runs past len");
            from = at;
            at = self.arena[idx].next;
        }
        assert_eq!(count, self.len());
    }
}

/// Head first: `a <-> b <-> c`.
impl<T: std::fmt::Display> std::fmt::Display for DoublyLinkedList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (at, value) in self.iter().enumerate() {
            if at > 0 {
                write!(f, " <-> ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
