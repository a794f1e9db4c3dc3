use crate::prelude::*;
use crate::Arena;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Node<T> {
    data: T,
    /// Both links are always live; a lone node holds itself in both.
    prev: Idx,
    next: Idx,
}

/// Doubly linked ring. `head.prev` is the tail, so both ends are one hop
/// from the head and nothing here ever walks to append.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DoublyCircularList<T> {
    arena: Arena<Node<T>>,
    head: Option<Idx>,
}

impl<T> Default for DoublyCircularList<T> {
    fn default() -> Self {
        Self { arena: Arena::new(), head: None }
    }
}

impl<T> DoublyCircularList<T> {
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

    /// Append as the new tail, one hop before the head.
    pub fn push(&mut self, value: T) {
        match self.head {
            Some(head) => {
                let tail = self.arena[head].prev;
                let node = self.arena.alloc(Node { data: value, prev: tail, next: head });
                self.arena[tail].next = node;
                self.arena[head].prev = node;
            }
            None => {
                let node = self.arena.alloc_with(|idx| Node { data: value, prev: idx, next: idx });
                self.head = Some(node);
            }
        }
    }

    /// Remove the tail, `head.prev`, and close the ring over it.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        let tail = self.arena[head].prev;
        if tail == head {
            self.head = None;
            return Some(self.arena.release(head).data);
        }
        let new_tail = self.arena[tail].prev;
        self.arena[new_tail].next = head;
        self.arena[head].prev = new_tail;
        Some(self.arena.release(tail).data)
    }

    /// Remove the head; tail and second node are stitched together.
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        let next = self.arena[head].next;
        if next == head {
            self.head = None;
            return Some(self.arena.release(head).data);
        }
        let tail = self.arena[head].prev;
        self.arena[tail].next = next;
        self.arena[next].prev = tail;
        self.head = Some(next);
        Some(self.arena.release(head).data)
    }

    /// Same splice as [`push`](Self::push); the head then steps back onto
    /// the new node.
    pub fn unshift(&mut self, value: T) {
        self.push(value);
        if let Some(head) = self.head {
            self.head = Some(self.arena[head].prev);
        }
    }

    /// Swap every node's links around the ring; the old tail, now first in
    /// walk order, becomes the head.
    pub fn reverse(&mut self) {
        let head = match self.head {
            Some(head) => head,
            None => return,
        };
        let mut at = head;
        loop {
            let node = &mut self.arena[at];
            std::mem::swap(&mut node.prev, &mut node.next);
            // the link that used to be next now sits in prev
            let next = node.prev;
            if next == head {
                break;
            }
            at = next;
        }
        let tail = self.arena[head].next;
        self.head = Some(tail);
        log::trace!("ring of {} reversed, head now slot {}", self.arena.len(), tail);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let arena = &self.arena;
        let mut at = self.head;
        let mut remaining = self.len();
        std::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            remaining -= 1;
            let idx = at?;
            at = Some(arena[idx].next);
            Some(&arena[idx].data)
        })
    }

    /// Walking `next` for `len` steps must return to the head, and every
    /// hop must be mirrored by the far node's `prev`.
    #[cfg(test)]
    fn assert_ring(&self) {
        match self.head {
            Some(head) => {
                let mut at = head;
                for _ in 0..self.len() {
                    let next = self.arena[at].next;
                    assert_eq!(self.arena[next].prev, at, "mutual link broken at slot {}", at);
                    at = next;
                }
                assert_eq!(at, head, "ring does not close after len steps");
            }
            None => assert_eq!(self.len(), 0),
        }
    }
}

/// Head first, closure visible: `a <-> b <-> c <-> (a)`.
impl<T: std::fmt::Display> std::fmt::Display for DoublyCircularList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = None;
        for (at, value) in self.iter().enumerate() {
            if at == 0 {
                first = Some(value);
            } else {
                write!(f, " <-> ")?;
            }
            write!(f, "{}", value)?;
        }
        if let Some(first) = first {
            write!(f, " <-> ({})", first)?;
        }
        Ok(())
    }
}
