use crate::prelude::*;
use crate::Arena;

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Node<T> {
    data: T,
    /// Always a live slot; the tail points back at the head.
    next: Idx,
}

/// Singly linked ring. A lone node links to itself, so `next` never needs
/// an absent state and a walk can always keep going.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CircularList<T> {
    arena: Arena<Node<T>>,
    head: Option<Idx>,
}

impl<T> Default for CircularList<T> {
    fn default() -> Self {
        Self { arena: Arena::new(), head: None }
    }
}

impl<T> CircularList<T> {
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

    /// Walk to the node whose `next` is `head`.
    fn tail_of(&self, head: Idx) -> Idx {
        let mut at = head;
        while self.arena[at].next != head {
            at = self.arena[at].next;
        }
        at
    }

    /// Append before the head, closing the ring through the new tail.
    pub fn push(&mut self, value: T) {
        match self.head {
            Some(head) => {
                let tail = self.tail_of(head);
                let node = self.arena.alloc(Node { data: value, next: head });
                self.arena[tail].next = node;
            }
            None => {
                let node = self.arena.alloc_with(|idx| Node { data: value, next: idx });
                self.head = Some(node);
            }
        }
    }

    /// Remove the tail and close the ring behind it.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        if self.arena[head].next == head {
            self.head = None;
            return Some(self.arena.release(head).data);
        }
        let mut prev = head;
        let mut at = self.arena[head].next;
        while self.arena[at].next != head {
            prev = at;
            at = self.arena[at].next;
        }
        self.arena[prev].next = head;
        Some(self.arena.release(at).data)
    }

    /// Remove the head; the tail is relinked to the node after it.
    pub fn shift(&mut self) -> Option<T> {
        let head = self.head?;
        if self.arena[head].next == head {
            self.head = None;
            return Some(self.arena.release(head).data);
        }
        let tail = self.tail_of(head);
        let next = self.arena[head].next;
        self.arena[tail].next = next;
        self.head = Some(next);
        Some(self.arena.release(head).data)
    }

    /// Prepend a new head in front of the old one.
    pub fn unshift(&mut self, value: T) {
        match self.head {
            Some(head) => {
                let tail = self.tail_of(head);
                let node = self.arena.alloc(Node { data: value, next: head });
                self.arena[tail].next = node;
                self.head = Some(node);
            }
            None => self.push(value),
        }
    }

    /// Splice in after `index - 1` steps from the head. The walk follows the
    /// ring, so an index past the length wraps instead of clamping: on a
    /// ring every position is reachable by walking far enough.
    pub fn insert(&mut self, value: T, index: usize) {
        let head = match self.head {
            Some(head) if index > 0 => head,
            _ => return self.unshift(value),
        };
        let mut prev = head;
        for _ in 1..index {
            prev = self.arena[prev].next;
        }
        let next = self.arena[prev].next;
        let node = self.arena.alloc(Node { data: value, next });
        self.arena[prev].next = node;
    }

    /// Turn every link around; the head moves to the old tail so traversal
    /// order is exactly reversed.
    pub fn reverse(&mut self) {
        let head = match self.head {
            Some(head) if self.arena[head].next != head => head,
            _ => return,
        };
        let mut prev = head;
        let mut at = self.arena[head].next;
        while at != head {
            let next = self.arena[at].next;
            self.arena[at].next = prev;
            prev = at;
            at = next;
        }
        self.arena[head].next = prev;
        self.head = Some(prev);
        log::trace!("ring of {} reversed, head now slot {}", self.arena.len(), prev);
    }

    /// Yields each value once, starting at the head; the walk is bounded by
    /// `len`, not by an end link the ring does not have.
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

    /// Following `next` exactly `len` times from the head must land back on
    /// the head, visiting only live slots on the way.
    #[cfg(test)]
    fn assert_ring(&self) {
        match self.head {
            Some(head) => {
                let mut at = head;
                for _ in 0..self.len() {
                    at = self.arena[at].next;
                }
                assert_eq!(at, head, "ring does not close after len steps");
            }
            None => assert_eq!(self.len(), 0),
        }
    }
}

/// Head first, with the closure made visible: `a -> b -> c -> (a)`.
impl<T: std::fmt::Display> std::fmt::Display for CircularList<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = None;
        for (at, value) in self.iter().enumerate() {
            if at == 0 {
                first = Some(value);
            } else {
                write!(f, " -> ")?;
            }
            write!(f, "{}", value)?;
        }
        if let Some(first) = first {
            write!(f, " -> ({})", first)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::prelude::*;

    #[test]
    fn push_onto_empty_self_loops() {
        let mut ring = CircularList::new();
        ring.push(1);
        ring.assert_ring();
        assert_eq!(ring.len(), 1);

        ring.push(2);
        ring.push(3);
        ring.assert_ring();
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
    }

    #[test]
    fn pop_takes_the_tail_and_closes_the_ring() {
        let mut ring = CircularList::from_values([1, 2, 3]);
        assert_eq!(ring.pop(), Some(3));
        ring.assert_ring();
        assert_eq!(ring.pop(), Some(2));
        assert_eq!(ring.pop(), Some(1));
        assert_eq!(ring.pop(), None);
        assert!(ring.is_empty());
    }

    #[test]
    fn shift_hands_the_ring_to_the_next_node() {
        let mut ring = CircularList::from_values([1, 2, 3]);
        assert_eq!(ring.shift(), Some(1));
        ring.assert_ring();
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [2, 3]);

        // a lone node empties instead of handing the ring to itself
        assert_eq!(ring.shift(), Some(2));
        assert_eq!(ring.shift(), Some(3));
        assert_eq!(ring.shift(), None);
    }

    #[test]
    fn unshift_onto_empty_self_loops() {
        let mut ring = CircularList::new();
        ring.unshift(2);
        ring.assert_ring();
        ring.unshift(1);
        ring.assert_ring();
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), [1, 2]);
    }

    #[test]
    fn insert_wraps_instead_of_clamping() {
        let mut ring = CircularList::from_values(["a", "b", "c"]);
        // five steps around a ring of three is two steps
        ring.insert("x", 5);
        ring.assert_ring();
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), ["a", "b", "x", "c"]);

        ring.insert("y", 0);
        ring.assert_ring();
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), ["y", "a", "b", "x", "c"]);
    }

    #[test]
    fn reverse_keeps_the_ring_closed() {
        for size in 0..6 {
            let mut ring = CircularList::from_values(0..size);
            ring.reverse();
            ring.assert_ring();
            assert_eq!(
                ring.iter().copied().collect::<Vec<_>>(),
                (0..size).rev().collect::<Vec<_>>()
            );

            ring.reverse();
            ring.assert_ring();
            assert_eq!(
                ring.iter().copied().collect::<Vec<_>>(),
                (0..size).collect::<Vec<_>>()
            );
        }
    }

    #[test]
    fn renders_the_closure() {
        let ring = CircularList::from_values(["a", "b", "c"]);
        assert_eq!(ring.to_string(), "a -> b -> c -> (a)");
        assert_eq!(CircularList::from_values(["a"]).to_string(), "a -> (a)");
        assert_eq!(CircularList::<u8>::new().to_string(), "");
    }

    #[test]
    fn tracks_a_vec_model() {
        let mut rng = StdRng::seed_from_u64(0xc11);
        let mut ring = CircularList::new();
        let mut model: Vec<u8> = Vec::new();

        for _ in 0..2048 {
            match rng.gen_range(0..6) {
                0 => {
                    let value = rng.gen();
                    ring.push(value);
                    model.push(value);
                }
                1 => assert_eq!(ring.pop(), model.pop()),
                2 => {
                    let value = rng.gen();
                    ring.unshift(value);
                    model.insert(0, value);
                }
                3 => {
                    if model.is_empty() {
                        assert_eq!(ring.shift(), None);
                    } else {
                        assert_eq!(ring.shift(), Some(model.remove(0)));
                    }
                }
                4 => {
                    let value = rng.gen();
                    let index = rng.gen_range(0..=model.len() + 4);
                    ring.insert(value, index);
                    let position = if model.is_empty() || index == 0 {
                        0
                    } else {
                        (index - 1) % model.len() + 1
                    };
                    model.insert(position, value);
                }
                _ => {
                    ring.reverse();
                    model.reverse();
                }
            }
            ring.assert_ring();
            assert_eq!(ring.len(), model.len());
            assert!(ring.iter().eq(model.iter()));
        }
    }
}
