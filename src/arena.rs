use crate::prelude::*;
use std::ops::{Index, IndexMut};

/// Index-addressed node store.
///
/// The circular lists need links that alias the head from both ends; owning
/// links would make that a reference cycle. The arena owns every node and
/// the lists keep plain [`Idx`] links, so reversal and teardown are ordinary
/// slot updates.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Arena<N> {
    slots: Vec<Slot<N>>,
    /// Head of the vacant slot chain.
    free: Option<Idx>,
    len: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
enum Slot<N> {
    Occupied(N),
    Vacant { next: Option<Idx> },
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self { slots: Vec::new(), free: None, len: 0 }
    }
}

impl<N> Arena<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a node, reusing a vacant slot when one is chained.
    ///
    /// Indices are stable: a live node never moves, and a released index is
    /// handed out again only after [`release`](Self::release).
    pub fn alloc(&mut self, node: N) -> Idx {
        self.len += 1;
        match self.free {
            Some(idx) => {
                match self.slots[idx] {
                    Slot::Vacant { next } => self.free = next,
                    Slot::Occupied(_) => unreachable!("occupied slot {} on the free chain", idx),
                }
                log::trace!("arena: recycling slot {}", idx);
                self.slots[idx] = Slot::Occupied(node);
                idx
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        }
    }

    /// Store a node that needs to know its own index up front, in the manner
    /// of `Rc::new_cyclic`. A ring of one is a node linked to itself.
    pub fn alloc_with(&mut self, node: impl FnOnce(Idx) -> N) -> Idx {
        let idx = match self.free {
            Some(idx) => idx,
            None => self.slots.len(),
        };
        self.alloc(node(idx))
    }

    /// Vacate a slot and hand back its payload.
    ///
    /// Panics when the slot is already vacant: the lists only hand out live
    /// indices, so a dangling one here is a bug in this crate, not in the
    /// caller.
    pub fn release(&mut self, idx: Idx) -> N {
        if let Slot::Vacant { .. } = self.slots[idx] {
            panic!("arena: slot {} released twice", idx);
        }
        let slot = std::mem::replace(&mut self.slots[idx], Slot::Vacant { next: self.free });
        self.free = Some(idx);
        self.len -= 1;
        match slot {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    /// Number of live nodes, not slots.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every node and forget the vacant chain.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }
}

impl<N> Index<Idx> for Arena<N> {
    type Output = N;

    fn index(&self, idx: Idx) -> &N {
        match &self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("arena: slot {} is vacant", idx),
        }
    }
}

impl<N> IndexMut<Idx> for Arena<N> {
    fn index_mut(&mut self, idx: Idx) -> &mut N {
        match &mut self.slots[idx] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("arena: slot {} is vacant", idx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_hands_out_rising_indices() {
        let mut arena = Arena::new();
        assert_eq!(arena.alloc("a"), 0);
        assert_eq!(arena.alloc("b"), 1);
        assert_eq!(arena.alloc("c"), 2);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena[1], "b");
    }

    #[test]
    fn released_slots_are_recycled() {
        let mut arena = Arena::new();
        let a = arena.alloc("a");
        let b = arena.alloc("b");
        let c = arena.alloc("c");

        assert_eq!(arena.release(b), "b");
        assert_eq!(arena.len(), 2);

        // the vacant slot is reused before the vector grows
        assert_eq!(arena.alloc("d"), b);
        assert_eq!(arena.len(), 3);
        assert_eq!(arena[a], "a");
        assert_eq!(arena[c], "c");

        // two vacancies chain up and unwind in reverse order
        arena.release(a);
        arena.release(c);
        assert_eq!(arena.alloc("e"), c);
        assert_eq!(arena.alloc("f"), a);
        assert_eq!(arena.alloc("g"), 3);
    }

    #[test]
    fn alloc_with_sees_its_own_index() {
        let mut arena = Arena::new();
        let idx = arena.alloc_with(|at| at);
        assert_eq!(arena[idx], idx);

        // recycled slots keep the promise too
        arena.release(idx);
        let again = arena.alloc_with(|at| at);
        assert_eq!(again, idx);
        assert_eq!(arena[again], idx);
    }

    #[test]
    fn clear_resets_everything() {
        let mut arena = Arena::new();
        arena.alloc(1);
        arena.alloc(2);
        arena.release(0);
        arena.clear();

        assert!(arena.is_empty());
        assert_eq!(arena.alloc(3), 0);
    }

    #[test]
    #[should_panic(expected = "released twice")]
    fn double_release_is_a_bug() {
        let mut arena = Arena::new();
        let idx = arena.alloc(1);
        arena.release(idx);
        arena.release(idx);
    }

    #[test]
    #[should_panic(expected = "is vacant")]
    fn vacant_access_is_a_bug() {
        let mut arena = Arena::new();
        let idx = arena.alloc(1);
        arena.release(idx);
        let _ = arena[idx];
    }
}
