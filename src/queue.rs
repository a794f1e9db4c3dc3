use crate::prelude::*;

/// Capability surface shared by the bounded queue family.
///
/// The two queue kinds are independent concrete types over one small trait.
/// Deriving one from the other would hand the ring variant a linear
/// `enqueue` it cannot live with.
pub trait BoundedFifo<T> {
    fn enqueue(&mut self, value: T) -> IResult<()>;
    fn dequeue(&mut self) -> IResult<T>;
    fn is_empty(&self) -> bool;
    fn is_full(&self) -> bool;
    fn len(&self) -> usize;
    fn capacity(&self) -> usize;
}

/// Linear bounded queue.
///
/// `front`/`rear` are slot indices, with `None` playing the classic `-1`
/// sentinel. Slots ahead of `front` are never reclaimed: once `rear`
/// touches the last slot the queue reports full no matter how much was
/// dequeued. That limitation is the exhibit; the ring variant exists to
/// lift it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Queue<T> {
    slots: Vec<Option<T>>,
    front: Option<Idx>,
    rear: Option<Idx>,
    capacity: usize,
}

impl<T> Queue<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            front: None,
            rear: None,
            capacity,
        }
    }

    /// Build by repeated insertion; seeding past `capacity` overflows just
    /// as live enqueues do.
    pub fn seeded(values: impl IntoIterator<Item = T>, capacity: usize) -> IResult<Self> {
        let mut queue = Self::new(capacity);
        for value in values {
            queue.enqueue(value)?;
        }
        Ok(queue)
    }

    pub fn enqueue(&mut self, value: T) -> IResult<()> {
        if self.is_full() {
            return Err(Error::Overflow(self.capacity));
        }
        if self.is_empty() {
            self.front = Some(0);
        }
        let rear = self.rear.map_or(0, |r| r + 1);
        self.slots[rear] = Some(value);
        self.rear = Some(rear);
        Ok(())
    }

    /// Remove the front element. Draining the last one resets both indices,
    /// which is the only way the slot array is ever reclaimed.
    pub fn dequeue(&mut self) -> IResult<T> {
        let front = self.front.ok_or(Error::Underflow)?;
        let value = self.slots[front]
            .take()
            .expect("slots between front and rear are occupied");
        if self.front == self.rear {
            log::trace!("queue drained, indices reset");
            self.front = None;
            self.rear = None;
        } else {
            self.front = Some(front + 1);
        }
        Ok(value)
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_none() && self.rear.is_none()
    }

    /// Full when `rear` is pinned to the last slot. A zero-capacity queue
    /// is full from birth.
    pub fn is_full(&self) -> bool {
        match self.rear {
            Some(rear) => rear + 1 == self.capacity,
            None => self.capacity == 0,
        }
    }

    pub fn len(&self) -> usize {
        match (self.front, self.rear) {
            (Some(front), Some(rear)) => rear - front + 1,
            _ => 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T> BoundedFifo<T> for Queue<T> {
    fn enqueue(&mut self, value: T) -> IResult<()> {
        Queue::enqueue(self, value)
    }

    fn dequeue(&mut self) -> IResult<T> {
        Queue::dequeue(self)
    }

    fn is_empty(&self) -> bool {
        Queue::is_empty(self)
    }

    fn is_full(&self) -> bool {
        Queue::is_full(self)
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn capacity(&self) -> usize {
        Queue::capacity(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_to_capacity_then_overflows() {
        for capacity in 1..=6 {
            let mut queue = Queue::new(capacity);
            for value in 0..capacity {
                queue.enqueue(value).unwrap();
            }
            assert!(queue.is_full());
            assert_eq!(queue.len(), capacity);
            assert_eq!(queue.enqueue(99), Err(Error::Overflow(capacity)));
        }
    }

    #[test]
    fn underflows_when_fresh_and_when_drained() {
        let mut queue: Queue<u8> = Queue::new(3);
        assert_eq!(queue.dequeue(), Err(Error::Underflow));

        queue.enqueue(1).unwrap();
        queue.dequeue().unwrap();
        assert_eq!(queue.dequeue(), Err(Error::Underflow));
    }

    #[test]
    fn space_before_front_is_never_reclaimed() {
        let mut queue = Queue::seeded(vec!['a', 'b', 'c'], 3).unwrap();
        assert_eq!(queue.dequeue(), Ok('a'));
        assert_eq!(queue.dequeue(), Ok('b'));

        // one element left, two slots free up front, still full
        assert_eq!(queue.len(), 1);
        assert!(queue.is_full());
        assert_eq!(queue.enqueue('d'), Err(Error::Overflow(3)));
    }

    #[test]
    fn rear_pins_full_even_after_dequeues() {
        // rear reaches the last slot while four slots sit free up front
        let mut queue = Queue::seeded(vec![1, 2, 3], 5).unwrap();
        queue.enqueue(4).unwrap();
        queue.enqueue(5).unwrap();
        for expected in 1..=4 {
            assert_eq!(queue.dequeue(), Ok(expected));
        }
        assert_eq!(queue.enqueue(6), Err(Error::Overflow(5)));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn full_drain_resets_the_indices() {
        let mut queue = Queue::seeded(vec![1, 2, 3], 3).unwrap();
        for _ in 0..3 {
            queue.dequeue().unwrap();
        }
        assert!(queue.is_empty());
        assert_eq!((queue.front, queue.rear), (None, None));

        // a fresh start uses the whole array again
        for value in 4..7 {
            queue.enqueue(value).unwrap();
        }
        assert!(queue.is_full());
    }

    #[test]
    fn seeding_past_capacity_overflows() {
        assert_eq!(
            Queue::seeded(0..4, 3).map(|_| ()),
            Err(Error::Overflow(3))
        );
    }

    #[test]
    fn zero_capacity_is_full_and_empty() {
        let mut queue: Queue<u8> = Queue::new(0);
        assert!(queue.is_empty());
        assert!(queue.is_full());
        assert_eq!(queue.enqueue(1), Err(Error::Overflow(0)));
        assert_eq!(queue.dequeue(), Err(Error::Underflow));
    }
}
